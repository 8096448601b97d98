//! One module per subcommand. Each exposes `run`, which prints its result, and
//! an `execute` that returns the result for testing.

pub mod copy;
pub mod get;
pub mod has;
pub mod keys;
pub mod merge;
pub mod must_equal;
pub mod put;
