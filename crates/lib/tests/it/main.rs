/*! Integration tests for DotDot.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the library's operations:
 * - get: Path resolution for reads, absence and conflicts
 * - put: Writes, intermediate creation and write conflicts
 * - must: The `must_*` checks and their errors
 * - copy: `copy_include` and key/value record writes
 * - flatten: Leaf path enumeration
 * - merge: Deep merge of two mappings
 * - keys: Non-string key types through a Navigator
 * - json: serde_json documents as mappings
 * - properties: Property-based tests
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dotdot=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod flatten;
mod helpers;
mod merge;
mod properties;
mod put;
