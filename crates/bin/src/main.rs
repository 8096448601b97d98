//! DotDot CLI: reads JSON documents and runs dot-path operations on them.
//!
//! Results go to stdout and logs to stderr, so output can be piped.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod document;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dotdot=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match &cli.command {
        Commands::Get(args) => commands::get::run(args, format),
        Commands::Has(args) => commands::has::run(args, format),
        Commands::Put(args) => commands::put::run(args, format),
        Commands::Keys(args) => commands::keys::run(args, format),
        Commands::Copy(args) => commands::copy::run(args, format),
        Commands::Merge(args) => commands::merge::run(args, format),
        Commands::MustEqual(args) => commands::must_equal::run(args, format),
    }
}
