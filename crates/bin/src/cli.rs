//! CLI argument definitions for the DotDot binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Read and write JSON documents with dot paths
#[derive(Parser, Debug)]
#[command(name = "dotdot")]
#[command(about = "DotDot: dot-path access to nested JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human", env = "DOTDOT_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Check which paths have a value
    Has(HasArgs),
    /// Set the value at a path and print the resulting document
    Put(PutArgs),
    /// List every leaf path of a document
    Keys(KeysArgs),
    /// Print a document holding only the given paths
    Copy(CopyArgs),
    /// Deep-merge two documents, the second one winning
    Merge(MergeArgs),
    /// Fail unless the value at a path equals the expected value
    MustEqual(MustEqualArgs),
}

/// The JSON document a command reads
#[derive(clap::Args, Debug)]
pub struct DocumentArgs {
    /// JSON document to read, `-` for stdin
    #[arg(short, long, default_value = "-", env = "DOTDOT_FILE")]
    pub file: PathBuf,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dot-delimited path
    pub path: String,

    #[command(flatten)]
    pub document: DocumentArgs,
}

/// Arguments for the has command
#[derive(clap::Args, Debug)]
pub struct HasArgs {
    /// Paths to check
    #[arg(required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub document: DocumentArgs,
}

/// Arguments for the put command
#[derive(clap::Args, Debug)]
pub struct PutArgs {
    /// Dot-delimited path
    pub path: String,

    /// Value to store, parsed as JSON and stored as a string otherwise
    pub value: String,

    #[command(flatten)]
    pub document: DocumentArgs,
}

/// Arguments for the keys command
#[derive(clap::Args, Debug)]
pub struct KeysArgs {
    #[command(flatten)]
    pub document: DocumentArgs,
}

/// Arguments for the copy command
#[derive(clap::Args, Debug)]
pub struct CopyArgs {
    /// Paths to keep
    #[arg(required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub document: DocumentArgs,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Base document
    pub base: PathBuf,

    /// Document whose values win on collisions
    pub overlay: PathBuf,
}

/// Arguments for the must-equal command
#[derive(clap::Args, Debug)]
pub struct MustEqualArgs {
    /// Dot-delimited path
    pub path: String,

    /// Expected value, parsed like `put` values. `null` expects no value.
    pub expected: String,

    #[command(flatten)]
    pub document: DocumentArgs,
}
