//! Put command - sets a value and prints the updated document.
//!
//! The input file is never modified.

use serde_json::Value as Json;
use tracing::info;

use crate::cli::PutArgs;
use crate::document;
use crate::output::{OutputFormat, emit};

/// Apply the write and return the whole document
pub fn execute(args: &PutArgs) -> Result<Json, Box<dyn std::error::Error>> {
    let mut doc = document::load(&args.document.file)?;
    let value = document::parse_value(&args.value);

    if let Some(previous) = dotdot::put(&args.path, value, &mut doc)? {
        info!(path = %args.path, %previous, "Replaced existing value");
    }
    Ok(Json::Object(doc))
}

/// Run the put command
pub fn run(args: &PutArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    emit(&execute(args)?, format)?;
    Ok(())
}
