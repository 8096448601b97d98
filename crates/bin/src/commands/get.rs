//! Get command - prints the value at a path.

use serde_json::Value as Json;

use crate::cli::GetArgs;
use crate::document;
use crate::output::{OutputFormat, emit};

/// Resolve the path; a missing value is `null`
pub fn execute(args: &GetArgs) -> Result<Json, Box<dyn std::error::Error>> {
    let doc = document::load(&args.document.file)?;
    Ok(dotdot::get(&args.path, &doc)?.cloned().unwrap_or(Json::Null))
}

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    emit(&execute(args)?, format)?;
    Ok(())
}
