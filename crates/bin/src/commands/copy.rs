//! Copy command - prints a document holding only the given paths.

use serde_json::Value as Json;

use crate::cli::CopyArgs;
use crate::document;
use crate::output::{OutputFormat, emit};

/// Build the reduced document. Paths without a value are skipped.
pub fn execute(args: &CopyArgs) -> Result<Json, Box<dyn std::error::Error>> {
    let doc = document::load(&args.document.file)?;
    let copied = dotdot::copy_include(&doc, &args.paths)?.unwrap_or_default();
    Ok(Json::Object(copied))
}

/// Run the copy command
pub fn run(args: &CopyArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    emit(&execute(args)?, format)?;
    Ok(())
}
