//! Merge command - deep-merges two documents.

use serde_json::Value as Json;

use crate::cli::MergeArgs;
use crate::document;
use crate::output::{OutputFormat, emit};

/// Merge `overlay` over `base`
pub fn execute(args: &MergeArgs) -> Result<Json, Box<dyn std::error::Error>> {
    let base = document::load(&args.base)?;
    let overlay = document::load(&args.overlay)?;

    let merged = dotdot::merge(Some(base), Some(overlay))?.unwrap_or_default();
    Ok(Json::Object(merged))
}

/// Run the merge command
pub fn run(args: &MergeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    emit(&execute(args)?, format)?;
    Ok(())
}
