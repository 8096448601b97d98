//! Keys command - lists every leaf path.

use serde_json::Value as Json;

use crate::cli::KeysArgs;
use crate::document;
use crate::output::{OutputFormat, emit};

/// Leaf paths in sorted order
pub fn execute(args: &KeysArgs) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let doc = document::load(&args.document.file)?;
    Ok(dotdot::flatten_keys(&doc).into_iter().collect())
}

/// Run the keys command
pub fn run(args: &KeysArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let keys = execute(args)?;
    emit(&Json::from(keys), format)?;
    Ok(())
}
