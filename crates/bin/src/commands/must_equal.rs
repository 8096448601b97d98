//! Must-equal command - asserts the value at a path.

use serde_json::{Value as Json, json};

use crate::cli::MustEqualArgs;
use crate::document;
use crate::output::OutputFormat;

/// Compare the stored value with the expected one
pub fn execute(args: &MustEqualArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = document::load(&args.document.file)?;
    let expected = match document::parse_value(&args.expected) {
        Json::Null => None,
        value => Some(value),
    };

    dotdot::must_equal(&args.path, expected.as_ref(), &doc)?;
    Ok(())
}

/// Run the must-equal command
pub fn run(args: &MustEqualArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    execute(args)?;

    match format {
        OutputFormat::Human => println!("{}: ok", args.path),
        OutputFormat::Json => {
            let value = json!({ "path": args.path, "equal": true });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
