//! Has command - reports which paths have a value.

use serde_json::{Map, Value as Json};

use crate::cli::HasArgs;
use crate::document;
use crate::output::{OutputFormat, print_table};

/// Check every path, in argument order
pub fn execute(args: &HasArgs) -> Result<Vec<(String, bool)>, Box<dyn std::error::Error>> {
    let doc = document::load(&args.document.file)?;
    args.paths
        .iter()
        .map(|path| -> Result<(String, bool), Box<dyn std::error::Error>> {
            Ok((path.clone(), dotdot::has(path, &doc)?))
        })
        .collect()
}

/// Run the has command. Fails if any path has no value.
pub fn run(args: &HasArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let results = execute(args)?;

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = results
                .iter()
                .map(|(path, present)| {
                    let present = if *present { "yes" } else { "no" };
                    vec![path.clone(), present.to_string()]
                })
                .collect();
            print_table(&["PATH", "PRESENT"], &rows);
        }
        OutputFormat::Json => {
            let value: Map<String, Json> = results
                .iter()
                .map(|(path, present)| (path.clone(), Json::Bool(*present)))
                .collect();
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    let missing: Vec<&str> = results
        .iter()
        .filter(|(_, present)| !present)
        .map(|(path, _)| path.as_str())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("No value for: {}", missing.join(", ")).into())
    }
}
