use std::sync::Arc;

use gridfilter_core::schema::defaults::demo_filter;
use gridfilter_core::{FilterDocument, Schema};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Prints the demo filter as a document payload.
pub fn print_sample(schema: Schema, output_format: OutputFormat) -> Result<(), CliError> {
    let document = FilterDocument::new(Arc::new(schema), demo_filter());

    if let Err(issues) = document.root().validate(document.schema()) {
        // Happens with a custom schema that lacks the demo columns
        ui::warning(&format!(
            "The demo filter has {} issue(s) with this schema",
            issues.len()
        ));
    }

    match output_format {
        OutputFormat::Pretty => {
            ui::header("Demo filter");
            ui::pretty_output_filter(document.root());
            ui::info("Payload:");
            ui::json_output(&document.payload());
        }
        OutputFormat::Json => ui::json_output(&document.payload()),
    }

    Ok(())
}
