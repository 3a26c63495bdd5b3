use std::path::Path;

use gridfilter_core::Schema;
use gridfilter_core::filter::filter_records;

use crate::errors::CliError;
use crate::files::{load_filter, load_records};
use crate::ui::{self, OutputFormat};

/// Evaluates a filter against every record and prints the matching ones.
pub fn apply_filter(
    filter_path: &Path,
    records_path: &Path,
    schema: &Schema,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Applying filter");
    let root = load_filter(filter_path, schema)?;
    let records = load_records(records_path)?;

    if let Err(issues) = root.validate(schema) {
        // Evaluation still runs, rules with issues just never match
        for issue in &issues {
            ui::warning(&issue.to_string());
        }
    }

    let matched = filter_records(&root, &records, schema);
    ui::success(&format!(
        "{} of {} records match",
        matched.len(),
        records.len()
    ));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_records(&matched),
        OutputFormat::Json => ui::json_output(&matched),
    }

    Ok(())
}
