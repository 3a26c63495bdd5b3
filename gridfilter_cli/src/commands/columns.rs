use gridfilter_core::{Column, OperatorDescriptor, Schema};
use serde::Serialize;

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct ColumnOutput<'a> {
    #[serde(flatten)]
    column: &'a Column,
    operators: &'static [OperatorDescriptor],
}

/// Lists the schema's columns with their operators.
pub fn list_columns(schema: &Schema, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Listing columns");
    ui::success(&format!("Schema has {} columns", schema.columns().len()));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_columns(schema.columns()),
        OutputFormat::Json => {
            let output: Vec<ColumnOutput> = schema
                .columns()
                .iter()
                .map(|column| ColumnOutput {
                    column,
                    operators: column.operators(),
                })
                .collect();
            ui::json_output(&output);
        }
    }

    Ok(())
}
