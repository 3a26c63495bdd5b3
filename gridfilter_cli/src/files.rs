//! Loading schema, filter and record files.

use std::fs;
use std::path::Path;

use gridfilter_core::payload::document_from_payload;
use gridfilter_core::schema::defaults::demo_schema;
use gridfilter_core::{FilterGroup, Record, Schema};
use serde_json::Value;

use crate::errors::CliError;
use crate::ui;

/// Loads the column schema from a file, or the demo schema if none is given.
pub fn load_schema(schema_path: Option<&Path>) -> Result<Schema, CliError> {
    let Some(path) = schema_path else {
        ui::debug("No schema file given, using the demo columns");
        return Ok(demo_schema());
    };

    let source = read_file(path)?;
    let schema = Schema::from_json(&source).map_err(|e| {
        ui::error_with_details(&format!("Invalid schema in '{}'", path.display()), &e.to_string());
        CliError::InputError
    })?;

    ui::debug(&format!(
        "Loaded schema with {} columns from '{}'",
        schema.columns().len(),
        path.display()
    ));
    Ok(schema)
}

/// Loads a filter payload. Both versioned document payloads and bare root
/// groups are accepted.
pub fn load_filter(filter_path: &Path, schema: &Schema) -> Result<FilterGroup, CliError> {
    let value = read_json(filter_path)?;

    document_from_payload(&value, schema).map_err(|e| {
        ui::error_with_details(
            &format!("Invalid filter in '{}'", filter_path.display()),
            &e.to_string(),
        );
        CliError::InputError
    })
}

/// Loads a JSON array of records.
pub fn load_records(records_path: &Path) -> Result<Vec<Record>, CliError> {
    let source = read_file(records_path)?;

    let records: Vec<Record> = serde_json::from_str(&source).map_err(|e| {
        ui::error_with_details(
            &format!("Invalid records in '{}'", records_path.display()),
            &e.to_string(),
        );
        CliError::InputError
    })?;

    ui::debug(&format!(
        "Loaded {} records from '{}'",
        records.len(),
        records_path.display()
    ));
    Ok(records)
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    let source = read_file(path)?;
    serde_json::from_str(&source).map_err(|e| {
        ui::error_with_details(&format!("'{}' is not valid JSON", path.display()), &e.to_string());
        CliError::InputError
    })
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(&format!("Failed to read '{}'", path.display()), &e.to_string());
        CliError::FileError
    })
}
