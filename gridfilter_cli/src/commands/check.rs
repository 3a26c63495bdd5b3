//! Check command: decodes a filter payload and reports tree issues.

use std::path::Path;

use gridfilter_core::{Schema, TreeIssue};
use serde::Serialize;

use crate::errors::CliError;
use crate::files::load_filter;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct CheckResult {
    valid: bool,
    nodes: usize,
    issues: Vec<String>,
}

/// Check a filter file. Fails if the payload is malformed or the tree has
/// issues with the schema.
pub fn check_filter(
    filter_path: &Path,
    schema: &Schema,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Checking filter");
    let root = load_filter(filter_path, schema)?;

    let issues = root.validate(schema).err().unwrap_or_default();
    let nodes = root.descendant_count() + 1;

    match output_format {
        OutputFormat::Pretty => {
            ui::pretty_output_filter(&root);
            report_issues(&issues, nodes);
        }
        OutputFormat::Json => ui::json_output(&CheckResult {
            valid: issues.is_empty(),
            nodes,
            issues: issues.iter().map(|issue| issue.to_string()).collect(),
        }),
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CliError::FilterError)
    }
}

fn report_issues(issues: &[TreeIssue], nodes: usize) {
    for issue in issues {
        ui::error(&issue.to_string());
    }

    if issues.is_empty() {
        ui::success(&format!("No issues found in {} nodes", nodes));
    } else {
        ui::error(&format!("\nFound {} issue(s)", issues.len()));
    }
}
