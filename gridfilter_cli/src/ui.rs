//! Terminal output helpers. Status messages go to stderr, results to stdout.

use std::fmt;

use console::style;
use gridfilter_core::{Column, FilterGroup, FilterNode, Record};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable output
    #[default]
    Pretty,
    /// JSON on stdout
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(msg: &str) {
    eprintln!("{}", style(msg).bold());
}

pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}

pub fn info(msg: &str) {
    eprintln!("{}", style(msg).dim());
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

pub fn error_with_details(msg: &str, details: &str) {
    eprintln!("{} {}: {}", style("✗").red().bold(), msg, style(details).dim());
}

/// Only shown with `--verbose`.
pub fn debug(msg: &str) {
    log::debug!("{}", msg);
}

pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}

pub fn pretty_output_columns(columns: &[Column]) {
    for column in columns {
        let operators: Vec<&str> = column
            .operators()
            .iter()
            .map(|descriptor| descriptor.value)
            .collect();

        println!(
            "{} {} {}",
            style(&column.id).cyan().bold(),
            style(format!("({})", column.column_type)).dim(),
            column.label
        );
        if let Some(options) = &column.options {
            println!("    options:   {}", options.join(", "));
        }
        println!("    operators: {}", operators.join(", "));
    }
}

pub fn pretty_output_filter(root: &FilterGroup) {
    for line in filter_lines(root) {
        println!("{}", line);
    }
}

pub fn pretty_output_records(records: &[&Record]) {
    for record in records {
        let fields: Vec<String> = record
            .fields()
            .map(|(field, value)| format!("{}={}", style(field).cyan(), display_json(value)))
            .collect();
        println!("{}", fields.join("  "));
    }
}

/// The tree as indented lines, one per node.
pub fn filter_lines(root: &FilterGroup) -> Vec<String> {
    let mut lines = Vec::new();
    push_group_lines(root, 0, &mut lines);
    lines
}

fn push_group_lines(group: &FilterGroup, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    lines.push(format!("{}{} [{}]", indent, group.logic, group.id));

    if group.children.is_empty() {
        lines.push(format!("{}  (empty)", indent));
    }
    for child in &group.children {
        match child {
            FilterNode::Group(child_group) => push_group_lines(child_group, depth + 1, lines),
            FilterNode::Rule(rule) => lines.push(format!(
                "{}  {} {} {} [{}]",
                indent, rule.field_id, rule.operator, rule.value, rule.id
            )),
        }
    }
}

fn display_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
