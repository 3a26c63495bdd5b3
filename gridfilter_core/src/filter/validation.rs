use std::collections::HashSet;
use std::fmt;

use log::debug;

use super::evaluate::DateInput;
use super::tree::{FilterGroup, FilterNode, FilterRule};
use super::types::{FilterOperator, FilterValue, NodeId};
use crate::schema::{Column, ColumnType, Schema, is_legal_operator};

pub type ValidationResult = Result<(), Vec<TreeIssue>>;

/// A problem found by strict validation of a filter tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeIssue {
    pub node_id: NodeId,
    pub issue_type: TreeIssueType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeIssueType {
    /// The id is used by more than one node
    DuplicateId,
    UnknownField { field_id: String },
    IllegalOperator {
        column_type: ColumnType,
        operator: FilterOperator,
    },
    ValueTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    InvalidNumber,
    InvalidDate { value: String },
    /// A select value outside the column's options
    OptionNotAllowed { value: String, allowed: Vec<String> },
}

impl TreeIssue {
    pub fn duplicate_id(node_id: &NodeId) -> Self {
        Self {
            node_id: node_id.clone(),
            issue_type: TreeIssueType::DuplicateId,
        }
    }

    pub fn unknown_field(node_id: &NodeId, field_id: &str) -> Self {
        Self {
            node_id: node_id.clone(),
            issue_type: TreeIssueType::UnknownField {
                field_id: field_id.to_string(),
            },
        }
    }

    pub fn illegal_operator(
        node_id: &NodeId,
        column_type: ColumnType,
        operator: &FilterOperator,
    ) -> Self {
        Self {
            node_id: node_id.clone(),
            issue_type: TreeIssueType::IllegalOperator {
                column_type,
                operator: operator.clone(),
            },
        }
    }

    pub fn value_type_mismatch(node_id: &NodeId, expected: &'static str, actual: &'static str) -> Self {
        Self {
            node_id: node_id.clone(),
            issue_type: TreeIssueType::ValueTypeMismatch { expected, actual },
        }
    }

    pub fn invalid_number(node_id: &NodeId) -> Self {
        Self {
            node_id: node_id.clone(),
            issue_type: TreeIssueType::InvalidNumber,
        }
    }

    pub fn invalid_date(node_id: &NodeId, value: &str) -> Self {
        Self {
            node_id: node_id.clone(),
            issue_type: TreeIssueType::InvalidDate {
                value: value.to_string(),
            },
        }
    }

    pub fn option_not_allowed(node_id: &NodeId, value: &str, allowed: &[String]) -> Self {
        Self {
            node_id: node_id.clone(),
            issue_type: TreeIssueType::OptionNotAllowed {
                value: value.to_string(),
                allowed: allowed.to_vec(),
            },
        }
    }
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.issue_type {
            TreeIssueType::DuplicateId => {
                write!(f, "Node id '{}' is used more than once", self.node_id)
            }
            TreeIssueType::UnknownField { field_id } => {
                write!(f, "Rule '{}' refers to unknown field '{}'", self.node_id, field_id)
            }
            TreeIssueType::IllegalOperator {
                column_type,
                operator,
            } => write!(
                f,
                "Rule '{}' uses operator '{}' which {} fields do not support",
                self.node_id, operator, column_type
            ),
            TreeIssueType::ValueTypeMismatch { expected, actual } => write!(
                f,
                "Rule '{}' has a {} value, expected {}",
                self.node_id, actual, expected
            ),
            TreeIssueType::InvalidNumber => {
                write!(f, "Rule '{}' has a value that is not a number", self.node_id)
            }
            TreeIssueType::InvalidDate { value } => {
                write!(f, "Rule '{}' has invalid date '{}'", self.node_id, value)
            }
            TreeIssueType::OptionNotAllowed { value, allowed } => write!(
                f,
                "Rule '{}' has value '{}', allowed: {}",
                self.node_id,
                value,
                allowed.join(", ")
            ),
        }
    }
}

impl FilterGroup {
    /// Checks the whole tree against the schema.
    ///
    /// Editing and evaluation tolerate all of these issues. Validation is for
    /// callers that want to reject a tree before handing it to a backend.
    pub fn validate(&self, schema: &Schema) -> ValidationResult {
        debug!("Validating filter tree '{}'", self.id);

        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        collect_group_issues(self, schema, &mut seen, &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            debug!(
                "Filter tree '{}' failed validation with {} issues",
                self.id,
                issues.len()
            );
            Err(issues)
        }
    }
}

fn collect_group_issues<'a>(
    group: &'a FilterGroup,
    schema: &Schema,
    seen: &mut HashSet<&'a NodeId>,
    issues: &mut Vec<TreeIssue>,
) {
    if !seen.insert(&group.id) {
        issues.push(TreeIssue::duplicate_id(&group.id));
    }

    for child in &group.children {
        match child {
            FilterNode::Group(child_group) => {
                collect_group_issues(child_group, schema, seen, issues)
            }
            FilterNode::Rule(rule) => {
                if !seen.insert(&rule.id) {
                    issues.push(TreeIssue::duplicate_id(&rule.id));
                }
                collect_rule_issues(rule, schema, issues);
            }
        }
    }
}

fn collect_rule_issues(rule: &FilterRule, schema: &Schema, issues: &mut Vec<TreeIssue>) {
    let Some(column) = schema.find(&rule.field_id) else {
        issues.push(TreeIssue::unknown_field(&rule.id, &rule.field_id));
        return;
    };

    if !is_legal_operator(column.column_type, &rule.operator) {
        issues.push(TreeIssue::illegal_operator(
            &rule.id,
            column.column_type,
            &rule.operator,
        ));
        // The expected value shape depends on a legal operator
        return;
    }

    match (column.column_type, &rule.value) {
        (ColumnType::String, FilterValue::Text(_))
        | (ColumnType::Boolean, FilterValue::Bool(_))
        | (ColumnType::Number, FilterValue::Number(_)) => {}
        (ColumnType::Number, FilterValue::InvalidNumber) => {
            issues.push(TreeIssue::invalid_number(&rule.id))
        }
        (ColumnType::Date, FilterValue::DateText(text)) => {
            // Empty means not filled in yet
            if !text.is_empty() && DateInput::parse(text).is_none() {
                issues.push(TreeIssue::invalid_date(&rule.id, text));
            }
        }
        (ColumnType::Select, value) => collect_select_issues(rule, column, value, issues),
        (column_type, value) => issues.push(TreeIssue::value_type_mismatch(
            &rule.id,
            expected_value_type(column_type, &rule.operator),
            value.type_name(),
        )),
    }
}

fn collect_select_issues(
    rule: &FilterRule,
    column: &Column,
    value: &FilterValue,
    issues: &mut Vec<TreeIssue>,
) {
    let allowed = column.options.as_deref().unwrap_or_default();
    let chosen: Vec<&String> = match (&rule.operator, value) {
        (FilterOperator::In, FilterValue::TextList(items)) => items.iter().collect(),
        (FilterOperator::Equals | FilterOperator::NotEquals, FilterValue::Text(text)) => {
            // Empty means nothing selected yet
            if text.is_empty() {
                Vec::new()
            } else {
                vec![text]
            }
        }
        _ => {
            issues.push(TreeIssue::value_type_mismatch(
                &rule.id,
                expected_value_type(ColumnType::Select, &rule.operator),
                value.type_name(),
            ));
            return;
        }
    };

    for item in chosen {
        if !column.allows_option(item) {
            issues.push(TreeIssue::option_not_allowed(&rule.id, item, allowed));
        }
    }
}

fn expected_value_type(column_type: ColumnType, operator: &FilterOperator) -> &'static str {
    match (column_type, operator) {
        (ColumnType::Select, FilterOperator::In) => "TextList",
        (ColumnType::String | ColumnType::Select, _) => "Text",
        (ColumnType::Number, _) => "Number",
        (ColumnType::Boolean, _) => "Bool",
        (ColumnType::Date, _) => "DateText",
    }
}
