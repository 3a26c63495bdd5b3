use std::fmt;

use super::NodePath;
use crate::schema::ColumnType;

/// Errors from the checked edit API.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// No node exists at the path
    InvalidPath(NodePath),
    /// The edit needs a group but the path leads to a rule
    ExpectedGroup(NodePath),
    /// The edit needs a rule but the path leads to a group
    ExpectedRule(NodePath),
    RootNotRemovable,
    /// Operator is not offered for the rule's column type
    IllegalOperator {
        field_id: String,
        column_type: ColumnType,
        operator: String,
        supported: Vec<String>,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::InvalidPath(path) => write!(f, "No filter node at {}", path),
            EditError::ExpectedGroup(path) => {
                write!(f, "Node at {} is a rule, but the edit needs a group", path)
            }
            EditError::ExpectedRule(path) => {
                write!(f, "Node at {} is a group, but the edit needs a rule", path)
            }
            EditError::RootNotRemovable => write!(f, "The root group cannot be removed"),
            EditError::IllegalOperator {
                field_id,
                column_type,
                operator,
                supported,
            } => write!(
                f,
                "Cannot use '{}' operator on {} field '{}'. Supported: {}",
                operator,
                column_type,
                field_id,
                supported.join(", ")
            ),
        }
    }
}

impl std::error::Error for EditError {}
