use std::fmt;

use crate::filter::{NodeId, NodePath};

/// A malformed exchange payload.
///
/// `path` locates the offending node by child indices from the root, so
/// errors can be reported even when the node has no usable id.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotAnObject {
        path: NodePath,
    },
    MissingField {
        path: NodePath,
        field: &'static str,
    },
    InvalidField {
        path: NodePath,
        field: &'static str,
        expected: &'static str,
    },
    UnknownNodeType {
        path: NodePath,
        found: String,
    },
    UnknownLogic {
        path: NodePath,
        found: String,
    },
    /// A rule value with a JSON shape no filter value has
    UnsupportedValue {
        path: NodePath,
        found: &'static str,
    },
    DuplicateId {
        path: NodePath,
        id: NodeId,
    },
    RootNotGroup,
    UnsupportedVersion {
        found: String,
        supported: u64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnObject { path } => {
                write!(f, "Node at {} is not a JSON object", path)
            }
            ValidationError::MissingField { path, field } => {
                write!(f, "Node at {} is missing '{}'", path, field)
            }
            ValidationError::InvalidField {
                path,
                field,
                expected,
            } => write!(f, "Node at {} has invalid '{}', expected {}", path, field, expected),
            ValidationError::UnknownNodeType { path, found } => write!(
                f,
                "Node at {} has type '{}', expected 'rule' or 'group'",
                path, found
            ),
            ValidationError::UnknownLogic { path, found } => write!(
                f,
                "Group at {} has logic '{}', expected 'AND' or 'OR'",
                path, found
            ),
            ValidationError::UnsupportedValue { path, found } => {
                write!(f, "Rule at {} has an unsupported {} value", path, found)
            }
            ValidationError::DuplicateId { path, id } => {
                write!(f, "Node at {} reuses id '{}'", path, id)
            }
            ValidationError::RootNotGroup => write!(f, "The root node must be a group"),
            ValidationError::UnsupportedVersion { found, supported } => write!(
                f,
                "Unsupported schemaVersion {}, this version reads {}",
                found, supported
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
