use std::fmt;

use super::ColumnType;

/// Errors in the column list supplied at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    EmptySchema,
    DuplicateColumn(String),
    MissingOptions(String),
    UnexpectedOptions {
        column: String,
        column_type: ColumnType,
    },
    UnknownColumnType(String),
    InvalidJson(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptySchema => write!(f, "Schema must define at least one column"),
            SchemaError::DuplicateColumn(id) => {
                write!(f, "Column '{}' is defined more than once", id)
            }
            SchemaError::MissingOptions(id) => {
                write!(f, "Select column '{}' must list its options", id)
            }
            SchemaError::UnexpectedOptions {
                column,
                column_type,
            } => write!(
                f,
                "Column '{}' has type {} and cannot have options",
                column, column_type
            ),
            SchemaError::UnknownColumnType(name) => {
                write!(
                    f,
                    "Unknown column type '{}'. Supported: string, number, boolean, date, select",
                    name
                )
            }
            SchemaError::InvalidJson(error) => write!(f, "Schema could not be parsed: {}", error),
        }
    }
}

impl std::error::Error for SchemaError {}
