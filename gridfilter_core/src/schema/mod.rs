//! Column schema for filterable fields
//!
//! The schema is supplied once at startup and never changes afterwards. It
//! answers two questions: which column does a field id refer to, and which
//! operators may be used on a column of a given type.

pub mod defaults;
mod operators;
mod schema_errors;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::filter::{FilterOperator, FilterValue};

pub use operators::*;
pub use schema_errors::SchemaError;

/// The value type of a column. Drives operator choice, value coercion and
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Boolean,
    Date,
    Select,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::Select => "select",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ColumnType::String),
            "number" => Ok(ColumnType::Number),
            "boolean" => Ok(ColumnType::Boolean),
            "date" => Ok(ColumnType::Date),
            "select" => Ok(ColumnType::Select),
            _ => Err(SchemaError::UnknownColumnType(s.to_string())),
        }
    }
}

/// A filterable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Closed set of legal values, only for select columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Column {
    /// Creates a column without options.
    pub fn new(id: impl Into<String>, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            column_type,
            options: None,
        }
    }

    /// Creates a select column with its closed set of options.
    pub fn select<S: Into<String>>(
        id: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            column_type: ColumnType::Select,
            options: Some(options.into_iter().map(Into::into).collect()),
        }
    }

    pub fn operators(&self) -> &'static [OperatorDescriptor] {
        operators_for(self.column_type)
    }

    pub fn default_operator(&self) -> FilterOperator {
        default_operator(self.column_type)
    }

    pub fn empty_value(&self) -> FilterValue {
        FilterValue::empty_for(self.column_type)
    }

    /// Whether `value` is one of this column's options. Always false for
    /// columns without options.
    pub fn allows_option(&self, value: &str) -> bool {
        self.options
            .as_ref()
            .is_some_and(|options| options.iter().any(|option| option == value))
    }
}

/// An ordered, non-empty set of columns with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Validates and wraps a column list.
    pub fn new(columns: Vec<Column>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|other| other.id == column.id) {
                return Err(SchemaError::DuplicateColumn(column.id.clone()));
            }

            match (column.column_type, &column.options) {
                (ColumnType::Select, None) => {
                    return Err(SchemaError::MissingOptions(column.id.clone()));
                }
                (column_type, Some(_)) if column_type != ColumnType::Select => {
                    return Err(SchemaError::UnexpectedOptions {
                        column: column.id.clone(),
                        column_type,
                    });
                }
                _ => {}
            }
        }

        debug!("Built schema with {} columns", columns.len());
        Ok(Self { columns })
    }

    /// Parses a JSON array of columns.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let columns: Vec<Column> =
            serde_json::from_str(json).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column new rules start out with.
    pub fn default_column(&self) -> &Column {
        &self.columns[0]
    }

    /// Strict lookup by field id.
    pub fn find(&self, field_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == field_id)
    }

    /// Lookup by field id that falls back to the first column when the id is
    /// unknown.
    pub fn column(&self, field_id: &str) -> &Column {
        match self.find(field_id) {
            Some(column) => column,
            None => {
                debug!(
                    "Unknown field '{}', falling back to column '{}'",
                    field_id,
                    self.default_column().id
                );
                self.default_column()
            }
        }
    }
}
