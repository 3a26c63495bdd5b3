//! Filter type definitions

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::schema::ColumnType;

/// Identifier of a node in a filter tree. Unique within a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// How a group combines its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Logic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Logic::And),
            "OR" => Ok(Logic::Or),
            _ => Err(format!("'{}' is not a group logic, expected AND or OR", s)),
        }
    }
}

/// Comparison operator of a rule.
///
/// Any operator key is representable: keys outside the known set are kept as
/// `Other` so they survive editing and serialization, and never match during
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Before,
    After,
    In,
    Other(String),
}

impl FilterOperator {
    /// The operator key used in payloads.
    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "notEquals",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "notContains",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
            FilterOperator::GreaterThan => "gt",
            FilterOperator::GreaterOrEqual => "gte",
            FilterOperator::LessThan => "lt",
            FilterOperator::LessOrEqual => "lte",
            FilterOperator::Before => "before",
            FilterOperator::After => "after",
            FilterOperator::In => "in",
            FilterOperator::Other(key) => key,
        }
    }
}

impl From<&str> for FilterOperator {
    fn from(key: &str) -> Self {
        match key {
            "equals" => FilterOperator::Equals,
            "notEquals" => FilterOperator::NotEquals,
            "contains" => FilterOperator::Contains,
            "notContains" => FilterOperator::NotContains,
            "startsWith" => FilterOperator::StartsWith,
            "endsWith" => FilterOperator::EndsWith,
            "gt" => FilterOperator::GreaterThan,
            "gte" => FilterOperator::GreaterOrEqual,
            "lt" => FilterOperator::LessThan,
            "lte" => FilterOperator::LessOrEqual,
            "before" => FilterOperator::Before,
            "after" => FilterOperator::After,
            "in" => FilterOperator::In,
            other => FilterOperator::Other(other.to_string()),
        }
    }
}

impl From<String> for FilterOperator {
    fn from(key: String) -> Self {
        FilterOperator::from(key.as_str())
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The value side of a rule. Which variant is meaningful depends on the type
/// of the column the rule refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    /// Always finite.
    Number(f64),
    /// Numeric input that could not be parsed.
    InvalidNumber,
    Text(String),
    /// ISO 8601 date or date-time, possibly empty.
    DateText(String),
    TextList(Vec<String>),
}

impl FilterValue {
    /// The value a rule starts with for a column type.
    pub fn empty_for(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::String | ColumnType::Select => FilterValue::Text(String::new()),
            ColumnType::Number => FilterValue::Number(0.0),
            ColumnType::Boolean => FilterValue::Bool(false),
            ColumnType::Date => FilterValue::DateText(String::new()),
        }
    }

    /// Returns the type name of this value for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::Bool(_) => "Bool",
            FilterValue::Number(_) => "Number",
            FilterValue::InvalidNumber => "InvalidNumber",
            FilterValue::Text(_) => "Text",
            FilterValue::DateText(_) => "DateText",
            FilterValue::TextList(_) => "TextList",
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Bool(b) => write!(f, "{}", b),
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::InvalidNumber => write!(f, "<invalid number>"),
            FilterValue::Text(s) | FilterValue::DateText(s) => write!(f, "\"{}\"", s),
            FilterValue::TextList(items) => {
                let quoted: Vec<String> = items.iter().map(|item| format!("\"{}\"", item)).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}
