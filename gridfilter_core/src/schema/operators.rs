//! Operators offered per column type

use log::debug;
use serde::Serialize;

use super::ColumnType;
use crate::filter::FilterOperator;

/// An operator as offered to the user: its key and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorDescriptor {
    pub value: &'static str,
    pub label: &'static str,
}

impl OperatorDescriptor {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    pub fn operator(&self) -> FilterOperator {
        FilterOperator::from(self.value)
    }
}

const STRING_OPERATORS: [OperatorDescriptor; 5] = [
    OperatorDescriptor::new("equals", "Equals"),
    OperatorDescriptor::new("contains", "Contains"),
    OperatorDescriptor::new("startsWith", "Starts with"),
    OperatorDescriptor::new("endsWith", "Ends with"),
    OperatorDescriptor::new("notContains", "Does not contain"),
];

const NUMBER_OPERATORS: [OperatorDescriptor; 6] = [
    OperatorDescriptor::new("equals", "="),
    OperatorDescriptor::new("notEquals", "!="),
    OperatorDescriptor::new("gt", ">"),
    OperatorDescriptor::new("gte", ">="),
    OperatorDescriptor::new("lt", "<"),
    OperatorDescriptor::new("lte", "<="),
];

const BOOLEAN_OPERATORS: [OperatorDescriptor; 1] = [OperatorDescriptor::new("equals", "Is")];

const DATE_OPERATORS: [OperatorDescriptor; 3] = [
    OperatorDescriptor::new("equals", "On"),
    OperatorDescriptor::new("before", "Before"),
    OperatorDescriptor::new("after", "After"),
];

const SELECT_OPERATORS: [OperatorDescriptor; 3] = [
    OperatorDescriptor::new("equals", "Is"),
    OperatorDescriptor::new("notEquals", "Is not"),
    OperatorDescriptor::new("in", "Is any of"),
];

/// Legal operators for a column type. The first one is the default.
pub fn operators_for(column_type: ColumnType) -> &'static [OperatorDescriptor] {
    match column_type {
        ColumnType::String => &STRING_OPERATORS,
        ColumnType::Number => &NUMBER_OPERATORS,
        ColumnType::Boolean => &BOOLEAN_OPERATORS,
        ColumnType::Date => &DATE_OPERATORS,
        ColumnType::Select => &SELECT_OPERATORS,
    }
}

/// Legal operators for a column type given by name. An unrecognized name has
/// no legal operators.
pub fn operators_for_type_name(type_name: &str) -> &'static [OperatorDescriptor] {
    match type_name.parse::<ColumnType>() {
        Ok(column_type) => operators_for(column_type),
        Err(_) => {
            debug!("No operators for unknown column type '{}'", type_name);
            &[]
        }
    }
}

pub fn default_operator(column_type: ColumnType) -> FilterOperator {
    operators_for(column_type)[0].operator()
}

pub fn is_legal_operator(column_type: ColumnType, operator: &FilterOperator) -> bool {
    operators_for(column_type)
        .iter()
        .any(|descriptor| descriptor.value == operator.as_str())
}
