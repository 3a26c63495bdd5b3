//! Evaluation of filter trees against records
//!
//! Evaluation never fails. A rule on a field the schema does not know, a
//! record without the field, an operator the column type does not support or
//! a value of the wrong shape all make the rule evaluate to false.

mod boolean;
mod date;
mod numeric;
mod select;
mod string;

pub(crate) use date::DateInput;

use log::debug;

use super::tree::{FilterGroup, FilterNode, FilterRule};
use super::types::Logic;
use crate::record::{Record, RecordValue};
use crate::schema::{ColumnType, Schema};

impl FilterNode {
    /// Check if a record matches this node
    pub fn evaluate(&self, record: &Record, schema: &Schema) -> bool {
        match self {
            FilterNode::Rule(rule) => rule.evaluate(record, schema),
            FilterNode::Group(group) => group.evaluate(record, schema),
        }
    }
}

impl FilterGroup {
    /// An empty AND group matches every record, an empty OR group none.
    pub fn evaluate(&self, record: &Record, schema: &Schema) -> bool {
        match self.logic {
            Logic::And => self
                .children
                .iter()
                .all(|child| child.evaluate(record, schema)),
            Logic::Or => self
                .children
                .iter()
                .any(|child| child.evaluate(record, schema)),
        }
    }
}

impl FilterRule {
    pub fn evaluate(&self, record: &Record, schema: &Schema) -> bool {
        let Some(column) = schema.find(&self.field_id) else {
            debug!("Rule '{}' refers to unknown field '{}'", self.id, self.field_id);
            return false;
        };

        // Missing field, condition fails
        let record_value = match record.get(&self.field_id) {
            None | Some(RecordValue::Null) => return false,
            Some(value) => value,
        };

        let matched = match column.column_type {
            ColumnType::String => string::compare_string(record_value, &self.operator, &self.value),
            ColumnType::Number => {
                numeric::compare_number(record_value, &self.operator, &self.value)
            }
            ColumnType::Boolean => {
                boolean::compare_boolean(record_value, &self.operator, &self.value)
            }
            ColumnType::Date => date::compare_date(record_value, &self.operator, &self.value),
            ColumnType::Select => select::compare_select(record_value, &self.operator, &self.value),
        };

        debug!(
            "Rule '{}' ({} {} {}) -> {}",
            self.id, self.field_id, self.operator, self.value, matched
        );
        matched
    }
}

/// The records matching `root`, in input order.
pub fn filter_records<'a>(
    root: &FilterGroup,
    records: &'a [Record],
    schema: &Schema,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| root.evaluate(record, schema))
        .collect()
}
