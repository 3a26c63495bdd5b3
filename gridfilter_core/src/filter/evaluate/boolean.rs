//! Boolean comparison logic for filters

use crate::filter::{FilterOperator, FilterValue};
use crate::record::RecordValue;

/// Compare a boolean field against a filter
pub fn compare_boolean(
    record_value: &RecordValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> bool {
    match (record_value, filter_value) {
        (RecordValue::Bool(value), FilterValue::Bool(filter_bool)) => match operator {
            FilterOperator::Equals => value == filter_bool,
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_equals_true() {
        assert!(compare_boolean(&RecordValue::Bool(true), &FilterOperator::Equals, &FilterValue::Bool(true)));
    }

    #[test]
    fn test_false_equals_false() {
        assert!(compare_boolean(&RecordValue::Bool(false), &FilterOperator::Equals, &FilterValue::Bool(false)));
    }

    #[test]
    fn test_true_not_equals_false() {
        assert!(!compare_boolean(&RecordValue::Bool(true), &FilterOperator::Equals, &FilterValue::Bool(false)));
    }

    #[test]
    fn test_unsupported_operator_not_equals() {
        assert!(!compare_boolean(&RecordValue::Bool(true), &FilterOperator::NotEquals, &FilterValue::Bool(false)));
    }

    #[test]
    fn test_wrong_filter_type_string() {
        assert!(!compare_boolean(
            &RecordValue::Bool(true),
            &FilterOperator::Equals,
            &FilterValue::Text("true".to_string())
        ));
    }

    #[test]
    fn test_wrong_record_type() {
        assert!(!compare_boolean(
            &RecordValue::Text("true".to_string()),
            &FilterOperator::Equals,
            &FilterValue::Bool(true)
        ));
        assert!(!compare_boolean(&RecordValue::Number(1.0), &FilterOperator::Equals, &FilterValue::Bool(true)));
    }
}
