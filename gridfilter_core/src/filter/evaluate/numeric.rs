//! Numeric comparison logic for filters

use crate::filter::{FilterOperator, FilterValue};
use crate::record::RecordValue;

/// Compare a number field against a filter. An invalid filter number never
/// matches.
pub fn compare_number(
    record_value: &RecordValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> bool {
    let (RecordValue::Number(value), FilterValue::Number(filter_number)) =
        (record_value, filter_value)
    else {
        return false;
    };
    let (value, filter_number) = (*value, *filter_number);

    match operator {
        FilterOperator::Equals => value == filter_number,
        FilterOperator::NotEquals => value != filter_number,
        FilterOperator::GreaterThan => value > filter_number,
        FilterOperator::GreaterOrEqual => value >= filter_number,
        FilterOperator::LessThan => value < filter_number,
        FilterOperator::LessOrEqual => value <= filter_number,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> RecordValue {
        RecordValue::Number(n)
    }

    #[test]
    fn test_equals() {
        assert!(compare_number(&num(42.0), &FilterOperator::Equals, &FilterValue::Number(42.0)));
        assert!(!compare_number(&num(42.0), &FilterOperator::Equals, &FilterValue::Number(42.5)));
    }

    #[test]
    fn test_not_equals() {
        assert!(compare_number(&num(42.0), &FilterOperator::NotEquals, &FilterValue::Number(1.0)));
        assert!(!compare_number(&num(42.0), &FilterOperator::NotEquals, &FilterValue::Number(42.0)));
    }

    #[test]
    fn test_ordering() {
        assert!(compare_number(&num(15.0), &FilterOperator::GreaterThan, &FilterValue::Number(10.0)));
        assert!(!compare_number(&num(10.0), &FilterOperator::GreaterThan, &FilterValue::Number(10.0)));
        assert!(compare_number(&num(10.0), &FilterOperator::GreaterOrEqual, &FilterValue::Number(10.0)));
        assert!(compare_number(&num(5.0), &FilterOperator::LessThan, &FilterValue::Number(10.0)));
        assert!(!compare_number(&num(10.0), &FilterOperator::LessThan, &FilterValue::Number(10.0)));
        assert!(compare_number(&num(10.0), &FilterOperator::LessOrEqual, &FilterValue::Number(10.0)));
    }

    #[test]
    fn test_negative_and_fractional() {
        assert!(compare_number(&num(-2.5), &FilterOperator::LessThan, &FilterValue::Number(-2.0)));
        assert!(compare_number(&num(2.5), &FilterOperator::Equals, &FilterValue::Number(2.5)));
    }

    #[test]
    fn test_equality_agrees_with_ordering() {
        let sum = num(0.1 + 0.2);
        let filter = FilterValue::Number(0.3);

        assert!(!compare_number(&sum, &FilterOperator::Equals, &filter));
        assert!(compare_number(&sum, &FilterOperator::NotEquals, &filter));
        assert!(compare_number(&sum, &FilterOperator::GreaterThan, &filter));
        assert!(!compare_number(&sum, &FilterOperator::LessOrEqual, &filter));
    }

    #[test]
    fn test_tiny_distinct_numbers_are_not_equal() {
        assert!(!compare_number(&num(1e-17), &FilterOperator::Equals, &FilterValue::Number(2e-17)));
        assert!(compare_number(&num(1e-17), &FilterOperator::NotEquals, &FilterValue::Number(2e-17)));
    }

    #[test]
    fn test_invalid_number_never_matches() {
        for operator in [
            FilterOperator::Equals,
            FilterOperator::NotEquals,
            FilterOperator::GreaterThan,
            FilterOperator::LessOrEqual,
        ] {
            assert!(!compare_number(&num(1.0), &operator, &FilterValue::InvalidNumber));
        }
    }

    #[test]
    fn test_unsupported_operator() {
        assert!(!compare_number(&num(1.0), &FilterOperator::Contains, &FilterValue::Number(1.0)));
        assert!(!compare_number(&num(1.0), &FilterOperator::In, &FilterValue::Number(1.0)));
    }

    #[test]
    fn test_wrong_value_types() {
        assert!(!compare_number(
            &RecordValue::Text("15".to_string()),
            &FilterOperator::GreaterThan,
            &FilterValue::Number(10.0)
        ));
        assert!(!compare_number(
            &num(15.0),
            &FilterOperator::GreaterThan,
            &FilterValue::Text("10".to_string())
        ));
    }
}
