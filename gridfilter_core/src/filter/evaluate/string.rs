//! String comparison logic for filters

use crate::filter::{FilterOperator, FilterValue};
use crate::record::RecordValue;

/// Compare a string field against a filter. Case-sensitive.
pub fn compare_string(
    record_value: &RecordValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> bool {
    let (RecordValue::Text(value), FilterValue::Text(filter_str)) = (record_value, filter_value)
    else {
        return false;
    };

    match operator {
        FilterOperator::Equals => value == filter_str,
        FilterOperator::Contains => value.contains(filter_str.as_str()),
        FilterOperator::NotContains => !value.contains(filter_str.as_str()),
        FilterOperator::StartsWith => value.starts_with(filter_str.as_str()),
        FilterOperator::EndsWith => value.ends_with(filter_str.as_str()),
        _ => false,
    }
}
