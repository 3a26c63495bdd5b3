//! Select (closed option set) comparison logic for filters

use crate::filter::{FilterOperator, FilterValue};
use crate::record::RecordValue;

/// Compare a select field against a filter. `in` expects a list of options,
/// the other operators a single option.
pub fn compare_select(
    record_value: &RecordValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> bool {
    let RecordValue::Text(value) = record_value else {
        return false;
    };

    match (operator, filter_value) {
        (FilterOperator::Equals, FilterValue::Text(option)) => value == option,
        (FilterOperator::NotEquals, FilterValue::Text(option)) => value != option,
        (FilterOperator::In, FilterValue::TextList(options)) => {
            options.iter().any(|option| option == value)
        }
        _ => false,
    }
}
