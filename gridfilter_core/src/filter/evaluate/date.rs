//! Date comparison logic for filters

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::filter::{FilterOperator, FilterValue};
use crate::record::RecordValue;

/// A date or a point in time parsed from an ISO 8601 string
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DateInput {
    Instant(DateTime<FixedOffset>),
    Day(NaiveDate),
}

impl DateInput {
    /// Accepts RFC 3339 datetimes, offset-less datetimes (read as UTC) and
    /// plain `YYYY-MM-DD` dates.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(instant) = input.parse::<DateTime<FixedOffset>>() {
            return Some(DateInput::Instant(instant));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
            return Some(DateInput::Instant(naive.and_utc().fixed_offset()));
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .map(DateInput::Day)
    }

    fn day(&self) -> NaiveDate {
        match self {
            DateInput::Instant(instant) => instant.with_timezone(&Utc).date_naive(),
            DateInput::Day(day) => *day,
        }
    }

    /// Two instants compare exactly. As soon as one side is a plain date,
    /// both sides compare by calendar day.
    fn compare(&self, other: &DateInput) -> Ordering {
        match (self, other) {
            (DateInput::Instant(a), DateInput::Instant(b)) => a.cmp(b),
            _ => self.day().cmp(&other.day()),
        }
    }
}

/// Compare a date field against a filter
pub fn compare_date(
    record_value: &RecordValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> bool {
    let (RecordValue::Text(value_str), FilterValue::DateText(filter_str)) =
        (record_value, filter_value)
    else {
        return false;
    };

    let (Some(value), Some(filter_date)) =
        (DateInput::parse(value_str), DateInput::parse(filter_str))
    else {
        return false;
    };

    let ordering = value.compare(&filter_date);
    match operator {
        FilterOperator::Equals => ordering == Ordering::Equal,
        FilterOperator::Before => ordering == Ordering::Less,
        FilterOperator::After => ordering == Ordering::Greater,
        _ => false,
    }
}
