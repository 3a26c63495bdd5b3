//! Rule editing that keeps field, operator and value consistent

use log::debug;

use super::filter_errors::EditError;
use super::tree::FilterRule;
use super::types::{FilterOperator, FilterValue};
use crate::schema::{ColumnType, Schema, default_operator, is_legal_operator};

/// Raw input from a value widget, before coercion to the column type.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueInput {
    Text(String),
    /// Multi-select input, used by the `in` operator
    List(Vec<String>),
}

impl From<&str> for ValueInput {
    fn from(text: &str) -> Self {
        ValueInput::Text(text.to_string())
    }
}

impl From<String> for ValueInput {
    fn from(text: String) -> Self {
        ValueInput::Text(text)
    }
}

impl From<bool> for ValueInput {
    fn from(value: bool) -> Self {
        ValueInput::Text(value.to_string())
    }
}

impl From<Vec<String>> for ValueInput {
    fn from(items: Vec<String>) -> Self {
        ValueInput::List(items)
    }
}

impl From<Vec<&str>> for ValueInput {
    fn from(items: Vec<&str>) -> Self {
        ValueInput::List(items.into_iter().map(String::from).collect())
    }
}

impl FilterRule {
    /// Points the rule at another field.
    ///
    /// The operator is reset to the new column type's default and the value
    /// to its empty value, even when the old operator would still be legal.
    /// An unknown field id is treated as a string column.
    pub fn change_field(&self, field_id: &str, schema: &Schema) -> FilterRule {
        let column_type = schema
            .find(field_id)
            .map(|column| column.column_type)
            .unwrap_or_else(|| {
                debug!("Field '{}' is not in the schema, treating it as string", field_id);
                ColumnType::String
            });

        FilterRule {
            id: self.id.clone(),
            field_id: field_id.to_string(),
            operator: default_operator(column_type),
            value: FilterValue::empty_for(column_type),
        }
    }

    /// Sets the operator without checking it against the field's type.
    pub fn change_operator(&self, operator: impl Into<FilterOperator>) -> FilterRule {
        FilterRule {
            operator: operator.into(),
            ..self.clone()
        }
    }

    /// Sets the operator, rejecting one the field's column type does not offer.
    pub fn change_operator_strict(
        &self,
        operator: impl Into<FilterOperator>,
        schema: &Schema,
    ) -> Result<FilterRule, EditError> {
        let operator = operator.into();
        let column = schema.column(&self.field_id);

        if !is_legal_operator(column.column_type, &operator) {
            return Err(EditError::IllegalOperator {
                field_id: self.field_id.clone(),
                column_type: column.column_type,
                operator: operator.to_string(),
                supported: column
                    .operators()
                    .iter()
                    .map(|descriptor| descriptor.value.to_string())
                    .collect(),
            });
        }

        Ok(self.change_operator(operator))
    }

    /// Sets the value after coercing `input` to the field's column type.
    ///
    /// An unknown field id is coerced as the first column of the schema,
    /// unlike [`FilterRule::change_field`] which treats it as a string.
    pub fn change_value(&self, input: impl Into<ValueInput>, schema: &Schema) -> FilterRule {
        let column = schema.column(&self.field_id);
        FilterRule {
            value: coerce_value(column.column_type, input.into()),
            ..self.clone()
        }
    }
}

/// Coerces widget input to the value variant of a column type.
pub(crate) fn coerce_value(column_type: ColumnType, input: ValueInput) -> FilterValue {
    match (column_type, input) {
        (ColumnType::Boolean, ValueInput::Text(text)) => FilterValue::Bool(text == "true"),
        (ColumnType::Boolean, ValueInput::List(_)) => FilterValue::Bool(false),
        (ColumnType::Number, ValueInput::Text(text)) => parse_number(&text),
        (ColumnType::Number, ValueInput::List(_)) => FilterValue::InvalidNumber,
        (ColumnType::Date, ValueInput::Text(text)) => FilterValue::DateText(text),
        (ColumnType::String | ColumnType::Select, ValueInput::Text(text)) => FilterValue::Text(text),
        (ColumnType::String | ColumnType::Select | ColumnType::Date, ValueInput::List(items)) => {
            FilterValue::TextList(items)
        }
    }
}

/// Blank input counts as zero, anything else must parse to a finite number.
fn parse_number(text: &str) -> FilterValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return FilterValue::Number(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => FilterValue::Number(number),
        _ => FilterValue::InvalidNumber,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::NodeId;
    use crate::schema::Column;
    use assert_matches::assert_matches;

    fn schema() -> Schema {
        Schema::new(vec![
            Column::new("name", "Name", ColumnType::String),
            Column::new("age", "Age", ColumnType::Number),
            Column::new("isActive", "Status", ColumnType::Boolean),
            Column::new("lastLogin", "Last Login", ColumnType::Date),
            Column::select("role", "Role", ["Admin", "Editor", "User"]),
        ])
        .unwrap()
    }

    fn age_rule() -> FilterRule {
        FilterRule::new(
            NodeId::new("r1"),
            "age",
            FilterOperator::GreaterThan,
            FilterValue::Number(10.0),
        )
    }

    #[test]
    fn test_change_field_resets_operator_and_value() {
        let schema = schema();
        let changed = age_rule().change_field("role", &schema);

        assert_eq!(changed.id, NodeId::new("r1"));
        assert_eq!(changed.field_id, "role");
        assert_eq!(changed.operator, FilterOperator::Equals);
        assert_eq!(changed.value, FilterValue::Text(String::new()));
    }

    #[test]
    fn test_change_field_resets_even_for_same_type() {
        let schema = Schema::new(vec![
            Column::new("age", "Age", ColumnType::Number),
            Column::new("revenue", "Revenue", ColumnType::Number),
        ])
        .unwrap();

        let changed = age_rule().change_field("revenue", &schema);

        assert_eq!(changed.operator, FilterOperator::Equals);
        assert_eq!(changed.value, FilterValue::Number(0.0));
    }

    #[test]
    fn test_change_field_to_same_field_still_resets() {
        let changed = age_rule().change_field("age", &schema());
        assert_eq!(changed.operator, FilterOperator::Equals);
        assert_eq!(changed.value, FilterValue::Number(0.0));
    }

    #[test]
    fn test_change_field_unknown_treated_as_string() {
        let changed = age_rule().change_field("nickname", &schema());

        assert_eq!(changed.field_id, "nickname");
        assert_eq!(changed.operator, FilterOperator::Equals);
        assert_eq!(changed.value, FilterValue::Text(String::new()));
    }

    #[test]
    fn test_change_field_to_each_type() {
        let schema = schema();
        let rule = age_rule();

        assert_eq!(rule.change_field("isActive", &schema).value, FilterValue::Bool(false));
        assert_eq!(
            rule.change_field("lastLogin", &schema).value,
            FilterValue::DateText(String::new())
        );
        assert_eq!(
            rule.change_field("name", &schema).value,
            FilterValue::Text(String::new())
        );
    }

    #[test]
    fn test_change_operator_accepts_anything() {
        let changed = age_rule().change_operator("startsWith");
        assert_eq!(changed.operator, FilterOperator::StartsWith);
        assert_eq!(changed.value, FilterValue::Number(10.0));

        let changed = age_rule().change_operator("between");
        assert_eq!(changed.operator, FilterOperator::Other("between".to_string()));
    }

    #[test]
    fn test_change_operator_strict() {
        let schema = schema();

        let changed = age_rule().change_operator_strict("lte", &schema).unwrap();
        assert_eq!(changed.operator, FilterOperator::LessOrEqual);

        assert_matches!(
            age_rule().change_operator_strict("contains", &schema),
            Err(EditError::IllegalOperator { operator, column_type: ColumnType::Number, supported, .. })
            if operator == "contains" && supported.len() == 6
        );
    }

    #[test]
    fn test_change_value_number() {
        let schema = schema();
        let rule = age_rule();

        assert_eq!(rule.change_value("42", &schema).value, FilterValue::Number(42.0));
        assert_eq!(rule.change_value(" 2.5 ", &schema).value, FilterValue::Number(2.5));
        assert_eq!(rule.change_value("", &schema).value, FilterValue::Number(0.0));
        assert_eq!(rule.change_value("abc", &schema).value, FilterValue::InvalidNumber);
        assert_eq!(rule.change_value("NaN", &schema).value, FilterValue::InvalidNumber);
        assert_eq!(rule.change_value("inf", &schema).value, FilterValue::InvalidNumber);
        assert_eq!(
            rule.change_value(vec!["1"], &schema).value,
            FilterValue::InvalidNumber
        );
    }

    #[test]
    fn test_change_value_boolean() {
        let schema = schema();
        let rule = age_rule().change_field("isActive", &schema);

        assert_eq!(rule.change_value("true", &schema).value, FilterValue::Bool(true));
        assert_eq!(rule.change_value(true, &schema).value, FilterValue::Bool(true));
        assert_eq!(rule.change_value("false", &schema).value, FilterValue::Bool(false));
        assert_eq!(rule.change_value("TRUE", &schema).value, FilterValue::Bool(false));
        assert_eq!(rule.change_value("yes", &schema).value, FilterValue::Bool(false));
    }

    #[test]
    fn test_change_value_passes_text_through() {
        let schema = schema();

        let name = age_rule().change_field("name", &schema);
        assert_eq!(
            name.change_value("John", &schema).value,
            FilterValue::Text("John".to_string())
        );

        let login = age_rule().change_field("lastLogin", &schema);
        assert_eq!(
            login.change_value("2024-01-31", &schema).value,
            FilterValue::DateText("2024-01-31".to_string())
        );
    }

    #[test]
    fn test_change_value_select_list() {
        let schema = schema();
        let role = age_rule()
            .change_field("role", &schema)
            .change_operator("in");

        let changed = role.change_value(vec!["Admin", "User"], &schema);
        assert_eq!(
            changed.value,
            FilterValue::TextList(vec!["Admin".to_string(), "User".to_string()])
        );
        assert_eq!(changed.operator, FilterOperator::In);
    }

    #[test]
    fn test_change_value_unknown_field_uses_first_column() {
        let schema = Schema::new(vec![
            Column::new("lastLogin", "Last Login", ColumnType::Date),
            Column::new("name", "Name", ColumnType::String),
        ])
        .unwrap();
        let rule = FilterRule::new(
            NodeId::new("r1"),
            "salary",
            FilterOperator::Equals,
            FilterValue::Text(String::new()),
        );

        let changed = rule.change_value("2024-01-01", &schema);
        assert_eq!(changed.value, FilterValue::DateText("2024-01-01".to_string()));

        let by_field = rule.change_field("salary", &schema);
        assert_eq!(by_field.value, FilterValue::Text(String::new()));
    }
}
