//! Built-in demo columns and filter for a user table.

use super::{Column, ColumnType, Schema};
use crate::filter::{FilterGroup, FilterNode, FilterOperator, FilterRule, FilterValue, Logic, NodeId};

pub fn demo_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID", ColumnType::Number),
        Column::new("firstName", "First Name", ColumnType::String),
        Column::new("lastName", "Last Name", ColumnType::String),
        Column::new("email", "Email", ColumnType::String),
        Column::select("role", "Role", ["Admin", "Editor", "Viewer", "User"]),
        Column::new("isActive", "Status", ColumnType::Boolean),
        Column::new("lastLogin", "Last Login", ColumnType::Date),
        Column::new("revenue", "Revenue", ColumnType::Number),
    ]
}

/// The demo columns as a schema. They are known to be valid.
pub fn demo_schema() -> Schema {
    Schema {
        columns: demo_columns(),
    }
}

/// Active users whose first name contains "John" or whose email ends with
/// "@example.com".
pub fn demo_filter() -> FilterGroup {
    FilterGroup::new(
        NodeId::new("root"),
        Logic::And,
        vec![
            FilterNode::Rule(FilterRule::new(
                NodeId::new("rule-1"),
                "isActive",
                FilterOperator::Equals,
                FilterValue::Bool(true),
            )),
            FilterNode::Group(FilterGroup::new(
                NodeId::new("group-1"),
                Logic::Or,
                vec![
                    FilterNode::Rule(FilterRule::new(
                        NodeId::new("rule-2"),
                        "firstName",
                        FilterOperator::Contains,
                        FilterValue::Text("John".to_string()),
                    )),
                    FilterNode::Rule(FilterRule::new(
                        NodeId::new("rule-3"),
                        "email",
                        FilterOperator::EndsWith,
                        FilterValue::Text("@example.com".to_string()),
                    )),
                ],
            )),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_columns_form_a_valid_schema() {
        let schema = Schema::new(demo_columns()).unwrap();
        assert_eq!(schema, demo_schema());
        assert_eq!(schema.default_column().id, "id");
    }

    #[test]
    fn test_demo_filter_is_valid() {
        assert!(demo_filter().validate(&demo_schema()).is_ok());
        assert_eq!(demo_filter().descendant_count(), 4);
    }
}
