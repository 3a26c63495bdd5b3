//! Tests for the JSON exchange format

use assert_matches::assert_matches;
use serde_json::json;

use gridfilter_core::payload::{
    PAYLOAD_SCHEMA_VERSION, document_from_payload, from_payload, root_from_payload, to_document_payload,
    to_payload,
};
use gridfilter_core::schema::defaults::{demo_filter, demo_schema};
use gridfilter_core::{
    Column, FilterGroup, FilterNode, FilterOperator, FilterRule, FilterValue, Logic, NodeId,
    ValidationError,
};

#[test]
fn test_demo_filter_payload() {
    let payload = to_payload(&FilterNode::Group(demo_filter()));

    assert_eq!(
        payload,
        json!({
            "id": "root",
            "type": "group",
            "logic": "AND",
            "children": [
                {"id": "rule-1", "type": "rule", "fieldId": "isActive", "operator": "equals", "value": true},
                {
                    "id": "group-1",
                    "type": "group",
                    "logic": "OR",
                    "children": [
                        {"id": "rule-2", "type": "rule", "fieldId": "firstName", "operator": "contains", "value": "John"},
                        {"id": "rule-3", "type": "rule", "fieldId": "email", "operator": "endsWith", "value": "@example.com"}
                    ]
                }
            ]
        })
    );
}

#[test]
fn test_round_trip_covers_every_value_kind() {
    let schema = demo_schema();
    let tree = FilterGroup::new(
        NodeId::new("root"),
        Logic::Or,
        vec![
            FilterNode::Rule(FilterRule::new(NodeId::new("a"), "isActive", FilterOperator::Equals, FilterValue::Bool(false))),
            FilterNode::Rule(FilterRule::new(NodeId::new("b"), "revenue", FilterOperator::GreaterThan, FilterValue::Number(99.95))),
            FilterNode::Rule(FilterRule::new(NodeId::new("c"), "id", FilterOperator::Equals, FilterValue::InvalidNumber)),
            FilterNode::Rule(FilterRule::new(NodeId::new("d"), "email", FilterOperator::StartsWith, FilterValue::Text("admin".to_string()))),
            FilterNode::Rule(FilterRule::new(NodeId::new("e"), "lastLogin", FilterOperator::Before, FilterValue::DateText(String::new()))),
            FilterNode::Rule(FilterRule::new(
                NodeId::new("f"),
                "role",
                FilterOperator::In,
                FilterValue::TextList(vec!["Viewer".to_string(), "User".to_string()]),
            )),
            FilterNode::Group(FilterGroup::new(NodeId::new("g"), Logic::And, vec![])),
        ],
    );

    let decoded = root_from_payload(&to_payload(&FilterNode::Group(tree.clone())), &schema).unwrap();

    assert_eq!(decoded, tree);
}

#[test]
fn test_payload_survives_text_round_trip() {
    let schema = demo_schema();
    let text = serde_json::to_string_pretty(&to_document_payload(&demo_filter())).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["schemaVersion"], json!(PAYLOAD_SCHEMA_VERSION));
    assert_eq!(document_from_payload(&value, &schema).unwrap(), demo_filter());
}

#[test]
fn test_rule_missing_field_id_is_rejected() {
    let result = from_payload(&json!({"id": "x", "type": "rule"}), &demo_schema());

    assert_matches!(result, Err(ValidationError::MissingField { field: "fieldId", .. }));
}

#[test]
fn test_payload_from_other_schema() {
    // A payload written against a schema with a different date column
    let schema = gridfilter_core::Schema::new(vec![Column::new(
        "created",
        "Created",
        gridfilter_core::ColumnType::Date,
    )])
    .unwrap();
    let payload = json!({
        "id": "root", "type": "group", "logic": "AND",
        "children": [{"id": "r", "type": "rule", "fieldId": "lastLogin", "operator": "after", "value": "2024-01-01"}]
    });

    let root = root_from_payload(&payload, &schema).unwrap();

    let rule = root.children[0].as_rule().unwrap();
    assert_eq!(rule.value, FilterValue::Text("2024-01-01".to_string()));
    assert!(root.validate(&schema).is_err());
}
