//! The JSON exchange format handed to a query backend
//!
//! A group encodes as `{"id", "type": "group", "logic", "children"}` and a
//! rule as `{"id", "type": "rule", "fieldId", "operator", "value"}`. Values
//! are plain JSON: booleans, numbers, strings and arrays of strings. A number
//! that could not be parsed encodes as `null`.
//!
//! Decoding needs the schema because a JSON string means a date under a date
//! column and text everywhere else.

mod decode;
mod payload_errors;

use serde_json::{Map, Number, Value};

use crate::filter::{FilterGroup, FilterNode, FilterRule, FilterValue};

pub use decode::{document_from_payload, from_payload, root_from_payload};
pub use payload_errors::ValidationError;

/// Version written to and accepted from document payloads.
pub const PAYLOAD_SCHEMA_VERSION: u64 = 1;

pub(crate) const SCHEMA_VERSION_KEY: &str = "schemaVersion";

/// Encodes a node and its descendants.
pub fn to_payload(node: &FilterNode) -> Value {
    match node {
        FilterNode::Rule(rule) => rule_to_payload(rule),
        FilterNode::Group(group) => group_to_payload(group),
    }
}

pub fn group_to_payload(group: &FilterGroup) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), Value::String(group.id.to_string()));
    object.insert("type".to_string(), Value::String("group".to_string()));
    object.insert(
        "logic".to_string(),
        Value::String(group.logic.as_str().to_string()),
    );
    object.insert(
        "children".to_string(),
        Value::Array(group.children.iter().map(to_payload).collect()),
    );
    Value::Object(object)
}

pub fn rule_to_payload(rule: &FilterRule) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), Value::String(rule.id.to_string()));
    object.insert("type".to_string(), Value::String("rule".to_string()));
    object.insert("fieldId".to_string(), Value::String(rule.field_id.clone()));
    object.insert(
        "operator".to_string(),
        Value::String(rule.operator.as_str().to_string()),
    );
    object.insert("value".to_string(), value_to_payload(&rule.value));
    Value::Object(object)
}

/// Encodes a root group with the `schemaVersion` marker in front.
pub fn to_document_payload(root: &FilterGroup) -> Value {
    let mut object = Map::new();
    object.insert(
        SCHEMA_VERSION_KEY.to_string(),
        Value::Number(PAYLOAD_SCHEMA_VERSION.into()),
    );
    if let Value::Object(fields) = group_to_payload(root) {
        object.extend(fields);
    }
    Value::Object(object)
}

fn value_to_payload(value: &FilterValue) -> Value {
    match value {
        FilterValue::Bool(b) => Value::Bool(*b),
        FilterValue::Number(n) => number_to_payload(*n),
        FilterValue::InvalidNumber => Value::Null,
        FilterValue::Text(s) | FilterValue::DateText(s) => Value::String(s.clone()),
        FilterValue::TextList(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
    }
}

/// Integral numbers encode as JSON integers so `10` stays `10` rather than
/// `10.0`.
fn number_to_payload(n: f64) -> Value {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterOperator, Logic, NodeId};
    use serde_json::json;

    fn sample_tree() -> FilterGroup {
        FilterGroup::new(
            NodeId::new("root"),
            Logic::And,
            vec![
                FilterNode::Rule(FilterRule::new(
                    NodeId::new("r1"),
                    "isActive",
                    FilterOperator::Equals,
                    FilterValue::Bool(true),
                )),
                FilterNode::Group(FilterGroup::new(
                    NodeId::new("g1"),
                    Logic::Or,
                    vec![FilterNode::Rule(FilterRule::new(
                        NodeId::new("r2"),
                        "role",
                        FilterOperator::In,
                        FilterValue::TextList(vec!["Admin".to_string(), "User".to_string()]),
                    ))],
                )),
            ],
        )
    }

    #[test]
    fn test_group_payload_shape() {
        let payload = group_to_payload(&sample_tree());

        assert_eq!(
            payload,
            json!({
                "id": "root",
                "type": "group",
                "logic": "AND",
                "children": [
                    {"id": "r1", "type": "rule", "fieldId": "isActive", "operator": "equals", "value": true},
                    {
                        "id": "g1",
                        "type": "group",
                        "logic": "OR",
                        "children": [
                            {"id": "r2", "type": "rule", "fieldId": "role", "operator": "in", "value": ["Admin", "User"]}
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_keys_keep_order() {
        let payload = to_payload(&FilterNode::Rule(FilterRule::new(
            NodeId::new("r1"),
            "age",
            FilterOperator::GreaterThan,
            FilterValue::Number(10.0),
        )));

        let keys: Vec<&String> = payload.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "type", "fieldId", "operator", "value"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(number_to_payload(10.0), json!(10));
        assert_eq!(number_to_payload(-3.0), json!(-3));
        assert_eq!(number_to_payload(10.5), json!(10.5));
        assert_eq!(value_to_payload(&FilterValue::InvalidNumber), Value::Null);
    }

    #[test]
    fn test_date_encodes_as_string() {
        assert_eq!(
            value_to_payload(&FilterValue::DateText("2024-03-01".to_string())),
            json!("2024-03-01")
        );
    }

    #[test]
    fn test_unknown_operator_is_written_verbatim() {
        let payload = to_payload(&FilterNode::Rule(FilterRule::new(
            NodeId::new("r1"),
            "age",
            FilterOperator::from("between"),
            FilterValue::Number(1.0),
        )));

        assert_eq!(payload["operator"], json!("between"));
    }

    #[test]
    fn test_document_payload_has_version_first() {
        let payload = to_document_payload(&FilterGroup::new(NodeId::new("root"), Logic::Or, vec![]));

        assert_eq!(
            payload,
            json!({"schemaVersion": 1, "id": "root", "type": "group", "logic": "OR", "children": []})
        );
        let first_key = payload.as_object().unwrap().keys().next().cloned();
        assert_eq!(first_key.as_deref(), Some("schemaVersion"));
    }
}
