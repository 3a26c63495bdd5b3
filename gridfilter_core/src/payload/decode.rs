use std::collections::HashSet;

use log::debug;
use serde_json::{Map, Value};

use super::payload_errors::ValidationError;
use super::{PAYLOAD_SCHEMA_VERSION, SCHEMA_VERSION_KEY};
use crate::filter::{FilterGroup, FilterNode, FilterOperator, FilterRule, FilterValue, Logic, NodeId, NodePath};
use crate::schema::{ColumnType, Schema};

/// Decodes a node and its descendants.
///
/// Node ids must be unique across the decoded tree. A rule without a `value`
/// gets its column's empty value.
pub fn from_payload(value: &Value, schema: &Schema) -> Result<FilterNode, ValidationError> {
    let mut seen = HashSet::new();
    decode_node(value, schema, NodePath::root(), &mut seen)
}

/// Decodes a payload whose root must be a group.
pub fn root_from_payload(value: &Value, schema: &Schema) -> Result<FilterGroup, ValidationError> {
    match from_payload(value, schema)? {
        FilterNode::Group(group) => Ok(group),
        FilterNode::Rule(_) => Err(ValidationError::RootNotGroup),
    }
}

/// Decodes a document payload. A payload without `schemaVersion` is read as
/// the current version.
pub fn document_from_payload(
    value: &Value,
    schema: &Schema,
) -> Result<FilterGroup, ValidationError> {
    if let Some(version) = value.get(SCHEMA_VERSION_KEY) {
        if version.as_u64() != Some(PAYLOAD_SCHEMA_VERSION) {
            return Err(ValidationError::UnsupportedVersion {
                found: version.to_string(),
                supported: PAYLOAD_SCHEMA_VERSION,
            });
        }
    } else {
        debug!("Document payload has no {}, reading it as version {}", SCHEMA_VERSION_KEY, PAYLOAD_SCHEMA_VERSION);
    }

    root_from_payload(value, schema)
}

fn decode_node(
    value: &Value,
    schema: &Schema,
    path: NodePath,
    seen: &mut HashSet<NodeId>,
) -> Result<FilterNode, ValidationError> {
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::NotAnObject { path: path.clone() })?;

    let id = NodeId::new(required_str(object, "id", &path)?);
    if !seen.insert(id.clone()) {
        return Err(ValidationError::DuplicateId { path, id });
    }

    match required_str(object, "type", &path)? {
        "group" => decode_group(object, id, schema, path, seen).map(FilterNode::Group),
        "rule" => decode_rule(object, id, schema, &path).map(FilterNode::Rule),
        other => Err(ValidationError::UnknownNodeType {
            path,
            found: other.to_string(),
        }),
    }
}

fn decode_group(
    object: &Map<String, Value>,
    id: NodeId,
    schema: &Schema,
    path: NodePath,
    seen: &mut HashSet<NodeId>,
) -> Result<FilterGroup, ValidationError> {
    let logic_str = required_str(object, "logic", &path)?;
    let logic: Logic = logic_str
        .parse()
        .map_err(|_| ValidationError::UnknownLogic {
            path: path.clone(),
            found: logic_str.to_string(),
        })?;

    let children = match object.get("children") {
        None => {
            return Err(ValidationError::MissingField {
                path,
                field: "children",
            });
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ValidationError::InvalidField {
                path,
                field: "children",
                expected: "an array",
            });
        }
    };

    let children = children
        .iter()
        .enumerate()
        .map(|(index, child)| decode_node(child, schema, path.child(index), seen))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FilterGroup::new(id, logic, children))
}

fn decode_rule(
    object: &Map<String, Value>,
    id: NodeId,
    schema: &Schema,
    path: &NodePath,
) -> Result<FilterRule, ValidationError> {
    let field_id = required_str(object, "fieldId", path)?;
    let operator = FilterOperator::from(required_str(object, "operator", path)?);

    let column_type = schema.find(field_id).map(|column| column.column_type);
    let value = match object.get("value") {
        Some(value) => decode_value(value, column_type, path)?,
        None => {
            debug!("Rule at {} has no value, using the empty value", path);
            // Unknown fields are edited as strings
            FilterValue::empty_for(column_type.unwrap_or(ColumnType::String))
        }
    };

    Ok(FilterRule::new(id, field_id, operator, value))
}

/// `column_type` is `None` for a field the schema does not know.
fn decode_value(
    value: &Value,
    column_type: Option<ColumnType>,
    path: &NodePath,
) -> Result<FilterValue, ValidationError> {
    match value {
        Value::Bool(b) => Ok(FilterValue::Bool(*b)),
        Value::Number(n) => n
            .as_f64()
            .filter(|n| n.is_finite())
            .map(FilterValue::Number)
            .ok_or(ValidationError::UnsupportedValue {
                path: path.clone(),
                found: "number",
            }),
        Value::Null => Ok(FilterValue::InvalidNumber),
        Value::String(s) if column_type == Some(ColumnType::Date) => {
            Ok(FilterValue::DateText(s.clone()))
        }
        Value::String(s) => Ok(FilterValue::Text(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ValidationError::UnsupportedValue {
                    path: path.clone(),
                    found: "non-string list",
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FilterValue::TextList),
        Value::Object(_) => Err(ValidationError::UnsupportedValue {
            path: path.clone(),
            found: "object",
        }),
    }
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<&'a str, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::MissingField {
            path: path.clone(),
            field,
        }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::InvalidField {
            path: path.clone(),
            field,
            expected: "a string",
        }),
    }
}
