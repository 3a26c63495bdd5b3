//! The current filter being edited
//!
//! A [`FilterDocument`] holds the schema and the root group. Edits come in as
//! [`Edit`] commands whose paths are checked before anything is changed, so a
//! bad command is an [`EditError`] and leaves the document untouched.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::filter::{
    EditError, FilterGroup, FilterNode, FilterOperator, FilterRule, Logic, NodePath, ValueInput,
    filter_records,
};
use crate::payload::{ValidationError, document_from_payload, to_document_payload};
use crate::record::Record;
use crate::schema::{OperatorDescriptor, Schema};

/// A single change to the filter tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    SetLogic { path: NodePath, logic: Logic },
    /// Appends a default rule to the group at `path`
    AddRule { path: NodePath },
    /// Appends a new group holding one default rule to the group at `path`
    AddGroup { path: NodePath },
    Remove { path: NodePath },
    ChangeField { path: NodePath, field_id: String },
    ChangeOperator {
        path: NodePath,
        operator: FilterOperator,
    },
    ChangeValue { path: NodePath, input: ValueInput },
}

#[derive(Debug, Clone)]
pub struct FilterDocument {
    schema: Arc<Schema>,
    root: FilterGroup,
    strict_operators: bool,
}

impl FilterDocument {
    pub fn new(schema: Arc<Schema>, root: FilterGroup) -> Self {
        Self {
            schema,
            root,
            strict_operators: false,
        }
    }

    /// A document with an empty AND root.
    pub fn blank(schema: Arc<Schema>) -> Self {
        Self::new(schema, FilterGroup::empty())
    }

    /// Reject operator changes the rule's column type does not offer.
    pub fn with_strict_operators(mut self, strict: bool) -> Self {
        self.strict_operators = strict;
        self
    }

    /// Reads a document payload, see [`crate::payload::document_from_payload`].
    pub fn from_payload(schema: Arc<Schema>, value: &Value) -> Result<Self, ValidationError> {
        let root = document_from_payload(value, &schema)?;
        Ok(Self::new(schema, root))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn root(&self) -> &FilterGroup {
        &self.root
    }

    /// Applies an edit. On error the document is unchanged.
    pub fn apply(&mut self, edit: Edit) -> Result<(), EditError> {
        self.root = self.edited(edit)?;
        Ok(())
    }

    /// The tree `edit` would produce, without changing the document.
    pub fn edited(&self, edit: Edit) -> Result<FilterGroup, EditError> {
        debug!("Applying edit {:?}", edit);

        let root = &self.root;
        let schema = self.schema.as_ref();

        match edit {
            Edit::SetLogic { path, logic } => {
                self.check_group(&path)?;
                Ok(root.update_group_at(&path, |group| group.set_logic(logic)))
            }
            Edit::AddRule { path } => {
                self.check_group(&path)?;
                let rule = FilterRule::create(schema.default_column());
                Ok(root.update_group_at(&path, |group| group.append_child(rule.into())))
            }
            Edit::AddGroup { path } => {
                self.check_group(&path)?;
                let group = FilterGroup::create(schema.default_column());
                Ok(root.update_group_at(&path, |parent| parent.append_child(group.into())))
            }
            Edit::Remove { path } => {
                if path.is_root() {
                    return Err(EditError::RootNotRemovable);
                }
                if root.child_at(&path).is_none() {
                    return Err(EditError::InvalidPath(path));
                }
                Ok(root.remove_at(&path))
            }
            Edit::ChangeField { path, field_id } => {
                self.check_rule(&path)?;
                Ok(root.update_rule_at(&path, |rule| rule.change_field(&field_id, schema)))
            }
            Edit::ChangeOperator { path, operator } => {
                let rule = self.check_rule(&path)?;
                let changed = if self.strict_operators {
                    rule.change_operator_strict(operator, schema)?
                } else {
                    rule.change_operator(operator)
                };
                Ok(root.replace_at(&path, FilterNode::Rule(changed)))
            }
            Edit::ChangeValue { path, input } => {
                self.check_rule(&path)?;
                Ok(root.update_rule_at(&path, |rule| rule.change_value(input, schema)))
            }
        }
    }

    /// Replaces the tree with an empty AND group.
    pub fn reset(&mut self) {
        debug!("Resetting filter '{}'", self.root.id);
        self.root = FilterGroup::empty();
    }

    /// The operators offered for the rule at `path`.
    pub fn operators_at(&self, path: &NodePath) -> Result<&'static [OperatorDescriptor], EditError> {
        let rule = self.check_rule(path)?;
        Ok(self.schema.column(&rule.field_id).operators())
    }

    pub fn evaluate(&self, record: &Record) -> bool {
        self.root.evaluate(record, &self.schema)
    }

    pub fn filter<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        filter_records(&self.root, records, &self.schema)
    }

    /// The versioned payload handed to a backend.
    pub fn payload(&self) -> Value {
        to_document_payload(&self.root)
    }

    fn check_group(&self, path: &NodePath) -> Result<&FilterGroup, EditError> {
        if path.is_root() {
            return Ok(&self.root);
        }
        match self.root.child_at(path) {
            Some(FilterNode::Group(group)) => Ok(group),
            Some(FilterNode::Rule(_)) => Err(EditError::ExpectedGroup(path.clone())),
            None => Err(EditError::InvalidPath(path.clone())),
        }
    }

    fn check_rule(&self, path: &NodePath) -> Result<&FilterRule, EditError> {
        if path.is_root() {
            return Err(EditError::ExpectedRule(path.clone()));
        }
        match self.root.child_at(path) {
            Some(FilterNode::Rule(rule)) => Ok(rule),
            Some(FilterNode::Group(_)) => Err(EditError::ExpectedRule(path.clone())),
            None => Err(EditError::InvalidPath(path.clone())),
        }
    }
}
