//! The filter tree and its structural operations
//!
//! Every operation here is pure: it borrows its input and returns a new
//! value. Edits deep in the tree are addressed by a [`NodePath`] and rebuild
//! only the groups along that path.

use std::fmt;

use super::types::{FilterOperator, FilterValue, Logic, NodeId};
use crate::schema::Column;

/// A leaf condition: field, operator and value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRule {
    pub id: NodeId,
    pub field_id: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

/// An inner node combining its children with AND or OR.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroup {
    pub id: NodeId,
    pub logic: Logic,
    pub children: Vec<FilterNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    Rule(FilterRule),
    Group(FilterGroup),
}

/// Location of a node, as child indices walked down from the root group.
/// The empty path is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl FilterRule {
    pub fn new(
        id: NodeId,
        field_id: impl Into<String>,
        operator: FilterOperator,
        value: FilterValue,
    ) -> Self {
        Self {
            id,
            field_id: field_id.into(),
            operator,
            value,
        }
    }

    /// Creates a rule on `column` with a fresh id, the column type's default
    /// operator and its empty value.
    pub fn create(column: &Column) -> Self {
        Self::new(
            NodeId::generate(),
            column.id.clone(),
            column.default_operator(),
            column.empty_value(),
        )
    }
}

impl FilterGroup {
    pub fn new(id: NodeId, logic: Logic, children: Vec<FilterNode>) -> Self {
        Self {
            id,
            logic,
            children,
        }
    }

    /// Creates an AND group with a fresh id holding one default rule on
    /// `column`.
    pub fn create(column: &Column) -> Self {
        Self::new(
            NodeId::generate(),
            Logic::And,
            vec![FilterNode::Rule(FilterRule::create(column))],
        )
    }

    /// Creates an AND group with a fresh id and no children.
    pub fn empty() -> Self {
        Self::new(NodeId::generate(), Logic::And, Vec::new())
    }

    pub fn set_logic(&self, logic: Logic) -> Self {
        Self {
            logic,
            ..self.clone()
        }
    }

    pub fn append_child(&self, node: FilterNode) -> Self {
        let mut children = self.children.clone();
        children.push(node);
        Self {
            children,
            ..self.clone_shallow()
        }
    }

    /// Panics if `index` is out of bounds.
    pub fn replace_child_at(&self, index: usize, node: FilterNode) -> Self {
        self.check_index(index);
        let mut children = self.children.clone();
        children[index] = node;
        Self {
            children,
            ..self.clone_shallow()
        }
    }

    /// Panics if `index` is out of bounds.
    pub fn remove_child_at(&self, index: usize) -> Self {
        self.check_index(index);
        let children = self
            .children
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, child)| child.clone())
            .collect();
        Self {
            children,
            ..self.clone_shallow()
        }
    }

    /// The node at a non-root path, if the path exists.
    pub fn child_at(&self, path: &NodePath) -> Option<&FilterNode> {
        let (first, rest) = path.0.split_first()?;
        let mut node = self.children.get(*first)?;
        for index in rest {
            node = match node {
                FilterNode::Group(group) => group.children.get(*index)?,
                FilterNode::Rule(_) => return None,
            };
        }
        Some(node)
    }

    /// The group at `path`. The root path yields `self`.
    pub fn group_at(&self, path: &NodePath) -> Option<&FilterGroup> {
        if path.is_root() {
            return Some(self);
        }
        match self.child_at(path)? {
            FilterNode::Group(group) => Some(group),
            FilterNode::Rule(_) => None,
        }
    }

    pub fn rule_at(&self, path: &NodePath) -> Option<&FilterRule> {
        match self.child_at(path)? {
            FilterNode::Rule(rule) => Some(rule),
            FilterNode::Group(_) => None,
        }
    }

    /// Replaces the node at a non-root path.
    ///
    /// Panics if the path is the root or does not exist.
    pub fn replace_at(&self, path: &NodePath, node: FilterNode) -> Self {
        self.rebuild_along(path, path.indices(), |_| node)
    }

    /// Removes the node at a non-root path. Its siblings keep their order.
    ///
    /// Panics if the path is the root or does not exist.
    pub fn remove_at(&self, path: &NodePath) -> Self {
        let Some((parent, index)) = path.split_last() else {
            panic!("the root group cannot be removed");
        };
        self.update_group_at(&parent, |group| group.remove_child_at(index))
    }

    /// Rebuilds the tree with the group at `path` replaced by `update(group)`.
    ///
    /// Panics if the path does not exist or does not lead to a group.
    pub fn update_group_at(
        &self,
        path: &NodePath,
        update: impl FnOnce(&FilterGroup) -> FilterGroup,
    ) -> Self {
        if path.is_root() {
            return update(self);
        }
        self.rebuild_along(path, path.indices(), |node| match node {
            FilterNode::Group(group) => FilterNode::Group(update(group)),
            FilterNode::Rule(rule) => panic!("expected a group at {}, found rule '{}'", path, rule.id),
        })
    }

    /// Rebuilds the tree with the rule at `path` replaced by `update(rule)`.
    ///
    /// Panics if the path does not exist or does not lead to a rule.
    pub fn update_rule_at(
        &self,
        path: &NodePath,
        update: impl FnOnce(&FilterRule) -> FilterRule,
    ) -> Self {
        self.rebuild_along(path, path.indices(), |node| match node {
            FilterNode::Rule(rule) => FilterNode::Rule(update(rule)),
            FilterNode::Group(group) => {
                panic!("expected a rule at {}, found group '{}'", path, group.id)
            }
        })
    }

    /// Number of nodes below this group, excluding the group itself.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                FilterNode::Rule(_) => 1,
                FilterNode::Group(group) => 1 + group.descendant_count(),
            })
            .sum()
    }

    fn rebuild_along<F>(&self, path: &NodePath, indices: &[usize], leaf: F) -> Self
    where
        F: FnOnce(&FilterNode) -> FilterNode,
    {
        match indices.split_first() {
            None => panic!("path {} does not address a child node", path),
            Some((&index, [])) => self.replace_child_at(index, leaf(self.child(index, path))),
            Some((&index, rest)) => match self.child(index, path) {
                FilterNode::Group(group) => self.replace_child_at(
                    index,
                    FilterNode::Group(group.rebuild_along(path, rest, leaf)),
                ),
                FilterNode::Rule(rule) => {
                    panic!("path {} descends through rule '{}'", path, rule.id)
                }
            },
        }
    }

    fn child(&self, index: usize, path: &NodePath) -> &FilterNode {
        match self.children.get(index) {
            Some(child) => child,
            None => panic!(
                "path {} is out of bounds: group '{}' has {} children",
                path,
                self.id,
                self.children.len()
            ),
        }
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.children.len(),
            "child index {} is out of bounds: group '{}' has {} children",
            index,
            self.id,
            self.children.len()
        );
    }

    fn clone_shallow(&self) -> Self {
        Self::new(self.id.clone(), self.logic, Vec::new())
    }
}

impl FilterNode {
    pub fn id(&self) -> &NodeId {
        match self {
            FilterNode::Rule(rule) => &rule.id,
            FilterNode::Group(group) => &group.id,
        }
    }

    pub fn as_rule(&self) -> Option<&FilterRule> {
        match self {
            FilterNode::Rule(rule) => Some(rule),
            FilterNode::Group(_) => None,
        }
    }
}

impl From<FilterRule> for FilterNode {
    fn from(rule: FilterRule) -> Self {
        FilterNode::Rule(rule)
    }
}

impl From<FilterGroup> for FilterNode {
    fn from(group: FilterGroup) -> Self {
        FilterNode::Group(group)
    }
}

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The path of this node's child at `index`.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Splits into the parent path and the index within the parent. `None`
    /// for the root.
    pub fn split_last(&self) -> Option<(NodePath, usize)> {
        let (last, parent) = self.0.split_last()?;
        Some((NodePath(parent.to_vec()), *last))
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for NodePath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}
