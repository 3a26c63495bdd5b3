//! Core building blocks for nested grid filters.
//!
//! A filter is a tree of groups (combined with AND/OR) and rules (field,
//! operator, value) over a fixed column schema. This crate provides:
//! - The column schema and the operators legal for each column type
//! - The filter tree model and its pure, path-addressed edit operations
//! - Rule editing that keeps field, operator and value consistent
//! - Evaluation of a tree against a record
//! - The JSON exchange payload handed to a query backend

pub mod document;
pub mod filter;
pub mod payload;
pub mod record;
pub mod schema;

pub use document::{Edit, FilterDocument};
pub use filter::{
    EditError, FilterGroup, FilterNode, FilterOperator, FilterRule, FilterValue, Logic, NodeId,
    NodePath, TreeIssue, TreeIssueType, ValueInput,
};
pub use payload::ValidationError;
pub use record::{Record, RecordValue};
pub use schema::{Column, ColumnType, OperatorDescriptor, Schema, SchemaError};
