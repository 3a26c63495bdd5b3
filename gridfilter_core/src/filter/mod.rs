//! Filter trees: model, editing, evaluation and validation

mod editor;
mod evaluate;
mod filter_errors;
mod tree;
mod types;
mod validation;

pub use editor::ValueInput;
pub use evaluate::filter_records;
pub use filter_errors::EditError;
pub use tree::*;
pub use types::*;
pub use validation::{TreeIssue, TreeIssueType, ValidationResult};
