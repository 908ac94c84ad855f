//! Error types for deep merge operations.

use serde_json::Value;
use thiserror::Error;

use crate::kind::ValueKind;
use crate::path::KeyPath;

/// Errors that can occur while merging two documents.
#[derive(Error, Debug)]
pub enum MergeError {
    /// The original and update hold values of incompatible kinds under the
    /// same key (object vs non-object, array vs non-array, or mismatched
    /// scalar kinds). Neither side is `null`.
    #[error(
        "type conflict at `{path}`: original is {} {original}, update is {} {update}",
        ValueKind::of(.original),
        ValueKind::of(.update)
    )]
    TypeConflict {
        path: KeyPath,
        original: Value,
        update: Value,
    },

    /// A top-level document was not a JSON object.
    #[error("cannot merge {side}: expected an object, found {kind}")]
    NotAnObject { side: String, kind: ValueKind },

    /// The input string was not valid JSON (text convenience path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A typed value could not be converted to or from a JSON tree.
    #[error("typed conversion error: {0}")]
    Bridge(#[source] serde_json::Error),
}

impl MergeError {
    /// Kind of the original-side value, for `TypeConflict` errors.
    pub fn original_kind(&self) -> Option<ValueKind> {
        match self {
            MergeError::TypeConflict { original, .. } => Some(ValueKind::of(original)),
            _ => None,
        }
    }

    /// Kind of the update-side value, for `TypeConflict` errors.
    pub fn update_kind(&self) -> Option<ValueKind> {
        match self {
            MergeError::TypeConflict { update, .. } => Some(ValueKind::of(update)),
            _ => None,
        }
    }
}

/// Convenience alias used throughout deepmerge-core.
pub type Result<T> = std::result::Result<T, MergeError>;
