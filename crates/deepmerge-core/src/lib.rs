//! # deepmerge-core
//!
//! Structural deep merge of two JSON documents.
//!
//! An *update* document is layered on top of an *original* document so that
//! the update augments or overrides the original without discarding anything
//! the update does not mention:
//!
//! - keys missing from the original are adopted from the update
//! - nested objects are merged recursively
//! - arrays are extended (original elements first, then update elements)
//! - a `null` in the update never clears a value
//! - same-kind scalars are replaced by the update
//! - differently-typed values (e.g. string vs number) abort with
//!   [`MergeError::TypeConflict`]
//!
//! ## Quick start
//!
//! ```rust
//! use deepmerge_core::merge_json;
//!
//! let original = r#"{"person":{"name":"Foo"},"tags":["a"]}"#;
//! let update = r#"{"person":{"country":"JP"},"tags":["b"]}"#;
//! let merged = merge_json(original, update).unwrap();
//! assert_eq!(
//!     merged,
//!     r#"{"person":{"name":"Foo","country":"JP"},"tags":["a","b"]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`merger`] — the merge algorithm (`merge`, `merge_into`, `merge_all`, ...)
//! - [`kind`] — `ValueKind` tags and the type-conflict rule
//! - [`typed`] — merge any `Serialize + Deserialize` type through JSON
//! - [`path`] — key paths used in conflict diagnostics
//! - [`error`] — Error types

pub mod error;
pub mod kind;
pub mod merger;
pub mod path;
pub mod typed;

pub use error::MergeError;
pub use kind::{types_conflict, ValueKind};
pub use merger::{merge, merge_all, merge_into, merge_json, merge_objects};
pub use path::KeyPath;
pub use typed::merge_typed;
