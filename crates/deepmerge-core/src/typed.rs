//! Merge strongly-typed values by round-tripping them through JSON trees.
//!
//! Any type that `serde` can turn into a JSON object can be merged:
//!
//! ```
//! use deepmerge_core::merge_typed;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Settings {
//!     name: Option<String>,
//!     tags: Vec<String>,
//! }
//!
//! let base = Settings { name: Some("prod".into()), tags: vec!["a".into()] };
//! let update = Settings { name: None, tags: vec!["b".into()] };
//! let merged = merge_typed(&base, &update).unwrap();
//! assert_eq!(merged.name.as_deref(), Some("prod"));
//! assert_eq!(merged.tags, ["a", "b"]);
//! ```
//!
//! `None` fields serialize to `null` and therefore never clear a value in the
//! original.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{MergeError, Result};
use crate::merger::merge;

/// Merge two values of the same type.
///
/// Equivalent to `to_value(original)`, `to_value(update)`, [`merge`], then
/// `from_value` on the result.
///
/// # Errors
///
/// - [`MergeError::Bridge`] if either value cannot be serialized, or the merged
///   tree cannot be deserialized back into `T`.
/// - Any error of [`merge`], including [`MergeError::NotAnObject`] when `T`
///   does not serialize to a JSON object.
pub fn merge_typed<T>(original: &T, update: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let original = serde_json::to_value(original).map_err(MergeError::Bridge)?;
    let update = serde_json::to_value(update).map_err(MergeError::Bridge)?;
    let merged = merge(&original, &update)?;
    serde_json::from_value(merged).map_err(MergeError::Bridge)
}
