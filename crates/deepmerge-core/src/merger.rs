//! The deep merge algorithm.
//!
//! An *update* object is laid over an *original* object key by key, in the
//! update's iteration order:
//!
//! - **New key**: the update's value is adopted as-is (a clone).
//! - **Type conflict**: the merge aborts with [`MergeError::TypeConflict`].
//! - **Array vs array**: the update's elements are appended to the original's.
//! - **Object vs object**: the two objects are merged recursively.
//! - **`null` update**: the original value is kept.
//! - **Anything else**: the update's value replaces the original's.
//!
//! Object key order follows `serde_json`'s `preserve_order` feature: the
//! original's keys keep their positions (even when their value is replaced),
//! and keys new to the original are appended in the update's order.
//!
//! # Example
//! ```
//! use deepmerge_core::merge;
//! use serde_json::json;
//!
//! let merged = merge(
//!     &json!({"name": "Foo", "countries": ["US"]}),
//!     &json!({"name": null, "countries": ["JP"], "age": 40}),
//! )
//! .unwrap();
//! assert_eq!(merged, json!({"name": "Foo", "countries": ["US", "JP"], "age": 40}));
//! ```

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{MergeError, Result};
use crate::kind::{types_conflict, ValueKind};
use crate::path::KeyPath;

/// Merge `update` into a copy of `original`.
///
/// Both values must be JSON objects. Neither input is modified; the result
/// shares no storage with them.
///
/// # Errors
///
/// - [`MergeError::NotAnObject`] if either top-level value is not an object.
/// - [`MergeError::TypeConflict`] if the two documents hold values of
///   incompatible kinds under the same key path.
pub fn merge(original: &Value, update: &Value) -> Result<Value> {
    let original = expect_object(original, "original")?;
    let update = expect_object(update, "update")?;
    merge_objects(original, update).map(Value::Object)
}

/// Merge two object maps, returning a new map.
///
/// Same contract as [`merge`], with the object precondition carried by the
/// argument types.
pub fn merge_objects(
    original: &Map<String, Value>,
    update: &Map<String, Value>,
) -> Result<Map<String, Value>> {
    let mut merged = original.clone();
    merge_into(&mut merged, update)?;
    Ok(merged)
}

/// Merge `patch` into `base` in place.
///
/// `patch` is only read; any part of it that ends up in `base` is cloned.
///
/// # Errors
///
/// Returns [`MergeError::TypeConflict`] on the first conflicting key. Keys
/// visited before the conflict have already been merged into `base` at that
/// point, so callers that need all-or-nothing semantics should merge into a
/// clone (which is what [`merge`] and [`merge_objects`] do).
pub fn merge_into(base: &mut Map<String, Value>, patch: &Map<String, Value>) -> Result<()> {
    merge_at(base, patch, &KeyPath::root())
}

fn merge_at(
    base: &mut Map<String, Value>,
    patch: &Map<String, Value>,
    path: &KeyPath,
) -> Result<()> {
    for (key, patch_value) in patch {
        let Some(base_value) = base.get_mut(key) else {
            trace!(path = %path.child(key), "adopting new key");
            base.insert(key.clone(), patch_value.clone());
            continue;
        };

        if types_conflict(base_value, patch_value) {
            let path = path.child(key);
            debug!(
                path = %path,
                original = %ValueKind::of(base_value),
                update = %ValueKind::of(patch_value),
                "type conflict"
            );
            return Err(MergeError::TypeConflict {
                path,
                original: base_value.clone(),
                update: patch_value.clone(),
            });
        }

        match (base_value, patch_value) {
            (Value::Array(items), Value::Array(extra)) => {
                trace!(path = %path.child(key), appended = extra.len(), "extending array");
                items.extend(extra.iter().cloned());
            }
            (Value::Object(inner), Value::Object(inner_patch)) => {
                merge_at(inner, inner_patch, &path.child(key))?;
            }
            (_, Value::Null) => {
                trace!(path = %path.child(key), "null update, keeping original");
            }
            (slot, replacement) => {
                trace!(path = %path.child(key), "overwriting value");
                *slot = replacement.clone();
            }
        }
    }
    Ok(())
}

/// Merge a sequence of object layers left to right.
///
/// Starts from an empty object, so `merge_all([a, b, c])` equals
/// `merge(merge(a, b), c)` and an empty sequence yields `{}`.
///
/// # Errors
///
/// - [`MergeError::NotAnObject`] naming the offending layer (0-based).
/// - [`MergeError::TypeConflict`] as for [`merge`].
///
/// # Examples
///
/// ```
/// use deepmerge_core::merge_all;
/// use serde_json::json;
///
/// let defaults = json!({"port": 80, "hosts": ["a"]});
/// let site = json!({"hosts": ["b"]});
/// let cli = json!({"port": 8080});
/// let merged = merge_all([&defaults, &site, &cli]).unwrap();
/// assert_eq!(merged, json!({"port": 8080, "hosts": ["a", "b"]}));
/// ```
pub fn merge_all<'a, I>(layers: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut acc = Map::new();
    for (index, layer) in layers.into_iter().enumerate() {
        let layer = expect_object(layer, &format!("layer {index}"))?;
        merge_into(&mut acc, layer)?;
    }
    Ok(Value::Object(acc))
}

/// Parse two JSON documents, merge them, and serialize the result compactly.
///
/// # Errors
///
/// Returns [`MergeError::JsonParse`] if either input is not valid JSON, and
/// otherwise the errors of [`merge`].
///
/// # Examples
///
/// ```
/// use deepmerge_core::merge_json;
///
/// let merged = merge_json(r#"{"country":"US"}"#, r#"{"country":"JP"}"#).unwrap();
/// assert_eq!(merged, r#"{"country":"JP"}"#);
/// ```
pub fn merge_json(original: &str, update: &str) -> Result<String> {
    let original: Value = serde_json::from_str(original)?;
    let update: Value = serde_json::from_str(update)?;
    let merged = merge(&original, &update)?;
    Ok(serde_json::to_string(&merged)?)
}

fn expect_object<'v>(value: &'v Value, side: &str) -> Result<&'v Map<String, Value>> {
    value.as_object().ok_or_else(|| MergeError::NotAnObject {
        side: side.to_string(),
        kind: ValueKind::of(value),
    })
}
