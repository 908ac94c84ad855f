//! Value classification and the type-conflict rule.
//!
//! Two values conflict when merging one onto the other would have to change
//! the *shape* of the document: an object meeting a non-object, an array
//! meeting a non-array, or two scalars of different kinds. `null` stands for
//! "no value" and never conflicts with anything.

use std::fmt;

use serde_json::Value;

/// The six JSON node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// All kinds, in JSON grammar order.
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Null,
        ValueKind::Bool,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::Object,
    ];

    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// `true` for booleans, numbers and strings.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            ValueKind::Bool | ValueKind::Number | ValueKind::String
        )
    }

    /// Whether a value of kind `self` conflicts with a value of kind `other`.
    ///
    /// Rules, applied in order:
    ///
    /// 1. `null` on either side never conflicts.
    /// 2. An object conflicts with anything that is not an object.
    /// 3. An array conflicts with anything that is not an array.
    /// 4. A scalar conflicts with anything that is not a scalar of the
    ///    same kind.
    pub fn conflicts_with(self, other: ValueKind) -> bool {
        use ValueKind::*;
        match (self, other) {
            (Null, _) | (_, Null) => false,
            (Object, other) => other != Object,
            (Array, other) => other != Array,
            (Bool, other) => other != Bool,
            (Number, other) => other != Number,
            (String, other) => other != String,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Check whether two values have conflicting types.
///
/// # Examples
///
/// ```
/// use deepmerge_core::types_conflict;
/// use serde_json::json;
///
/// assert!(types_conflict(&json!("zero"), &json!(0)));
/// assert!(!types_conflict(&json!([]), &json!([1])));
/// assert!(!types_conflict(&json!({}), &json!(null)));
/// ```
pub fn types_conflict(a: &Value, b: &Value) -> bool {
    ValueKind::of(a).conflicts_with(ValueKind::of(b))
}
