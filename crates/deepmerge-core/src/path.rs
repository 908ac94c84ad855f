//! Key paths for conflict diagnostics.
//!
//! A [`KeyPath`] records the object keys walked from the document root to the
//! entry where a merge stopped. Plain keys are joined with `.`; keys that would
//! be ambiguous in that form are written as quoted bracket segments:
//!
//! - `person.name`
//! - `settings["log.level"]`
//! - `$` for the root itself

use std::fmt;

/// A sequence of object keys from the root of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path, pointing at the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Return a new path extended by one key.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    /// The raw key segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Depth below the root.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A key needs bracket form when a bare `.`-joined rendering would not read
/// back as the same key.
fn needs_brackets(key: &str) -> bool {
    key.is_empty()
        || key
            .chars()
            .any(|c| matches!(c, '.' | '[' | ']' | '"') || c.is_whitespace())
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        for (i, key) in self.segments.iter().enumerate() {
            if needs_brackets(key) {
                // serde_json's string Display gives us JSON escaping for free.
                write!(f, "[{}]", serde_json::Value::String(key.clone()))?;
            } else {
                if i > 0 {
                    f.write_str(".")?;
                }
                f.write_str(key)?;
            }
        }
        Ok(())
    }
}
