//! Envelope normalization
//!
//! Extracts the record array and continuation token from a raw response body.

use super::types::{Cursor, EnvelopeFormat, Page};
use crate::types::JsonValue;
use tracing::debug;

impl Page {
    /// Normalize a response envelope into a page
    ///
    /// A missing, null or non-array result field yields an empty page rather
    /// than an error; pagination still follows the cursor if one is present.
    pub fn from_envelope(mut body: JsonValue, format: &EnvelopeFormat) -> Self {
        let next_cursor = lookup_path(&body, &format.cursor_field).and_then(Cursor::from_value);

        let items = match take_path(&mut body, &format.result_field) {
            Some(JsonValue::Array(items)) => items,
            Some(JsonValue::Null) | None => {
                debug!(
                    "Field '{}' absent from page, treating as empty",
                    format.result_field
                );
                Vec::new()
            }
            Some(other) => {
                debug!(
                    "Field '{}' is not an array ({}), treating as empty",
                    format.result_field,
                    value_kind(&other)
                );
                Vec::new()
            }
        };

        Self { items, next_cursor }
    }
}

/// Borrow the value at a dot-separated path
///
/// Accepts an optional `$.` prefix. Returns None if any segment is missing
/// or traverses a non-object.
pub fn lookup_path<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return Some(value);
    }

    path.split('.')
        .try_fold(value, |current, part| match current {
            JsonValue::Object(map) => map.get(part),
            _ => None,
        })
}

/// Move the value at a dot-separated path out of the document
///
/// The slot is left as `null`, so the records are never cloned.
pub fn take_path(value: &mut JsonValue, path: &str) -> Option<JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return Some(value.take());
    }

    let mut current = value;
    for part in path.split('.') {
        current = match current {
            JsonValue::Object(map) => map.get_mut(part)?,
            _ => return None,
        };
    }
    Some(current.take())
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
