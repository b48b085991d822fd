//! Validation of raw inputs before they enter the renderer.
//!
//! Shape problems fail fast here instead of being coerced into something
//! renderable.

use crate::model::{PullRequestFile, ReviewComment};
use serde_json::Value;
use thiserror::Error;

/// Errors for inputs that do not have the expected shape.
#[derive(Debug, Error)]
pub enum InputError {
    /// The patch bytes are not UTF-8 text.
    #[error("Patch is not valid UTF-8 text: {0}")]
    PatchNotUtf8(#[from] std::str::Utf8Error),

    /// A file's `patch` field holds something other than text.
    #[error("Patch of {filename} is not text (found {found})")]
    PatchNotText {
        filename: String,
        found: &'static str,
    },

    /// A collection was expected but the JSON root is something else.
    #[error("Expected {what} to be a JSON array, found {found}")]
    NotASequence {
        what: &'static str,
        found: &'static str,
    },

    /// The JSON is malformed or a record is missing required fields.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Check that raw patch bytes are text.
pub fn decode_patch(bytes: &[u8]) -> Result<&str, InputError> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Parse a JSON array of review comments.
pub fn parse_comments(json: &str) -> Result<Vec<ReviewComment>, InputError> {
    let items = expect_array(serde_json::from_str(json)?, "comments")?;
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(InputError::from))
        .collect()
}

/// Parse a JSON array of pull-request files.
///
/// A `patch` that is present must be a string (or `null`).
pub fn parse_files(json: &str) -> Result<Vec<PullRequestFile>, InputError> {
    let items = expect_array(serde_json::from_str(json)?, "files")?;
    items
        .into_iter()
        .map(|item| {
            if let Some(patch) = item.get("patch") {
                if !patch.is_string() && !patch.is_null() {
                    return Err(InputError::PatchNotText {
                        filename: item
                            .get("filename")
                            .and_then(Value::as_str)
                            .unwrap_or("<unknown>")
                            .to_string(),
                        found: json_kind(patch),
                    });
                }
            }
            serde_json::from_value(item).map_err(InputError::from)
        })
        .collect()
}

fn expect_array(value: Value, what: &'static str) -> Result<Vec<Value>, InputError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(InputError::NotASequence {
            what,
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
