//! Whole-file parse and serialize helpers.

use std::fs;
use std::path::Path;

use dotjson_tree::JsonValue;
use tracing::debug;

use crate::{Result, serializer};

/// Read and parse a JSON file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<JsonValue> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "parsing file");
    crate::parse_slice(&bytes)
}

/// Read and parse a JSON file that may contain comments.
pub fn parse_file_with_comments(path: impl AsRef<Path>) -> Result<JsonValue> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "parsing file with comments");
    crate::parse_str_with_comments(std::str::from_utf8(&bytes)?)
}

/// Serialize a value to a file in compact form.
pub fn serialize_to_file(value: &JsonValue, path: impl AsRef<Path>) -> Result<()> {
    let text = serializer::to_string(value)?;
    fs::write(path, text)?;
    Ok(())
}

/// Serialize a value to a file with pretty formatting.
pub fn serialize_to_file_pretty(value: &JsonValue, path: impl AsRef<Path>) -> Result<()> {
    let text = serializer::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}
