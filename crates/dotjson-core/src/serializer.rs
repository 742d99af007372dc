//! Two-pass JSON serializer.
//!
//! Serialization runs the same recursive traversal twice: once through a
//! counting sink to learn the exact output length, then through a writing
//! sink into a buffer preallocated to that length. The two passes emit
//! identical bytes, so the final string never reallocates.

use dotjson_tree::{JsonValue, MAX_NESTING};
use tracing::debug;

use crate::{Error, Result, escape, number};

/// Output options for the serializer.
///
/// The default is the compact form with slashes escaped (safe to embed in
/// HTML and XML).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeConfig {
    /// Emit newlines and four-space indentation.
    pub pretty: bool,
    /// Emit `/` as `\/`.
    pub escape_slashes: bool,
}

impl Default for SerializeConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            escape_slashes: true,
        }
    }
}

impl SerializeConfig {
    /// Compact output with slashes escaped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle pretty-printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Toggle `\/` escaping.
    pub fn with_escape_slashes(mut self, escape_slashes: bool) -> Self {
        self.escape_slashes = escape_slashes;
        self
    }
}

/// Byte-counting or string-writing output target; both passes of the
/// serializer go through this so they cannot disagree.
pub(crate) struct Sink<'a> {
    out: Option<&'a mut String>,
    written: usize,
}

impl<'a> Sink<'a> {
    pub(crate) fn counter() -> Sink<'static> {
        Sink {
            out: None,
            written: 0,
        }
    }

    pub(crate) fn writer(buf: &'a mut String) -> Sink<'a> {
        Sink {
            out: Some(buf),
            written: 0,
        }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }

    pub(crate) fn put(&mut self, text: &str) {
        self.written += text.len();
        if let Some(out) = &mut self.out {
            out.push_str(text);
        }
    }
}

/// Exact compact serialization length in bytes.
pub fn serialization_size(value: &JsonValue) -> Result<usize> {
    serialization_size_with(value, &SerializeConfig::new())
}

/// Exact pretty serialization length in bytes.
pub fn serialization_size_pretty(value: &JsonValue) -> Result<usize> {
    serialization_size_with(value, &SerializeConfig::new().with_pretty(true))
}

/// Exact serialization length in bytes under `config`.
pub fn serialization_size_with(value: &JsonValue, config: &SerializeConfig) -> Result<usize> {
    let mut sink = Sink::counter();
    write_value(value, &mut sink, config, 0)?;
    Ok(sink.written())
}

/// Serialize to the compact form.
pub fn to_string(value: &JsonValue) -> Result<String> {
    to_string_with(value, &SerializeConfig::new())
}

/// Serialize with newlines and four-space indentation.
pub fn to_string_pretty(value: &JsonValue) -> Result<String> {
    to_string_with(value, &SerializeConfig::new().with_pretty(true))
}

/// Serialize under an explicit [`SerializeConfig`].
pub fn to_string_with(value: &JsonValue, config: &SerializeConfig) -> Result<String> {
    let size = serialization_size_with(value, config)?;
    debug!(size, pretty = config.pretty, "serializing document");
    let mut buf = String::with_capacity(size);
    let mut sink = Sink::writer(&mut buf);
    write_value(value, &mut sink, config, 0)?;
    debug_assert_eq!(buf.len(), size);
    Ok(buf)
}

fn write_value(
    value: &JsonValue,
    sink: &mut Sink<'_>,
    config: &SerializeConfig,
    level: usize,
) -> Result<()> {
    if level > MAX_NESTING {
        return Err(Error::NestingTooDeep);
    }
    match value {
        JsonValue::Null => sink.put("null"),
        JsonValue::Bool(true) => sink.put("true"),
        JsonValue::Bool(false) => sink.put("false"),
        JsonValue::Number(n) => {
            if !n.is_finite() {
                return Err(Error::NonFiniteNumber(*n));
            }
            sink.put(&number::format_f64(*n));
        }
        JsonValue::String(s) => escape::encode_string_into(s, sink, config.escape_slashes),
        JsonValue::Array(arr) => {
            sink.put("[");
            if config.pretty && !arr.is_empty() {
                sink.put("\n");
            }
            let last = arr.len().saturating_sub(1);
            for (i, item) in arr.iter().enumerate() {
                if config.pretty {
                    put_indent(sink, level + 1);
                }
                write_value(item, sink, config, level + 1)?;
                if i < last {
                    sink.put(",");
                }
                if config.pretty {
                    sink.put("\n");
                }
            }
            if config.pretty && !arr.is_empty() {
                put_indent(sink, level);
            }
            sink.put("]");
        }
        JsonValue::Object(obj) => {
            sink.put("{");
            if config.pretty && !obj.is_empty() {
                sink.put("\n");
            }
            let last = obj.len().saturating_sub(1);
            for (i, (name, item)) in obj.iter().enumerate() {
                if config.pretty {
                    put_indent(sink, level + 1);
                }
                escape::encode_string_into(name, sink, config.escape_slashes);
                sink.put(":");
                if config.pretty {
                    sink.put(" ");
                }
                write_value(item, sink, config, level + 1)?;
                if i < last {
                    sink.put(",");
                }
                if config.pretty {
                    sink.put("\n");
                }
            }
            if config.pretty && !obj.is_empty() {
                put_indent(sink, level);
            }
            sink.put("}");
        }
    }
    Ok(())
}

fn put_indent(sink: &mut Sink<'_>, level: usize) {
    for _ in 0..level {
        sink.put("    ");
    }
}
