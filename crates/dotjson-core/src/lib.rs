//! dotjson - an embeddable JSON codec
//!
//! A lenient recursive-descent parser (optional `//` and `/* */` comment
//! stripping, UTF-8 BOM tolerance), an exact two-pass serializer, and file
//! helpers over the [`dotjson_tree`] document model, which is re-exported
//! here in full.
//!
//! ```
//! use dotjson::{parse_str, to_string, JsonValue};
//!
//! let doc = parse_str(r#"{"name": "ada", "tags": ["math", "engines"]}"#)?;
//! let obj = doc.as_object().unwrap();
//! assert_eq!(obj.dotget_str("name"), Some("ada"));
//! assert_eq!(to_string(&doc)?, r#"{"name":"ada","tags":["math","engines"]}"#);
//! # Ok::<(), dotjson::Error>(())
//! ```
//!
//! Parsing enforces a nesting ceiling of [`MAX_NESTING`] container levels;
//! serialization and validation enforce the same ceiling. Numbers are kept
//! as finite `f64` throughout; serialized text round-trips through the
//! parser to a [`structural_eq`]-identical tree.

#![warn(missing_docs)]

mod convert;
mod escape;
mod io;
mod number;
mod parser;
mod serializer;

pub use convert::{from_serde_value, to_serde_value};
pub use dotjson_tree::{
    EPSILON, JsonArray, JsonObject, JsonType, JsonValue, MAX_NESTING, TreeError, TreeResult,
    ValidationError, structural_eq, validate,
};
pub use io::{parse_file, parse_file_with_comments, serialize_to_file, serialize_to_file_pretty};
pub use parser::{parse_slice, parse_str, parse_str_with_comments};
pub use serializer::{
    SerializeConfig, serialization_size, serialization_size_pretty, serialization_size_with,
    to_string, to_string_pretty, to_string_with,
};

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the parser, serializer, and file helpers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not well-formed JSON.
    #[error("syntax error at byte {position}: {message}")]
    Syntax {
        /// Byte offset into the input where parsing gave up.
        position: usize,
        /// What was expected or rejected there.
        message: String,
    },

    /// A tree nests deeper than [`MAX_NESTING`] container levels.
    #[error("nesting exceeds {} levels", MAX_NESTING)]
    NestingTooDeep,

    /// Serialization of a NaN or infinite number.
    #[error("cannot serialize non-finite number {0}")]
    NonFiniteNumber(f64),

    /// A number that has no finite `f64` representation.
    #[error("number cannot be represented as f64: {0}")]
    UnrepresentableNumber(String),

    /// A document tree operation failed during parsing or conversion.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// Create a syntax error at a byte position.
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }
}
