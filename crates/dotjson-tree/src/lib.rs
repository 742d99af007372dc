//! dotjson document tree - pure value types
//!
//! This crate contains the in-memory document model for dotjson with no
//! codec logic and no I/O: the [`JsonValue`] sum type, its [`JsonObject`]
//! and [`JsonArray`] containers, dot-notation path navigation, structural
//! equality, and the structural schema validator.
//!
//! Ownership follows Rust move semantics: inserting a value into a container
//! transfers ownership, so a value is reachable from at most one container
//! and the tree can never be made cyclic. Lookups return
//! `Option<&JsonValue>`; `None` means *absent*, which is distinct from a
//! present [`JsonValue::Null`].
//!
//! ```
//! use dotjson_tree::{JsonObject, JsonValue};
//!
//! let mut obj = JsonObject::new();
//! obj.dotset("server.port", JsonValue::number(8080.0).unwrap()).unwrap();
//! assert_eq!(obj.dotget_f64("server.port"), Some(8080.0));
//! assert!(obj.dotget("server.host").is_none());
//! ```

#![warn(missing_docs)]

mod array;
mod object;
mod path;
mod validate;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use validate::{ValidationError, validate};
pub use value::{EPSILON, JsonType, JsonValue, MAX_NESTING, structural_eq};

/// Result type for document tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors reported by document tree operations.
///
/// All variants are contract violations observable by the caller; growth of
/// the backing storage itself is infallible.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// Inserting a name that is already present in an object.
    #[error("duplicate key: {0:?}")]
    DuplicateKey(String),

    /// Lookup or removal of a name that is not present.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Index past the end of an array.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Array length at the time of the call.
        len: usize,
    },

    /// A dotted path crossed a value that is not an object.
    #[error("path segment {segment:?} is {actual}, not an object")]
    NotAnObject {
        /// The offending path segment.
        segment: String,
        /// Actual type found at that segment.
        actual: JsonType,
    },

    /// Number construction from NaN or an infinity.
    #[error("number is not finite: {0}")]
    NonFiniteNumber(f64),

    /// Structural schema validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TreeError {
    /// Create a duplicate key error.
    pub fn duplicate_key(name: impl Into<String>) -> Self {
        Self::DuplicateKey(name.into())
    }

    /// Create a key-not-found error.
    pub fn key_not_found(name: impl Into<String>) -> Self {
        Self::KeyNotFound(name.into())
    }
}
