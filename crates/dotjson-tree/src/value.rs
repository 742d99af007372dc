//! JSON value sum type and structural equality.

use serde::{Deserialize, Serialize};

use crate::{JsonArray, JsonObject, TreeError, TreeResult};

/// Absolute tolerance used when comparing numbers structurally.
pub const EPSILON: f64 = 1e-6;

/// Maximum container nesting depth accepted by the bounded recursive
/// traversals (parsing, serialization, validation). A tree exactly this
/// deep is fine; one level more is rejected.
pub const MAX_NESTING: usize = 1000;

/// Type tag for a [`JsonValue`].
///
/// Used both as the discriminant name in error messages and as the
/// comparison argument to type-checking queries such as
/// [`JsonObject::has_value_of_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JsonType {
    /// The JSON `null` value.
    Null,
    /// `true` or `false`.
    Bool,
    /// A finite double-precision number.
    Number,
    /// A UTF-8 string.
    String,
    /// An ordered sequence of values.
    Array,
    /// An insertion-ordered name/value mapping.
    Object,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        write!(f, "{name}")
    }
}

/// A node in the JSON document tree.
///
/// Containers own their children outright; moving a value into a container
/// is the ownership transfer, so no value can appear in two places and
/// dropping the root drops the whole tree. Deep copy is [`Clone`].
///
/// The derived [`PartialEq`] compares numbers exactly; the codec's
/// tolerance-based comparison is [`structural_eq`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// The JSON `null` value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Values built through [`JsonValue::number`] or the parser
    /// are always finite; the serializer rejects anything else.
    Number(f64),
    /// A string. `String` is valid UTF-8 by type, which subsumes the
    /// byte-level validation the codec would otherwise need here.
    String(String),
    /// An array of values.
    Array(JsonArray),
    /// An object mapping unique names to values.
    Object(JsonObject),
}

impl JsonValue {
    /// Create a number value, rejecting NaN and infinities.
    ///
    /// ```
    /// use dotjson_tree::JsonValue;
    ///
    /// assert!(JsonValue::number(0.5).is_ok());
    /// assert!(JsonValue::number(f64::NAN).is_err());
    /// assert!(JsonValue::number(f64::INFINITY).is_err());
    /// ```
    pub fn number(n: f64) -> TreeResult<Self> {
        if n.is_finite() {
            Ok(Self::Number(n))
        } else {
            Err(TreeError::NonFiniteNumber(n))
        }
    }

    /// Create an empty object value.
    pub fn object() -> Self {
        Self::Object(JsonObject::new())
    }

    /// Create an empty array value.
    pub fn array() -> Self {
        Self::Array(JsonArray::new())
    }

    /// The type tag of this value.
    pub fn json_type(&self) -> JsonType {
        match self {
            Self::Null => JsonType::Null,
            Self::Bool(_) => JsonType::Bool,
            Self::Number(_) => JsonType::Number,
            Self::String(_) => JsonType::String,
            Self::Array(_) => JsonType::Array,
            Self::Object(_) => JsonType::Object,
        }
    }

    /// True for [`JsonValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow as a boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow as a number, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow as a string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as an array, if this is one.
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutably borrow as an array, if this is one.
    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Borrow as an object, if this is one.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutably borrow as an object, if this is one.
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Structural equality against another tree; see [`structural_eq`].
    pub fn structural_eq(&self, other: &JsonValue) -> bool {
        structural_eq(self, other)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(a: JsonArray) -> Self {
        Self::Array(a)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(o: JsonObject) -> Self {
        Self::Object(o)
    }
}

/// Structural equality over two document trees.
///
/// Type tags must match. Arrays compare element-wise in order; objects must
/// have equal length and every name in `a` must map to a structurally equal
/// value in `b` (order-independent). Strings compare byte-exact; numbers
/// compare within [`EPSILON`] absolute difference; nulls are equal.
///
/// Recurses to the depth of the tree; see the crate docs for the depth
/// discussion.
pub fn structural_eq(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(x), JsonValue::Bool(y)) => x == y,
        (JsonValue::Number(x), JsonValue::Number(y)) => (x - y).abs() < EPSILON,
        (JsonValue::String(x), JsonValue::String(y)) => x == y,
        (JsonValue::Array(x), JsonValue::Array(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y.iter())
                    .all(|(xa, ya)| structural_eq(xa, ya))
        }
        (JsonValue::Object(x), JsonValue::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(name, xv)| {
                    y.get(name).is_some_and(|yv| structural_eq(xv, yv))
                })
        }
        _ => false,
    }
}
