//! Structural schema validation.
//!
//! A schema is just another [`JsonValue`]: it constrains the *shape* of a
//! document, never the scalar payloads. `null` in the schema is the
//! wildcard, containers constrain their contents, and every other value
//! constrains only the type at its position.

use crate::{JsonType, JsonValue, MAX_NESTING};

/// Why a value failed structural validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The value at some position has a different type than the schema.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        /// Type the schema requires.
        expected: JsonType,
        /// Type actually present.
        actual: JsonType,
    },

    /// The schema names a key the target object does not have.
    #[error("missing key: {0:?}")]
    MissingKey(String),

    /// Schema and value nest deeper than [`MAX_NESTING`] levels together.
    #[error("nesting deeper than {MAX_NESTING} levels")]
    NestingTooDeep,
}

/// Check that `value` matches the shape described by `schema`.
///
/// The rules, applied recursively:
///
/// * a `null` schema matches any value;
/// * an empty array or object schema matches any array or object;
/// * a non-empty array schema validates its *first* element against every
///   element of the target array;
/// * a non-empty object schema requires each of its keys to be present in
///   the target and validates the paired values (extra target keys are
///   allowed);
/// * any other schema value matches exactly its own type, ignoring the
///   payload.
///
/// ```
/// use dotjson_tree::{JsonArray, JsonValue, validate};
///
/// let mut schema = JsonArray::new();
/// schema.push(JsonValue::from(false)); // any boolean
/// let schema = JsonValue::Array(schema);
///
/// let mut hits = JsonArray::new();
/// hits.push(JsonValue::from(true));
/// hits.push(JsonValue::from(false));
/// assert!(validate(&schema, &JsonValue::Array(hits)).is_ok());
/// assert!(validate(&schema, &JsonValue::from("not an array")).is_err());
/// ```
pub fn validate(schema: &JsonValue, value: &JsonValue) -> Result<(), ValidationError> {
    validate_at(schema, value, 0)
}

fn validate_at(
    schema: &JsonValue,
    value: &JsonValue,
    nesting: usize,
) -> Result<(), ValidationError> {
    if nesting > MAX_NESTING {
        return Err(ValidationError::NestingTooDeep);
    }
    match schema {
        JsonValue::Null => Ok(()),
        JsonValue::Array(template) => {
            let JsonValue::Array(target) = value else {
                return Err(mismatch(JsonType::Array, value));
            };
            match template.get(0) {
                None => Ok(()),
                Some(element_schema) => target
                    .iter()
                    .try_for_each(|item| validate_at(element_schema, item, nesting + 1)),
            }
        }
        JsonValue::Object(template) => {
            let JsonValue::Object(target) = value else {
                return Err(mismatch(JsonType::Object, value));
            };
            for (name, field_schema) in template.iter() {
                let field = target
                    .get(name)
                    .ok_or_else(|| ValidationError::MissingKey(name.to_owned()))?;
                validate_at(field_schema, field, nesting + 1)?;
            }
            Ok(())
        }
        scalar => {
            if scalar.json_type() == value.json_type() {
                Ok(())
            } else {
                Err(mismatch(scalar.json_type(), value))
            }
        }
    }
}

fn mismatch(expected: JsonType, actual: &JsonValue) -> ValidationError {
    ValidationError::TypeMismatch {
        expected,
        actual: actual.json_type(),
    }
}
