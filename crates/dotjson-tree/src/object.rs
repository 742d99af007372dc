//! Insertion-ordered JSON object backed by parallel name/value vectors.

use crate::{JsonArray, JsonType, JsonValue, TreeError, TreeResult};

/// Capacity both containers start from on their first growth.
pub(crate) const STARTING_CAPACITY: usize = 16;

/// Grow a vector to the next capacity step: double, starting at
/// [`STARTING_CAPACITY`]. Called only when `len == capacity`.
pub(crate) fn grow<T>(vec: &mut Vec<T>) {
    let target = (vec.capacity() * 2).max(STARTING_CAPACITY);
    vec.reserve_exact(target - vec.len());
}

/// An insertion-ordered mapping from unique names to owned [`JsonValue`]s.
///
/// Storage is two same-length parallel vectors (names and values) sharing
/// one capacity, doubled from a floor of 16 whenever the count reaches it.
/// Name lookup is a linear scan with a length check before the byte
/// comparison; there is deliberately no hash index. Insertion order,
/// O(n) lookup, and swap-removal are the contract downstream code relies on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonObject {
    names: Vec<String>,
    values: Vec<JsonValue>,
}

impl JsonObject {
    /// Create an empty object with no allocated capacity.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of name/value pairs.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the object holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Currently allocated capacity (always ≥ [`len`](Self::len)).
    pub fn capacity(&self) -> usize {
        self.names.capacity()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        // Length check first, then bytes; mirrors the lookup the duplicate
        // check shares, so insert stays O(n) by contract.
        self.names
            .iter()
            .position(|n| n.len() == name.len() && n.as_str() == name)
    }

    /// Append a new pair. Fails with [`TreeError::DuplicateKey`] if `name`
    /// is already present, leaving the object unchanged.
    pub fn add(&mut self, name: impl Into<String>, value: JsonValue) -> TreeResult<()> {
        let name = name.into();
        if self.index_of(&name).is_some() {
            return Err(TreeError::DuplicateKey(name));
        }
        if self.names.len() == self.names.capacity() {
            grow(&mut self.names);
        }
        if self.values.len() == self.values.capacity() {
            grow(&mut self.values);
        }
        self.names.push(name);
        self.values.push(value);
        Ok(())
    }

    /// Overwrite the value for `name` in place if present (object size and
    /// pair position unchanged), otherwise append a new pair.
    pub fn set(&mut self, name: impl Into<String>, value: JsonValue) -> TreeResult<()> {
        let name = name.into();
        if let Some(i) = self.index_of(&name) {
            self.values[i] = value;
            Ok(())
        } else {
            self.add(name, value)
        }
    }

    /// Look up a value by exact name.
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.index_of(name).map(|i| &self.values[i])
    }

    /// Mutable lookup by exact name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut JsonValue> {
        self.index_of(name).map(|i| &mut self.values[i])
    }

    /// Name at `index` in insertion order.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Value at `index` in insertion order.
    pub fn value_at(&self, index: usize) -> Option<&JsonValue> {
        self.values.get(index)
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// True when a pair with this exact name exists.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True when a pair with this name exists and its value has type `ty`.
    pub fn has_value_of_type(&self, name: &str, ty: JsonType) -> bool {
        self.get(name).is_some_and(|v| v.json_type() == ty)
    }

    /// Remove the pair with this exact name and return its value.
    ///
    /// Removal swaps the last pair into the vacated slot, so insertion order
    /// is not preserved across removals. Fails with
    /// [`TreeError::KeyNotFound`] if the name is absent.
    pub fn remove(&mut self, name: &str) -> TreeResult<JsonValue> {
        let i = self
            .index_of(name)
            .ok_or_else(|| TreeError::key_not_found(name))?;
        self.names.swap_remove(i);
        Ok(self.values.swap_remove(i))
    }

    /// Drop every pair, resetting the count to zero but keeping capacity.
    pub fn clear(&mut self) {
        self.names.clear();
        self.values.clear();
    }

    /// Trim capacity down to the current count. The parser calls this on
    /// every finished object so long-lived parsed trees do not retain the
    /// doubling slack.
    pub fn shrink_to_fit(&mut self) {
        self.names.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// String value for `name`, if present and a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(JsonValue::as_str)
    }

    /// Number value for `name`, if present and a number.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(JsonValue::as_f64)
    }

    /// Boolean value for `name`, if present and a boolean.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(JsonValue::as_bool)
    }

    /// Object value for `name`, if present and an object.
    pub fn get_object(&self, name: &str) -> Option<&JsonObject> {
        self.get(name).and_then(JsonValue::as_object)
    }

    /// Array value for `name`, if present and an array.
    pub fn get_array(&self, name: &str) -> Option<&JsonArray> {
        self.get(name).and_then(JsonValue::as_array)
    }
}
