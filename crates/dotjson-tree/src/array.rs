//! Index-addressable JSON array with the same growth policy as objects.

use crate::object::grow;
use crate::{JsonObject, JsonValue, TreeError, TreeResult};

/// An insertion-ordered, index-addressable sequence of owned [`JsonValue`]s.
///
/// Shares the object container's growth policy: capacity doubles from a
/// floor of 16 whenever the count reaches it, and the parser trims finished
/// arrays back to their exact count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonArray {
    items: Vec<JsonValue>,
}

impl JsonArray {
    /// Create an empty array with no allocated capacity.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currently allocated capacity (always ≥ [`len`](Self::len)).
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append a value, growing if the count has reached capacity.
    pub fn push(&mut self, value: JsonValue) {
        if self.items.len() == self.items.capacity() {
            grow(&mut self.items);
        }
        self.items.push(value);
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.items.get(index)
    }

    /// Mutable element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
        self.items.get_mut(index)
    }

    /// Remove and return the element at `index`, shifting everything after
    /// it one slot left (order-preserving, unlike object removal).
    pub fn remove(&mut self, index: usize) -> TreeResult<JsonValue> {
        if index >= self.items.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn replace(&mut self, index: usize, value: JsonValue) -> TreeResult<JsonValue> {
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(TreeError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            }),
        }
    }

    /// Drop every element, keeping capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Trim capacity down to the current count.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
        self.items.iter()
    }

    /// String element at `index`, if present and a string.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(JsonValue::as_str)
    }

    /// Number element at `index`, if present and a number.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(JsonValue::as_f64)
    }

    /// Boolean element at `index`, if present and a boolean.
    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.get(index).and_then(JsonValue::as_bool)
    }

    /// Object element at `index`, if present and an object.
    pub fn get_object(&self, index: usize) -> Option<&JsonObject> {
        self.get(index).and_then(JsonValue::as_object)
    }

    /// Array element at `index`, if present and an array.
    pub fn get_array(&self, index: usize) -> Option<&JsonArray> {
        self.get(index).and_then(JsonValue::as_array)
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = std::slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<JsonValue> for JsonArray {
    fn from_iter<T: IntoIterator<Item = JsonValue>>(iter: T) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut arr = JsonArray::new();
        assert_eq!(arr.capacity(), 0);
        arr.push(JsonValue::Number(1.0));
        arr.push(JsonValue::from("two"));

        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get_f64(0), Some(1.0));
        assert_eq!(arr.get_str(1), Some("two"));
        assert!(arr.get(2).is_none());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut arr: JsonArray = (0..4).map(|i| JsonValue::Number(i as f64)).collect();
        let removed = arr.remove(1).unwrap();
        assert_eq!(removed, JsonValue::Number(1.0));
        assert_eq!(arr.get_f64(0), Some(0.0));
        assert_eq!(arr.get_f64(1), Some(2.0));
        assert_eq!(arr.get_f64(2), Some(3.0));

        let err = arr.remove(10).unwrap_err();
        assert_eq!(err, TreeError::IndexOutOfBounds { index: 10, len: 3 });
    }

    #[test]
    fn test_replace_returns_old_value() {
        let mut arr = JsonArray::new();
        arr.push(JsonValue::Null);
        let old = arr.replace(0, JsonValue::from(true)).unwrap();
        assert_eq!(old, JsonValue::Null);
        assert_eq!(arr.get_bool(0), Some(true));
        assert!(arr.replace(1, JsonValue::Null).is_err());
    }

    #[test]
    fn test_clear_and_shrink() {
        let mut arr: JsonArray = (0..20).map(|_| JsonValue::Null).collect();
        let cap = arr.capacity();
        assert!(cap >= 20);
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), cap);
        arr.shrink_to_fit();
        assert!(arr.capacity() <= cap);
    }
}
