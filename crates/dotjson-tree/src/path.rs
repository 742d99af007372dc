//! Dot-notation path navigation over objects.
//!
//! A dotted path is sugar over nested object lookups, not a separate
//! storage structure: the name is split at its *first* dot, the prefix is
//! looked up as a key, and the operation recurses into that value with the
//! remainder. A key whose name contains a literal `.` is therefore
//! unreachable through this API; that is accepted, documented behavior.

use crate::{JsonArray, JsonObject, JsonType, JsonValue, TreeError, TreeResult};

impl JsonObject {
    /// Look up a nested value by dotted path.
    ///
    /// Returns `None` when any segment is absent or crosses a value that is
    /// not an object.
    ///
    /// ```
    /// use dotjson_tree::{JsonObject, JsonValue};
    ///
    /// let mut obj = JsonObject::new();
    /// obj.dotset("a.b", JsonValue::from("deep")).unwrap();
    /// assert_eq!(obj.dotget("a.b").and_then(|v| v.as_str()), Some("deep"));
    /// assert!(obj.dotget("a.missing").is_none());
    /// ```
    pub fn dotget(&self, path: &str) -> Option<&JsonValue> {
        match path.split_once('.') {
            None => self.get(path),
            Some((head, rest)) => self.get_object(head)?.dotget(rest),
        }
    }

    /// Mutable variant of [`dotget`](Self::dotget).
    pub fn dotget_mut(&mut self, path: &str) -> Option<&mut JsonValue> {
        match path.split_once('.') {
            None => self.get_mut(path),
            Some((head, rest)) => match self.get_mut(head)? {
                JsonValue::Object(child) => child.dotget_mut(rest),
                _ => None,
            },
        }
    }

    /// Set a nested value by dotted path, creating intermediate empty
    /// objects for missing segments.
    ///
    /// The final segment has overwrite semantics (like
    /// [`set`](Self::set)). Fails without mutating anything when an
    /// existing intermediate value is present but not an object.
    pub fn dotset(&mut self, path: &str, value: JsonValue) -> TreeResult<()> {
        match path.split_once('.') {
            None => self.set(path, value),
            Some((head, rest)) => {
                if let Some(existing) = self.get_mut(head) {
                    match existing {
                        JsonValue::Object(child) => child.dotset(rest, value),
                        other => Err(TreeError::NotAnObject {
                            segment: head.to_owned(),
                            actual: other.json_type(),
                        }),
                    }
                } else {
                    // Build the subtree first so a deeper failure leaves
                    // this object untouched.
                    let mut child = JsonObject::new();
                    child.dotset(rest, value)?;
                    self.add(head, JsonValue::Object(child))
                }
            }
        }
    }

    /// Remove a nested value by dotted path, returning it.
    ///
    /// Removes only on an exact full match of every segment; never creates
    /// anything. The final removal has the usual swap-with-last semantics.
    pub fn dotremove(&mut self, path: &str) -> TreeResult<JsonValue> {
        match path.split_once('.') {
            None => self.remove(path),
            Some((head, rest)) => match self.get_mut(head) {
                Some(JsonValue::Object(child)) => child.dotremove(rest),
                Some(other) => Err(TreeError::NotAnObject {
                    segment: head.to_owned(),
                    actual: other.json_type(),
                }),
                None => Err(TreeError::key_not_found(head)),
            },
        }
    }

    /// True when the dotted path resolves to a value.
    pub fn dothas(&self, path: &str) -> bool {
        self.dotget(path).is_some()
    }

    /// True when the dotted path resolves to a value of type `ty`.
    pub fn dothas_value_of_type(&self, path: &str, ty: JsonType) -> bool {
        self.dotget(path).is_some_and(|v| v.json_type() == ty)
    }

    /// String at a dotted path, if present and a string.
    pub fn dotget_str(&self, path: &str) -> Option<&str> {
        self.dotget(path).and_then(JsonValue::as_str)
    }

    /// Number at a dotted path, if present and a number.
    pub fn dotget_f64(&self, path: &str) -> Option<f64> {
        self.dotget(path).and_then(JsonValue::as_f64)
    }

    /// Boolean at a dotted path, if present and a boolean.
    pub fn dotget_bool(&self, path: &str) -> Option<bool> {
        self.dotget(path).and_then(JsonValue::as_bool)
    }

    /// Object at a dotted path, if present and an object.
    pub fn dotget_object(&self, path: &str) -> Option<&JsonObject> {
        self.dotget(path).and_then(JsonValue::as_object)
    }

    /// Array at a dotted path, if present and an array.
    pub fn dotget_array(&self, path: &str) -> Option<&JsonArray> {
        self.dotget(path).and_then(JsonValue::as_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotset_creates_intermediate_objects() {
        let mut obj = JsonObject::new();
        obj.dotset("a.b.c", JsonValue::Number(42.0)).unwrap();

        assert!(obj.has_value_of_type("a", JsonType::Object));
        assert!(obj.dothas_value_of_type("a.b", JsonType::Object));
        assert_eq!(obj.dotget_f64("a.b.c"), Some(42.0));
    }

    #[test]
    fn test_dotset_fails_on_non_object_intermediate() {
        let mut obj = JsonObject::new();
        obj.add("a", JsonValue::Number(1.0)).unwrap();

        let err = obj.dotset("a.b", JsonValue::Null).unwrap_err();
        assert_eq!(
            err,
            TreeError::NotAnObject {
                segment: "a".into(),
                actual: JsonType::Number,
            }
        );
        // Nothing was mutated.
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get_f64("a"), Some(1.0));
    }

    #[test]
    fn test_dotset_overwrites_leaf() {
        let mut obj = JsonObject::new();
        obj.dotset("a.b", JsonValue::Number(1.0)).unwrap();
        obj.dotset("a.b", JsonValue::Number(2.0)).unwrap();
        assert_eq!(obj.dotget_f64("a.b"), Some(2.0));
        assert_eq!(obj.get_object("a").unwrap().len(), 1);
    }

    #[test]
    fn test_dotget_mut_edits_in_place() {
        let mut obj = JsonObject::new();
        obj.dotset("a.b", JsonValue::Number(1.0)).unwrap();
        *obj.dotget_mut("a.b").unwrap() = JsonValue::Number(2.0);
        assert_eq!(obj.dotget_f64("a.b"), Some(2.0));
        assert!(obj.dotget_mut("a.b.c").is_none());
    }

    #[test]
    fn test_dotget_missing_segments() {
        let mut obj = JsonObject::new();
        obj.dotset("a.b", JsonValue::from(true)).unwrap();

        assert!(obj.dotget("x").is_none());
        assert!(obj.dotget("a.x").is_none());
        assert!(obj.dotget("a.b.c").is_none()); // b is not an object
        assert_eq!(obj.dotget_bool("a.b"), Some(true));
    }

    #[test]
    fn test_dotremove_exact_match_only() {
        let mut obj = JsonObject::new();
        obj.dotset("a.b.c", JsonValue::from("leaf")).unwrap();

        assert!(obj.dotremove("a.b.missing").is_err());
        assert!(obj.dotremove("a.x.c").is_err());

        let removed = obj.dotremove("a.b.c").unwrap();
        assert_eq!(removed, JsonValue::from("leaf"));
        // Intermediate objects stay behind, now empty at the leaf level.
        assert!(obj.dotget_object("a.b").is_some_and(JsonObject::is_empty));
    }

    #[test]
    fn test_literal_dot_key_is_unreachable_via_paths() {
        let mut obj = JsonObject::new();
        obj.add("a.b", JsonValue::Number(1.0)).unwrap();

        // The dotted API splits at the first dot, so the literal "a.b" key
        // is never matched.
        assert!(obj.dotget("a.b").is_none());
        assert_eq!(obj.get_f64("a.b"), Some(1.0));
    }
}
