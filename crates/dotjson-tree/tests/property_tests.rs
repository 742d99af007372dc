//! Property-based tests for document tree invariants
//!
//! Uses proptest to verify that container operations and structural
//! equality hold up across arbitrary trees, not just hand-picked cases.

use dotjson_tree::{JsonArray, JsonObject, JsonValue, structural_eq};
use proptest::prelude::*;

/// Arbitrary JSON trees up to four container levels deep.
fn arb_value() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        (-1.0e9..1.0e9f64).prop_map(JsonValue::Number),
        "[a-zA-Z0-9 ]{0,12}".prop_map(JsonValue::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|items| {
                JsonValue::Array(items.into_iter().collect::<JsonArray>())
            }),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(|fields| {
                let mut obj = JsonObject::new();
                for (name, value) in fields {
                    // BTreeMap keys are unique, so add cannot fail.
                    obj.add(name, value).unwrap();
                }
                JsonValue::Object(obj)
            }),
        ]
    })
}

proptest! {
    /// Structural equality is reflexive for any tree.
    #[test]
    fn structural_eq_reflexive(value in arb_value()) {
        prop_assert!(structural_eq(&value, &value));
    }

    /// A clone is a structurally equal, fully independent tree.
    #[test]
    fn clone_is_structurally_equal(value in arb_value()) {
        let copy = value.clone();
        prop_assert!(structural_eq(&value, &copy));
        prop_assert_eq!(&value, &copy);
    }

    /// Whatever goes in through set comes back out through get.
    #[test]
    fn object_set_get_roundtrip(name in "[a-z]{1,8}", value in arb_value()) {
        let mut obj = JsonObject::new();
        obj.set(&name, value.clone()).unwrap();
        prop_assert_eq!(obj.get(&name), Some(&value));
        prop_assert_eq!(obj.len(), 1);
    }

    /// Setting the same key twice keeps the later value and the length.
    #[test]
    fn object_set_is_idempotent_on_length(
        name in "[a-z]{1,8}",
        first in arb_value(),
        second in arb_value(),
    ) {
        let mut obj = JsonObject::new();
        obj.set(&name, first).unwrap();
        obj.set(&name, second.clone()).unwrap();
        prop_assert_eq!(obj.len(), 1);
        prop_assert_eq!(obj.get(&name), Some(&second));
    }

    /// Remove returns exactly the value that was stored and shrinks the map.
    #[test]
    fn object_remove_returns_stored_value(
        names in prop::collection::btree_set("[a-z]{1,6}", 1..8),
        value in arb_value(),
    ) {
        let mut obj = JsonObject::new();
        let names: Vec<String> = names.into_iter().collect();
        for name in &names {
            obj.add(name.clone(), JsonValue::Null).unwrap();
        }
        let target = names[names.len() / 2].clone();
        obj.set(&target, value.clone()).unwrap();

        let removed = obj.remove(&target).unwrap();
        prop_assert_eq!(removed, value);
        prop_assert_eq!(obj.len(), names.len() - 1);
        prop_assert!(!obj.has(&target));
        for name in names.iter().filter(|n| **n != target) {
            prop_assert!(obj.has(name));
        }
    }

    /// A dotted write is readable back through the same path.
    #[test]
    fn dotset_dotget_roundtrip(
        segments in prop::collection::vec("[a-z]{1,5}", 1..5),
        value in arb_value(),
    ) {
        let path = segments.join(".");
        let mut obj = JsonObject::new();
        obj.dotset(&path, value.clone()).unwrap();
        prop_assert_eq!(obj.dotget(&path), Some(&value));
        prop_assert!(obj.dothas(&path));
    }

    /// Array push preserves order and count.
    #[test]
    fn array_push_preserves_order(values in prop::collection::vec(arb_value(), 0..12)) {
        let mut arr = JsonArray::new();
        for v in &values {
            arr.push(v.clone());
        }
        prop_assert_eq!(arr.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(arr.get(i), Some(v));
        }
    }
}
