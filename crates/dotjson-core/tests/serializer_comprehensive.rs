//! Serializer output format, sizing, and round-trip behavior.

use dotjson::{
    JsonArray, JsonObject, JsonValue, SerializeConfig, parse_str, serialization_size,
    serialization_size_pretty, structural_eq, to_string, to_string_pretty, to_string_with,
};

fn config_doc() -> JsonValue {
    parse_str(r#"{"server":{"host":"example.com/api","port":8080},"debug":false,"tags":[1,2.5,"x"]}"#)
        .unwrap()
}

#[test]
fn test_compact_output_is_exact() {
    assert_eq!(
        to_string(&config_doc()).unwrap(),
        r#"{"server":{"host":"example.com\/api","port":8080},"debug":false,"tags":[1,2.5,"x"]}"#
    );
}

#[test]
fn test_pretty_output_is_exact() {
    let mut items = JsonArray::new();
    items.push(JsonValue::Number(1.0));
    items.push(JsonValue::Null);
    let mut obj = JsonObject::new();
    obj.add("items", JsonValue::Array(items)).unwrap();
    obj.add("empty", JsonValue::object()).unwrap();

    let expected = concat!(
        "{\n",
        "    \"items\": [\n",
        "        1,\n",
        "        null\n",
        "    ],\n",
        "    \"empty\": {}\n",
        "}",
    );
    assert_eq!(to_string_pretty(&JsonValue::Object(obj)).unwrap(), expected);
}

#[test]
fn test_size_pass_agrees_with_write_pass() {
    let doc = config_doc();
    assert_eq!(
        serialization_size(&doc).unwrap(),
        to_string(&doc).unwrap().len()
    );
    assert_eq!(
        serialization_size_pretty(&doc).unwrap(),
        to_string_pretty(&doc).unwrap().len()
    );
}

#[test]
fn test_reserialization_is_idempotent() {
    let first = to_string(&config_doc()).unwrap();
    let again = to_string(&parse_str(&first).unwrap()).unwrap();
    assert_eq!(first, again);

    let pretty = to_string_pretty(&config_doc()).unwrap();
    let pretty_again = to_string_pretty(&parse_str(&pretty).unwrap()).unwrap();
    assert_eq!(pretty, pretty_again);
}

#[test]
fn test_roundtrip_preserves_structure() {
    let doc = config_doc();
    for text in [to_string(&doc).unwrap(), to_string_pretty(&doc).unwrap()] {
        let reparsed = parse_str(&text).unwrap();
        assert!(structural_eq(&doc, &reparsed));
    }
}

#[test]
fn test_unicode_survives_roundtrip() {
    let doc = parse_str(r#"{"emoji":"😀","accents":"café"}"#).unwrap();
    let text = to_string(&doc).unwrap();
    assert!(text.contains("😀"));
    assert!(structural_eq(&doc, &parse_str(&text).unwrap()));
}

#[test]
fn test_control_characters_reserialize_as_hex_escapes() {
    let doc = parse_str(r#""\u0001\u001f""#).unwrap();
    assert_eq!(to_string(&doc).unwrap(), r#""\u0001\u001f""#);
}

#[test]
fn test_slash_config_round_trips_either_way() {
    let doc = JsonValue::from("a/b");
    let relaxed = SerializeConfig::new().with_escape_slashes(false);
    assert_eq!(to_string_with(&doc, &relaxed).unwrap(), r#""a/b""#);
    assert_eq!(to_string(&doc).unwrap(), r#""a\/b""#);
    // Both spellings parse back to the same string.
    assert_eq!(parse_str(r#""a\/b""#).unwrap(), parse_str(r#""a/b""#).unwrap());
}

#[test]
fn test_scalar_roots_serialize() {
    assert_eq!(to_string(&JsonValue::Null).unwrap(), "null");
    assert_eq!(to_string(&JsonValue::Bool(true)).unwrap(), "true");
    assert_eq!(to_string(&JsonValue::Number(-1.5)).unwrap(), "-1.5");
    assert_eq!(to_string(&JsonValue::from("hi")).unwrap(), r#""hi""#);
    assert_eq!(to_string(&JsonValue::array()).unwrap(), "[]");
    assert_eq!(to_string(&JsonValue::object()).unwrap(), "{}");
}

#[test]
fn test_serde_value_interop_roundtrip() {
    let doc = config_doc();
    let serde_value = dotjson::to_serde_value(&doc);
    let back = dotjson::from_serde_value(&serde_value).unwrap();
    assert!(structural_eq(&doc, &back));
    assert_eq!(to_string(&doc).unwrap(), to_string(&back).unwrap());
}
