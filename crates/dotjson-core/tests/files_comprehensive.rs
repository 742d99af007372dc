//! File helper round-trips through a temp directory.

use dotjson::{
    Error, parse_file, parse_file_with_comments, parse_str, serialize_to_file,
    serialize_to_file_pretty, structural_eq,
};

#[test]
fn test_file_roundtrip_compact_and_pretty() {
    let dir = tempfile::tempdir().unwrap();
    let doc = parse_str(r#"{"a":[1,2,{"b":"c"}],"d":null}"#).unwrap();

    let compact = dir.path().join("doc.json");
    serialize_to_file(&doc, &compact).unwrap();
    assert!(structural_eq(&doc, &parse_file(&compact).unwrap()));

    let pretty = dir.path().join("doc-pretty.json");
    serialize_to_file_pretty(&doc, &pretty).unwrap();
    let written = std::fs::read_to_string(&pretty).unwrap();
    assert!(written.contains("\n    \"a\": ["));
    assert!(structural_eq(&doc, &parse_file(&pretty).unwrap()));
}

#[test]
fn test_parse_file_with_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        "{\n  // bind address\n  \"host\": \"0.0.0.0\", /* default */ \"port\": 80\n}",
    )
    .unwrap();

    let doc = parse_file_with_comments(&path).unwrap();
    let obj = doc.as_object().unwrap();
    assert_eq!(obj.get_str("host"), Some("0.0.0.0"));
    assert_eq!(obj.get_f64("port"), Some(80.0));

    // The plain parser must reject the same file.
    assert!(parse_file(&path).is_err());
}

#[test]
fn test_missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(parse_file(&missing), Err(Error::Io(_))));
}
