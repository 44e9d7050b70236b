use jo::{insert_value, Document, KeyPath, Node};
use serde_json::json;
use yare::parameterized;

fn as_json(document: &Document) -> serde_json::Value {
    serde_json::to_value(document).expect("document serializes")
}

fn path(segments: &[&str]) -> KeyPath {
    KeyPath::new(segments.iter().copied()).expect("non-empty path")
}

#[parameterized(
    empty_path = { vec![], json!({}) },
    single_key = { vec!["key"], json!({"key": "value"}) },
    nested_keys = { vec!["key2", "key3"], json!({"key2": {"key3": "value"}}) },
    deep_keys = { vec!["a", "b", "c", "d"], json!({"a": {"b": {"c": {"d": "value"}}}}) },
)]
fn test_insert_value_ok(segments: Vec<&str>, expected: serde_json::Value) {
    let mut document = Document::new();
    let segments: Vec<_> = segments.iter().map(|s| s.to_string()).collect();
    insert_value(&mut document, &segments, "value".to_string());

    assert_eq!(as_json(&document), expected);
}

#[parameterized(
    scalar_then_nested = {
        &[(&["user"][..], "simple"), (&["user", "name"][..], "John")],
        json!({"user": {"name": "John"}})
    },
    nested_then_scalar = {
        &[(&["user", "name"][..], "John"), (&["user"][..], "simple")],
        json!({"user": "simple"})
    },
    siblings_merge = {
        &[(&["users", "123", "name"][..], "Ann"), (&["users", "123", "age"][..], "5")],
        json!({"users": {"123": {"name": "Ann", "age": "5"}}})
    },
    leaf_overwritten = {
        &[(&["a", "b"][..], "1"), (&["a", "b"][..], "2")],
        json!({"a": {"b": "2"}})
    },
    deep_scalar_replaced = {
        &[(&["a", "b"][..], "1"), (&["a", "b", "c"][..], "2"), (&["a", "d"][..], "3")],
        json!({"a": {"b": {"c": "2"}, "d": "3"}})
    },
)]
fn test_assign_last_write_wins(steps: &[(&[&str], &str)], expected: serde_json::Value) {
    let mut document = Document::new();
    for (segments, value) in steps {
        document.assign(&path(segments), *value);
    }

    assert_eq!(as_json(&document), expected);
}

#[test]
fn test_assign_twice_is_idempotent() {
    let target = path(&["a", "b"]);

    let mut once = Document::new();
    once.assign(&target, "v");

    let mut twice = Document::new();
    twice.assign(&target, "v");
    twice.assign(&target, "v");

    assert_eq!(once, twice);
}

#[test]
fn test_document_iterates_sorted() {
    let mut document = Document::new();
    for key in ["zeta", "alpha", "Mid", "beta"] {
        document.assign(&KeyPath::single(key), "x");
    }

    let keys: Vec<&str> = document.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["Mid", "alpha", "beta", "zeta"]);
}

#[test]
fn test_document_from_iter() {
    let nested: Document = [("b", "2")].into_iter().collect();
    let document: Document = [("a", Node::from("1")), ("n", Node::from(nested))]
        .into_iter()
        .collect();

    assert_eq!(as_json(&document), json!({"a": "1", "n": {"b": "2"}}));
}

#[test]
fn test_key_path_requires_segments() {
    assert!(KeyPath::new(Vec::<String>::new()).is_err());
}
