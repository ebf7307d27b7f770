//! Serialization round trips, compiled only with the `serde` feature.

#![cfg(feature = "serde")]

use facsimile::collection;
use facsimile::{OrderedCollection, TextBuffer, Value};

#[test]
fn collection_serializes_as_sequence() {
    let items = collection![3, 1, 2];
    let json = serde_json::to_string(&items).unwrap();
    assert_eq!(json, "[3,1,2]");

    let back: OrderedCollection<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, items);
}

#[test]
fn text_buffer_serializes_as_string() {
    let text = TextBuffer::new("Codeable is awesome");
    let json = serde_json::to_string(&text).unwrap();
    assert_eq!(json, "\"Codeable is awesome\"");

    let back: TextBuffer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, text);
    assert_eq!(back.len(), 19);
}

#[test]
fn absent_and_null_values_serialize_as_null() {
    let items = collection![Value::from("a"), Value::Undefined, Value::Null, Value::from(true), Value::from(1.5)];
    let json = serde_json::to_string(&items).unwrap();
    assert_eq!(json, "[\"a\",null,null,true,1.5]");
}
