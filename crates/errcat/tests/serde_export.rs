//! JSON export of catalog descriptions.
//!
//! Run with: cargo nextest run --package errcat --features serde serde_export

#![cfg(feature = "serde")]

use errcat::{ErrorCode, describe};
use serde_json::{Value, json};

fn exported() -> Value {
    serde_json::to_value(describe::<ErrorCode>()).expect("description serializes")
}

#[test]
fn test_top_level_shape() {
    let value = exported();
    assert_eq!(value["prefix"], "NJS");
    assert_eq!(value["max_id"], 49);
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(49));
}

#[test]
fn test_entry_with_placeholders() {
    let value = exported();
    let entry = &value["entries"][5];

    assert_eq!(
        *entry,
        json!({
            "id": 6,
            "code": "NJS-007",
            "text": "invalid value for \"{property:str}\" in parameter {position:int}",
            "placeholders": [
                { "name": "property", "kind": "str" },
                { "name": "position", "kind": "int" }
            ],
            "fallback": false
        })
    );
}

#[test]
fn test_fallback_is_marked() {
    let value = exported();
    let flagged: Vec<&Value> = value["entries"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|entry| entry["fallback"] == true)
        .collect();

    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0]["code"], "NJS-068");
    assert_eq!(flagged[0]["placeholders"][0]["kind"], "int");
}

#[test]
fn test_codes_are_unique_in_export() {
    let value = exported();
    let mut codes: Vec<&str> = value["entries"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|entry| entry["code"].as_str())
        .collect();

    let total = codes.len();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), total);
}
