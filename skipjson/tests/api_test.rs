// SPDX-License-Identifier: Apache-2.0

// Public entry points against the documented dialect

use skipjson::{
    parse, parse_array_from_str, parse_object_from_str, skip_scan, tokenize, Array, Kind, Number,
    Object, Value,
};
use test_log::test;

#[test]
fn test_empty_roots() {
    assert_eq!(parse_array_from_str("[]"), Ok(Array::new()));
    assert_eq!(parse_object_from_str("{}"), Ok(Object::new()));
}

#[test]
fn test_array_numbers_are_integers() {
    let array = parse_array_from_str("[1,2,3]").unwrap();
    let values: Vec<i64> = array.iter().filter_map(Value::as_i64).collect();
    assert_eq!(values, [1, 2, 3]);
    for item in &array {
        assert!(matches!(item, Value::Number(Number::Integer(_))));
    }
}

#[test]
fn test_object_numbers_are_floats() {
    let object = parse_object_from_str(r#"{"a":1}"#).unwrap();
    assert_eq!(object["a"], Value::Number(Number::Float(1.0)));
    assert_eq!(object["a"].as_i64(), None);
}

#[test]
fn test_same_literal_differs_by_container() {
    let array = parse_array_from_str("[10]").unwrap();
    let object = parse_object_from_str("{'n':10}").unwrap();
    assert_ne!(array[0], object["n"]);
    assert_eq!(array[0].as_f64(), object["n"].as_f64());
}

#[test]
fn test_nested_arrays() {
    let array = parse_array_from_str("[[1,2],[3,4]]").unwrap();
    let rows: Vec<Vec<i64>> = array
        .iter()
        .map(|row| {
            row.as_array()
                .unwrap()
                .iter()
                .filter_map(Value::as_i64)
                .collect()
        })
        .collect();
    assert_eq!(rows, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_duplicate_keys_last_wins() {
    let object = parse_object_from_str(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["a"], Value::Number(Number::Float(2.0)));
}

#[test]
fn test_skip_scan_matches_outer_close() {
    let tokens = tokenize("[[]]").unwrap();
    assert_eq!(skip_scan(&tokens, 0, Kind::ArrayStart, Kind::ArrayEnd), Ok(3));
}

#[test]
fn test_quote_matching() {
    let array = parse_array_from_str(r#"['a "quoted" word', "it's"]"#).unwrap();
    assert_eq!(array[0].as_str(), Some(r#"a "quoted" word"#));
    assert_eq!(array[1].as_str(), Some("it's"));
}

#[test]
fn test_strings_are_not_unescaped() {
    let array = parse_array_from_str(r#"["C:\temp\new"]"#).unwrap();
    assert_eq!(array[0].as_str(), Some(r"C:\temp\new"));
}

#[test]
fn test_whitespace_between_tokens() {
    let text = "{\n\t\"delay\": 10000,\n\t\"pictures\": [\n\t\t\"a.jpg\",\n\t\t\"b.jpg\"\n\t]\n}";
    let object = parse_object_from_str(text).unwrap();
    assert_eq!(object["delay"].as_f64(), Some(10000.0));
    let pictures = object["pictures"].as_array().unwrap();
    assert_eq!(pictures.len(), 2);
    assert_eq!(pictures[1].as_str(), Some("b.jpg"));
}

#[test]
fn test_display_reparses() {
    let text = r#"{"list":[1,[true,null],{"k":"v"}],"name":'say "hi"',"ratio":0.5}"#;
    let object = parse_object_from_str(text).unwrap();
    let rendered = Value::Object(object.clone()).to_string();
    assert_eq!(parse_object_from_str(&rendered), Ok(object));
}

#[test]
fn test_unified_entry_point() {
    assert!(matches!(parse("[1]"), Ok(Value::Array(_))));
    assert!(matches!(parse("{'a':[]}"), Ok(Value::Object(_))));
    assert!(parse("null").is_err());
}
