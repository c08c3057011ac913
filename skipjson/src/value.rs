// SPDX-License-Identifier: Apache-2.0

//! The value tree produced by the parsers.

use alloc::collections::btree_map;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::json_number::Number;

/// A parsed JSON value.
///
/// `Display` writes compact text that the lexer reads back, with one
/// limit: strings have no escapes, so a string holding both `"` and `'`
/// prints in a form that no longer lexes.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The value as an integer. Only array elements parse as integers.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// The value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up `key` when this value is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

/// An ordered sequence of values, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }
}

impl core::ops::Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A mapping from unique string keys to values.
///
/// Inserting an existing key replaces its value. Callers must not rely on
/// key order; this implementation happens to iterate in key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    entries: BTreeMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `value` with `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }
}

impl core::ops::Index<&str> for Object {
    type Output = Value;

    /// Panics when `key` is absent, like `BTreeMap`'s index.
    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Compact rendering that the lexer reads back. Strings cannot be escaped,
// so a payload containing `"` is wrapped in `'` instead when it can be.
fn write_string(f: &mut core::fmt::Formatter<'_>, s: &str) -> core::fmt::Result {
    let quote = if s.contains('"') && !s.contains('\'') {
        '\''
    } else {
        '"'
    };
    write!(f, "{quote}{s}{quote}")
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_string(f, s),
            Value::Array(a) => write!(f, "{a}"),
            Value::Object(o) => write!(f, "{o}"),
        }
    }
}

impl core::fmt::Display for Array {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl core::fmt::Display for Object {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write_string(f, key)?;
            write!(f, ":{value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_last_write_wins() {
        let mut object = Object::new();
        assert_eq!(object.insert("a", Value::from(Number::Float(1.0))), None);
        assert_eq!(
            object.insert("a", Value::from(Number::Float(2.0))),
            Some(Value::Number(Number::Float(1.0)))
        );
        assert_eq!(object.len(), 1);
        assert_eq!(object["a"], Value::Number(Number::Float(2.0)));
    }

    #[test]
    fn test_array_preserves_order() {
        let array: Array = ["x", "y", "z"].into_iter().map(Value::from).collect();
        let items: Vec<&str> = array.iter().filter_map(Value::as_str).collect();
        assert_eq!(items, ["x", "y", "z"]);
        assert_eq!(array[1], Value::from("y"));
        assert_eq!(array.get(3), None);
    }

    #[test]
    fn test_accessors() {
        let value = Value::from(true);
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.as_str(), None);
        assert!(!value.is_null());
        assert!(Value::Null.is_null());

        let value = Value::from(Number::Integer(3));
        assert_eq!(value.as_i64(), Some(3));
        assert_eq!(value.as_f64(), Some(3.0));

        let value = Value::from(Number::Float(3.0));
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_f64(), Some(3.0));
    }

    #[test]
    fn test_get_on_object_value() {
        let object: Object = [("delay", Value::from(Number::Float(10.0)))]
            .into_iter()
            .collect();
        let value = Value::from(object);
        assert_eq!(value.get("delay").and_then(Value::as_f64), Some(10.0));
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::Null.get("delay"), None);
    }

    #[test]
    fn test_display_compact() {
        let inner: Array = [Value::from(Number::Integer(1)), Value::Null]
            .into_iter()
            .collect();
        let object: Object = [
            ("b", Value::from(inner)),
            ("a", Value::from(Number::Float(2.0))),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            Value::from(object).to_string(),
            r#"{"a":2.0,"b":[1,null]}"#
        );
        assert_eq!(Array::new().to_string(), "[]");
        assert_eq!(Object::new().to_string(), "{}");
    }

    #[test]
    fn test_display_picks_quote() {
        assert_eq!(Value::from(r#"say "hi""#).to_string(), r#"'say "hi"'"#);
        assert_eq!(Value::from("it's").to_string(), r#""it's""#);
    }

    #[test]
    fn test_display_with_both_quotes_does_not_relex() {
        let text = Value::from(r#"a"b'c"#).to_string();
        assert_eq!(text, r#""a"b'c""#);
        assert!(crate::lexer::tokenize(&text).is_err());
    }

    #[test]
    fn test_display_relexes_single_quote_kind() {
        let text = Value::from(r#"say "hi""#).to_string();
        assert_eq!(
            crate::lexer::tokenize(&text),
            Ok(alloc::vec![crate::token::Token::string(r#"say "hi""#)])
        );
    }
}
