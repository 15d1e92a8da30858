//! Has-then-read access to loosely structured JSON objects.
//!
//! Every accessor first checks that the key exists. A key which is missing,
//! `null`, or holds a value of the wrong JSON type reads as `None`, so that
//! partial or newer payloads degrade to unset fields instead of failing.

use log::{debug, warn};
use serde_json::{Map, Value};

/// A borrowed JSON object read through has-then-read accessors.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self(object)
    }

    /// Whether the key is present, even if its value is `null`.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The raw value of a key, treating `null` as absent.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn string(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            Value::String(s) => Some(s.clone()),
            other => mismatch(key, "string", other),
        }
    }

    /// Any scalar rendered as text, e.g. `1` becomes `"1"`.
    pub fn text(&self, key: &str) -> Option<String> {
        self.value(key).map(value_to_text)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.value(key)? {
            Value::Bool(b) => Some(*b),
            other => mismatch(key, "boolean", other),
        }
    }

    /// An unsigned integer. Numeric strings are accepted, since some list
    /// members (e.g. an organism's genome ids) are sent as strings.
    pub fn u64(&self, key: &str) -> Option<u64> {
        let value = self.value(key)?;
        as_u64(value).or_else(|| mismatch(key, "unsigned integer", value))
    }

    pub fn u32(&self, key: &str) -> Option<u32> {
        let value = self.value(key)?;
        as_u64(value)
            .and_then(|n| u32::try_from(n).ok())
            .or_else(|| mismatch(key, "32-bit unsigned integer", value))
    }

    pub fn i64(&self, key: &str) -> Option<i64> {
        match self.value(key)? {
            Value::Number(n) if n.is_i64() => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            other => mismatch(key, "integer", other),
        }
    }

    pub fn object(&self, key: &str) -> Option<Fields<'a>> {
        match self.value(key)? {
            Value::Object(o) => Some(Fields(o)),
            other => mismatch(key, "object", other),
        }
    }

    pub fn array(&self, key: &str) -> Option<&'a Vec<Value>> {
        match self.value(key)? {
            Value::Array(a) => Some(a),
            other => mismatch(key, "array", other),
        }
    }

    /// Objects in the array under `key`, in order. Non-object members are skipped.
    pub fn objects(&self, key: &str) -> impl Iterator<Item = Fields<'a>> + 'a {
        let key = key.to_string();
        self.array(&key)
            .into_iter()
            .flatten()
            .filter_map(move |member| match member {
                Value::Object(o) => Some(Fields(o)),
                other => {
                    warn!("skipping non-object member of \"{}\": {}", key, other);
                    None
                }
            })
    }

    /// Unsigned integers in the array under `key`, in order.
    pub fn u32s(&self, key: &str) -> Vec<u32> {
        self.array(key)
            .into_iter()
            .flatten()
            .filter_map(|member| as_u64(member).and_then(|n| u32::try_from(n).ok()))
            .collect()
    }

    /// Strings in the array under `key`, in order.
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.array(key)
            .into_iter()
            .flatten()
            .filter_map(|member| member.as_str().map(String::from))
            .collect()
    }

    /// All members in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.0.iter()
    }
}

pub(crate) fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn mismatch<T>(key: &str, expected: &str, found: &Value) -> Option<T> {
    debug!("field \"{}\" is not a {}, treating as absent: {}", key, expected, found);
    None
}
