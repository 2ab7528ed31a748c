//! The `{"Right": ...}` / `{"Left": ...}` response envelope and the unit value.
//!
//! # Design
//! The backend wraps every 2xx payload in an Either-shaped object. Rather than
//! probing optional fields at each call site, the body is turned into a
//! two-variant `Envelope` once. An object with neither key is the unit value
//! and becomes `Right(Value::Null)`. Objects carrying both keys, and JSON
//! values that are not objects, are rejected.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

const RIGHT: &str = "Right";
const LEFT: &str = "Left";

/// A decoded response envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Success payload. `Value::Null` when the key was absent.
    Right(Value),
    /// Backend-declared failure message.
    Left(String),
}

impl Envelope {
    pub fn from_body(body: &str) -> Result<Self, ClientError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ClientError::Decode(format!("invalid JSON body: {e}")))?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for Envelope {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(ClientError::Decode(format!(
                    "expected an envelope object, got {}",
                    json_type(&other)
                )))
            }
        };
        match (fields.remove(RIGHT), fields.remove(LEFT)) {
            (Some(_), Some(_)) => Err(ClientError::Decode(
                "envelope carries both Right and Left".to_string(),
            )),
            (None, Some(left)) => Ok(Envelope::Left(left_message(left))),
            (Some(right), None) => Ok(Envelope::Right(right)),
            (None, None) => Ok(Envelope::Right(Value::Null)),
        }
    }
}

/// `Left` is documented as a string; anything else is kept as its JSON text.
fn left_message(left: Value) -> String {
    match left {
        Value::String(message) => message,
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether a `Right` payload stands for "no value".
pub fn is_unit(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// The unit value: an operation that succeeded without a payload.
///
/// Serializes to `{}` and accepts `null`, `[]` and `{}` on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Unit {}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UnitVisitor)
    }
}

struct UnitVisitor;

impl<'de> Visitor<'de> for UnitVisitor {
    type Value = Unit;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, an empty array or an empty object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Unit, E> {
        Ok(Unit {})
    }

    fn visit_none<E: de::Error>(self) -> Result<Unit, E> {
        Ok(Unit {})
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Unit, A::Error> {
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(1, &self));
        }
        Ok(Unit {})
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Unit, A::Error> {
        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(1, &self));
        }
        Ok(Unit {})
    }
}

/// The JSON rendering of the unit value.
pub fn unit_value() -> Value {
    Value::Object(Map::new())
}
