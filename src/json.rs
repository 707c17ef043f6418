//! JSON bridge: JSON text into a [`Value`] tree, and back.
//!
//! Parsing goes through `serde_json::Value` as an intermediate rather than a
//! hand-rolled recursive-descent parser — `serde_json` already gets
//! `\uXXXX` surrogate pairs, number formats, and UTF-8 validation right, and
//! reusing it is exactly the choice this codebase's other JSON-bridging
//! modules make. Any structural error collapses to `None` at the public
//! boundary; nothing in `Value` construction is fallible.

use crate::error::GlyphError;
use crate::value::Value;
use serde_json::Value as Json;

impl Value {
    /// Parses JSON text into a value tree. Returns `None` on any structural
    /// error — no partial tree is ever produced.
    pub fn from_json(text: &str) -> Option<Value> {
        from_json_inner(text).ok()
    }

    /// Serializes this value as JSON. See the module doc comment on
    /// [`crate::json`] for the non-bijective mappings (Bytes, Time, Id,
    /// Struct, Sum) this direction applies.
    pub fn to_json(&self) -> String {
        to_json_value(self).to_string()
    }
}

fn from_json_inner(text: &str) -> Result<Value, GlyphError> {
    let json: Json = serde_json::from_str(text)?;
    Ok(from_json_value(json))
}

fn from_json_value(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => {
            if n.is_i64() {
                Value::Int(n.as_i64().expect("checked is_i64"))
            } else if n.is_u64() {
                // Fits in i64's positive range or not; either way round
                // through f64 rather than silently truncating.
                let u = n.as_u64().expect("checked is_u64");
                if u <= i64::MAX as u64 {
                    Value::Int(u as i64)
                } else {
                    tracing::warn!(value = u, "u64 literal exceeds i64 range, widening to float");
                    Value::Float(u as f64)
                }
            } else {
                let f = n.as_f64().unwrap_or_else(|| {
                    tracing::warn!("JSON number could not be represented as f64, substituting 0");
                    0.0
                });
                Value::Float(f)
            }
        }
        Json::String(s) => Value::Str(s),
        Json::Array(items) => Value::List(items.into_iter().map(from_json_value).collect()),
        Json::Object(map) => {
            // serde_json's Map already overwrites on duplicate keys during
            // its own parse, so insertion here never needs to dedupe.
            let mut entries = crate::value::ObjectMap::with_capacity(map.len());
            for (k, v) in map {
                entries.insert(k, from_json_value(v));
            }
            Value::Map(entries)
        }
    }
}

fn to_json_value(v: &Value) -> Json {
    match v {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(n) => Json::Number((*n).into()),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(Json::Number)
            .unwrap_or_else(|| {
                tracing::warn!(value = x, "non-finite float could not be represented in JSON, substituting 0");
                Json::Number(0.into())
            }),
        Value::Str(s) => Json::String(s.clone()),
        Value::Bytes(b) => Json::String(base64_body(b)),
        Value::Time(ms) => Json::String(crate::time::format_time(*ms)),
        Value::Id { prefix, value } => Json::String(format_id_string(prefix, value)),
        Value::List(items) => Json::Array(items.iter().map(to_json_value).collect()),
        Value::Map(entries) => {
            let mut obj = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries {
                obj.insert(k.clone(), to_json_value(v));
            }
            Json::Object(obj)
        }
        Value::Struct { name, fields } => {
            let mut obj = serde_json::Map::with_capacity(fields.len() + 1);
            obj.insert("_type".to_string(), Json::String(name.clone()));
            for (k, v) in fields {
                obj.insert(k.clone(), to_json_value(v));
            }
            Json::Object(obj)
        }
        Value::Sum { tag, value } => {
            let mut obj = serde_json::Map::with_capacity(2);
            obj.insert("_tag".to_string(), Json::String(tag.clone()));
            if let Some(inner) = value {
                obj.insert("_value".to_string(), to_json_value(inner));
            }
            Json::Object(obj)
        }
    }
}

fn base64_body(buf: &[u8]) -> String {
    use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
    use base64::Engine as _;
    BASE64_STANDARD.encode(buf)
}

fn format_id_string(prefix: &str, value: &str) -> String {
    if prefix.is_empty() {
        format!("^{}", value)
    } else {
        format!("^{}:{}", prefix, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scalars() {
        assert!(Value::from_json("null").unwrap().is_null());
        assert_eq!(Value::from_json("true").unwrap().as_bool(), true);
        assert_eq!(Value::from_json("42").unwrap().as_int(), 42);
        assert_eq!(Value::from_json("\"hi\"").unwrap().as_str(), "hi");
    }

    #[test]
    fn integer_literal_parses_as_int_not_float() {
        let v = Value::from_json("42").unwrap();
        assert!(matches!(v, Value::Int(42)));
    }

    #[test]
    fn literal_with_decimal_point_parses_as_float() {
        let v = Value::from_json("42.0").unwrap();
        assert!(matches!(v, Value::Float(_)));
    }

    #[test]
    fn malformed_input_yields_none() {
        assert!(Value::from_json("{not valid").is_none());
        assert!(Value::from_json("").is_none());
    }

    #[test]
    fn array_and_object() {
        let v = Value::from_json(r#"{"a":[1,2,3],"b":null}"#).unwrap();
        assert_eq!(v.get("a").unwrap().len(), 3);
        assert!(v.get("b").unwrap().is_null());
    }

    #[test]
    fn duplicate_object_keys_overwrite() {
        let v = Value::from_json(r#"{"a":1,"a":2}"#).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("a").unwrap().as_int(), 2);
    }

    #[test]
    fn partial_roundtrip_preserves_json_safe_kinds() {
        let mut m = Value::map();
        m.map_set("n", Value::int(7));
        m.map_set("s", Value::str("hi"));
        m.map_set("b", Value::bool(true));
        m.map_set("l", {
            let mut l = Value::list();
            l.list_push(Value::int(1));
            l.list_push(Value::null());
            l
        });

        let json = m.to_json();
        let back = Value::from_json(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn bytes_serializes_without_prefix() {
        let v = Value::bytes(b"hi".to_vec());
        assert_eq!(v.to_json(), "\"aGk=\"");
    }

    #[test]
    fn id_serializes_as_caret_string() {
        assert_eq!(Value::id(Some("user"), "123").to_json(), "\"^user:123\"");
        assert_eq!(Value::id(None, "123").to_json(), "\"^123\"");
    }

    #[test]
    fn struct_serializes_with_injected_type_field() {
        let mut s = Value::r#struct("Point");
        s.struct_set("x", Value::int(1));
        let json: serde_json::Value = serde_json::from_str(&s.to_json()).unwrap();
        assert_eq!(json["_type"], "Point");
        assert_eq!(json["x"], 1);
    }

    #[test]
    fn sum_serializes_with_tag_and_optional_value() {
        let with_value = Value::sum("ok", Some(Value::int(1))).to_json();
        let json: serde_json::Value = serde_json::from_str(&with_value).unwrap();
        assert_eq!(json["_tag"], "ok");
        assert_eq!(json["_value"], 1);

        let without_value = Value::sum("done", None).to_json();
        let json: serde_json::Value = serde_json::from_str(&without_value).unwrap();
        assert_eq!(json["_tag"], "done");
        assert!(json.get("_value").is_none());
    }
}
