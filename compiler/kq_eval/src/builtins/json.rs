//! JSON encoding and decoding of values via `serde_json`.
//!
//! | Value       | JSON                          |
//! |-------------|-------------------------------|
//! | Number      | number (`null` if not finite) |
//! | Str         | string                        |
//! | Bool        | boolean                       |
//! | Array       | array                         |
//! | Void        | `null`                        |
//!
//! JSON objects have no value counterpart and are rejected by [`parse`].

use serde_json::Value as Json;

use crate::errors::{json_error, EvalResult};
use crate::value::{ArrayRef, Value};

/// Largest magnitude at which every whole `f64` is an exact integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Encode for `tojson`. Fails only on an array that contains itself.
pub fn stringify(value: &Value) -> EvalResult<String> {
    let json = encode(value, &mut Vec::new(), true)
        .ok_or_else(|| json_error("cannot encode an array that contains itself"))?;
    serde_json::to_string(&json).map_err(json_error)
}

/// Encode for display. A self-containing array shows `"[...]"` at the
/// point of recursion instead of failing.
pub fn render_lossy(value: &Value) -> String {
    encode(value, &mut Vec::new(), false)
        .and_then(|json| serde_json::to_string(&json).ok())
        .unwrap_or_default()
}

/// Decode for `parjson`.
pub fn parse(text: &str) -> EvalResult<Value> {
    let json: Json = serde_json::from_str(text).map_err(json_error)?;
    decode(json)
}

/// `None` when `strict` and a cycle is found.
fn encode(value: &Value, open: &mut Vec<*const ()>, strict: bool) -> Option<Json> {
    Some(match value {
        Value::Number(n) => encode_number(*n),
        Value::Str(s) => Json::String(s.clone()),
        Value::Bool(b) => Json::Bool(*b),
        Value::Void => Json::Null,
        Value::Array(items) => {
            let ptr = items.as_ptr().cast::<()>();
            if open.contains(&ptr) {
                if strict {
                    return None;
                }
                return Some(Json::String("[...]".to_string()));
            }
            open.push(ptr);
            let encoded: Option<Vec<Json>> = items
                .borrow()
                .iter()
                .map(|item| encode(item, open, strict))
                .collect();
            open.pop();
            Json::Array(encoded?)
        }
    })
}

fn encode_number(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Json::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number)
    }
}

fn decode(json: Json) -> EvalResult<Value> {
    Ok(match json {
        Json::Null => Value::Void,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::Str(s),
        Json::Array(items) => Value::Array(ArrayRef::new(
            items.into_iter().map(decode).collect::<EvalResult<_>>()?,
        )),
        Json::Object(_) => return Err(json_error("JSON objects have no value equivalent")),
    })
}
