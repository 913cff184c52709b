//! Built-in value helpers: math, text and JSON.

pub mod json;

use kq_ir::{MathFn, TextFn};

use crate::errors::{type_mismatch, EvalResult};
use crate::value::{format_number, Value};

/// Apply a one-argument numeric helper.
pub fn apply_math(func: MathFn, arg: &Value) -> EvalResult {
    let Value::Number(x) = *arg else {
        return Err(type_mismatch(format!("`{}`", func.keyword()), "a number", arg.type_name()));
    };
    let result = match func {
        MathFn::Floor => x.floor(),
        MathFn::Round => round_half_up(x),
        MathFn::Sqrt => x.sqrt(),
        MathFn::Sin => x.sin(),
        MathFn::Cos => x.cos(),
        MathFn::Tan => x.tan(),
    };
    Ok(Value::Number(result))
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Apply a one-argument string helper. Numbers are stringified first.
pub fn apply_text(func: TextFn, arg: &Value) -> EvalResult {
    let text = match arg {
        Value::Str(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        other => {
            return Err(type_mismatch(
                format!("`{}`", func.keyword()),
                "a string or number",
                other.type_name(),
            ))
        }
    };
    Ok(match func {
        TextFn::Tokenize => tokenize(&text),
        TextFn::Uppercase => Value::Str(text.to_uppercase()),
        TextFn::Lowercase => Value::Str(text.to_lowercase()),
        TextFn::Reverse => Value::Str(text.chars().rev().collect()),
    })
}

/// Whitespace-separated words with ASCII punctuation removed.
fn tokenize(text: &str) -> Value {
    let stripped: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    Value::array(stripped.split_whitespace().map(Value::string).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
