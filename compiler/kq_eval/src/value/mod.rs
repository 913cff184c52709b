//! Runtime values.
//!
//! Arrays are reference values: every binding that holds the same
//! [`ArrayRef`] observes in-place mutation through `arradd`/`arrdel`.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::builtins::json;

#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Array(ArrayRef),
    /// An omitted argument, `void`, or JSON `null`.
    Void,
}

/// Shared, mutable array storage.
#[derive(Clone, Debug, Default)]
pub struct ArrayRef(Rc<RefCell<Vec<Value>>>);

impl ArrayRef {
    pub fn new(items: Vec<Value>) -> Self {
        ArrayRef(Rc::new(RefCell::new(items)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Whether both handles point at the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn as_ptr(&self) -> *const RefCell<Vec<Value>> {
        Rc::as_ptr(&self.0)
    }
}

/// Pairs of arrays currently being compared, by storage address.
type OpenPairs = Vec<(*const (), *const ())>;

impl Value {
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(ArrayRef::new(items))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Name of the value's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Void => "void",
        }
    }

    /// `false`, `0`, `NaN`, `""`, `void` and `[]` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Array(items) => !items.is_empty(),
            Value::Void => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Same kind and equal contents. `NaN` is never equal to itself.
    ///
    /// Arrays that contain themselves compare equal when their cycles line
    /// up: a pair of arrays already being compared counts as equal.
    pub fn strict_eq(&self, other: &Value) -> bool {
        self.strict_eq_in(other, &mut Vec::new())
    }

    fn strict_eq_in(&self, other: &Value, open: &mut OpenPairs) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Void, Value::Void) => true,
            (Value::Array(a), Value::Array(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                let pair = (a.as_ptr().cast::<()>(), b.as_ptr().cast::<()>());
                if open.contains(&pair) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                if a.len() != b.len() {
                    return false;
                }
                open.push(pair);
                let equal = a
                    .iter()
                    .zip(b.iter())
                    .all(|(x, y)| x.strict_eq_in(y, open));
                open.pop();
                equal
            }
            _ => false,
        }
    }

    /// Like [`Value::strict_eq`], except a number compared with a string or
    /// boolean converts the other side to a number first.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(n), other @ (Value::Str(_) | Value::Bool(_)))
            | (other @ (Value::Str(_) | Value::Bool(_)), Value::Number(n)) => {
                *n == other.coerce_number()
            }
            _ => self.strict_eq(other),
        }
    }

    /// Numeric reading of a string or boolean for loose equality.
    fn coerce_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Value::Array(_) | Value::Void => f64::NAN,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// Shortest decimal form: `5`, `1.5`, `-0.25`, `Infinity`, `NaN`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for Value {
    /// The text `show` prints: strings raw, arrays as JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Void => f.write_str("void"),
            Value::Array(_) => f.write_str(&json::render_lossy(self)),
        }
    }
}
