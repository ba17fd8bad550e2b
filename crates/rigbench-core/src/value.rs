//! Dynamic attribute values
//!
//! Components are strongly typed, but filtering, sorting and comparison
//! address attributes by name. `Value` is the common currency for that.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A dynamic attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    /// No value / null
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (counts, clocks, prices)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value (brands, sockets, memory types)
    Text(String),
    /// List of values (e.g. supported sockets)
    List(Vec<Value>),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get this value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Whether this value has a numeric reading
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
        }
    }

    /// Equality used by query conditions.
    ///
    /// Integers compare exactly, mixed integers and floats numerically;
    /// everything else compares structurally.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (a, b) if a.is_numeric() && b.is_numeric() => a.as_float() == b.as_float(),
            (a, b) => a == b,
        }
    }

    /// Total-enough ordering for sorting catalog tables.
    ///
    /// Returns `None` for values of unrelated types.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                a.as_float().and_then(|x| b.as_float().and_then(|y| x.partial_cmp(&y)))
            }
            (Value::Text(a), Value::Text(b)) => Some(a.to_lowercase().cmp(&b.to_lowercase())),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "-"),
            Value::Bool(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Text(s) => write!(f, "{}", s),
            Value::List(list) => {
                for (i, v) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u64> for Value {
    /// Values past `i64::MAX` are kept as the nearest float.
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(int) => Value::Int(int),
            Err(_) => Value::Float(i as f64),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Value::List(vec.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(42).as_float(), Some(42.0));
        assert_eq!(Value::Text("AM5".into()).as_str(), Some("AM5"));
        assert_eq!(Value::Text("AM5".into()).as_float(), None);
    }

    #[test]
    fn test_numeric_matching() {
        assert!(Value::Int(3).matches(&Value::Float(3.0)));
        assert!(!Value::Int(3).matches(&Value::Text("3".into())));
        assert!(Value::from("DDR5").matches(&Value::from("DDR5")));
    }

    #[test]
    fn test_large_integers_are_exact() {
        // both round to the same f64
        let a = Value::Int(9_007_199_254_740_993);
        let b = Value::Int(9_007_199_254_740_992);
        assert!(!a.matches(&b));
        assert_eq!(a.compare(&b), Some(Ordering::Greater));

        assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
        assert_eq!(Value::from(i64::MAX as u64), Value::Int(i64::MAX));
    }

    #[test]
    fn test_compare() {
        assert_eq!(Value::Int(1).compare(&Value::Float(2.5)), Some(Ordering::Less));
        assert_eq!(
            Value::from("amd").compare(&Value::from("Intel")),
            Some(Ordering::Less)
        );
        assert_eq!(Value::Int(1).compare(&Value::from("x")), None);
    }

    #[test]
    fn test_value_from() {
        let _: Value = true.into();
        let _: Value = 42u32.into();
        let _: Value = 3.5f64.into();
        let _: Value = "hello".into();
        let _: Value = vec!["AM4", "AM5"].into();
    }
}
