//! Stored Value Module
//!
//! Defines what callers can hand to the cache and how it is written to the store.

// == Value ==
/// A value accepted by [`crate::cache::Cache::store`].
///
/// Only the encoded bytes reach the store; the variant is not remembered.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl Value {
    // == Encode ==
    /// Returns the bytes written to the store for this value.
    ///
    /// Integers are written in base 10. Floats use the shortest decimal that
    /// parses back to the same number and always keep a fractional part
    /// (`1.0`, not `1`). Exponent and NaN spellings (`1e20`, `1e-5`, `NaN`)
    /// differ from what Python Redis clients write (`1e+20`, `1e-05`, `nan`).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(text) => text.as_bytes().to_vec(),
            Value::Bytes(bytes) => bytes.clone(),
            Value::Int(n) => n.to_string().into_bytes(),
            Value::Float(x) => format!("{:?}", x).into_bytes(),
        }
    }

    /// Short name of the variant, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
        }
    }
}

// == Conversions ==
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(value: &[u8; N]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
