//! Built-in converters for [`crate::cache::Cache::get_with`].

use std::str;

use crate::error::ConversionError;

/// Decodes the bytes as UTF-8 text.
pub fn utf8(raw: &[u8]) -> Result<String, ConversionError> {
    Ok(str::from_utf8(raw)?.to_string())
}

/// Parses the bytes as a base-10 integer with an optional sign.
pub fn integer(raw: &[u8]) -> Result<i64, ConversionError> {
    Ok(str::from_utf8(raw)?.parse::<i64>()?)
}

/// Parses the bytes as a decimal floating-point number.
pub fn float(raw: &[u8]) -> Result<f64, ConversionError> {
    Ok(str::from_utf8(raw)?.parse::<f64>()?)
}
