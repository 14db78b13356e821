//! Coercion of loosely typed values at the interchange boundary

use serde_json::Value as JsonValue;
use tracing::warn;

use crate::error::{MatError, Result};

/// JSON type name, for error messages
pub fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Extract a dimension (column or row count) from a JSON value
///
/// Numbers are truncated toward zero. Text is parsed by its leading integer
/// with a warning, since the field should have been a number.
pub fn extract_dim(value: &JsonValue, field: &str) -> Result<usize> {
    match value {
        JsonValue::Number(n) => {
            if let Some(u) = n.as_u64() {
                return usize::try_from(u)
                    .map_err(|_| MatError::type_error(format!("{} is too large: {}", field, u)));
            }
            let f = n.as_f64().unwrap_or(f64::NAN);
            if !f.is_finite() || f.trunc() < 0.0 {
                return Err(MatError::type_error(format!(
                    "{} must be a non-negative integer, got {}", field, n
                )));
            }
            if f.fract() != 0.0 {
                warn!(field, value = f, "fractional dimension truncated toward zero");
            }
            Ok(f.trunc() as usize)
        }
        JsonValue::String(s) => {
            warn!(field, value = %s, "dimension should be a number; parsing its integer prefix");
            match parse_int_prefix(s) {
                Some(i) if i >= 0 => Ok(i as usize),
                Some(i) => Err(MatError::type_error(format!(
                    "{} must be a non-negative integer, got {}", field, i
                ))),
                None => Err(MatError::type_error(format!(
                    "{} is not a number: '{}'", field, s
                ))),
            }
        }
        other => Err(MatError::type_error(format!(
            "{} must be a number, got {}", field, type_name(other)
        ))),
    }
}

/// Extract a numeric sequence from a JSON array
///
/// `null` entries read as NaN, which is how non-finite values serialize.
pub fn extract_numbers(value: &JsonValue, field: &str) -> Result<Vec<f64>> {
    let items = match value {
        JsonValue::Array(items) => items,
        other => return Err(MatError::type_error(format!(
            "{} must be an array, got {}", field, type_name(other)
        ))),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            JsonValue::Number(n) => Ok(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::Null => Ok(f64::NAN),
            other => Err(MatError::type_error(format!(
                "{} element {} must be a number, got {}", field, i, type_name(other)
            ))),
        })
        .collect()
}

/// Parse the leading integer of a string, ignoring leading whitespace
///
/// `"12abc"` gives 12, `"3.7"` gives 3, `"abc"` gives `None`.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }

    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Parse the longest leading float of a string, ignoring leading whitespace
///
/// Accepts an optional sign followed by `Infinity` or by digits with an
/// optional fraction and exponent. `"1.5kg"` gives 1.5, `"1 2"` gives 1,
/// `"inf"` and `"abc"` give `None`.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse::<f64>().ok();
    }

    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}
