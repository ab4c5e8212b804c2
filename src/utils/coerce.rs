//! Scalar Coercions
//!
//! Lenient conversions from loosely-typed JSON values to the canonical scalar
//! fields of an equipment item. None of these fail: unusable input degrades
//! to the field's default.

use serde_json::Value;

/// Free-text field: strings are trimmed, numbers and booleans stringified,
/// anything else becomes empty.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Truthiness of a raw flag: null, false, 0 and "" are false, everything
/// else (including the strings `"0"` and `"false"`) is true.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Numeric value from a number or a numeric string. Non-finite values are
/// rejected.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let v = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

/// Technical level: positive values are rounded up, everything else is 1.
///
/// Rounding up keeps `level > ceiling` comparisons identical to comparing the
/// raw fractional value against an integer ceiling.
pub fn tech_level(value: Option<&Value>) -> u32 {
    match number(value) {
        Some(v) if v > 0.0 => v.ceil().min(u32::MAX as f64) as u32,
        _ => 1,
    }
}

/// Declared weight in grams, if it is a non-negative number.
pub fn weight_grams(value: Option<&Value>) -> Option<f64> {
    number(value).filter(|w| *w >= 0.0)
}
