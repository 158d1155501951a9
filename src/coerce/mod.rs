//! Type coercion of raw override strings.
//!
//! An override arrives as a string; the existing value at the target
//! location decides its final type. The rules are checked in a fixed order
//! over the JSON value kinds.

use serde_json::Value;

use crate::error::OverrideError;

/// Strings accepted as `true` when coercing into a boolean (compared
/// case-insensitively).
const TRUTHY: &[&str] = &["true", "yes", "y"];

/// Coerce `raw` to the type of `old`.
///
/// Rules, in order:
/// 1. absent or null target: the raw string passes through untyped;
/// 2. sequence target: a one-element sequence wrapping the coercion against
///    the first existing element (a comma-separated value is *not* split
///    here; see `list_rewrap_does_not_split_commas`);
/// 3. mapping target: rejected, the mapping is left unchanged;
/// 4. boolean target: true iff `raw` is one of the accepted truthy tokens;
/// 5. numeric or string target: parsed as the target's type.
///
/// # Errors
///
/// `UnsupportedCoercion` for mapping targets, `CoercionError` when `raw`
/// does not parse as the target's numeric type.
pub fn coerce(old: Option<&Value>, raw: &str, path: &str) -> Result<Value, OverrideError> {
    match old {
        None | Some(Value::Null) => Ok(Value::String(raw.to_string())),
        Some(Value::Array(items)) => {
            let inner = coerce(items.first(), raw, path)?;
            Ok(Value::Array(vec![inner]))
        }
        Some(Value::Object(_)) => Err(OverrideError::UnsupportedCoercion {
            path: path.to_string(),
        }),
        Some(Value::Bool(_)) => Ok(Value::Bool(is_truthy(raw))),
        Some(Value::Number(n)) => {
            if n.is_f64() {
                let parsed: f64 = raw.trim().parse().map_err(|_| coercion_error(path, raw, "float"))?;
                serde_json::Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(|| coercion_error(path, raw, "float"))
            } else {
                let parsed: i64 = raw.trim().parse().map_err(|_| coercion_error(path, raw, "integer"))?;
                Ok(Value::Number(parsed.into()))
            }
        }
        Some(Value::String(_)) => Ok(Value::String(raw.to_string())),
    }
}

fn is_truthy(raw: &str) -> bool {
    TRUTHY.contains(&raw.to_ascii_lowercase().as_str())
}

fn coercion_error(path: &str, raw: &str, expected: &'static str) -> OverrideError {
    OverrideError::CoercionError {
        path: path.to_string(),
        value: raw.to_string(),
        expected,
    }
}
