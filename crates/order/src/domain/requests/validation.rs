//! Rule helpers shared by the order payload validators.
//!
//! Each rule inspects one raw JSON value and either yields the typed value or
//! a single [`ValidationError`] carrying the client-facing message.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use shared::errors::FieldError;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// A raw payload that checks and converts itself in a single pass.
///
/// `FIELDS` fixes the order in which failures are reported.
pub trait ValidatedPayload {
    type Output;
    const FIELDS: &'static [&'static str];

    fn parse(&self) -> Result<Self::Output, ValidationErrors>;
}

/// Keeps an explicit `null` distinct from an absent field.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

pub fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Records a rule failure under `field` and hands back the value on success.
pub fn collect<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<T, ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.add(field, err);
            None
        }
    }
}

pub fn required<'a>(
    value: &'a Option<Value>,
    message: &'static str,
) -> Result<&'a Value, ValidationError> {
    value.as_ref().ok_or_else(|| rule_error("required", message))
}

pub fn optional<T, F>(value: &Option<Value>, rule: F) -> Result<Option<T>, ValidationError>
where
    F: FnOnce(&Value) -> Result<T, ValidationError>,
{
    value.as_ref().map(rule).transpose()
}

/// Trimmed, non-empty text.
pub fn text(
    value: &Value,
    required_message: &'static str,
    string_message: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(rule_error("required", required_message))
            } else {
                Ok(trimmed.to_string())
            }
        }
        _ => Err(rule_error("string", string_message)),
    }
}

fn whole_number(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64).then_some(f as i64)
}

/// Whole number no smaller than `min`.
///
/// JSON numbers like `2.0` count, as do strings of digits with an optional
/// sign (`"2"`, `"+2"`).
pub fn integer_at_least(value: &Value, min: i64, message: &'static str) -> Result<i64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .filter(|n| *n >= min)
        .ok_or_else(|| rule_error("integer", message))
}

/// Decimal text in plain or exponent form; no `inf`/`NaN` spellings.
fn decimal_text(s: &str) -> Option<f64> {
    let well_formed = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));

    well_formed
        .then(|| s.parse::<f64>().ok())
        .flatten()
        .filter(|f| f.is_finite())
}

/// Finite number `>= 0`, given as a JSON number or decimal text.
pub fn non_negative_number(value: &Value, message: &'static str) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => decimal_text(s),
        _ => None,
    };

    parsed
        .filter(|n| *n >= 0.0)
        .ok_or_else(|| rule_error("float", message))
}

/// JSON booleans, `0`/`1`, and the strings `"true"`, `"false"`, `"1"`, `"0"`.
pub fn boolean(value: &Value, message: &'static str) -> Result<bool, ValidationError> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };

    parsed.ok_or_else(|| rule_error("boolean", message))
}

pub fn one_of<T, F>(value: &Value, parse: F, message: &'static str) -> Result<T, ValidationError>
where
    F: FnOnce(&str) -> Option<T>,
{
    value
        .as_str()
        .and_then(parse)
        .ok_or_else(|| rule_error("in", message))
}

/// Flattens `errors` into `{field, message}` pairs following `fields`.
pub fn ordered_field_errors(errors: &ValidationErrors, fields: &[&'static str]) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                FieldError::new(field, message)
            })
        })
        .collect()
}
