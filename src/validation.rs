//! Write-value validation
//!
//! Every contract here runs before any hub call is issued. Error messages
//! name the entity, the constraint, and the offending value so callers can
//! diagnose rejected writes without hub logs.

use crate::error::{HassError, Result};
use serde_json::Value;

/// Validate an enumerated integer state code (e.g., {0,1} for on/off,
/// {0,2,3,4} for HVAC modes, {0,1,2} for cover commands).
pub fn validate_state_code(entity_id: &str, value: &Value, allowed: &[i64]) -> Result<i64> {
    if let Some(code) = value.as_i64() {
        if allowed.contains(&code) {
            return Ok(code);
        }
    }
    Err(HassError::invalid_value(format!(
        "State value for {entity_id} should be an integer value of {}, got {value}",
        join_codes(allowed)
    )))
}

/// Validate a numeric value within an inclusive range.
pub fn validate_range(
    entity_id: &str,
    point: &str,
    value: &Value,
    min: f64,
    max: f64,
) -> Result<f64> {
    if let Some(number) = value.as_f64() {
        if (min..=max).contains(&number) {
            return Ok(number);
        }
    }
    Err(HassError::invalid_value(format!(
        "{point} for {entity_id} should be a number between {min} and {max}, got {value}"
    )))
}

/// Validate a string drawn from a fixed set of choices.
pub fn validate_choice(
    entity_id: &str,
    point: &str,
    value: &Value,
    choices: &[&str],
) -> Result<String> {
    if let Some(text) = value.as_str() {
        if choices.contains(&text) {
            return Ok(text.to_string());
        }
    }
    Err(HassError::invalid_value(format!(
        "{point} for {entity_id} should be one of {choices:?}, got {value}"
    )))
}

/// Validate a non-empty string (degenerate enumeration: anything non-empty).
pub fn validate_non_empty_string(entity_id: &str, point: &str, value: &Value) -> Result<String> {
    if let Some(text) = value.as_str() {
        if !text.is_empty() {
            return Ok(text.to_string());
        }
    }
    Err(HassError::invalid_value(format!(
        "{point} for {entity_id} should be a non-empty string, got {value}"
    )))
}

/// Validate a boolean-like flag: true/false or an integer 0/1.
pub fn validate_flag(entity_id: &str, point: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(flag_error(entity_id, point, value)),
        },
        _ => Err(flag_error(entity_id, point, value)),
    }
}

fn flag_error(entity_id: &str, point: &str, value: &Value) -> HassError {
    HassError::invalid_value(format!(
        "{point} for {entity_id} should be 0, 1, true, or false, got {value}"
    ))
}

fn join_codes(allowed: &[i64]) -> String {
    allowed
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
