//! Point registry: register definitions and registry-row parsing
//!
//! Each register maps one platform-addressable point to a hub entity and one
//! of its state/attribute fields. Registers are created once from registry
//! rows at configure time and live for the driver's lifetime.

use crate::error::{HassError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Scalar type used to coerce incoming write values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegType {
    String,
    Integer,
    Float,
    Boolean,
}

impl Default for RegType {
    fn default() -> Self {
        Self::String
    }
}

impl RegType {
    /// Map a registry `Type` name to a register type. Unrecognized names fall
    /// back to string, matching the registry schema default.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Self::Integer,
            "float" => Self::Float,
            "bool" | "boolean" => Self::Boolean,
            _ => Self::String,
        }
    }

    /// Coerce an incoming write value to this scalar type.
    pub fn coerce(&self, entity_id: &str, value: &Value) -> Result<Value> {
        let coerced = match self {
            Self::String => match value {
                Value::String(_) => Some(value.clone()),
                Value::Number(n) => Some(Value::String(n.to_string())),
                Value::Bool(b) => Some(Value::String(b.to_string())),
                _ => None,
            },
            Self::Integer => match value {
                Value::Number(n) => n
                    .as_i64()
                    .or_else(|| n.as_f64().map(|f| f as i64))
                    .map(Value::from),
                Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
                Value::Bool(b) => Some(Value::from(i64::from(*b))),
                _ => None,
            },
            Self::Float => match value {
                Value::Number(n) => n.as_f64().map(Value::from),
                Value::String(s) => s.trim().parse::<f64>().ok().map(Value::from),
                Value::Bool(b) => Some(Value::from(if *b { 1.0 } else { 0.0 })),
                _ => None,
            },
            Self::Boolean => match value {
                Value::Bool(_) => Some(value.clone()),
                Value::Number(n) => match n.as_i64() {
                    Some(0) => Some(Value::Bool(false)),
                    Some(1) => Some(Value::Bool(true)),
                    _ => None,
                },
                Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" => Some(Value::Bool(true)),
                    "false" => Some(Value::Bool(false)),
                    _ => None,
                },
                _ => None,
            },
        };

        coerced.ok_or_else(|| {
            HassError::invalid_value(format!(
                "Value {value} for {entity_id} cannot be coerced to type {self:?}"
            ))
        })
    }
}

/// One monitored/controlled point
#[derive(Debug, Clone)]
pub struct Register {
    /// Unique platform-side identifier for this point
    pub point_name: String,

    /// Hub entity ID; the prefix before '.' selects the device class
    pub entity_id: String,

    /// Entity state or attribute this register targets ("state", "brightness", ...)
    pub entity_point: String,

    /// Scalar type for write coercion
    pub reg_type: RegType,

    /// Write attempts against a read-only register fail
    pub read_only: bool,

    /// Units label; "C" triggers outbound temperature conversion for climate
    pub units: String,

    /// Free-form notes from the registry row
    pub description: String,

    /// Optional attribute metadata from the registry row
    pub attributes: Value,

    /// Last known/written value, mutated on every read or write
    pub value: Value,
}

/// One registry configuration row, as supplied by the host platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryRow {
    #[serde(rename = "Entity ID", default)]
    pub entity_id: String,

    #[serde(rename = "Entity Point", default)]
    pub entity_point: String,

    #[serde(rename = "Volttron Point Name")]
    pub point_name: String,

    #[serde(rename = "Units", default)]
    pub units: String,

    /// Stringly boolean; a case-insensitive "true" means writable
    #[serde(rename = "Writable", default)]
    pub writable: Value,

    #[serde(rename = "Type", default)]
    pub reg_type: Option<String>,

    #[serde(rename = "Notes", default)]
    pub notes: String,

    #[serde(rename = "Attributes", default)]
    pub attributes: Value,
}

impl RegistryRow {
    /// Interpret the stringly `Writable` flag
    pub fn is_writable(&self) -> bool {
        match &self.writable {
            Value::Bool(b) => *b,
            Value::String(s) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

/// Build the register set from registry rows. Rows with an empty entity ID
/// are skipped; duplicate point names are a configuration error.
pub fn parse_registry(rows: &[RegistryRow]) -> Result<Vec<Register>> {
    let mut registers = Vec::new();
    let mut seen_names = HashSet::new();

    for row in rows {
        if row.entity_id.trim().is_empty() {
            debug!("Skipping registry row without an entity ID: {}", row.point_name);
            continue;
        }

        if !seen_names.insert(row.point_name.clone()) {
            return Err(HassError::config(format!(
                "Duplicate point name in registry: {}",
                row.point_name
            )));
        }

        let reg_type = row
            .reg_type
            .as_deref()
            .map(RegType::from_name)
            .unwrap_or_default();

        registers.push(Register {
            point_name: row.point_name.clone(),
            entity_id: row.entity_id.clone(),
            entity_point: row.entity_point.clone(),
            reg_type,
            read_only: !row.is_writable(),
            units: row.units.clone(),
            description: row.notes.clone(),
            attributes: row.attributes.clone(),
            value: Value::Null,
        });
    }

    Ok(registers)
}
