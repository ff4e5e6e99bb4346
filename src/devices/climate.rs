//! Thermostat (climate) write handling and read translation
//!
//! HVAC modes are exchanged as integer codes on the platform side:
//! 0=off, 2=heat, 3=cool, 4=auto. Temperature writes are assumed to be in
//! Fahrenheit and are converted to Celsius only when the register's units
//! are "C". The inbound direction is never converted; scraped temperature
//! attributes pass through as the hub reports them.

use crate::client::{EntityState, HassClient};
use crate::devices::ensure_prefix;
use crate::error::{HassError, Result};
use crate::registry::Register;
use crate::validation::validate_state_code;
use serde_json::{json, Value};
use tracing::{info, warn};

const HVAC_MODES: &[(i64, &str)] = &[(0, "off"), (2, "heat"), (3, "cool"), (4, "auto")];

fn mode_name(code: i64) -> Option<&'static str> {
    HVAC_MODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

fn mode_code(name: &str) -> Option<i64> {
    HVAC_MODES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
}

pub(crate) async fn write(
    client: &dyn HassClient,
    register: &Register,
    value: &Value,
) -> Result<()> {
    ensure_prefix(register, "climate.")?;
    let entity_id = &register.entity_id;

    match register.entity_point.as_str() {
        "state" => {
            let code = validate_state_code(entity_id, value, &[0, 2, 3, 4])?;
            // Allowed codes all map; checked above
            let mode = mode_name(code).unwrap_or("off");
            client
                .call_service(
                    "climate",
                    "set_hvac_mode",
                    json!({ "entity_id": entity_id, "hvac_mode": mode }),
                )
                .await
        }
        "temperature" => {
            let temperature = value.as_f64().ok_or_else(|| {
                HassError::invalid_value(format!(
                    "Temperature for {entity_id} should be a number, got {value}"
                ))
            })?;

            let outbound = if register.units == "C" {
                let converted = fahrenheit_to_celsius(temperature);
                info!("Converted temperature for {entity_id}: {temperature}F -> {converted}C");
                json!(converted)
            } else {
                value.clone()
            };

            client
                .call_service(
                    "climate",
                    "set_temperature",
                    json!({ "entity_id": entity_id, "temperature": outbound }),
                )
                .await
        }
        other => Err(HassError::unsupported_point(format!(
            "Unsupported entity point '{other}' for climate {entity_id}. \
             Supported points: state, temperature"
        ))),
    }
}

/// Fahrenheit to Celsius, rounded to one decimal place
fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    ((fahrenheit - 32.0) * 5.0 / 9.0 * 10.0).round() / 10.0
}

pub(crate) fn translate(register: &Register, entity: &EntityState) -> Option<Value> {
    if register.entity_point == "state" {
        match mode_code(&entity.state) {
            Some(code) => Some(json!(code)),
            None => {
                warn!(
                    "HVAC state '{}' from {} is not yet supported",
                    entity.state, register.entity_id
                );
                Some(Value::Null)
            }
        }
    } else {
        Some(entity.attribute_or(&register.entity_point, json!(0)))
    }
}
