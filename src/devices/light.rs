//! Light write handling and read translation
//!
//! Writable points: `state` (0/1 mapped to turn_off/turn_on) and
//! `brightness` (0-255, sent via turn_on with a brightness payload).

use crate::client::{EntityState, HassClient};
use crate::devices::{ensure_prefix, on_off_code};
use crate::error::{HassError, Result};
use crate::registry::Register;
use crate::validation::{validate_range, validate_state_code};
use serde_json::{json, Value};
use tracing::debug;

pub(crate) async fn write(
    client: &dyn HassClient,
    register: &Register,
    value: &Value,
) -> Result<()> {
    ensure_prefix(register, "light.")?;

    match register.entity_point.as_str() {
        "state" => {
            let code = validate_state_code(&register.entity_id, value, &[0, 1])?;
            let service = if code == 1 { "turn_on" } else { "turn_off" };
            client
                .call_service("light", service, json!({ "entity_id": register.entity_id }))
                .await
        }
        "brightness" => {
            validate_range(&register.entity_id, "brightness", value, 0.0, 255.0)?;
            client
                .call_service(
                    "light",
                    "turn_on",
                    json!({ "entity_id": register.entity_id, "brightness": value }),
                )
                .await
        }
        other => Err(HassError::unsupported_point(format!(
            "Unsupported entity point '{other}' for light {}. Supported points: state, brightness",
            register.entity_id
        ))),
    }
}

pub(crate) fn translate(register: &Register, entity: &EntityState) -> Option<Value> {
    if register.entity_point == "state" {
        match on_off_code(&entity.state) {
            Some(code) => Some(json!(code)),
            None => {
                debug!(
                    "Unmapped light state '{}' for {}",
                    entity.state, register.entity_id
                );
                None
            }
        }
    } else {
        Some(entity.attribute_or(&register.entity_point, json!(0)))
    }
}
