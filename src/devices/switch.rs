//! Switch write handling and read translation
//!
//! Only `state` is writable (0/1 mapped to turn_off/turn_on).

use crate::client::{EntityState, HassClient};
use crate::devices::{ensure_prefix, on_off_code};
use crate::error::{HassError, Result};
use crate::registry::Register;
use crate::validation::validate_state_code;
use serde_json::{json, Value};

pub(crate) async fn write(
    client: &dyn HassClient,
    register: &Register,
    value: &Value,
) -> Result<()> {
    ensure_prefix(register, "switch.")?;

    match register.entity_point.as_str() {
        "state" => {
            let code = validate_state_code(&register.entity_id, value, &[0, 1])?;
            let service = if code == 1 { "turn_on" } else { "turn_off" };
            client
                .call_service("switch", service, json!({ "entity_id": register.entity_id }))
                .await
        }
        other => Err(HassError::unsupported_point(format!(
            "Unsupported entity point '{other}' for switch {}. Supported points: state",
            register.entity_id
        ))),
    }
}

pub(crate) fn translate(register: &Register, entity: &EntityState) -> Option<Value> {
    if register.entity_point == "state" {
        match on_off_code(&entity.state) {
            Some(code) => Some(json!(code)),
            // Unmapped switch states pass through as the raw state string
            None => Some(json!(entity.state)),
        }
    } else {
        Some(entity.attribute_or(&register.entity_point, Value::Null))
    }
}
