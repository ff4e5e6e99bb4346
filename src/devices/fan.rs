//! Fan write handling and read translation
//!
//! Writable points: `state` (0/1), `percentage` (0-100), `preset_mode`
//! (non-empty string), `direction` ("forward"/"reverse"), and `oscillating`
//! (boolean or 0/1, sent as a boolean payload).

use crate::client::{EntityState, HassClient};
use crate::devices::{ensure_prefix, on_off_code};
use crate::error::{HassError, Result};
use crate::registry::Register;
use crate::validation::{
    validate_choice, validate_flag, validate_non_empty_string, validate_range,
    validate_state_code,
};
use serde_json::{json, Map, Value};

pub(crate) async fn write(
    client: &dyn HassClient,
    register: &Register,
    value: &Value,
) -> Result<()> {
    ensure_prefix(register, "fan.")?;
    let entity_id = &register.entity_id;

    match register.entity_point.as_str() {
        "state" => {
            let code = validate_state_code(entity_id, value, &[0, 1])?;
            if code == 1 {
                turn_on(client, entity_id, None, None).await
            } else {
                client
                    .call_service("fan", "turn_off", json!({ "entity_id": entity_id }))
                    .await
            }
        }
        "percentage" => {
            validate_range(entity_id, "percentage", value, 0.0, 100.0)?;
            client
                .call_service(
                    "fan",
                    "set_percentage",
                    json!({ "entity_id": entity_id, "percentage": value }),
                )
                .await
        }
        "preset_mode" => {
            let mode = validate_non_empty_string(entity_id, "preset_mode", value)?;
            client
                .call_service(
                    "fan",
                    "set_preset_mode",
                    json!({ "entity_id": entity_id, "preset_mode": mode }),
                )
                .await
        }
        "direction" => {
            let direction =
                validate_choice(entity_id, "direction", value, &["forward", "reverse"])?;
            client
                .call_service(
                    "fan",
                    "set_direction",
                    json!({ "entity_id": entity_id, "direction": direction }),
                )
                .await
        }
        "oscillating" => {
            let oscillating = validate_flag(entity_id, "oscillating", value)?;
            client
                .call_service(
                    "fan",
                    "oscillate",
                    json!({ "entity_id": entity_id, "oscillating": oscillating }),
                )
                .await
        }
        other => Err(HassError::unsupported_point(format!(
            "Unsupported entity point '{other}' for fan {entity_id}. \
             Supported points: state, percentage, preset_mode, direction, oscillating"
        ))),
    }
}

/// Turn on a fan, optionally with a speed percentage or preset mode.
///
/// The write dispatch above only ever calls this with neither option set; the
/// optional fields exist for direct callers of the fan API.
pub async fn turn_on(
    client: &dyn HassClient,
    entity_id: &str,
    percentage: Option<f64>,
    preset_mode: Option<&str>,
) -> Result<()> {
    let mut payload = Map::new();
    payload.insert("entity_id".to_string(), json!(entity_id));
    if let Some(percentage) = percentage {
        payload.insert("percentage".to_string(), json!(percentage));
    }
    if let Some(preset_mode) = preset_mode {
        payload.insert("preset_mode".to_string(), json!(preset_mode));
    }
    client
        .call_service("fan", "turn_on", Value::Object(payload))
        .await
}

pub(crate) fn translate(register: &Register, entity: &EntityState) -> Option<Value> {
    match register.entity_point.as_str() {
        "state" => match on_off_code(&entity.state) {
            Some(code) => Some(json!(code)),
            // Unmapped fan states pass through as the raw state string
            None => Some(json!(entity.state)),
        },
        "oscillating" => {
            let oscillating = entity
                .attribute_or("oscillating", json!(false))
                .as_bool()
                .unwrap_or(false);
            Some(json!(i64::from(oscillating)))
        }
        attribute => Some(entity.attribute_or(attribute, Value::Null)),
    }
}
