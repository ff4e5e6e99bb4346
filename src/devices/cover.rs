//! Cover write handling and read translation
//!
//! Writable points: `state` (0=close, 1=open, 2=stop), `position` /
//! `current_position` and `tilt_position` / `current_tilt_position`
//! (0-100, truncated to an integer before sending).

use crate::client::{EntityState, HassClient};
use crate::devices::ensure_prefix;
use crate::error::{HassError, Result};
use crate::registry::Register;
use crate::validation::{validate_range, validate_state_code};
use serde_json::{json, Value};
use tracing::warn;

pub(crate) async fn write(
    client: &dyn HassClient,
    register: &Register,
    value: &Value,
) -> Result<()> {
    ensure_prefix(register, "cover.")?;
    let entity_id = &register.entity_id;

    match register.entity_point.as_str() {
        "state" => {
            let code = validate_state_code(entity_id, value, &[0, 1, 2])?;
            let service = match code {
                0 => "close_cover",
                1 => "open_cover",
                _ => "stop_cover",
            };
            client
                .call_service("cover", service, json!({ "entity_id": entity_id }))
                .await
        }
        "position" | "current_position" => {
            let position = validate_range(entity_id, "position", value, 0.0, 100.0)?;
            client
                .call_service(
                    "cover",
                    "set_cover_position",
                    json!({ "entity_id": entity_id, "position": position as i64 }),
                )
                .await
        }
        "tilt_position" | "current_tilt_position" => {
            let tilt = validate_range(entity_id, "tilt_position", value, 0.0, 100.0)?;
            client
                .call_service(
                    "cover",
                    "set_cover_tilt_position",
                    json!({ "entity_id": entity_id, "tilt_position": tilt as i64 }),
                )
                .await
        }
        other => Err(HassError::unsupported_point(format!(
            "Unsupported entity point '{other}' for cover {entity_id}. Supported points: \
             state, position, current_position, tilt_position, current_tilt_position"
        ))),
    }
}

pub(crate) fn translate(register: &Register, entity: &EntityState) -> Option<Value> {
    if register.entity_point == "state" {
        match entity.state.as_str() {
            "open" | "opening" => Some(json!(1)),
            "closed" | "closing" => Some(json!(0)),
            other => {
                warn!(
                    "Unknown cover state '{other}' for {}, defaulting to 0",
                    register.entity_id
                );
                Some(json!(0))
            }
        }
    } else {
        Some(entity.attribute_or(&register.entity_point, json!(0)))
    }
}
