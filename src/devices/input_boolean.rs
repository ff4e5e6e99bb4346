//! Boolean helper (input_boolean) write handling and read translation
//!
//! Only `state` is writable. Reads share the on/off translation used by
//! lights since the hub reports the same state strings for both.

use crate::client::{EntityState, HassClient};
use crate::devices::{ensure_prefix, light};
use crate::error::{HassError, Result};
use crate::registry::Register;
use crate::validation::validate_state_code;
use serde_json::{json, Value};

pub(crate) async fn write(
    client: &dyn HassClient,
    register: &Register,
    value: &Value,
) -> Result<()> {
    ensure_prefix(register, "input_boolean.")?;

    match register.entity_point.as_str() {
        "state" => {
            let code = validate_state_code(&register.entity_id, value, &[0, 1])?;
            let service = if code == 1 { "turn_on" } else { "turn_off" };
            client
                .call_service(
                    "input_boolean",
                    service,
                    json!({ "entity_id": register.entity_id }),
                )
                .await
        }
        other => Err(HassError::unsupported_point(format!(
            "Unsupported entity point '{other}' for input_boolean {}. Supported points: state",
            register.entity_id
        ))),
    }
}

pub(crate) fn translate(register: &Register, entity: &EntityState) -> Option<Value> {
    light::translate(register, entity)
}
