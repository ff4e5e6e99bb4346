//! Generic read fallback for entities without a registered device class
//!
//! State passes through as the raw state string; attributes pass through
//! with a default of 0 when absent. Writes never reach this module; an
//! unclassified entity is a hard error on the write path.

use crate::client::EntityState;
use crate::registry::Register;
use serde_json::{json, Value};

pub(crate) fn translate(register: &Register, entity: &EntityState) -> Option<Value> {
    if register.entity_point == "state" {
        Some(json!(entity.state))
    } else {
        Some(entity.attribute_or(&register.entity_point, json!(0)))
    }
}
