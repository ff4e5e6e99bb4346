//! Shared helpers for integration tests

use hass_point_driver::mock::MockHassClient;
use hass_point_driver::{HassDriver, RegistryRow};
use serde_json::{json, Value};

/// Build a registry row the way the host platform would supply it
pub fn row(
    point_name: &str,
    entity_id: &str,
    entity_point: &str,
    reg_type: &str,
    writable: bool,
) -> RegistryRow {
    RegistryRow {
        entity_id: entity_id.to_string(),
        entity_point: entity_point.to_string(),
        point_name: point_name.to_string(),
        units: String::new(),
        writable: json!(if writable { "true" } else { "false" }),
        reg_type: Some(reg_type.to_string()),
        notes: String::new(),
        attributes: Value::Null,
    }
}

/// Driver over a shared handle to the given mock client
pub fn driver_with(mock: &MockHassClient, rows: &[RegistryRow]) -> HassDriver {
    HassDriver::with_client(Box::new(mock.clone()), rows).expect("driver configuration")
}
