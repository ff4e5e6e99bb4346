//! Device-class dispatch for entity writes and read translation
//!
//! Each supported device class registers one entry in [`HANDLERS`]: its
//! entity-ID prefix, a write handler, and a read-translation function.
//! Classification is a pure prefix match over the entity ID; prefixes are
//! disjoint, so first match wins. Adding a device class is one new module
//! plus one table entry.

pub mod climate;
pub mod cover;
pub mod fan;
pub mod generic;
pub mod input_boolean;
pub mod light;
pub mod switch;

use crate::client::{EntityState, HassClient};
use crate::error::{HassError, Result};
use crate::registry::Register;
use futures::future::BoxFuture;
use serde_json::Value;

/// Supported device classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Light,
    InputBoolean,
    Fan,
    Climate,
    Switch,
    Cover,
}

/// Write handler: validates the (already coerced) value and issues the hub
/// service call(s) for one register.
pub type WriteFn =
    for<'a> fn(&'a dyn HassClient, &'a Register, &'a Value) -> BoxFuture<'a, Result<()>>;

/// Read translation: convert fetched entity data into the point value for one
/// register. `None` means the register is omitted from the scrape result.
pub type ReadFn = fn(&Register, &EntityState) -> Option<Value>;

/// Handler record for one device class
pub struct DeviceHandler {
    pub class: DeviceClass,
    pub prefix: &'static str,
    pub write: WriteFn,
    pub read: ReadFn,
}

/// Device-class registration table. Reads that match no entry fall back to
/// [`generic::translate`]; writes that match no entry are a hard error.
pub static HANDLERS: &[DeviceHandler] = &[
    DeviceHandler {
        class: DeviceClass::Light,
        prefix: "light.",
        write: write_light,
        read: light::translate,
    },
    DeviceHandler {
        class: DeviceClass::InputBoolean,
        prefix: "input_boolean.",
        write: write_input_boolean,
        read: input_boolean::translate,
    },
    DeviceHandler {
        class: DeviceClass::Fan,
        prefix: "fan.",
        write: write_fan,
        read: fan::translate,
    },
    DeviceHandler {
        class: DeviceClass::Climate,
        prefix: "climate.",
        write: write_climate,
        read: climate::translate,
    },
    DeviceHandler {
        class: DeviceClass::Switch,
        prefix: "switch.",
        write: write_switch,
        read: switch::translate,
    },
    DeviceHandler {
        class: DeviceClass::Cover,
        prefix: "cover.",
        write: write_cover,
        read: cover::translate,
    },
];

fn write_light<'a>(
    client: &'a dyn HassClient,
    register: &'a Register,
    value: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(light::write(client, register, value))
}

fn write_input_boolean<'a>(
    client: &'a dyn HassClient,
    register: &'a Register,
    value: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(input_boolean::write(client, register, value))
}

fn write_fan<'a>(
    client: &'a dyn HassClient,
    register: &'a Register,
    value: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(fan::write(client, register, value))
}

fn write_climate<'a>(
    client: &'a dyn HassClient,
    register: &'a Register,
    value: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(climate::write(client, register, value))
}

fn write_switch<'a>(
    client: &'a dyn HassClient,
    register: &'a Register,
    value: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(switch::write(client, register, value))
}

fn write_cover<'a>(
    client: &'a dyn HassClient,
    register: &'a Register,
    value: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(cover::write(client, register, value))
}

/// Classify an entity ID by its prefix. `None` for unrecognized prefixes.
pub fn classify(entity_id: &str) -> Option<&'static DeviceHandler> {
    HANDLERS.iter().find(|h| entity_id.starts_with(h.prefix))
}

/// Defensive prefix guard for standalone handler calls. Redundant with
/// dispatch, but each handler must reject foreign entity IDs on its own.
pub(crate) fn ensure_prefix(register: &Register, prefix: &str) -> Result<()> {
    if register.entity_id.starts_with(prefix) {
        Ok(())
    } else {
        Err(HassError::unsupported_entity(format!(
            "{} is not a valid {} entity ID",
            register.entity_id,
            prefix.trim_end_matches('.')
        )))
    }
}

/// Shared on/off state translation for binary-state entities
pub(crate) fn on_off_code(state: &str) -> Option<i64> {
    match state {
        "on" => Some(1),
        "off" => Some(0),
        _ => None,
    }
}
