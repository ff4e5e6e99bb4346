//! Point driver: the external interface exposed to the host platform
//!
//! A driver owns a hub client and the register set built from registry rows.
//! Writes are guarded (read-only flag, type coercion, per-class validation)
//! before a single service call is issued; bulk reads fetch one entity per
//! register in configuration order and tolerate per-register failure.

use crate::client::http_client::HassHttpClient;
use crate::client::HassClient;
use crate::config::ConnectionConfig;
use crate::devices::{self, generic};
use crate::error::{HassError, Result};
use crate::registry::{parse_registry, Register, RegistryRow};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, error};

/// Driver instance mapping platform points to hub entities
pub struct HassDriver {
    client: Box<dyn HassClient>,
    registers: Vec<Register>,
}

impl HassDriver {
    /// Configure a driver against a live hub. Fails fast on missing
    /// connection parameters or bad registry rows.
    pub fn configure(config: &ConnectionConfig, rows: &[RegistryRow]) -> Result<Self> {
        config.validate()?;
        let client = HassHttpClient::new(config)?;
        Self::with_client(Box::new(client), rows)
    }

    /// Build a driver over any client implementation. Used by tests to plug
    /// in the recording mock.
    pub fn with_client(client: Box<dyn HassClient>, rows: &[RegistryRow]) -> Result<Self> {
        let registers = parse_registry(rows)?;
        debug!("Configured driver with {} registers", registers.len());
        Ok(Self { client, registers })
    }

    /// All configured registers, in configuration order
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Look up a register by point name
    pub fn register_by_name(&self, point_name: &str) -> Result<&Register> {
        self.registers
            .iter()
            .find(|r| r.point_name == point_name)
            .ok_or_else(|| HassError::not_found(format!("Unknown point name: {point_name}")))
    }

    fn index_of(&self, point_name: &str) -> Result<usize> {
        self.registers
            .iter()
            .position(|r| r.point_name == point_name)
            .ok_or_else(|| HassError::not_found(format!("Unknown point name: {point_name}")))
    }

    /// Read a single point straight from the hub.
    ///
    /// Returns the raw state string when the register targets `state`,
    /// otherwise the named attribute (0 when absent).
    pub async fn get_point(&mut self, point_name: &str) -> Result<Value> {
        let idx = self.index_of(point_name)?;
        let entity_id = self.registers[idx].entity_id.clone();
        let entity = self.client.get_entity_state(&entity_id).await?;

        let register = &self.registers[idx];
        let value = if register.entity_point == "state" {
            json!(entity.state)
        } else {
            entity.attribute_or(&register.entity_point, json!(0))
        };

        self.registers[idx].value = value.clone();
        Ok(value)
    }

    /// Write a single point.
    ///
    /// The value is coerced to the register's scalar type, validated by the
    /// device-class handler, and sent as one service call. Returns the value
    /// written (post-coercion, pre-translation).
    pub async fn set_point(&mut self, point_name: &str, value: Value) -> Result<Value> {
        let idx = self.index_of(point_name)?;

        let register = &self.registers[idx];
        if register.read_only {
            return Err(HassError::read_only(format!(
                "Trying to write to a point configured read only: {point_name}"
            )));
        }

        let coerced = register.reg_type.coerce(&register.entity_id, &value)?;

        let handler = devices::classify(&register.entity_id).ok_or_else(|| {
            HassError::unsupported_entity(format!(
                "Unsupported entity ID: {}. Writes are supported for lights, input booleans, \
                 fans, thermostats, switches, and covers",
                register.entity_id
            ))
        })?;

        (handler.write)(self.client.as_ref(), register, &coerced).await?;

        self.registers[idx].value = coerced.clone();
        Ok(coerced)
    }

    /// Bulk read of every configured point.
    ///
    /// One entity fetch per register, sequentially in configuration order.
    /// A failed fetch or translation logs an error and omits that register;
    /// the scrape itself never aborts.
    pub async fn scrape_all(&mut self) -> Result<HashMap<String, Value>> {
        let mut result = HashMap::new();

        for idx in 0..self.registers.len() {
            let entity_id = self.registers[idx].entity_id.clone();
            let scraped = self.scrape_one(idx).await;
            match scraped {
                Ok(Some(value)) => {
                    result.insert(self.registers[idx].point_name.clone(), value);
                }
                Ok(None) => {}
                Err(e) => {
                    error!("An unexpected error occurred for entity {entity_id}: {e}");
                }
            }
        }

        Ok(result)
    }

    async fn scrape_one(&mut self, idx: usize) -> Result<Option<Value>> {
        let entity_id = self.registers[idx].entity_id.clone();
        let entity = self.client.get_entity_state(&entity_id).await?;

        let register = &self.registers[idx];
        let translated = match devices::classify(&register.entity_id) {
            Some(handler) => (handler.read)(register, &entity),
            None => generic::translate(register, &entity),
        };

        if let Some(value) = translated {
            self.registers[idx].value = value.clone();
            return Ok(Some(value));
        }
        Ok(None)
    }
}
