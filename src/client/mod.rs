//! Client trait and shared types for Home Assistant hub communication

pub mod http_client;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State and attributes of a single hub entity, as returned by
/// `GET /api/states/{entity_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityState {
    /// Entity ID echoed back by the hub
    #[serde(default)]
    pub entity_id: String,

    /// Current state string (e.g., "on", "off", "heat", "open")
    #[serde(default)]
    pub state: String,

    /// Entity attributes (brightness, percentage, current_position, ...)
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EntityState {
    /// Look up an attribute, falling back to the given default when absent
    pub fn attribute_or(&self, name: &str, default: Value) -> Value {
        self.attributes.get(name).cloned().unwrap_or(default)
    }
}

/// Trait for hub client implementations
///
/// Device handlers and the driver only see this trait, so tests can swap in
/// the recording mock from [`crate::mock`].
#[async_trait]
pub trait HassClient: Send + Sync {
    /// Fetch current state and attributes of one entity
    async fn get_entity_state(&self, entity_id: &str) -> Result<EntityState>;

    /// Call a hub service; the payload always carries at least `entity_id`
    async fn call_service(&self, domain: &str, service: &str, payload: Value) -> Result<()>;
}
