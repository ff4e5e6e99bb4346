//! Mock client implementation for testing
//!
//! Serves canned entity states and records every service call so tests can
//! assert on the exact outbound surface (domain, service, JSON payload)
//! without a live hub.

use crate::client::{EntityState, HassClient};
use crate::error::{HassError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// One recorded service call
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub payload: Value,
}

/// Mock hub client for tests
///
/// Cloning shares the underlying state, so a test can keep one handle for
/// assertions while the driver owns another.
#[derive(Default, Clone)]
pub struct MockHassClient {
    states: Arc<Mutex<HashMap<String, EntityState>>>,
    calls: Arc<Mutex<Vec<ServiceCall>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl MockHassClient {
    /// Create a new mock client with no entities
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one entity's state and attributes
    pub fn with_entity(self, entity_id: &str, state: &str, attributes: Value) -> Self {
        let attributes = match attributes {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.states.lock().expect("mock states lock").insert(
            entity_id.to_string(),
            EntityState {
                entity_id: entity_id.to_string(),
                state: state.to_string(),
                attributes,
            },
        );
        self
    }

    /// Mark an entity so any state fetch for it fails
    pub fn with_failing_entity(self, entity_id: &str) -> Self {
        self.failing
            .lock()
            .expect("mock failing lock")
            .insert(entity_id.to_string());
        self
    }

    /// Update an entity's state after construction
    pub fn set_state(&self, entity_id: &str, state: &str) {
        let mut states = self.states.lock().expect("mock states lock");
        let entry = states
            .entry(entity_id.to_string())
            .or_insert_with(|| EntityState {
                entity_id: entity_id.to_string(),
                state: String::new(),
                attributes: Map::new(),
            });
        entry.state = state.to_string();
    }

    /// All service calls recorded so far
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().expect("mock calls lock").clone()
    }

    /// Number of service calls recorded so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock calls lock").len()
    }
}

#[async_trait]
impl HassClient for MockHassClient {
    async fn get_entity_state(&self, entity_id: &str) -> Result<EntityState> {
        if self
            .failing
            .lock()
            .expect("mock failing lock")
            .contains(entity_id)
        {
            return Err(HassError::hub_request(format!(
                "Request failed with status code 500, entity: {entity_id}, response: mock failure"
            )));
        }

        self.states
            .lock()
            .expect("mock states lock")
            .get(entity_id)
            .cloned()
            .ok_or_else(|| {
                HassError::hub_request(format!(
                    "Request failed with status code 404, entity: {entity_id}, response: not found"
                ))
            })
    }

    async fn call_service(&self, domain: &str, service: &str, payload: Value) -> Result<()> {
        self.calls.lock().expect("mock calls lock").push(ServiceCall {
            domain: domain.to_string(),
            service: service.to_string(),
            payload,
        });
        Ok(())
    }
}
