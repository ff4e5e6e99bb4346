//! Home Assistant point driver
//!
//! This crate maps platform-side points (named, typed, read/write-flagged
//! registers) to Home Assistant entities over the hub's REST API. Writes are
//! validated and dispatched to a per-device-class handler by entity-ID
//! prefix; bulk reads fetch every register's entity and translate hub state
//! strings into numeric point values.
//!
//! Supported device classes: light, input_boolean, fan, climate, switch,
//! cover, plus a generic passthrough fallback for reads.
//!
//! # Example
//!
//! ```rust,no_run
//! use hass_point_driver::{ConnectionConfig, HassDriver, RegistryRow};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectionConfig::new("192.168.1.100", 8123, "token");
//!     let rows: Vec<RegistryRow> = serde_json::from_str(
//!         r#"[{"Entity ID": "switch.lamp", "Entity Point": "state",
//!              "Volttron Point Name": "lamp", "Units": "On / Off",
//!              "Writable": "true", "Type": "int"}]"#,
//!     )?;
//!     let mut driver = HassDriver::configure(&config, &rows)?;
//!     driver.set_point("lamp", json!(1)).await?;
//!     let values = driver.scrape_all().await?;
//!     println!("{values:?}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod devices;
pub mod driver;
pub mod error;
pub mod logging;
pub mod mock;
pub mod registry;
pub mod validation;

// Re-export main types
pub use crate::{
    client::{EntityState, HassClient},
    config::ConnectionConfig,
    driver::HassDriver,
    error::{HassError, Result},
    registry::{RegType, Register, RegistryRow},
};
