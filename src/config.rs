//! Connection configuration for the Home Assistant hub

use crate::error::{HassError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Hub connection parameters, fixed for the driver's lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Hub IP address or hostname (e.g., "192.168.1.100")
    pub ip_address: String,

    /// Hub HTTP port (Home Assistant default is 8123)
    pub port: u16,

    /// Long-lived access token sent as a bearer header on every request
    pub access_token: String,
}

impl ConnectionConfig {
    /// Create a new connection configuration
    pub fn new(
        ip_address: impl Into<String>,
        port: u16,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            ip_address: ip_address.into(),
            port,
            access_token: access_token.into(),
        }
    }

    /// Validate that all required connection parameters are present
    pub fn validate(&self) -> Result<()> {
        if self.ip_address.trim().is_empty() {
            return Err(HassError::config("IP address is required"));
        }
        if self.access_token.trim().is_empty() {
            return Err(HassError::config("Access token is required"));
        }
        if self.port == 0 {
            return Err(HassError::config("Port is required"));
        }
        Ok(())
    }

    /// Build the base URL used for every hub request
    pub fn base_url(&self) -> Result<Url> {
        let raw = format!("http://{}:{}", self.ip_address, self.port);
        Url::parse(&raw)
            .map_err(|e| HassError::config(format!("Invalid hub address {raw}: {e}")))
    }
}
