//! Error types for the Home Assistant point driver

use thiserror::Error;

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, HassError>;

/// Error taxonomy for point driver operations
#[derive(Error, Debug)]
pub enum HassError {
    /// Configuration errors (missing connection parameters, bad registry rows)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown point name
    #[error("Point not found: {0}")]
    NotFound(String),

    /// Write attempted against a read-only register
    #[error("Write rejected: {0}")]
    ReadOnly(String),

    /// Value failed a type, range, or enumeration check
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// No device-class handler matches the entity ID
    #[error("Unsupported entity: {0}")]
    UnsupportedEntity(String),

    /// The device class has no rule for the requested entity point
    #[error("Unsupported entity point: {0}")]
    UnsupportedPoint(String),

    /// Non-200 response or transport failure talking to the hub
    #[error("Hub request failed: {0}")]
    HubRequest(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl HassError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a point-not-found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a read-only write-guard error
    pub fn read_only<S: Into<String>>(msg: S) -> Self {
        Self::ReadOnly(msg.into())
    }

    /// Create a validation error
    pub fn invalid_value<S: Into<String>>(msg: S) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Create an unsupported-entity error
    pub fn unsupported_entity<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedEntity(msg.into())
    }

    /// Create an unsupported-entity-point error
    pub fn unsupported_point<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedPoint(msg.into())
    }

    /// Create a hub request error
    pub fn hub_request<S: Into<String>>(msg: S) -> Self {
        Self::HubRequest(msg.into())
    }

    /// Check if the error was raised before any hub call was made
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            HassError::ReadOnly(_)
                | HassError::InvalidValue(_)
                | HassError::UnsupportedEntity(_)
                | HassError::UnsupportedPoint(_)
        )
    }

    /// Check if the error came from talking to the hub
    pub fn is_hub_error(&self) -> bool {
        matches!(self, HassError::HubRequest(_) | HassError::Http(_))
    }
}
