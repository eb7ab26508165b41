//! Service configuration, read once at startup from the environment.

use std::env;
use std::fmt::Display;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use receipt_points_core::{ReceiptSchema, ReceiptValidator, SchemaError};
use thiserror::Error;
use tracing::{info, warn};

use crate::processor::ProcessorConfig;

pub const HOST_VAR: &str = "RECEIPTS_HOST";
pub const PORT_VAR: &str = "RECEIPTS_PORT";
pub const SCHEMA_PATH_VAR: &str = "RECEIPTS_SCHEMA_PATH";
pub const VALIDATE_VAR: &str = "RECEIPTS_VALIDATE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_VALIDATE: &str = "true";

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot read receipt schema {path:?}: {source}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse receipt schema {path:?}: {source}")]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("receipt schema is invalid: {0}")]
    Schema(#[from] SchemaError),
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// JSON schema artifact. `None` uses the built-in contract.
    pub schema_path: Option<PathBuf>,
    pub processor: ProcessorConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 8080,
            schema_path: None,
            processor: ProcessorConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from process environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, HOST_VAR, DEFAULT_HOST)?,
            port: try_load(&lookup, PORT_VAR, DEFAULT_PORT)?,
            schema_path: lookup(SCHEMA_PATH_VAR).map(PathBuf::from),
            processor: ProcessorConfig {
                validate_on_submit: try_load(&lookup, VALIDATE_VAR, DEFAULT_VALIDATE)?,
                ..ProcessorConfig::default()
            },
        })
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
            key: HOST_VAR,
            value: self.host.clone(),
            reason: e.to_string(),
        })
    }

    /// The structural contract: the artifact at `schema_path`, or the built-in one.
    pub fn schema(&self) -> Result<ReceiptSchema, ConfigError> {
        let Some(path) = &self.schema_path else {
            info!("using built-in receipt schema");
            return Ok(ReceiptSchema::default());
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::SchemaRead {
            path: path.clone(),
            source,
        })?;
        let schema = serde_json::from_str(&raw).map_err(|source| ConfigError::SchemaParse {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "loaded receipt schema");
        Ok(schema)
    }

    /// Load and compile the structural contract.
    pub fn validator(&self) -> Result<ReceiptValidator, ConfigError> {
        Ok(ReceiptValidator::new(&self.schema()?)?)
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key,
            value,
            reason: e.to_string(),
        }
    })
}
