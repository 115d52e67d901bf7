use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::domain::identifiers::SystemUuidGenerator;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub uuid: UuidSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Parameters of time-based (v1) UUID generation
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UuidSettings {
    /// 48-bit node id as 12 hex digits; a random multicast node when absent
    pub node_id: Option<String>,
    pub clock_sequence: Option<u16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("XAPI_MODEL").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl UuidSettings {
    /// Builds the v1 generator described by these settings
    pub fn generator(&self) -> Result<SystemUuidGenerator> {
        let node = match &self.node_id {
            Some(node_id) => parse_node_id(node_id)?,
            None => SystemUuidGenerator::with_random_node().node_id(),
        };
        Ok(SystemUuidGenerator::new(node, self.clock_sequence))
    }
}

fn parse_node_id(node_id: &str) -> Result<[u8; 6]> {
    let invalid = |reason: String| {
        Error::Config(config::ConfigError::Message(format!(
            "uuid.node_id \"{node_id}\" {reason}"
        )))
    };

    let bytes = hex::decode(node_id).map_err(|e| invalid(format!("is not hex: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| invalid("must be 12 hex digits".to_string()))
}
