use crate::relay_state::RelayConfig;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 268_435_456; // 256MB

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingRequired { field: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Port from the raw value of `PORT`. Unset and empty both mean the default.
pub fn port_from_env_value(value: Option<&str>) -> ConfigResult<u16> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
            field: PORT_ENV.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// An explicit `--port` wins over the environment.
pub fn resolve_port(cli_port: Option<u16>) -> ConfigResult<u16> {
    match cli_port {
        Some(port) => Ok(port),
        None => port_from_env_value(std::env::var(PORT_ENV).ok().as_deref()),
    }
}

pub fn validate(config: &RelayConfig) -> ConfigResult<()> {
    if config.model_id.trim().is_empty() {
        return Err(ConfigError::MissingRequired {
            field: "model_id".to_string(),
        });
    }
    if config.region.trim().is_empty() {
        return Err(ConfigError::MissingRequired {
            field: "region".to_string(),
        });
    }

    if config.max_payload_size == 0 {
        return Err(ConfigError::InvalidValue {
            field: "max_payload_size".to_string(),
            value: "0".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    let generation = &config.generation;
    if generation.max_tokens == 0 {
        return Err(ConfigError::InvalidValue {
            field: "max_tokens".to_string(),
            value: "0".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    if !(0.0..=1.0).contains(&generation.temperature) {
        return Err(ConfigError::InvalidValue {
            field: "temperature".to_string(),
            value: generation.temperature.to_string(),
            reason: "must be between 0.0 and 1.0".to_string(),
        });
    }
    if !(0.0..=1.0).contains(&generation.top_p) {
        return Err(ConfigError::InvalidValue {
            field: "top_p".to_string(),
            value: generation.top_p.to_string(),
            reason: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}
