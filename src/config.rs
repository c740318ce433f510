use crate::error::{CropcastError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub body_limit_bytes: usize,
    /// Empty means any origin. Fine for development, not for production.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            body_limit_bytes: 1024 * 1024,
            cors_allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Return raw internal error text in 500 responses.
    pub expose_error_details: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            expose_error_details: true,
        }
    }
}

/// Accepts `port: 8000` as well as `port: "8000"`, which is what an
/// unquoted `${PORT}` placeholder may turn into.
fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Number(u16),
        Text(String),
    }

    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(value) => value.trim().parse::<u16>().map_err(|_| {
            D::Error::custom(format!(
                "invalid port '{}' - ensure the PORT environment variable is set",
                value
            ))
        }),
    }
}

impl Config {
    /// Load from `config_override`, or the first config.yaml found in the
    /// standard locations. With no file anywhere the defaults are used.
    /// `PORT` from the environment always wins over the file.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(CropcastError::Config(format!(
                    "Config file not found at {:?}",
                    p
                )));
            }
            Some(p) => Some(p),
            None => Self::find_config_path(),
        };

        let mut config = match config_path {
            Some(path) => {
                tracing::debug!("Reading config from {}", path.display());
                let config_str = std::fs::read_to_string(&path)
                    .map_err(|e| CropcastError::Config(format!("Failed to read config: {}", e)))?;
                Self::from_yaml_str(&config_str)?
            }
            None => Config::default(),
        };

        if let Some(port) = Self::port_override(std::env::var("PORT").ok())? {
            config.server.port = port;
        }

        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        serde_yaml::from_str(&content)
            .map_err(|e| CropcastError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropcast").join("config.yaml"))
            .filter(|p| p.exists())
    }

    fn port_override(value: Option<String>) -> Result<Option<u16>> {
        match value {
            None => Ok(None),
            Some(v) if v.trim().is_empty() => Ok(None),
            Some(v) => v.trim().parse::<u16>().map(Some).map_err(|_| {
                CropcastError::Config(format!("PORT must be a port number, got '{}'", v))
            }),
        }
    }

    /// Replace `${VAR_NAME}` with the variable's value; unset variables are
    /// left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropcastError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
