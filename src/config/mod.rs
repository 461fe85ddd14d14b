use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// where the config file is looked for on startup
pub const CONFIG_LOCATION: &str = "./EduVault.toml";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DbConfig {
    pub location: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            location: "./vault.sqlite".to_string(),
        }
    }
}

/// limits on request bodies, in mebibytes
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    #[serde(rename = "maxfilesizemb")]
    pub max_file_size_mb: u64,
    #[serde(rename = "maximportsizemb")]
    pub max_import_size_mb: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
            max_import_size_mb: 512,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AiConfig {
    pub enabled: bool,
    pub model: String,
    #[serde(rename = "baseurl")]
    pub base_url: String,
    /// name of the environment variable holding the api key. The key itself never goes in the config file
    #[serde(rename = "apikeyenv")]
    pub api_key_env: String,
    /// humantime duration, e.g. `60s` or `2m`
    pub timeout: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout: "60s".to_string(),
        }
    }
}

impl AiConfig {
    pub fn timeout(&self) -> Result<Duration, humantime::DurationError> {
        humantime::parse_duration(&self.timeout)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct VaultConfig {
    pub database: DbConfig,
    pub uploads: UploadConfig,
    pub ai: AiConfig,
    pub logging: LogConfig,
}

/// Parses the config file at `location`. A missing file is fine and results in the defaults,
/// but a file that exists and can't be parsed is an error
pub fn parse_config(location: &str) -> Result<VaultConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(location).required(false))
        .build()?;
    let parsed: VaultConfig = settings.try_deserialize()?;
    if let Err(e) = parsed.ai.timeout() {
        return Err(ConfigError::Message(format!(
            "ai.timeout `{}` is not a valid duration: {e}",
            parsed.ai.timeout
        )));
    }
    Ok(parsed)
}
