use std::collections::HashMap;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub rev_ai: ProviderSettings,
    pub assembly_ai: ProviderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub poll_interval_ms: u64,
    /// Zero disables the cap.
    pub max_poll_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Settings {
    /// Defaults, then `appsettings.<environment>`, then `APP__SECTION__KEY`
    /// variables, then the conventional `PORT` and provider key variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::from_env_map(environment, std::env::vars().collect())
    }

    pub fn from_env_map(
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let rev_ai_key = vars
            .get("REVAI_ACCESS_TOKEN")
            .or_else(|| vars.get("REVA_API_TOKEN"))
            .cloned();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_mb", 100)?
            .set_default("server.static_dir", "public")?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("rev_ai.poll_interval_ms", 5000)?
            .set_default("rev_ai.max_poll_attempts", 720)?
            .set_default("assembly_ai.poll_interval_ms", 3000)?
            .set_default("assembly_ai.max_poll_attempts", 1200)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("server.port", vars.get("PORT").cloned())?
            .set_override_option("rev_ai.api_key", rev_ai_key)?
            .set_override_option("assembly_ai.api_key", vars.get("ASSEMBLYAI_API_KEY").cloned())?
            .build()?
            .try_deserialize()
    }
}
