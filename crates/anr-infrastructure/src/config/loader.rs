//! Configuration loader
//!
//! Loads configuration from default values, an optional TOML file, and
//! environment variables, then validates the merged result. Invalid
//! configuration is fatal: the process must not come up half-configured.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use anr_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, GROQ_API_KEY_ENV_VAR};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g., `ANR_SERVER_PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, config_path.exists());
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        // Nested keys use underscore separators (e.g., ANR_SERVER_PORT)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        apply_env_fallbacks(&mut app_config);
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill in secrets from well-known environment variables
fn apply_env_fallbacks(config: &mut AppConfig) {
    if config.providers.generation.api_key.is_none() {
        if let Ok(key) = env::var(GROQ_API_KEY_ENV_VAR) {
            if !key.trim().is_empty() {
                config.providers.generation.api_key = Some(key);
            }
        }
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    if config.ingest.batch_size == 0 {
        return Err(Error::config("Ingestion batch size cannot be 0"));
    }
    if config.providers.vector_store.collection.trim().is_empty() {
        return Err(Error::config("Vector store collection name cannot be empty"));
    }
    // Hosted generation without credentials fails on every request;
    // refuse to start instead.
    if config.providers.generation.provider != "null"
        && config
            .providers
            .generation
            .api_key
            .as_deref()
            .is_none_or(|k| k.trim().is_empty())
    {
        return Err(Error::config(format!(
            "Generation provider '{}' requires an API key (set providers.generation.api_key or {GROQ_API_KEY_ENV_VAR})",
            config.providers.generation.provider
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("anr.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_require_generation_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "");
        // Default generation provider is groq; without a key this is fatal
        if env::var(GROQ_API_KEY_ENV_VAR).is_err() {
            let err = ConfigLoader::new().with_config_path(&path).load();
            assert!(err.is_err());
        }
    }

    #[test]
    fn null_generation_needs_no_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[providers.generation]
provider = "null"
"#,
        );
        let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
        assert_eq!(config.providers.generation.provider, "null");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn toml_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[server]
port = 9001

[providers.generation]
provider = "null"

[ingest]
batch_size = 25
"#,
        );
        let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.ingest.batch_size, 25);
    }

    #[test]
    fn saved_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = AppConfig::default();
        config.providers.generation.provider = "null".to_string();
        config.server.port = 9100;

        let loader = ConfigLoader::new();
        loader.save_to_file(&config, &path).unwrap();

        let loaded = loader.with_config_path(&path).load().unwrap();
        assert_eq!(loaded.server.port, 9100);
        assert_eq!(loaded.providers.generation.provider, "null");
    }

    #[test]
    fn zero_port_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[server]
port = 0

[providers.generation]
provider = "null"
"#,
        );
        let err = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[providers.generation]
provider = "null"

[ingest]
batch_size = 0
"#,
        );
        assert!(ConfigLoader::new().with_config_path(&path).load().is_err());
    }
}
