use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "WEATHER_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config/server.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub assets_dir: PathBuf,
    pub frontend_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            model_path: PathBuf::from("models/dtc_model.json"),
            assets_dir: PathBuf::from("assets"),
            frontend_dir: PathBuf::from("frontend/dist"),
        }
    }
}

/// Workspace root when launched through cargo, the working directory otherwise.
pub fn base_dir() -> PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        PathBuf::from(manifest_dir).join("..")
    } else {
        env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

impl ServerConfig {
    /// Defaults, then the YAML file if one exists, then environment overrides.
    /// Returns the config file that was applied, if any.
    pub fn load() -> Result<(Self, Option<PathBuf>), ConfigError> {
        let base = base_dir();
        let (config_path, explicit) = match env::var(CONFIG_ENV) {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (base.join(DEFAULT_CONFIG_FILE), false),
        };

        let (mut config, source) = if explicit || config_path.exists() {
            let config_str =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
                    path: config_path.display().to_string(),
                    source,
                })?;
            (Self::from_yaml(&config_str)?, Some(config_path))
        } else {
            (Self::default(), None)
        };

        config.apply_env(|key| env::var(key).ok())?;
        config.resolve_paths(&base);
        Ok((config, source))
    }

    pub fn from_yaml(config_str: &str) -> Result<Self, ConfigError> {
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(config_str)?)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(path) = lookup("MODEL_PATH") {
            self.model_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ASSETS_DIR") {
            self.assets_dir = PathBuf::from(path);
        }
        if let Some(path) = lookup("FRONTEND_DIR") {
            self.frontend_dir = PathBuf::from(path);
        }
        Ok(())
    }

    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.model_path,
            &mut self.assets_dir,
            &mut self.frontend_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
