// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub storage_path: PathBuf,
    pub match_service_url: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration based on environment. A missing config.yaml falls
    /// back to local defaults so a first run needs no setup.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            info!("config.yaml not found, using local defaults");
            return Ok(Self::local_defaults());
        }

        Self::load_from_file(&environment, &config_path)
    }

    fn local_defaults() -> Self {
        Self {
            storage_path: PathBuf::from("data/storage"),
            match_service_url: "http://localhost:8080".to_string(),
        }
    }

    fn get_environment() -> String {
        std::env::var("TALENTMATCH_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str, config_path: &PathBuf) -> Result<Self> {
        let config_content =
            std::fs::read_to_string(config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            storage_path: Self::resolve_path(&env_config.storage_path)?,
            match_service_url: env_config.match_service_url,
        })
    }

    fn resolve_path(path: &PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.clone())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}
