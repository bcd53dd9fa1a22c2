use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::v_info;

/// Advisor configuration. These knobs only affect the CLI surface (where to
/// reach the API, where the token lives, display highlighting); the rule
/// constants inside the advisor module are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the game API
    pub base_url: String,
    /// File the agent token is read from
    pub token_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Fuel fraction below which the CLI highlights a ship (0.0 to 1.0)
    pub fuel_warning_threshold: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: crate::API_BASE_URL.to_string(),
                token_file: crate::AGENT_TOKEN_FILE.to_string(),
            },
            display: DisplayConfig {
                fuel_warning_threshold: 0.25, // 25%
            },
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: AdvisorConfig = toml::from_str(&config_str)?;
            config.validate().map_err(|e| format!("Invalid config {}: {}", config_path, e))?;
            Ok(config)
        } else {
            v_info!("📋 Creating default configuration at {}", config_path);
            let config = AdvisorConfig::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.api.token_file.is_empty() {
            return Err("token_file must not be empty".to_string());
        }
        if self.display.fuel_warning_threshold < 0.0 || self.display.fuel_warning_threshold > 1.0 {
            return Err("fuel_warning_threshold must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}
