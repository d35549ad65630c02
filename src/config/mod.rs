use crate::constants::{DEFAULT_LABEL, env_vars, timing};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Every field has a default, so an absent or partial config file is fine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Text shown next to the spinning glyph.
    #[serde(default = "default_label")]
    pub label: String,
    /// Pause between animation frames in milliseconds.
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
    /// How long the slow computation takes in milliseconds.
    #[serde(default = "default_delay")]
    pub delay_ms: u64,
    /// Path to the log file. If not specified, logs go to the default log directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_frame_interval() -> u64 {
    timing::FRAME_INTERVAL_MS
}

fn default_delay() -> u64 {
    timing::COMPUTATION_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            label: default_label(),
            frame_interval_ms: default_frame_interval(),
            delay_ms: default_delay(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists; nothing is written.
    ///
    /// # Environment Variables
    /// - `SPINWAIT_LABEL` - Override the spinner label
    /// - `SPINWAIT_FRAME_INTERVAL_MS` - Override the frame interval
    /// - `SPINWAIT_DELAY_MS` - Override the computation delay
    /// - `SPINWAIT_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a specific file without consulting the environment.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Replaces values with environment overrides where present.
    /// Numeric variables that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(label) = std::env::var(env_vars::LABEL) {
            self.label = label;
        }

        if let Some(interval) = std::env::var(env_vars::FRAME_INTERVAL_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.frame_interval_ms = interval;
        }

        if let Some(delay) = std::env::var(env_vars::DELAY_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.delay_ms = delay;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.label, self.frame_interval_ms, &self.log_file_path)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Prints the effective configuration to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Label:");
        println!("{}", self.label);
        println!("────────────────────────────────────");
        println!("Frame Interval:");
        println!("{} ms", self.frame_interval_ms);
        println!("────────────────────────────────────");
        println!("Computation Delay:");
        println!("{} ms", self.delay_ms);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}/{}.log", get_log_dir_path(), crate::constants::APP_NAME);
            println!("(Default location)");
        }
    }
}
