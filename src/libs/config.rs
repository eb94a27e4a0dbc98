//! Configuration management for taskify.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file yields the defaults, so the application
//! runs without any setup. `taskify init` walks through the settings
//! interactively and saves the result.
//!
//! ## Settings
//!
//! - **data_dir**: where date partitions are stored; overridable with the
//!   `TASKIFY_DATA_DIR` environment variable
//! - **port**: HTTP port for `taskify serve`
//! - **static_dir**: directory of front-end files served by the HTTP server
//! - **operator_name**: name used in export file names; when unset the
//!   server asks for it at start-up
//!
//! ```rust,no_run
//! use taskify::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("partitions in {}", config.partitions_dir()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DATA_DIR_ENV: &str = "TASKIFY_DATA_DIR";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_OPERATOR_NAME: &str = "User";
const PARTITIONS_DIR_NAME: &str = "partitions";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory holding one `YYYY-MM-DD.json` file per date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_name: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STATIC_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: None,
            port: DEFAULT_PORT,
            static_dir: default_static_dir(),
            operator_name: None,
        }
    }
}

impl Config {
    /// Loads the configuration file, falling back to defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the partition directory: environment override, then config, then the default.
    pub fn partitions_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(DataStorage::new().get_path(PARTITIONS_DIR_NAME)?),
        }
    }

    /// Runs the interactive setup wizard, using the current values as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader);

        let operator_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptOperatorName.to_string())
            .default(current.operator_name.clone().unwrap_or_else(|| DEFAULT_OPERATOR_NAME.to_string()))
            .interact_text()?;

        let port: u16 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPort.to_string())
            .default(current.port)
            .interact_text()?;

        let data_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataDir.to_string())
            .default(current.partitions_dir()?.display().to_string())
            .interact_text()?;

        let static_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStaticDir.to_string())
            .default(current.static_dir.display().to_string())
            .interact_text()?;

        Ok(Config {
            data_dir: Some(PathBuf::from(data_dir.trim())),
            port,
            static_dir: PathBuf::from(static_dir.trim()),
            operator_name: Some(normalize_operator_name(&operator_name)),
        })
    }
}

/// Trims the name and substitutes the default for empty input.
pub fn normalize_operator_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        DEFAULT_OPERATOR_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Asks for the operator name once, as the server does at start-up.
pub fn prompt_operator_name() -> Result<String> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptOperatorName.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(normalize_operator_name(&answer))
}
