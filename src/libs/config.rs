//! Configuration for the daytask application.
//!
//! The configuration is a small JSON file (`config.json`) in the platform
//! data directory resolved by [`DataStorage`]. Every field is optional, and
//! a missing file simply means "use the defaults":
//!
//! - `tasks_file`: the working task file used by one-shot commands.
//!   Defaults to `tasks.json` in the data directory.
//! - `default_day`: bucket used by `add` when no day is given.
//!   Defaults to `general`.
//!
//! ```rust,no_run
//! use daytask::libs::config::Config;
//!
//! let config = Config::read()?;
//! let file = config.tasks_file(None)?;
//! println!("{}", file.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::bucket::{self, CANONICAL_BUCKETS, GENERAL};
use super::data_storage::{DataStorage, DEFAULT_TASKS_FILE};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Working task file for one-shot commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// Bucket that receives new tasks when no day is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_day: Option<String>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists.
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

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let default_file = config.tasks_file(None)?;

        msg_print!(Message::ConfigModuleTasks);
        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(default_file.display().to_string())
            .interact_text()?;

        let default_day: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultDay.to_string())
            .default(config.default_day())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                let day = bucket::normalize(input);
                if CANONICAL_BUCKETS.contains(&day.as_str()) {
                    Ok(())
                } else {
                    Err(Message::InvalidDay(input.clone()).to_string())
                }
            })
            .interact_text()?;

        Ok(Config {
            tasks_file: Some(PathBuf::from(tasks_file)),
            default_day: Some(bucket::normalize(&default_day)),
        })
    }

    /// Resolves the working task file: explicit override first, then the
    /// configured path, then `tasks.json` in the data directory.
    pub fn tasks_file(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.tasks_file {
            return Ok(path.clone());
        }
        Ok(DataStorage::new().get_path(DEFAULT_TASKS_FILE)?)
    }

    /// Normalized default bucket for new tasks.
    pub fn default_day(&self) -> String {
        self.default_day.as_deref().map(bucket::normalize).unwrap_or_else(|| GENERAL.to_string())
    }
}
