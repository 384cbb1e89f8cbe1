use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::text_utils::DEFAULT_DATE_FORMAT;

#[derive(Deserialize, Debug, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Settings read once at start-up and passed down explicitly.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

pub fn read_config(cfg_path: &Path) -> Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|e| Error::io(cfg_path, e))?;
    parse_config(&cfg_content)
}

pub fn parse_config(cfg_content: &str) -> Result<Config> {
    toml::from_str::<Config>(cfg_content)
        .map_err(|e| Error::Config(format!("Error parsing configuration file: {}", e)))
}
