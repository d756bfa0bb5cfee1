use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::Family;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Run configuration. Built once and passed by reference into the link
/// builder, the recommendation engine and the assembler.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    pub project: ProjectDefaults,
    pub database: DatabaseConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub region: Region,
    pub vendor: String,
    pub weights: FamilyWeights,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: Region::default(),
            vendor: default_vendor(),
            weights: FamilyWeights::default(),
        }
    }
}

fn default_vendor() -> String {
    "InfiNet".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Worldwide,
    Rus,
}

/// Base weight per family group plus the flat exclusion penalty.
///
/// More capable families carry more negative weights. A device that meets
/// the link requirements keeps its weight, one that falls short has it
/// reversed, so the cheapest adequate family wins and the most capable one
/// wins when nothing is adequate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FamilyWeights {
    pub xg1000: i64,
    pub xg500: i64,
    pub quanta: i64,
    /// Quanta 70 shares the Quanta weight unless set.
    pub quanta_70: Option<i64>,
    pub e5000: i64,
    pub r5000_pro: i64,
    pub r5000_lite: i64,
    pub axion: i64,
    pub exclude: i64,
}

impl Default for FamilyWeights {
    fn default() -> Self {
        Self {
            xg1000: -1000,
            xg500: -2000,
            quanta: -3000,
            quanta_70: None,
            e5000: -4000,
            r5000_pro: -5000,
            r5000_lite: -6000,
            axion: -3000,
            exclude: 100_000,
        }
    }
}

impl FamilyWeights {
    pub fn base(&self, family: Family) -> i64 {
        match family {
            Family::Xg1000 => self.xg1000,
            Family::Xg500 => self.xg500,
            Family::Quanta5 | Family::Quanta6 => self.quanta,
            Family::Quanta70 => self.quanta_70.unwrap_or(self.quanta),
            Family::Evolution => self.e5000,
            Family::Pro2x2 => self.r5000_pro,
            Family::Lite2x2 => self.r5000_lite,
            Family::Axion28 => self.axion,
        }
    }
}

/// Project-wide requirement defaults, kept as raw text and validated the
/// same way as per-row overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectDefaults {
    pub frequency: String,
    pub bandwidth: String,
    pub capacity: String,
    pub availability: String,
    pub exclude: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            frequency: "5".to_string(),
            bandwidth: "40".to_string(),
            capacity: "100".to_string(),
            availability: "99.90".to_string(),
            exclude: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("devices.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub folder: PathBuf,
    pub project_name: Option<String>,
    pub bom_name: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("Output"),
            project_name: None,
            bom_name: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the stock configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }
        Self::from_file(path)
    }
}
