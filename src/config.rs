use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::{ResourceId, ResourceKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::parse(&config_content)
            .with_context(|| format!("failed to load {}", config_path.display()))
    }

    /// Load the config file, or fall back to defaults when it is absent.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(
                target: "config",
                path = %config_path.display(),
                "config_file_absent_using_defaults"
            );
            return Ok(Self::default());
        }
        Self::load(config_path)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = json5::from_str(text).context("failed to parse json5 config")?;
        serde_json::from_value(value).context("failed to deserialize config")
    }
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: default_enabled_true(),
        }
    }
}

/// Seed tables for one session: which pools exist and who draws from them.
/// Defaults reproduce the stock demo city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_resources")]
    pub resources: Vec<ResourceSeed>,
    #[serde(default = "default_seed_consumers")]
    pub consumers: Vec<ConsumerSeed>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            resources: default_seed_resources(),
            consumers: default_seed_consumers(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSeed {
    pub id: ResourceId,
    #[serde(flatten)]
    pub kind: ResourceKind,
    pub initial_amount: f64,
    /// Overrides the kind's default renewability when set.
    #[serde(default)]
    pub renewable: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub resources: Vec<ResourceId>,
}

fn default_seed_resources() -> Vec<ResourceSeed> {
    vec![
        ResourceSeed {
            id: "water".to_string(),
            kind: ResourceKind::Water {
                source: "River".to_string(),
            },
            initial_amount: 10_000.0,
            renewable: None,
        },
        ResourceSeed {
            id: "electricity".to_string(),
            kind: ResourceKind::Electricity {
                energy_type: "Solar".to_string(),
            },
            initial_amount: 5_000.0,
            renewable: None,
        },
        ResourceSeed {
            id: "waste".to_string(),
            kind: ResourceKind::Waste {
                waste_category: "Recyclable".to_string(),
            },
            initial_amount: 2_000.0,
            renewable: None,
        },
    ]
}

fn default_seed_consumers() -> Vec<ConsumerSeed> {
    let all_resources = || {
        vec![
            "water".to_string(),
            "electricity".to_string(),
            "waste".to_string(),
        ]
    };
    vec![
        ConsumerSeed {
            id: "C-101".to_string(),
            name: "Residential Block A".to_string(),
            resources: all_resources(),
        },
        ConsumerSeed {
            id: "C-202".to_string(),
            name: "Textile Factory B".to_string(),
            resources: all_resources(),
        },
    ]
}
