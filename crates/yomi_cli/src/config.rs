use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use yomi_daf::{DafConfig, NameScript};

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "yomi.toml";

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YomiConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Schedule settings.
    #[serde(default)]
    pub schedule: ScheduleToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub script: ScriptToml,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptToml {
    #[default]
    Transliterated,
    Hebrew,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_days")]
    pub days: u32,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

fn default_days() -> u32 {
    7
}

impl YomiConfig {
    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid configuration")
    }

    /// Load `path`, or `yomi.toml` if it exists, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        info!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Display config, with `--hebrew` forcing Hebrew names.
    pub fn daf_config(&self, hebrew_flag: bool) -> DafConfig {
        let script = match (hebrew_flag, self.output.script) {
            (true, _) | (false, ScriptToml::Hebrew) => NameScript::Hebrew,
            (false, ScriptToml::Transliterated) => NameScript::Transliterated,
        };
        DafConfig::new(script)
    }
}
