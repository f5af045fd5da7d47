use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::CaseStyle;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "case-style.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub sentence: SentenceConfig,
}

/// Conversion defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Target style when none is given on the command line
    #[serde(default = "default_style")]
    pub style: CaseStyle,
    /// Separator override for lower, upper and capital (empty means a space)
    #[serde(default)]
    pub fill: String,
    /// Drop apostrophes when converting to lower, upper or capital
    #[serde(default)]
    pub strip_apostrophes: bool,
}

/// Sentence case exceptions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceConfig {
    /// Proper names that keep their capitalization
    #[serde(default)]
    pub names: Vec<String>,
    /// Abbreviations whose trailing period does not end a sentence (without the period)
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

fn default_style() -> CaseStyle {
    CaseStyle::Snake
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            fill: String::new(),
            strip_apostrophes: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            style = %config.convert.style,
            names = config.sentence.names.len(),
            abbreviations = config.sentence.abbreviations.len(),
            "loaded configuration"
        );

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default_config())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.convert.style == CaseStyle::None {
            anyhow::bail!("Default style cannot be 'none'");
        }

        if let Some(name) = self.sentence.names.iter().find(|n| n.trim().is_empty()) {
            anyhow::bail!("Sentence names must not be blank: {:?}", name);
        }

        for abbr in &self.sentence.abbreviations {
            if abbr.trim().is_empty() {
                anyhow::bail!("Sentence abbreviations must not be blank: {:?}", abbr);
            }
            if abbr.ends_with('.') {
                anyhow::bail!(
                    "Abbreviation '{}' must be listed without its trailing period",
                    abbr
                );
            }
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config::default()
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
