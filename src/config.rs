use crate::case::CaseStyle;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".caseconv.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub style: CaseStyle,
    pub format: OutputFormat,
    pub color: bool,
    /// Drop conversions whose output is empty
    pub skip_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: CaseStyle::Camel,
            format: OutputFormat::Text,
            color: true,
            skip_empty: false,
        }
    }
}

/// One config file. Keys left out do not touch the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    style: Option<CaseStyle>,
    format: Option<OutputFormat>,
    color: Option<bool>,
    skip_empty: Option<bool>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<CaseStyle>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_layers(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    pub fn load_layers(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                log::debug!("loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            log::debug!("loading local config from {}", local.display());
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(style) = overrides.style {
            config.style = style;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.no_color {
            config.color = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(style) = other.style {
            self.style = style;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        if let Some(skip_empty) = other.skip_empty {
            self.skip_empty = skip_empty;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
