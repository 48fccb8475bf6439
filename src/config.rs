// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Output configuration

use crate::function::{is_extension_safe, DEFAULT_EXTENSION};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up by [`OutputConfig::load`]
pub const CONFIG_FILE: &str = "polyscad.toml";

/// Where and how generated module files are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the top-level module is written into
    pub output_dir: PathBuf,
    /// Extension of generated files, without the dot
    pub extension: String,
    /// Write sibling modules concurrently
    pub parallel: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            parallel: false,
        }
    }
}

impl OutputConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: OutputConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `polyscad.toml` if present, then apply environment variable overrides
    pub fn load() -> Result<Self> {
        let config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.with_env_overrides()
    }

    /// Reject settings the writer cannot turn into file names
    pub fn validate(&self) -> Result<()> {
        if !is_extension_safe(&self.extension) {
            bail!("extension {:?} is not usable in a file name", self.extension);
        }
        Ok(())
    }

    /// Apply `POLYSCAD_OUTPUT_DIR`, `POLYSCAD_EXTENSION` and `POLYSCAD_PARALLEL`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(output_dir) = std::env::var("POLYSCAD_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Ok(extension) = std::env::var("POLYSCAD_EXTENSION") {
            self.extension = extension;
        }

        if let Ok(parallel) = std::env::var("POLYSCAD_PARALLEL") {
            self.parallel = parse_flag(&parallel).context("Invalid POLYSCAD_PARALLEL")?;
        }

        self.validate().context("Invalid POLYSCAD_EXTENSION")?;
        Ok(self)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("expected true, false, 1 or 0, got {:?}", other),
    }
}
