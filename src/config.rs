use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InputConfig {
    /// Payload file used when no INPUT argument is given.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Overrides the owner login discovered in the payload.
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            path: None,
        }
    }
}

fn default_pretty() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if let Some(owner) = &config.input.owner {
        if owner.trim().is_empty() {
            anyhow::bail!("input.owner must not be empty");
        }
    }

    if let Some(out) = &config.output.path {
        if out.is_dir() {
            anyhow::bail!("output.path must be a file, got directory: {}", out.display());
        }
    }

    Ok(config)
}
