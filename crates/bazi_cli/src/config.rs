use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use bazi_base::Gender;
use bazi_rs::{ChainResolver, Coordinates, Gazetteer, NumericResolver};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "bazi.toml";

/// Top-level `bazi.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaziConfig {
    #[serde(default)]
    pub defaults: Defaults,

    /// Named places for the gazetteer resolver.
    #[serde(default)]
    pub places: BTreeMap<String, Coordinates>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Gender used when `--gender` is absent.
    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub output: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl BaziConfig {
    /// Load an explicit path, else `./bazi.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), places = config.places.len(), "config loaded");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Numeric "lat,lon" first, then the configured places.
    pub fn resolver(&self) -> ChainResolver {
        let gazetteer: Gazetteer = self
            .places
            .iter()
            .map(|(name, coords)| (name.clone(), *coords))
            .collect();
        ChainResolver::new().with(NumericResolver).with(gazetteer)
    }

    pub fn gender_or_default(&self, gender: Option<Gender>) -> Gender {
        gender.or(self.defaults.gender).unwrap_or(Gender::Male)
    }
}
