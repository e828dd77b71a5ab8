use crate::links::Links;
use crate::page::index::TocView;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG: &str = "docview.toml";

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub links: LinksConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinksConfig {
    /// Prefix for links into other pages.
    pub base: String,
    /// Name of the frame navigation links open in.
    pub frame_target: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        let links = Links::default();
        Self {
            base: links.base,
            frame_target: links.frame_target,
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub stylesheet: Option<String>,
    pub initial_view: TocView,
}

impl Config {
    /// Load config from an explicit TOML file. Missing or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load `docview.toml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(DEFAULT_CONFIG);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using discovered config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn links(&self) -> Links {
        Links {
            base: self.links.base.clone(),
            frame_target: self.links.frame_target.clone(),
        }
    }
}
