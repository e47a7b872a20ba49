//! User configuration (`config.toml`).
//!
//! ```toml
//! format = "text"      # text | html | tree
//!
//! [text]
//! unicode = false
//!
//! [html]
//! wrap_nodes = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use chalk_display::{HtmlStyle, TextStyle};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    /// The presentation tree as JSON.
    Tree,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "tree" => Ok(OutputFormat::Tree),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub text: TextConfig,
    pub html: HtmlConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub unicode: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub wrap_nodes: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        HtmlConfig { wrap_nodes: true }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the user config file is read if
    /// present, and defaults are used if not.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::ConfigNotFound(path.to_path_buf()).into());
                }
                path.to_path_buf()
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    log::debug!("no user config found; using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Config::from_toml(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            unicode: self.text.unicode,
        }
    }

    pub fn html_style(&self) -> HtmlStyle {
        HtmlStyle {
            wrap_nodes: self.html.wrap_nodes,
        }
    }
}

pub(crate) fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "chalk")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
