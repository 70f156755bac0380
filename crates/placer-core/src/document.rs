//! Document formats for declarations and snapshots.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PlacerError, Result};

/// Textual document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Picks the format from a file extension, defaulting to YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    pub fn parse<T: DeserializeOwned>(self, s: &str) -> Result<T> {
        match self {
            DocumentFormat::Yaml => {
                serde_yaml::from_str(s).map_err(|e| PlacerError::Document(e.to_string()))
            }
            DocumentFormat::Toml => {
                toml::from_str(s).map_err(|e| PlacerError::Document(e.to_string()))
            }
        }
    }

    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        match self {
            DocumentFormat::Yaml => {
                serde_yaml::to_string(value).map_err(|e| PlacerError::Document(e.to_string()))
            }
            DocumentFormat::Toml => {
                toml::to_string(value).map_err(|e| PlacerError::Document(e.to_string()))
            }
        }
    }

    /// Reads and parses a file, choosing the format by extension.
    pub fn read_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlacerError::Document(format!("{}: {}", path.display(), e)))?;
        Self::from_path(path).parse(&contents)
    }

    /// Renders and writes a file, choosing the format by extension.
    pub fn write_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
        let path = path.as_ref();
        let contents = Self::from_path(path).render(value)?;
        std::fs::write(path, contents)
            .map_err(|e| PlacerError::Document(format!("{}: {}", path.display(), e)))
    }
}
