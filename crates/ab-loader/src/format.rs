use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{LoaderError, LoaderResult};

/// Source format of an adventure definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON.
    Json,
    /// YAML, normalized to the JSON value model before validation.
    Yaml,
}

impl Format {
    /// Detect the format from a file extension or tag, with or without a
    /// leading dot, ignoring case.
    pub fn from_extension(extension: &str) -> LoaderResult<Self> {
        match extension.trim().trim_start_matches('.').to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LoaderError::UnsupportedFormat(extension.to_string())),
        }
    }

    /// Detect the format from a file path's extension.
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(extension) => Self::from_extension(extension),
            None => Err(LoaderError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Preferred file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}
