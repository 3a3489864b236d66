use crate::error::Result;
use crate::pretty::DEFAULT_INDENT;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How command results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty JSON with sorted keys
    #[default]
    Json,
    /// Plain text, one value per line
    Text,
}

/// Configuration for the command line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrewdriverConfig {
    /// Output format for results
    #[serde(default)]
    pub output: OutputFormat,

    /// Spaces per indent level in JSON output
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for ScrewdriverConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            indent: default_indent(),
        }
    }
}

impl ScrewdriverConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        ::log::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default value for indent
fn default_indent() -> usize {
    DEFAULT_INDENT
}
