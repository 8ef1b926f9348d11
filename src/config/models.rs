use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::DEFAULT_PROGRAM;
use crate::errors::{Error, Result};

/// Optional JSON settings file. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Extraction tool to run; a bare name is looked up on `PATH`.
    pub program: String,
    pub file_logging_enabled: bool,
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            file_logging_enabled: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Settings {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Settings file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let settings: Settings = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        if settings.program.trim().is_empty() {
            return Err(Error::config(format!(
                "'program' in '{}' must not be empty.",
                path.display()
            )));
        }
        Ok(settings)
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }
}
