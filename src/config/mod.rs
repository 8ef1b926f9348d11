pub mod models;

use crate::config::models::Settings;
use crate::core::types::Verbosity;

pub const DEFAULT_PROGRAM: &str = "unrar";

/// Options resolved once at startup and read by every extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    pub delete_after_success: bool,
    pub interactive: bool,
    pub password: Option<String>,
    pub verbosity: Verbosity,
    pub program: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            delete_after_success: false,
            interactive: false,
            password: None,
            verbosity: Verbosity::default(),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Combine command-line switches with the settings file. An empty
    /// password counts as no password.
    pub fn new(
        delete_after_success: bool,
        interactive: bool,
        password: Option<String>,
        verbosity: Verbosity,
        settings: &Settings,
    ) -> Self {
        Self {
            delete_after_success,
            interactive,
            password: password.filter(|p| !p.is_empty()),
            verbosity,
            program: settings.program.clone(),
        }
    }
}
