use std::path::PathBuf;

use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while resolving arguments, grouping parts,
/// or running the extraction tool.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Per-group -----------------------------------------------------------
    /// No member of a group can be handed to the extraction tool.
    #[error("No entry part found for {group}")]
    NoEntryFound { group: String },

    /// The extraction tool ran but reported failure.
    #[error("Failed to extract: {} ({})", .members.join(", "), describe_code(.code))]
    ExtractionFailed {
        entry: String,
        members: Vec<String>,
        code: Option<i32>,
    },

    // ---- Whole run -----------------------------------------------------------
    /// Removing a source part after a successful extraction failed.
    #[error("Failed to delete '{}': {source}", .path.display())]
    DeletionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed command line.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The extraction tool could not be started at all.
    #[error("Could not run '{program}': {source}")]
    ToolUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The archive directory could not be listed.
    #[error("Could not read directory '{}': {source}", .path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ---- Config -------------------------------------------------------------
    /// Settings file missing or malformed.
    #[error("Config error: {0}")]
    Config(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit status {c}"),
        None => "terminated by signal".to_string(),
    }
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn invalid_arguments<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArguments(msg.into())
    }

    /// Whether this error aborts the whole run rather than a single group.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::NoEntryFound { .. } | Error::ExtractionFailed { .. }
        )
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let msg = rendered.trim_end();
        Error::InvalidArguments(msg.strip_prefix("error: ").unwrap_or(msg).to_string())
    }
}
