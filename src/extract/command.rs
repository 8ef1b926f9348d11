use std::fmt;

use crate::config::ExtractionConfig;

/// Disable messages and dialogs.
pub const QUIET_FLAG: &str = "-idq";
/// Assume yes on every query.
pub const ASSUME_YES_FLAG: &str = "-y";
/// Joined directly to the password, without a space.
pub const PASSWORD_PREFIX: &str = "-p";
/// Extract with full paths.
pub const EXTRACT_MODE: &str = "x";

/// The argv handed to the extraction tool. The tool's own parser is
/// order-sensitive: switches first, then the mode, then the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionCommand {
    tokens: Vec<String>,
}

impl ExtractionCommand {
    pub fn build(config: &ExtractionConfig, entry: &str) -> Self {
        let mut tokens = vec![config.program.clone()];
        if config.verbosity.silences_tool() {
            tokens.push(QUIET_FLAG.to_string());
        }
        if !config.interactive {
            tokens.push(ASSUME_YES_FLAG.to_string());
        }
        if let Some(password) = &config.password {
            tokens.push(format!("{PASSWORD_PREFIX}{password}"));
        }
        tokens.push(EXTRACT_MODE.to_string());
        tokens.push(entry.to_string());
        Self { tokens }
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The archive the command extracts; always the last token.
    pub fn entry(&self) -> &str {
        self.tokens.last().map(String::as_str).unwrap_or_default()
    }
}

// Passwords are masked so the command can be logged.
impl fmt::Display for ExtractionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let switches = 1..self.tokens.len().saturating_sub(2);
        let shown: Vec<&str> = self
            .tokens
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if switches.contains(&i) && t.starts_with(PASSWORD_PREFIX) {
                    "-p***"
                } else {
                    t.as_str()
                }
            })
            .collect();
        write!(f, "{}", shown.join(" "))
    }
}
