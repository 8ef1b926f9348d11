use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::ExtractionConfig;
use crate::config::models::Settings;
use crate::core::context::AppContext;
use crate::core::types::Verbosity;
use crate::errors::Result;

/// Extracts every rar archive in a directory, one tool run per multi-part set.
#[derive(Debug, Clone, Parser)]
#[command(name = "anrar", version, about, long_about = None)]
pub struct Cli {
    /// Delete the .rar files after a successful extraction (default is to keep them)
    #[arg(short, long)]
    pub delete_files: bool,

    /// Let the extraction tool ask its questions instead of answering yes
    #[arg(short, long)]
    pub interactive: bool,

    /// Password handed to the extraction tool
    #[arg(short, long)]
    pub password: Option<String>,

    /// 0 (or quiet) for silence, 1 (or errors-only) for errors only, 2 (or full) for full output
    #[arg(short, long, default_value = "2", value_parser = parse_verbosity)]
    pub verbosity: Verbosity,

    /// Directory holding the archives
    #[arg(short = 'C', long, default_value = ".")]
    pub directory: PathBuf,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn parse_verbosity(raw: &str) -> std::result::Result<Verbosity, String> {
    Verbosity::try_from(raw).map_err(|e| e.to_string())
}

impl Cli {
    /// Parse an argv (program name first). Help and version requests come
    /// back as `clap::Error` too; callers decide how to exit on them.
    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    pub fn extraction_config(&self, settings: &Settings) -> ExtractionConfig {
        ExtractionConfig::new(
            self.delete_files,
            self.interactive,
            self.password.clone(),
            self.verbosity,
            settings,
        )
    }

    /// Load the settings file and assemble the run context.
    pub fn into_context(self) -> Result<AppContext> {
        let settings = Settings::load_optional(self.config.as_deref())?;
        let config = self.extraction_config(&settings);
        Ok(AppContext::new(config, settings, self.directory))
    }
}
