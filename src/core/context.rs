use crate::config::ExtractionConfig;
use crate::config::models::Settings;
use crate::logging::Logger;
use std::path::PathBuf;

/// Everything a run needs, assembled once at startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: ExtractionConfig,
    pub settings: Settings,
    pub logger: Logger,
    /// Directory scanned for archives; also the tool's working directory.
    pub dir: PathBuf,
}

impl AppContext {
    pub fn new(config: ExtractionConfig, settings: Settings, dir: PathBuf) -> Self {
        let logger = Logger::new(config.verbosity);
        Self::with_logger(config, settings, dir, logger)
    }

    pub fn with_logger(
        config: ExtractionConfig,
        settings: Settings,
        dir: PathBuf,
        logger: Logger,
    ) -> Self {
        logger.set_log_dir(&settings.log_dir);
        logger.set_file_logging_enabled(settings.file_logging_enabled);
        Self {
            config,
            settings,
            logger,
            dir,
        }
    }
}
