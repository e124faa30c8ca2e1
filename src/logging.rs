use std::path::Path;

use log::{LevelFilter, SetLoggerError};
use log4rs::{
    append::console::ConsoleAppender,
    config::{runtime::ConfigErrors, Appender, Config, Root},
    encode::pattern::PatternEncoder,
    Handle,
};
use thiserror::Error;

/// Pattern used by the console logger.
pub const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to load logging config: {0}")]
    File(String),
    #[error(transparent)]
    Config(#[from] ConfigErrors),
    #[error(transparent)]
    SetLogger(#[from] SetLoggerError),
}

/// Initialise logging from a log4rs YAML file.
/// Dynamic level filters may be used in the file.
pub fn init_file(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    log4rs::init_file(path, log4rs_dynamic_filters::default_deserializers())
        .map_err(|e| LoggingError::File(e.to_string()))?;
    info!("Initialised logging");
    Ok(())
}

/// Initialise logging to stdout at the given level.
pub fn init_console(level: LevelFilter) -> Result<Handle, LoggingError> {
    let handle = log4rs::init_config(console_config(level)?)?;
    info!("Initialised console logging at {level}");
    Ok(handle)
}

fn console_config(level: LevelFilter) -> Result<Config, ConfigErrors> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
}

/// Set up logging of this crate for tests. Safe to call from every test.
#[cfg(test)]
pub fn init_test_logging() {
    log4rs_test_utils::test_logging::init_logging_once_for(["survey_forms"], None, None);
}
