use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up log4rs with an optional file appender and an optional stderr appender.
/// With neither enabled log records are dropped, so stdout and stderr carry only
/// the program's own output.
///
/// # Arguments
///
/// * 'log_path' - path to the log file, if logging to file
/// * 'log_level' - level filter for the root logger
/// * 'log_to_stderr' - whether to also log to stderr
pub fn setup_logger(log_path: Option<&str>, log_level: LevelFilter, log_to_stderr: bool) -> Result<Handle, LoggerError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if let Some(path) = log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .map_err(|e| LoggerError::FileError(format!("{}: {}", path, e)))?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if log_to_stderr {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();

        builder = builder.appender(Appender::builder().build("stderr", Box::new(stderr)));
        root = root.appender("stderr");
    }

    let config = builder
        .build(root.build(log_level))
        .map_err(|e| LoggerError::ConfigError(e.to_string()))?;

    log4rs::init_config(config)
        .map_err(|e| LoggerError::InitError(e.to_string()))
}

/// Error depicting errors that occur while setting up logging
///
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("FileError: {0}")]
    FileError(String),
    #[error("ConfigError: {0}")]
    ConfigError(String),
    #[error("InitError: {0}")]
    InitError(String),
}
