use std::env;
use log::info;
use reqwest::blocking::Client;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_jma::Jma;
use crate::manager_slack::Slack;

pub struct Mgr {
    pub jma: Jma,
    pub slack: Slack,
}

/// Command line arguments, all optional
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config_path: Option<String>,
    pub force: bool,
}

/// Initializes and returns arguments, configuration and a Mgr struct holding the initialized managers
///
pub fn init() -> Result<(Args, Config, Mgr), InitializationError> {
    let args = parse_args(env::args().skip(1))?;

    // Load configuration
    let config = load_config(args.config_path.as_deref())?;

    // Setup logging
    let _ = setup_logger(config.general.log_path.as_deref(), config.general.log_level, config.general.log_to_stderr)?;

    // Print version
    info!("starting heat advisory version: {}", env!("CARGO_PKG_VERSION"));

    // Instantiate structs
    let client = Client::builder()
        .build()
        .map_err(|e| InitializationError::ClientError(e.to_string()))?;
    let jma = Jma::new(&config.feed, client.clone());
    let slack = Slack::new(&config.slack, client);

    let mgr = Mgr {
        jma,
        slack,
    };

    Ok((args, config, mgr))
}

/// Parses command line arguments of the form '--config=<path>' and '--force'
///
/// # Arguments
///
/// * 'args' - arguments excluding the program name
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, InitializationError> {
    let mut parsed = Args::default();

    for arg in args {
        if let Some(path) = arg.strip_prefix("--config=") {
            if path.is_empty() {
                return Err(InitializationError::ArgumentError("--config requires a path".to_string()));
            }
            parsed.config_path = Some(path.to_string());
        } else if arg == "--force" {
            parsed.force = true;
        } else {
            return Err(InitializationError::ArgumentError(format!("unknown argument: {}", arg)));
        }
    }

    Ok(parsed)
}

/// Error depicting errors that occur while initializing
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ArgumentError: {0}")]
    ArgumentError(String),
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("ClientError: {0}")]
    ClientError(String),
}
