use std::{env, fs};
use chrono::Weekday;
use encoding_rs::Encoding;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the Slack incoming webhook URL
pub const WEBHOOK_ENV: &str = "SLACK_WEBHOOK_URL";

#[derive(Deserialize)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stderr: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Info,
            log_to_stderr: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct FeedParameters {
    pub url: String,
    pub encoding: String,
}

impl Default for FeedParameters {
    fn default() -> Self {
        Self {
            url: "https://www.data.jma.go.jp/stats/data/mdrr/tem_rct/alltable/mxtemsadext00_rct.csv".to_string(),
            encoding: "Shift_JIS".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct ObservationParameters {
    pub location: String,
}

impl Default for ObservationParameters {
    fn default() -> Self {
        Self { location: "東京（トウキョウ）".to_string() }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct AdvisoryParameters {
    pub judgement_temp: f64,
    pub extreme_temp: f64,
}

impl Default for AdvisoryParameters {
    fn default() -> Self {
        Self {
            judgement_temp: 27.0,
            extreme_temp: 30.0,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct GateParameters {
    pub first_month: u32,
    pub last_month: u32,
    pub weekday: Weekday,
}

impl Default for GateParameters {
    fn default() -> Self {
        Self {
            first_month: 6,
            last_month: 10,
            weekday: Weekday::Fri,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct SlackParameters {
    #[serde(skip)]
    pub webhook_url: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: General,
    pub feed: FeedParameters,
    pub observation: ObservationParameters,
    pub advisory: AdvisoryParameters,
    pub gate: GateParameters,
    pub slack: SlackParameters,
}

/// Loads the configuration and returns a struct with all configuration items.
/// Without a configuration file the built-in defaults are used. The webhook URL is
/// always taken from the environment.
///
/// # Arguments
///
/// * 'config_path' - optional path to a TOML configuration file
pub fn load_config(config_path: Option<&str>) -> Result<Config, LoadConfigurationError> {
    let mut config = match config_path {
        Some(path) => {
            let toml = fs::read_to_string(path)
                .map_err(|e| LoadConfigurationError::ReadError(format!("{}: {}", path, e)))?;
            parse_config(&toml)?
        }
        None => Config::default(),
    };

    config.slack.webhook_url = webhook_url(env::var(WEBHOOK_ENV).ok());

    Ok(config)
}

/// Parses and validates a TOML configuration document
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, LoadConfigurationError> {
    let config: Config = toml::from_str(toml)
        .map_err(|e| LoadConfigurationError::ParseError(e.to_string()))?;

    validate(&config)?;

    Ok(config)
}

/// Checks configuration values that can't be expressed by types alone
///
/// # Arguments
///
/// * 'config' - the configuration to check
fn validate(config: &Config) -> Result<(), LoadConfigurationError> {
    let gate = &config.gate;
    if !(1..=12).contains(&gate.first_month) || !(1..=12).contains(&gate.last_month) {
        return Err(LoadConfigurationError::InvalidError(
            format!("gate months must be within 1-12, got {}-{}", gate.first_month, gate.last_month)));
    }
    if gate.first_month > gate.last_month {
        return Err(LoadConfigurationError::InvalidError(
            format!("gate first_month {} is after last_month {}", gate.first_month, gate.last_month)));
    }

    if Encoding::for_label(config.feed.encoding.as_bytes()).is_none() {
        return Err(LoadConfigurationError::InvalidError(
            format!("unknown feed encoding {:?}", config.feed.encoding)));
    }

    let advisory = &config.advisory;
    if advisory.judgement_temp > advisory.extreme_temp {
        return Err(LoadConfigurationError::InvalidError(
            format!("judgement_temp {} is above extreme_temp {}", advisory.judgement_temp, advisory.extreme_temp)));
    }

    Ok(())
}

/// Normalizes the raw webhook environment value, an empty value counts as unset
///
/// # Arguments
///
/// * 'raw' - value of the environment variable, if any
fn webhook_url(raw: Option<String>) -> Option<String> {
    raw.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("ReadError: {0}")]
    ReadError(String),
    #[error("ParseError: {0}")]
    ParseError(String),
    #[error("InvalidError: {0}")]
    InvalidError(String),
}
