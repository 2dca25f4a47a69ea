use thiserror::Error;

/// Error depicting errors that occur while posting to Slack
///
#[derive(Error, Debug)]
pub enum SlackError {
    #[error("ConfigurationError: {0}")]
    ConfigurationError(String),
    #[error("DeliveryError: status {status}, body: {body:?}")]
    DeliveryError { status: u16, body: String },
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
}
