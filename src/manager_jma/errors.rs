use thiserror::Error;

/// Error depicting errors that occur while fetching the temperature feed
///
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("StatusError: feed responded with status {0}")]
    StatusError(u16),
    #[error("EncodingError: unknown encoding {0:?}")]
    EncodingError(String),
    #[error("DocumentError: {0}")]
    DocumentError(#[from] csv::Error),
}
