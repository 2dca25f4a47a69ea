pub mod errors;
pub mod models;

use encoding_rs::Encoding;
use log::{info, warn};
use reqwest::blocking::Client;
use crate::config::FeedParameters;
use crate::manager_jma::errors::FeedError;
use crate::manager_jma::models::TemperatureTable;

/// Struct for fetching the JMA daily maximum temperature feed
pub struct Jma {
    client: Client,
    url: String,
    encoding: String,
}

impl Jma {
    /// Returns a new instance of the Jma struct
    ///
    /// # Arguments
    ///
    /// * 'config' - feed configuration
    /// * 'client' - http client to use
    pub fn new(config: &FeedParameters, client: Client) -> Self {
        Self {
            client,
            url: config.url.clone(),
            encoding: config.encoding.clone(),
        }
    }

    /// Downloads the feed and parses it into a temperature table.
    /// The body is always decoded with the configured encoding, whatever charset the server declares.
    ///
    pub fn get_temperature_table(&self) -> Result<TemperatureTable, FeedError> {
        let encoding = Encoding::for_label(self.encoding.as_bytes())
            .ok_or_else(|| FeedError::EncodingError(self.encoding.clone()))?;

        let response = self.client
            .get(&self.url)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::StatusError(status.as_u16()));
        }

        let bytes = response.bytes()?;
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes);
        if had_errors {
            warn!("Feed contains byte sequences that are not valid {}", encoding.name());
        }

        let table = TemperatureTable::from_csv(&text)?;

        info!("Fetched temperature table with {} rows from {}", table.row_count(), self.url);

        Ok(table)
    }
}
