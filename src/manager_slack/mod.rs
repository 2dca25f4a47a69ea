pub mod errors;
mod models;

use log::info;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use crate::config::{SlackParameters, WEBHOOK_ENV};
use crate::manager_slack::errors::SlackError;
use crate::manager_slack::models::SlackPayload;

/// Struct for posting messages to a Slack incoming webhook
pub struct Slack {
    client: Client,
    webhook_url: Option<String>,
}

impl Slack {
    /// Returns a new instance of the Slack struct. A missing webhook URL is reported
    /// when posting, not here.
    ///
    /// # Arguments
    ///
    /// * 'config' - slack configuration
    /// * 'client' - http client to use
    pub fn new(config: &SlackParameters, client: Client) -> Self {
        Self {
            client,
            webhook_url: config.webhook_url.clone(),
        }
    }

    /// Posts a message, anything but status 200 counts as a failed delivery
    ///
    /// # Arguments
    ///
    /// * 'message' - text to post
    pub fn post(&self, message: &str) -> Result<(), SlackError> {
        let url = self.webhook_url.as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| SlackError::ConfigurationError(format!("{} is not set", WEBHOOK_ENV)))?;

        let response = self.client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&SlackPayload { text: message })
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text()
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(SlackError::DeliveryError { status: status.as_u16(), body });
        }

        info!("Message delivered to Slack");

        Ok(())
    }
}
