use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use shared::protocol::FormFields;
use tracing::{info, warn};
use url::Url;

use crate::{aggregator::parse_endpoint, error::ClientError};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Posts contact and booking forms to the mail relay.
pub struct FormRelayClient {
    http: Client,
    relay_url: Url,
    required: Vec<String>,
    timeout: Option<Duration>,
}

impl FormRelayClient {
    pub fn new<I, S>(relay_url: &str, required: I) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            http: Client::new(),
            relay_url: parse_endpoint(relay_url)?,
            required: required.into_iter().map(Into::into).collect(),
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Names of required fields that are missing or blank.
    pub fn missing_fields(&self, form: &FormFields) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| form.get(name).map_or(true, |v| v.trim().is_empty()))
            .map(String::as_str)
            .collect()
    }

    pub async fn send(&self, form: &FormFields) -> Result<(), ClientError> {
        let missing = self.missing_fields(form);
        if !missing.is_empty() {
            warn!(?missing, "form incomplete, not sent");
            return Err(ClientError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        let mut request = self.http.post(self.relay_url.clone()).form(&form.0);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let reply: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        if status.is_success() && reply["success"] == Value::Bool(true) {
            info!(relay = %self.relay_url, "form relayed");
            return Ok(());
        }
        let reason = reply["error"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| format!("relay answered {status}"));
        warn!(relay = %self.relay_url, %status, %reason, "relay rejected form");
        Err(ClientError::RelayRejected(reason))
    }
}

#[cfg(test)]
#[path = "tests/relay_tests.rs"]
mod tests;
