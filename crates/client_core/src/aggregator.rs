use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use shared::domain::ChefRecord;
use tracing::{info, warn};
use url::Url;

use crate::{catalog::static_chefs, error::ClientError};

pub const DEFAULT_CHEF_ENDPOINTS: &[&str] = &["http://localhost:3001"];

#[derive(Debug, Clone)]
pub struct AggregatorSettings {
    /// Candidate API base URLs, tried in this order.
    pub endpoints: Vec<String>,
    /// Upper bound for one candidate. `None` leaves the HTTP client default.
    pub per_endpoint_timeout: Option<Duration>,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_CHEF_ENDPOINTS
                .iter()
                .map(|url| url.to_string())
                .collect(),
            per_endpoint_timeout: None,
        }
    }
}

/// Merges the static chef baseline with chefs served by the first reachable
/// chef API.
pub struct ChefAggregator {
    http: Client,
    endpoints: Vec<Url>,
    per_endpoint_timeout: Option<Duration>,
    baseline: Vec<ChefRecord>,
}

impl ChefAggregator {
    pub fn new(settings: AggregatorSettings) -> Result<Self, ClientError> {
        Self::with_baseline(settings, static_chefs())
    }

    pub fn with_baseline(
        settings: AggregatorSettings,
        baseline: Vec<ChefRecord>,
    ) -> Result<Self, ClientError> {
        let endpoints = settings
            .endpoints
            .iter()
            .map(|raw| parse_endpoint(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            http: Client::new(),
            endpoints,
            per_endpoint_timeout: settings.per_endpoint_timeout,
            baseline,
        })
    }

    /// Static chefs followed by dynamic chefs, each group in source order.
    /// Never fails: when no endpoint answers only the baseline is returned.
    pub async fn get_all_chefs(&self) -> Vec<ChefRecord> {
        let mut chefs = self.baseline.clone();
        match self.fetch_dynamic_chefs().await {
            Ok(dynamic) if !dynamic.is_empty() => {
                info!(
                    static_count = self.baseline.len(),
                    dynamic_count = dynamic.len(),
                    "combined static and dynamic chefs"
                );
                chefs.extend(dynamic);
            }
            Ok(_) => {
                info!(
                    static_count = self.baseline.len(),
                    "using static chefs, endpoint returned none"
                );
            }
            Err(error) => {
                warn!(
                    %error,
                    static_count = self.baseline.len(),
                    "using static chefs only"
                );
            }
        }
        chefs
    }

    /// Tries each endpoint in order and stops at the first success.
    pub async fn fetch_dynamic_chefs(&self) -> Result<Vec<ChefRecord>, ClientError> {
        for endpoint in &self.endpoints {
            match self.fetch_from(endpoint).await {
                Ok(chefs) => {
                    info!(%endpoint, count = chefs.len(), "fetched dynamic chefs");
                    return Ok(chefs);
                }
                Err(error) => {
                    warn!(%endpoint, %error, "chef endpoint failed, trying next");
                }
            }
        }
        Err(ClientError::UpstreamUnavailable {
            attempts: self.endpoints.len(),
        })
    }

    async fn fetch_from(&self, endpoint: &Url) -> Result<Vec<ChefRecord>, ClientError> {
        let mut request = self.http.get(chefs_url(endpoint));
        if let Some(timeout) = self.per_endpoint_timeout {
            request = request.timeout(timeout);
        }
        let entries = request
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Value>>()
            .await?;
        Ok(decode_chefs(endpoint, entries))
    }
}

/// Entries that are not chef objects are skipped; the rest of the answer
/// still counts.
fn decode_chefs(endpoint: &Url, entries: Vec<Value>) -> Vec<ChefRecord> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(chef) => Some(chef),
            Err(error) => {
                warn!(%endpoint, index, %error, "skipping undecodable chef entry");
                None
            }
        })
        .collect()
}

pub(crate) fn parse_endpoint(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw.trim()).map_err(|e| ClientError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// `<base>/<path>`, keeping any path prefix on the base.
pub(crate) fn join_path(base: &Url, path: &str) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), path)
}

fn chefs_url(base: &Url) -> String {
    join_path(base, "chefs")
}

#[cfg(test)]
#[path = "tests/aggregator_tests.rs"]
mod tests;
