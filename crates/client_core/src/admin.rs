use reqwest::{Client, Response};
use shared::{
    domain::{ChefId, ChefRecord},
    error::ApiError,
    protocol::{AddChefRequest, AddChefResponse},
};
use tracing::info;
use url::Url;

use crate::{
    aggregator::{join_path, parse_endpoint},
    error::ClientError,
};

/// Client for the `/admin/chefs` endpoints.
pub struct AdminClient {
    http: Client,
    base: Url,
}

impl AdminClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            base: parse_endpoint(base_url)?,
        })
    }

    fn admin_chefs_url(&self) -> String {
        join_path(&self.base, "admin/chefs")
    }

    pub async fn add_chef(&self, record: ChefRecord) -> Result<ChefId, ClientError> {
        let body = AddChefRequest {
            chef_data: Some(record),
        };
        let response = self
            .http
            .post(self.admin_chefs_url())
            .json(&body)
            .send()
            .await?;
        let added: AddChefResponse = check(response).await?.json().await?;
        info!(chef_id = %added.chef_id, "chef added");
        Ok(added.chef_id)
    }

    pub async fn list_chefs(&self) -> Result<Vec<ChefRecord>, ClientError> {
        let response = self.http.get(self.admin_chefs_url()).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
#[path = "tests/admin_tests.rs"]
mod tests;
