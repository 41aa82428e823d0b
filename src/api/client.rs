//! REST client for the clinic backend
//!
//! Every endpoint answers with the `{success, data | message}` envelope;
//! see [`super::envelope`].

use super::envelope;
use super::error::ApiError;
use super::request::{ApiMethod, ApiRequest};
use super::traits::ClinicApi;
use crate::state::{from_api_list, Equipment, MaintenanceRequest, Technician, User};
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client for the clinic REST API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut builder = self.http.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        envelope::interpret(status, &text).inspect_err(|e| {
            tracing::warn!(%url, status, error = %e, "backend rejected request");
        })
    }

    async fn get_list(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(reqwest::Method::GET, path, None).await
    }
}

#[async_trait]
impl ClinicApi for ApiClient {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, ApiError> {
        let data = self.get_list("equipment").await?;
        Ok(from_api_list(&data, Equipment::from_api))
    }

    async fn list_technicians(&self) -> Result<Vec<Technician>, ApiError> {
        let data = self.get_list("technicians").await?;
        Ok(from_api_list(&data, Technician::from_api))
    }

    async fn list_maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>, ApiError> {
        let data = self.get_list("maintenance-requests").await?;
        Ok(from_api_list(&data, MaintenanceRequest::from_api))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let data = self.get_list("users").await?;
        Ok(from_api_list(&data, User::from_api))
    }

    async fn send(
        &self,
        request: ApiRequest,
        cancel: CancellationToken,
    ) -> Result<Value, ApiError> {
        let method = match request.method {
            ApiMethod::Post => reqwest::Method::POST,
            ApiMethod::Put => reqwest::Method::PUT,
        };
        let path = request.path();
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(%path, "request cancelled");
                Err(ApiError::Cancelled)
            }
            result = self.execute(method, &path, Some(&request.body)) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Resource;
    use serde_json::json;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://clinic.local/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://clinic.local/api");
        assert_eq!(client.url("equipment"), "http://clinic.local/api/equipment");
        assert_eq!(client.url("/users/1"), "http://clinic.local/api/users/1");
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        // Unroutable address; the pre-cancelled token must win before any I/O completes
        let client = ApiClient::new("http://10.255.255.1:9/api", Duration::from_secs(30)).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = client
            .send(ApiRequest::create(Resource::Equipment, json!({})), cancel)
            .await;
        assert_eq!(result, Err(ApiError::Cancelled));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = ApiClient::new("http://127.0.0.1:1/api", Duration::from_secs(5)).unwrap();
        let result = client.list_equipment().await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
