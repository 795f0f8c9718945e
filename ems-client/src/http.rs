//! HTTP client for network-based API calls

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::client::{DeleteAck, EmployeeCreated, EmployeeList, EmployeeUpdated, ErrorBody};
use shared::models::EmployeeInput;
use shared::validation;

/// The list/delete surface the list view depends on; implemented by
/// [`HttpClient`] and by in-memory fakes in tests.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list(
        &self,
        search: Option<&str>,
        page: i64,
        limit: i64,
    ) -> ClientResult<EmployeeList>;

    async fn delete(&self, id: i64) -> ClientResult<DeleteAck>;
}

/// HTTP client for making network requests to the EMS server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a new employee.
    ///
    /// The shared validation rules run before anything touches the
    /// network, so a form can surface the first failing rule without a
    /// round trip.
    pub async fn create(&self, input: &EmployeeInput) -> ClientResult<EmployeeCreated> {
        let input = input.trimmed();
        validation::validate(&input).map_err(|e| ClientError::Validation(e.to_string()))?;

        let response = self
            .client
            .post(self.url("/api/v1/employee"))
            .json(&input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Replace all business fields of an existing employee
    pub async fn update(&self, id: i64, input: &EmployeeInput) -> ClientResult<EmployeeUpdated> {
        let input = input.trimmed();
        validation::validate(&input).map_err(|e| ClientError::Validation(e.to_string()))?;

        let response = self
            .client
            .put(self.url(&format!("/api/v1/employee/{id}")))
            .json(&input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Liveness probe
    pub async fn health(&self) -> ClientResult<String> {
        let response = self.client.get(self.url("/check")).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Internal(format!(
                "Health check failed: {}",
                response.status()
            )));
        }
        Ok(response.text().await?)
    }

    /// Handle the HTTP response, mapping failures onto [`ClientError`]
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Failure bodies carry {success, statusCode, message}
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl EmployeeApi for HttpClient {
    async fn list(
        &self,
        search: Option<&str>,
        page: i64,
        limit: i64,
    ) -> ClientResult<EmployeeList> {
        let mut request = self
            .client
            .get(self.url("/api/v1/employee"))
            .query(&[("page", page), ("limit", limit)]);
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            request = request.query(&[("search", term)]);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, id: i64) -> ClientResult<DeleteAck> {
        let response = self
            .client
            .delete(self.url(&format!("/api/v1/employee/{id}")))
            .send()
            .await?;
        Self::handle_response(response).await
    }
}
