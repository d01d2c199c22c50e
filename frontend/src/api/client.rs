use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

/// Thin wrapper over `reqwest::Client` carrying the resolved API base URL.
/// Cheap to clone; usually provided once through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Identifier-taking operations fail fast here, before any network
    /// call is attempted.
    pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| ApiError::invalid_id(format!("IDの形式が正しくありません: {}", raw)))
    }

    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))
    }

    pub(crate) async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::read_error(response).await)
        }
    }

    pub(crate) async fn expect_ok(response: reqwest::Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::read_error(response).await)
        }
    }

    async fn read_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => envelope.into_api_error(),
            Err(_) => ApiError::transport(format!("Request failed with status {}", status)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
