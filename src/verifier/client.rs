// MercadoClient: one method per operation of the /mercado contract
//
// Every call is a single request/response cycle bounded by the configured
// time budget. Nothing is retried; a budget overrun or transport failure
// surfaces as a VerifyError.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::VerifierConfig;
use crate::core::{AppError, Result, VerifyError};
use crate::modules::markets::models::MarketPayload;

use super::response::ApiResponse;

pub struct MercadoClient {
    client: reqwest::Client,
    base_url: String,
    budget: Duration,
}

impl MercadoClient {
    /// Build a client bound to a base URL with a per-request time budget
    pub fn new(base_url: impl Into<String>, budget: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(budget)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            budget,
        })
    }

    pub fn from_config(config: &VerifierConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), config.time_budget)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// List all markets
    /// GET /mercado
    pub async fn list(&self) -> std::result::Result<ApiResponse, VerifyError> {
        self.dispatch(self.client.get(self.url("/mercado"))).await
    }

    /// Create a market from a typed payload
    /// POST /mercado
    pub async fn create(
        &self,
        payload: &MarketPayload,
    ) -> std::result::Result<ApiResponse, VerifyError> {
        self.create_raw(payload).await
    }

    /// Create a market from an arbitrary JSON body (malformed-input probes)
    pub async fn create_raw<T: Serialize + ?Sized>(
        &self,
        payload: &T,
    ) -> std::result::Result<ApiResponse, VerifyError> {
        self.dispatch(self.client.post(self.url("/mercado")).json(payload))
            .await
    }

    /// Retrieve a market by id
    /// GET /mercado/{id}
    pub async fn retrieve(&self, id: i64) -> std::result::Result<ApiResponse, VerifyError> {
        self.retrieve_raw(&id.to_string()).await
    }

    /// Retrieve with an arbitrary id segment (non-numeric probes)
    pub async fn retrieve_raw(
        &self,
        id: &str,
    ) -> std::result::Result<ApiResponse, VerifyError> {
        self.dispatch(self.client.get(self.url(&format!("/mercado/{}", id))))
            .await
    }

    /// Update a market by id
    /// PUT /mercado/{id}
    pub async fn update(
        &self,
        id: i64,
        payload: &MarketPayload,
    ) -> std::result::Result<ApiResponse, VerifyError> {
        self.update_raw(&id.to_string(), payload).await
    }

    /// Update with arbitrary id segment and body
    pub async fn update_raw<T: Serialize + ?Sized>(
        &self,
        id: &str,
        payload: &T,
    ) -> std::result::Result<ApiResponse, VerifyError> {
        self.dispatch(
            self.client
                .put(self.url(&format!("/mercado/{}", id)))
                .json(payload),
        )
        .await
    }

    /// Delete a market by id
    /// DELETE /mercado/{id}
    pub async fn delete(&self, id: i64) -> std::result::Result<ApiResponse, VerifyError> {
        self.delete_raw(&id.to_string()).await
    }

    /// Delete with an arbitrary id segment (malformed-id probes)
    pub async fn delete_raw(&self, id: &str) -> std::result::Result<ApiResponse, VerifyError> {
        self.dispatch(self.client.delete(self.url(&format!("/mercado/{}", id))))
            .await
    }

    /// Unsupported-method probe: DELETE on the collection itself
    pub async fn delete_collection(&self) -> std::result::Result<ApiResponse, VerifyError> {
        self.dispatch(self.client.delete(self.url("/mercado"))).await
    }

    /// Unknown-route probe: GET an arbitrary path under the base URL
    pub async fn get_path(&self, path: &str) -> std::result::Result<ApiResponse, VerifyError> {
        self.dispatch(self.client.get(self.url(path))).await
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<ApiResponse, VerifyError> {
        let budget = self.budget;
        let started = Instant::now();

        let response = request
            .send()
            .await
            .map_err(|e| VerifyError::from_request_error(e, budget))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase());

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                VerifyError::Timeout { budget }
            } else {
                VerifyError::InvalidBody(e)
            }
        })?;
        let elapsed = started.elapsed();

        // Empty or non-JSON bodies are captured as Null rather than failing;
        // shape assertions are the caller's concern.
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Ok(ApiResponse {
            status,
            content_type,
            body,
            elapsed,
        })
    }
}
