// ApiResponse: everything the verifier asserts on for one request cycle

use serde_json::Value;
use std::time::Duration;

use crate::modules::markets::models::Market;

/// Captured outcome of a single request against the target service
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// `content-type` header, lowercased, if present
    pub content_type: Option<String>,
    /// Parsed JSON body; `Null` when the body was empty or not JSON
    pub body: Value,
    /// Wall-clock time from dispatch to full body receipt
    pub elapsed: Duration,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// True when the response declared a JSON content type
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false)
    }

    /// True when the call finished inside the given time budget
    pub fn within_budget(&self, budget: Duration) -> bool {
        self.elapsed <= budget
    }

    /// Message from the error envelope, when the body carries one
    pub fn error_message(&self) -> Option<&str> {
        self.body["error"]["message"].as_str()
    }

    /// Top-level confirmation message, when the body carries one
    pub fn message(&self) -> Option<&str> {
        self.body["message"].as_str()
    }

    /// Decode the body as a single market record
    pub fn market(&self) -> Result<Market, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }

    /// Decode the body as a list of market records
    pub fn markets(&self) -> Result<Vec<Market>, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }

    /// Decode the `mercado` field of an update confirmation
    pub fn confirmed_market(&self) -> Result<Market, serde_json::Error> {
        serde_json::from_value(self.body["mercado"].clone())
    }
}
