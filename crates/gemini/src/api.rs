//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps the HTTP call and response handling using [`reqwest`]; the
//! domain-facing behavior (prompts, schemas, fallback) lives in
//! [`crate::service`].

use crate::config::GeminiConfig;
use crate::messages::{GenerateContentRequest, GenerateContentResponse};

/// HTTP client for one Gemini API endpoint and key.
pub struct GeminiApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl GeminiApi {
    /// Build a client from configuration.
    ///
    /// The underlying `reqwest::Client` carries the configured request
    /// timeout, so a hung upstream call surfaces as a request error
    /// instead of stalling its caller indefinitely.
    pub fn new(config: &GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Send one `generateContent` request to the given model.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiApiError> {
        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`GeminiApiError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GeminiApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<GenerateContentResponse, GeminiApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<GenerateContentResponse>().await?)
    }
}
