//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps a single text-generation call using [`reqwest`]. No timeout is set
//! on the client; the HTTP server's request timeout is the only bound.

use serde::{Deserialize, Serialize};

use crate::prompt::{build_extraction_prompt, EXTRACTION_MODEL};
use crate::ItemExtractor;

/// Public Gemini API endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

/// Errors from the Gemini REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no candidate text.
    #[error("Gemini returned no text")]
    EmptyResponse,
}

// ---- wire types ----

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Subset of the `generateContent` response the extractor reads.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if there is any text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiClient {
    /// Create a client for the extraction model.
    ///
    /// * `api_base` - Base URL, normally [`DEFAULT_API_BASE`].
    pub fn new(api_key: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model: EXTRACTION_MODEL.to_string(),
        }
    }

    /// Send `text` to the model and return its text output.
    ///
    /// Sends `POST /v1beta/models/{model}:generateContent` with the API key
    /// in the `x-goog-api-key` header.
    pub async fn generate(&self, text: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed = response.json::<GenerateContentResponse>().await?;

        parsed.text().ok_or(GeminiError::EmptyResponse)
    }

    // ---- private helpers ----

    /// Pass a success response through, or turn it into [`GeminiError::Api`]
    /// carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GeminiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl ItemExtractor for GeminiClient {
    async fn extract(&self, prompt: &str) -> Result<String, GeminiError> {
        let raw = self.generate(&build_extraction_prompt(prompt)).await?;
        tracing::debug!(model = %self.model, response_len = raw.len(), "Extraction response received");
        Ok(raw)
    }
}
