//! Extraction client for the Google Gemini text-generation API.
//!
//! - [`prompt`] builds the fixed extraction instruction around a user prompt.
//! - [`api`] is the HTTP client for the `generateContent` endpoint.
//! - [`ItemExtractor`] is the seam the HTTP layer depends on.

pub mod api;
pub mod prompt;

pub use api::{GeminiClient, GeminiError};

/// Produces the raw model text for a shopping prompt.
///
/// Implementations embed the prompt in the extraction instruction, make a
/// single upstream call and return the model output unmodified. Errors are
/// returned as-is: no retry, no backoff.
#[async_trait::async_trait]
pub trait ItemExtractor: Send + Sync {
    async fn extract(&self, prompt: &str) -> Result<String, GeminiError>;
}
