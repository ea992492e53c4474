//! Error taxonomy for composition and generation calls

use thiserror::Error;

/// Errors surfaced by the composer, session guard, and generation client.
///
/// `EmptyInput` is checked locally and prevents the network call entirely.
/// Everything else is raised at the call site; callers roll back to their
/// pre-call state (no retry, no partial result).
#[derive(Debug, Error)]
pub enum Error {
    #[error("no prompt text or base image was provided")]
    EmptyInput,

    #[error("API key not configured (set GEMINI_API_KEY)")]
    ApiKeyMissing,

    #[error("another primary request is already in flight")]
    RequestInFlight,

    #[error("generation service call failed: {0}")]
    ServiceCall(#[from] reqwest::Error),

    #[error("generation service returned status {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("invalid structured response: {0}")]
    InvalidResponse(String),

    #[error("no image data found in response")]
    NoImageInResponse,
}

pub type Result<T> = std::result::Result<T, Error>;
