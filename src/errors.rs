use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    /// The content API base URL was not provided. Raised eagerly when the
    /// client is constructed, never lazily at the first request.
    #[error("Content API base URL is not configured")]
    MissingBaseUrl,
    /// The request to the backend failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status code.
    #[error("Failed to fetch {1} (Status {0})")]
    Status(reqwest::StatusCode, String),
    /// The response body did not match the expected envelope shape.
    #[error("Failed to decode response from {1}: {0}")]
    Decode(#[source] serde_json::Error, String),
}

pub type ContentResult<T> = Result<T, ContentError>;
