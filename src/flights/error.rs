use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenSkyError {
    #[error("Authentication with the aircraft API failed")]
    Unauthorized,
    #[error("Aircraft API endpoint not found: {0}")]
    EndpointNotFound(String),
    #[error("Aircraft API rate limit exceeded")]
    RateLimited,
    #[error("Aircraft API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Aircraft API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Aircraft API response carries no state data")]
    MissingStates,
}
