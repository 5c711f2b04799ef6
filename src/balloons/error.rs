use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Malformed payload in {url}: {message}")]
    Malformed { url: String, message: String },
}
