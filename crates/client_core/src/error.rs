use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("all {attempts} chef endpoints failed")]
    UpstreamUnavailable { attempts: usize },
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    RelayRejected(String),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
