use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

impl FetchError {
    /// True when the caller supplied a bad URL, as opposed to the remote end failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FetchError::InvalidUrl { .. } | FetchError::UnsupportedScheme(_))
    }
}
