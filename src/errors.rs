#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("not a valid url: {0}")]
    MalformedUrl(String),

    #[error("no video id found in {0}")]
    NoMatch(String),

    #[error("invalid video id: {0:?}")]
    InvalidId(String),

    #[error("video {id} is not available (status {status})")]
    NotLive { id: String, status: u16 },

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("reqwest error: {0:?}")]
    Http(#[from] reqwest::Error),

    #[error("thumbnail metadata: {0}")]
    Metadata(String),

    #[error("json error: {0:?}")]
    Json(#[from] serde_json::Error),
}

impl ResolveError {
    /// Map a transport error, keeping timeouts distinct from other failures.
    pub fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(url.to_string())
        } else {
            Self::Http(err)
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
