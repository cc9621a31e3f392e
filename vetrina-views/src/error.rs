#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "influx")]
    #[error("reqwest `{0}`")]
    Transport(#[from] reqwest::Error),

    #[error("serde_json `{0}`")]
    SerdeJson(#[from] serde_json::Error),

    #[error("store answered {0}: {1}")]
    BadStatus(u16, String),

    #[error("query failed: {0}")]
    QueryFailed(String),

    #[error("unexpected count payload: {0}")]
    UnexpectedPayload(String),

    #[error("{0}")]
    Any(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
