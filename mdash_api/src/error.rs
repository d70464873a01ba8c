use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Device id and/or API key are not configured")]
    MissingCredentials,

    #[error("No widgets to send")]
    EmptyUi,

    #[error("Invalid dashboard URL {url}: {reason}")]
    Url { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dashboard replied with status {status}")]
    Reply {
        status: u16,
        code: Option<i64>,
        message: Option<String>,
    },
}
