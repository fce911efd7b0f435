use reqwest::StatusCode;
use thiserror::Error;

/// The only error a search reports to its caller.
///
/// Every failure collapses into this value. The underlying cause is traced
/// at debug level before the conversion and is not recoverable from here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("could not complete search")]
pub struct SearchError;

/// Why a search failed. Only visible through debug tracing.
#[derive(Debug, Error)]
pub(crate) enum SearchFailure {
    #[error("search term is empty")]
    EmptyTerm,

    #[error("could not build http client: {0}")]
    Client(reqwest::Error),

    #[error("could not build search url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<SearchFailure> for SearchError {
    fn from(_: SearchFailure) -> Self {
        SearchError
    }
}
