//! Error types for the Financial Modeling Prep client

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by requests, response processing and the screening pipelines.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API key was configured on the client.
    #[error("API key not set")]
    MissingApiKey,

    /// The API answered with a non-200 status.
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// Value of the `X-Request-Id` header, when present
        request_id: Option<String>,
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// A row lacks a field the caller requires (or holds `null` there).
    #[error("row {row}{}: missing required field `{field}`", symbol_suffix(.symbol))]
    MissingField {
        /// Zero-based row index
        row: usize,
        /// Symbol of the row, if it has one
        symbol: Option<String>,
        /// Name of the missing field
        field: &'static str,
    },

    /// A row holds a field of the wrong JSON type.
    #[error("row {row}{}: field `{field}` is not {expected}", symbol_suffix(.symbol))]
    InvalidField {
        /// Zero-based row index
        row: usize,
        /// Symbol of the row, if it has one
        symbol: Option<String>,
        /// Name of the offending field
        field: &'static str,
        /// Description of the expected type
        expected: &'static str,
    },

    /// Body could not be parsed or serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    /// Query parameters could not be encoded.
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Transport error from reqwest.
    #[cfg(feature = "reqwest")]
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Anything else.
    #[error("{0}")]
    Custom(String),
}

fn symbol_suffix(symbol: &Option<String>) -> String {
    match symbol {
        Some(symbol) => format!(" ({symbol})"),
        None => String::new(),
    }
}
