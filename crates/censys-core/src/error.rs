use thiserror::Error;

/// Result type alias for Censys operations
pub type Result<T> = std::result::Result<T, CensysError>;

/// Errors that can occur when using the Censys API
#[derive(Error, Debug)]
pub enum CensysError {
    /// The request could not be built or sent, or the response could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a status other than 200
    #[error("{} (url: {url}, request body: {body})", status_message(.code))]
    Http {
        /// HTTP status code
        code: u16,
        /// URL the request was sent to
        url: String,
        /// Request body that was sent
        body: String,
    },

    /// Response body is not JSON or does not match the expected schema
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CensysError {
    /// Returns the HTTP status code if the API answered with an error status
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns true if the API reported that the rate limit was exceeded
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Http { code: 429, .. })
    }

    /// Returns true if the response could not be decoded
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn status_message(code: &u16) -> String {
    match code {
        400 => format!("Error {code} -> Query could not be parsed"),
        404 => format!("Error {code} -> Page not found"),
        429 => format!("Error {code} -> Rate limit exceeded"),
        500 => format!("Error {code} -> Internal server error"),
        _ => format!("unknown error code {code}"),
    }
}
