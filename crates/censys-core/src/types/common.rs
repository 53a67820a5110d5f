use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential pair used for HTTP Basic Authentication
///
/// The client never stores credentials; they are passed in on every call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API ID
    pub username: String,

    /// API secret
    pub secret: String,
}

impl Credentials {
    /// Create a credential pair
    #[must_use]
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Paging information returned with every search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Total number of matching records
    pub count: u64,

    /// Query as understood by the API
    pub query: String,

    /// Current page (1-indexed)
    pub page: u32,

    /// Total number of pages
    pub pages: u32,
}
