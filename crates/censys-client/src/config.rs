//! Client configuration types.

/// The Censys v1 API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.censys.io/api/v1";

/// Path segment of the search endpoints
pub const DEFAULT_SEARCH_PATH: &str = "search";

/// Path segment of the export endpoint
pub const DEFAULT_EXPORT_PATH: &str = "export";

/// Endpoint locations used by one client instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint is resolved against
    pub base_url: String,

    /// Path segment of the search endpoints
    pub search_path: String,

    /// Path segment of the export endpoint
    pub export_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            export_path: DEFAULT_EXPORT_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration with the default endpoints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the search path segment
    #[must_use]
    pub fn search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }

    /// Set the export path segment
    #[must_use]
    pub fn export_path(mut self, path: impl Into<String>) -> Self {
        self.export_path = path.into();
        self
    }

    /// URL of the search endpoint for an index, e.g. `<base>/search/ipv4`
    #[must_use]
    pub fn search_url(&self, index: &str) -> String {
        self.join(&[&self.search_path, index])
    }

    /// URL of the export endpoint, `<base>/export`
    #[must_use]
    pub fn export_url(&self) -> String {
        self.join(&[&self.export_path])
    }

    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.push_str(segment.trim_matches('/'));
        }
        url
    }
}
