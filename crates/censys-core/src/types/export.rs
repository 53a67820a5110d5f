use serde::{Deserialize, Serialize};

/// Request body for submitting an export job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    /// Query selecting the rows to export
    pub query: String,

    /// Output format
    pub format: String,
}

impl ExportRequest {
    /// Create a JSON export request
    #[must_use]
    pub fn json(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            format: "json".to_string(),
        }
    }
}

/// A submitted export job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportJob {
    /// Status reported by the API
    pub status: String,

    /// Settings the job runs with
    pub configuration: ExportConfiguration,

    /// Opaque identifier used to poll the job
    pub job_id: String,
}

/// Settings of an export job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfiguration {
    /// Output format
    pub format: String,

    /// Whether output files are compressed
    pub compress: bool,

    /// Whether a header row is written
    pub headers: bool,

    /// Whether nested records are flattened
    pub flatten: bool,

    /// Query being exported
    pub query: String,
}
