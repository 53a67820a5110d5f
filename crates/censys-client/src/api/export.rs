//! Export API endpoints.

use crate::client::decode;
use crate::CensysClient;
use censys_core::{Credentials, ExportJob, ExportRequest, Result};

/// Export API endpoints
pub struct ExportApi<'a> {
    client: &'a CensysClient,
    credentials: &'a Credentials,
}

impl<'a> ExportApi<'a> {
    pub(crate) const fn new(client: &'a CensysClient, credentials: &'a Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Submit a JSON export job for a query
    pub async fn submit(&self, query: &str) -> Result<ExportJob> {
        let url = self.client.config().export_url();
        self.client
            .post_decode(self.credentials, &url, &ExportRequest::json(query))
            .await
    }

    /// Poll an export job and return the undecoded response body
    ///
    /// The job id is posted as the literal request body, without a JSON
    /// envelope.
    pub async fn status(&self, job_id: &str) -> Result<Vec<u8>> {
        let url = self.client.config().export_url();
        self.client.request(self.credentials, &url, job_id).await
    }

    /// Poll an export job and decode the response as untyped JSON
    pub async fn status_value(&self, job_id: &str) -> Result<serde_json::Value> {
        let raw = self.status(job_id).await?;
        decode(&raw)
    }
}
