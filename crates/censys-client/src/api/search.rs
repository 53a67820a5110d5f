//! Search API endpoints.

use crate::client::decode;
use crate::CensysClient;
use censys_core::{
    CertificateRecord, Credentials, HostRecord, Result, SearchIndex, SearchRecord, SearchRequest,
    SearchResults, WebsiteRecord,
};

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a CensysClient,
    credentials: &'a Credentials,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a CensysClient, credentials: &'a Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Search an index and return the undecoded response body
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = client
    ///     .search(&creds)
    ///     .raw(SearchIndex::Hosts, "80.http.get.headers.server: Apache", 1)
    ///     .await?;
    /// ```
    pub async fn raw(&self, index: SearchIndex, query: &str, page: u32) -> Result<Vec<u8>> {
        let url = self.client.config().search_url(index.as_str());
        self.client
            .post_json(self.credentials, &url, &SearchRequest::new(query, page))
            .await
    }

    /// Search the index holding `R` and decode one page of results
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let page = client.search(&creds).typed::<HostRecord>("443.https", 1).await?;
    /// ```
    pub async fn typed<R: SearchRecord>(&self, query: &str, page: u32) -> Result<SearchResults<R>> {
        let raw = self.raw(R::INDEX, query, page).await?;
        decode(&raw)
    }

    /// Search the `ipv4` index
    pub async fn hosts(&self, query: &str, page: u32) -> Result<SearchResults<HostRecord>> {
        self.typed(query, page).await
    }

    /// Search the `websites` index
    pub async fn websites(&self, query: &str, page: u32) -> Result<SearchResults<WebsiteRecord>> {
        self.typed(query, page).await
    }

    /// Search the `certificates` index
    pub async fn certificates(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults<CertificateRecord>> {
        self.typed(query, page).await
    }
}
