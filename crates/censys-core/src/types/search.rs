use super::Metadata;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Searchable dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchIndex {
    /// IPv4 hosts
    #[serde(rename = "ipv4")]
    Hosts,
    /// Websites
    #[serde(rename = "websites")]
    Websites,
    /// X.509 certificates
    #[serde(rename = "certificates")]
    Certificates,
}

impl SearchIndex {
    /// Name of the index as used in the endpoint path
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hosts => "ipv4",
            Self::Websites => "websites",
            Self::Certificates => "certificates",
        }
    }
}

impl fmt::Display for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipv4" | "hosts" => Ok(Self::Hosts),
            "websites" => Ok(Self::Websites),
            "certificates" => Ok(Self::Certificates),
            other => Err(format!("unknown search index: {other}")),
        }
    }
}

/// Request body for the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Query in Censys search syntax
    pub query: String,

    /// Page to fetch (1-indexed)
    pub page: u32,

    /// Fields to return; empty selects the index defaults
    pub fields: Vec<String>,
}

impl SearchRequest {
    /// Create a request for one page of a query
    #[must_use]
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            fields: Vec::new(),
        }
    }
}

/// A record type that can be returned by a search
///
/// Each implementor names the index it is stored in, so a typed search
/// only needs the record type.
pub trait SearchRecord: DeserializeOwned {
    /// Index holding this kind of record
    const INDEX: SearchIndex;
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: DeserializeOwned", serialize = "R: Serialize"))]
pub struct SearchResults<R> {
    /// Status reported by the API (usually "ok")
    pub status: String,

    /// Paging information
    pub metadata: Metadata,

    /// Matching records, in API order
    pub results: Vec<R>,
}

impl<R> SearchResults<R> {
    /// Returns true if this page holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of records in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if pages follow this one
    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.metadata.page < self.metadata.pages
    }
}

/// Host from the `ipv4` index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// IP address
    pub ip: String,

    /// Open services as `port/protocol`
    pub protocols: Vec<String>,
}

impl SearchRecord for HostRecord {
    const INDEX: SearchIndex = SearchIndex::Hosts;
}

/// Website from the `websites` index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteRecord {
    /// Domain name
    pub domain: String,

    /// Alexa rank
    #[serde(rename = "alexa_rank")]
    pub rank: Vec<i64>,
}

impl SearchRecord for WebsiteRecord {
    const INDEX: SearchIndex = SearchIndex::Websites;
}

/// Certificate from the `certificates` index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// SHA-256 fingerprints
    #[serde(rename = "parsed.fingerprint_sha256")]
    pub fingerprint_sha256: Vec<String>,

    /// Subject distinguished names
    #[serde(rename = "parsed.subject_dn")]
    pub subject_dn: Vec<String>,

    /// Issuer distinguished names
    #[serde(rename = "parsed.issuer_dn")]
    pub issuer_dn: Vec<String>,
}

impl SearchRecord for CertificateRecord {
    const INDEX: SearchIndex = SearchIndex::Certificates;
}
