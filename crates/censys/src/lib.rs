//! Rust client for the Censys v1 search and export API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use censys::{CensysClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> censys::Result<()> {
//!     let client = CensysClient::new()?;
//!     let creds = Credentials::new("api-id", "api-secret");
//!
//!     // One page of hosts
//!     let page = client
//!         .search(&creds)
//!         .hosts("80.http.get.headers.server: Apache", 1)
//!         .await?;
//!     println!("{} hosts over {} pages", page.metadata.count, page.metadata.pages);
//!
//!     // Start an export and poll it
//!     let job = client.export(&creds).submit("select ip from ipv4.20151020").await?;
//!     let status = client.export(&creds).status_value(&job.job_id).await?;
//!     println!("{status}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/censys/0.1.0")]

// Re-export core types
pub use censys_core::*;

// Re-export client
pub use censys_client::{api, ApiConfig, CensysClient, CensysClientBuilder, DEFAULT_BASE_URL};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
