//! Core types and errors for the Censys v1 API client.
//!
//! This crate provides the foundational types used across the Censys library:
//!
//! - **Types**: Strongly-typed search records, export jobs and credentials
//! - **Errors**: The request/response error taxonomy in [`CensysError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use censys_core::{HostRecord, Result, SearchResults};
//!
//! fn print_hosts(page: SearchResults<HostRecord>) -> Result<()> {
//!     for host in &page.results {
//!         println!("{}: {:?}", host.ip, host.protocols);
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/censys-core/0.1.0")]

mod error;
pub mod types;

pub use error::{CensysError, Result};
pub use types::*;
