//! HTTP client for the Censys v1 API.
//!
//! This crate provides the main [`CensysClient`] for searching indices and
//! running export jobs. Credentials are passed per call and never stored.

#![doc(html_root_url = "https://docs.rs/censys-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use censys_core::{CensysError, Credentials, Result};
pub use client::{CensysClient, CensysClientBuilder};
pub use config::*;
