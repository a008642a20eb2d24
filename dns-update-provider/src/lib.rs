//! # dns-update-provider
//!
//! Read-only client for the Aliyun DNS (Alidns 2015-01-09) registrar API.
//!
//! The [`DnsProvider`] trait is the only surface the query engine talks to. Every
//! operation is a single bounded request: one page of zones, one page of records,
//! one sub-domain lookup or one record by id. Assembling complete result sets is
//! left to the caller.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for static and container builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_update_provider::{AliyunProvider, DnsProvider, PaginationParams, RecordPageQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = AliyunProvider::new(
//!         "your-access-key-id".to_string(),
//!         "your-access-key-secret".to_string(),
//!     )?;
//!
//!     let zones = provider.list_domains(&PaginationParams::default()).await?;
//!     for zone in &zones.items {
//!         println!("{:?}", zone.domain_name);
//!     }
//!
//!     let page = provider
//!         .list_records(&RecordPageQuery::new("example.com", 1, 100))
//!         .await?;
//!     println!("{} of {} records", page.items.len(), page.total_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Aliyun
//! error codes are mapped onto structured variants:
//!
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::RecordNotFound`] — the record id is unknown to the registrar
//! - [`ProviderError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`] — network connectivity issue (retryable)
//!
//! Retries are off by default; see [`AliyunProviderBuilder::max_retries`].

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use traits::DnsProvider;

pub use types::{
    PaginatedResponse, PaginationParams, RecordPageQuery, RemoteDomain, RemoteRecord,
    SubDomainQuery,
};

pub use utils::log_sanitizer;

pub use providers::common::same_zone;
pub use providers::{AliyunProvider, AliyunProviderBuilder};
