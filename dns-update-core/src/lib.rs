//! DNS Update Core Library
//!
//! Query engine over a DNS registrar, including:
//! - Page-size resolution per endpoint (Options Resolver)
//! - Multi-page retrieval with abort-on-failure semantics (Paginated Aggregator)
//! - Host-label search with client-side record id / status matching
//! - Projection of registrar entities into stable output types
//!
//! The registrar is reached only through [`dns_update_provider::DnsProvider`],
//! injected via [`ServiceContext`].

pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{DnsService, DomainService, QuerySettings, ServiceContext};
