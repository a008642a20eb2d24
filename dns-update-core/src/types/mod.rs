//! 类型定义模块

mod dns;
mod domain;

pub use dns::{DomainRecord, ListOptions, RecordStatus, SearchOptions};
pub use domain::Domain;

// Re-export provider 库的公共类型
pub use dns_update_provider::{PaginatedResponse, PaginationParams, RemoteDomain, RemoteRecord};
