//! 业务逻辑服务层

mod dns_service;
mod domain_service;
pub mod options;
mod pagination;
mod projection;

pub use dns_service::{DnsService, MAX_RR_LEN};
pub use domain_service::DomainService;
pub use options::{Endpoint, PageSizeBounds, PageSizeTable, parse_page_size};
pub use pagination::collect_all_pages;

use std::sync::Arc;

use dns_update_provider::DnsProvider;

/// Query tuning shared by every service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    /// Per-endpoint page-size bounds
    pub page_sizes: PageSizeTable,
    /// Pages requested in parallel while aggregating; `1` walks pages strictly
    /// in order.
    pub concurrency: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            page_sizes: PageSizeTable::default(),
            concurrency: 1,
        }
    }
}

impl QuerySettings {
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的 Provider 实现。
pub struct ServiceContext {
    provider: Arc<dyn DnsProvider>,
    settings: QuerySettings,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>, settings: QuerySettings) -> Self {
        Self { provider, settings }
    }

    /// 获取 Provider 实例
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn DnsProvider> {
        &self.provider
    }

    #[must_use]
    pub const fn settings(&self) -> &QuerySettings {
        &self.settings
    }
}
