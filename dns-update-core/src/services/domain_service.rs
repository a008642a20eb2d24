//! 域名管理服务

use std::sync::Arc;

use dns_update_provider::PaginationParams;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::services::options::Endpoint;
use crate::services::pagination::collect_all_pages;
use crate::services::projection::project_all;
use crate::types::{Domain, ListOptions};

/// 域名管理服务
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出账号下的所有域名（自动翻页）
    pub async fn list_domains(&self, options: ListOptions) -> CoreResult<Vec<Domain>> {
        let settings = self.ctx.settings();
        let page_size = settings
            .page_sizes
            .resolve(Endpoint::ListDomains, options.page_size)?;
        let provider = self.ctx.provider();

        let remote = collect_all_pages(page_size, settings.concurrency, |page| async move {
            provider
                .list_domains(&PaginationParams { page, page_size })
                .await
        })
        .await
        .inspect_err(|e| log::warn!("Failed to list domains: {e}"))?;

        log::info!("Listed {} domains", remote.len());
        Ok(project_all(remote))
    }
}
