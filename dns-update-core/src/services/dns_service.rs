//! DNS 记录查询服务

use std::sync::Arc;

use dns_update_provider::{ProviderError, RecordPageQuery, SubDomainQuery, same_zone};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::services::options::Endpoint;
use crate::services::pagination::collect_all_pages;
use crate::services::projection::project_all;
use crate::types::{DomainRecord, ListOptions, RecordStatus, SearchOptions};

/// Longest host label accepted by [`DnsService::records_by_rr`].
pub const MAX_RR_LEN: usize = 255;

/// DNS 记录查询服务
pub struct DnsService {
    ctx: Arc<ServiceContext>,
}

impl DnsService {
    /// 创建 DNS 服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出域名下的全部记录
    pub async fn list_records(
        &self,
        domain_name: &str,
        options: ListOptions,
    ) -> CoreResult<Vec<DomainRecord>> {
        let page_size = self.page_size(Endpoint::ListRecords, options.page_size)?;
        require_zone(domain_name)?;
        self.fetch_all(domain_name, page_size, None, None).await
    }

    /// 按记录类型列出（由远端过滤）
    pub async fn records_by_type(
        &self,
        domain_name: &str,
        record_type: &str,
        options: ListOptions,
    ) -> CoreResult<Vec<DomainRecord>> {
        let page_size = self.page_size(Endpoint::ByType, options.page_size)?;
        require_zone(domain_name)?;
        if record_type.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "record type must not be empty".to_string(),
            ));
        }
        self.fetch_all(domain_name, page_size, Some(record_type), None)
            .await
    }

    /// 按状态列出（由远端过滤）
    pub async fn records_by_status(
        &self,
        domain_name: &str,
        status: RecordStatus,
        options: ListOptions,
    ) -> CoreResult<Vec<DomainRecord>> {
        let page_size = self.page_size(Endpoint::ByStatus, options.page_size)?;
        require_zone(domain_name)?;
        self.fetch_all(domain_name, page_size, None, Some(status))
            .await
    }

    /// Search records by host label.
    ///
    /// The registrar can only look records up by fully-qualified name, so the
    /// host label drives the lookup and record id / status are matched
    /// afterwards. Without a host label the result is always empty and the
    /// registrar is not contacted; the page size is still checked.
    pub async fn search(&self, options: SearchOptions) -> CoreResult<Vec<DomainRecord>> {
        let page_size = self.page_size(Endpoint::Search, options.page_size)?;

        let Some(rr) = options.rr.as_deref().filter(|rr| !rr.is_empty()) else {
            log::debug!(
                "Search on {} without host label, nothing to look up",
                options.domain_name
            );
            return Ok(Vec::new());
        };

        self.lookup(&options, rr, page_size).await
    }

    /// 按主机记录查询
    pub async fn records_by_rr(&self, domain_name: &str, rr: &str) -> CoreResult<Vec<DomainRecord>> {
        if rr.is_empty() {
            return Err(CoreError::ValidationError(
                "host record must not be empty".to_string(),
            ));
        }
        if rr.chars().count() > MAX_RR_LEN {
            return Err(CoreError::ValidationError(format!(
                "host record must not exceed {MAX_RR_LEN} characters"
            )));
        }
        let page_size = self.page_size(Endpoint::ByHostLabel, None)?;

        let options = SearchOptions::new(domain_name).with_rr(rr);
        self.lookup(&options, rr, page_size).await
    }

    /// 按记录 ID 查询单条记录
    ///
    /// A record that the registrar reports under a different zone is treated
    /// as missing. When the registrar omits the owning zone the record is
    /// returned unchecked.
    pub async fn get_by_id(&self, domain_name: &str, record_id: &str) -> CoreResult<DomainRecord> {
        require_zone(domain_name)?;
        if record_id.is_empty() {
            return Err(CoreError::ValidationError(
                "record id must not be empty".to_string(),
            ));
        }

        let remote = match self.ctx.provider().get_record(record_id).await {
            Ok(record) => record,
            Err(ProviderError::RecordNotFound { .. }) => {
                log::warn!("Record {record_id} not found in {domain_name}");
                return Err(CoreError::RecordNotFound(record_id.to_string()));
            }
            Err(e) => {
                let e = CoreError::from(e);
                log_query_error("get_by_id", domain_name, &e);
                return Err(e);
            }
        };

        match remote.domain_name.as_deref() {
            Some(owner) if !same_zone(owner, domain_name) => {
                log::warn!("Record {record_id} belongs to {owner}, not {domain_name}");
                return Err(CoreError::RecordNotFound(record_id.to_string()));
            }
            Some(_) => {}
            None => log::debug!("Record {record_id}: registrar omitted the owning zone"),
        }

        Ok(remote.into())
    }

    fn page_size(&self, endpoint: Endpoint, requested: Option<u32>) -> CoreResult<u32> {
        self.ctx
            .settings()
            .page_sizes
            .resolve(endpoint, requested)
            .inspect_err(|e| log::warn!("Rejected {endpoint} request: {e}"))
    }

    async fn lookup(
        &self,
        options: &SearchOptions,
        rr: &str,
        page_size: u32,
    ) -> CoreResult<Vec<DomainRecord>> {
        require_zone(&options.domain_name)?;

        let query = SubDomainQuery {
            sub_domain: format!("{rr}.{}", options.domain_name),
            page_size,
            record_type: options.record_type.clone().filter(|t| !t.is_empty()),
        };

        let remote = self
            .ctx
            .provider()
            .list_sub_domain_records(&query)
            .await
            .map_err(CoreError::from)
            .inspect_err(|e| log_query_error("search", &options.domain_name, e))?;

        let record_id = options.record_id.as_deref().filter(|id| !id.is_empty());
        let records: Vec<DomainRecord> = project_all::<_, DomainRecord>(remote)
            .into_iter()
            .filter(|r| record_id.is_none_or(|id| r.record_id == id))
            .filter(|r| options.status.is_none_or(|s| s.matches(&r.status)))
            .collect();

        log::info!(
            "Search {} on {}: {} records",
            query.sub_domain,
            options.domain_name,
            records.len()
        );
        Ok(records)
    }

    async fn fetch_all(
        &self,
        domain_name: &str,
        page_size: u32,
        record_type: Option<&str>,
        status: Option<RecordStatus>,
    ) -> CoreResult<Vec<DomainRecord>> {
        let provider = self.ctx.provider();
        let base = RecordPageQuery::new(domain_name, 1, page_size)
            .with_record_type(record_type.map(str::to_string))
            .with_status(status.map(|s| s.as_str().to_string()));
        let base = &base;

        let remote = collect_all_pages(page_size, self.ctx.settings().concurrency, |page| {
            async move {
                let query = RecordPageQuery {
                    page,
                    ..base.clone()
                };
                provider.list_records(&query).await
            }
        })
        .await
        .inspect_err(|e| log_query_error("list_records", domain_name, e))?;

        log::info!(
            "Collected {} records from {domain_name} (page_size={page_size}, type={record_type:?}, status={status:?})",
            remote.len()
        );
        Ok(project_all(remote))
    }
}

fn require_zone(domain_name: &str) -> CoreResult<()> {
    if domain_name.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "domain name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn log_query_error(op: &str, domain_name: &str, e: &CoreError) {
    if e.is_expected() {
        log::warn!("{op} on {domain_name} failed: {e}");
    } else {
        log::error!("{op} on {domain_name} failed: {e}");
    }
}
