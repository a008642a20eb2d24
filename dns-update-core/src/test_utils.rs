//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dns_update_provider::{
    DnsProvider, PaginatedResponse, PaginationParams, ProviderError, RecordPageQuery,
    RemoteDomain, RemoteRecord, SubDomainQuery,
};

use crate::services::{QuerySettings, ServiceContext};

/// 记录下来的 Provider 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListDomains { page: u32, page_size: u32 },
    ListRecords(RecordPageQuery),
    SubDomain(SubDomainQuery),
    GetRecord(String),
}

// ===== MockDnsProvider =====

/// In-memory registrar for a single zone.
///
/// Behaves like the real API: `list_records` filters by type/status and slices
/// pages, `list_sub_domain_records` matches `rr.zone`, `get_record` reports the
/// owning zone.
pub struct MockDnsProvider {
    zone: String,
    domains: Vec<RemoteDomain>,
    records: Vec<RemoteRecord>,
    foreign: Vec<RemoteRecord>,
    fail_on_page: Option<u32>,
    failing_lookups: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockDnsProvider {
    pub fn new(zone: &str) -> Self {
        Self {
            zone: zone.to_string(),
            domains: Vec::new(),
            records: Vec::new(),
            foreign: Vec::new(),
            fail_on_page: None,
            failing_lookups: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_domains(mut self, domains: Vec<RemoteDomain>) -> Self {
        self.domains = domains;
        self
    }

    pub fn with_records(mut self, records: Vec<RemoteRecord>) -> Self {
        self.records = records;
        self
    }

    /// A record only reachable by id, reported with its own `domain_name`.
    pub fn with_foreign_record(mut self, record: RemoteRecord) -> Self {
        self.foreign.push(record);
        self
    }

    /// `list_records` / `list_domains` fail with a network error on this page.
    pub fn fail_on_page(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    /// `get_record` and `list_sub_domain_records` fail with a network error.
    pub fn failing_lookups(mut self) -> Self {
        self.failing_lookups = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn network_error(detail: String) -> ProviderError {
        ProviderError::NetworkError {
            provider: "mock".to_string(),
            detail,
        }
    }

    fn check_page(&self, page: u32) -> dns_update_provider::Result<()> {
        if self.fail_on_page == Some(page) {
            return Err(Self::network_error(format!("page {page} unavailable")));
        }
        Ok(())
    }
}

fn slice_page<T: Clone>(items: &[T], page: u32, page_size: u32) -> PaginatedResponse<T> {
    let start = ((page.saturating_sub(1)) as usize).saturating_mul(page_size as usize);
    let end = start.saturating_add(page_size as usize).min(items.len());
    let slice = items.get(start..end).unwrap_or_default().to_vec();
    PaginatedResponse::new(slice, page, page_size, items.len() as u32)
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn validate_credentials(&self) -> dns_update_provider::Result<bool> {
        Ok(true)
    }

    async fn list_domains(
        &self,
        params: &PaginationParams,
    ) -> dns_update_provider::Result<PaginatedResponse<RemoteDomain>> {
        self.record(Call::ListDomains {
            page: params.page,
            page_size: params.page_size,
        });
        self.check_page(params.page)?;
        Ok(slice_page(&self.domains, params.page, params.page_size))
    }

    async fn list_records(
        &self,
        query: &RecordPageQuery,
    ) -> dns_update_provider::Result<PaginatedResponse<RemoteRecord>> {
        self.record(Call::ListRecords(query.clone()));
        self.check_page(query.page)?;

        let matching: Vec<RemoteRecord> = self
            .records
            .iter()
            .filter(|r| {
                query
                    .record_type
                    .as_deref()
                    .is_none_or(|t| r.record_type.as_deref() == Some(t))
            })
            .filter(|r| {
                query.status.as_deref().is_none_or(|s| {
                    r.status
                        .as_deref()
                        .is_some_and(|rs| rs.eq_ignore_ascii_case(s))
                })
            })
            .cloned()
            .collect();
        Ok(slice_page(&matching, query.page, query.page_size))
    }

    async fn list_sub_domain_records(
        &self,
        query: &SubDomainQuery,
    ) -> dns_update_provider::Result<Vec<RemoteRecord>> {
        self.record(Call::SubDomain(query.clone()));
        if self.failing_lookups {
            return Err(Self::network_error("lookup failed".to_string()));
        }

        Ok(self
            .records
            .iter()
            .filter(|r| {
                r.rr
                    .as_deref()
                    .is_some_and(|rr| format!("{rr}.{}", self.zone) == query.sub_domain)
            })
            .filter(|r| {
                query
                    .record_type
                    .as_deref()
                    .is_none_or(|t| r.record_type.as_deref() == Some(t))
            })
            .take(query.page_size as usize)
            .cloned()
            .collect())
    }

    async fn get_record(&self, record_id: &str) -> dns_update_provider::Result<RemoteRecord> {
        self.record(Call::GetRecord(record_id.to_string()));
        if self.failing_lookups {
            return Err(Self::network_error("lookup failed".to_string()));
        }

        if let Some(r) = self
            .records
            .iter()
            .find(|r| r.record_id.as_deref() == Some(record_id))
        {
            let mut r = r.clone();
            r.domain_name.get_or_insert_with(|| self.zone.clone());
            return Ok(r);
        }

        self.foreign
            .iter()
            .find(|r| r.record_id.as_deref() == Some(record_id))
            .cloned()
            .ok_or_else(|| ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: record_id.to_string(),
                raw_message: Some("The DNS record does not exist.".to_string()),
            })
    }
}

// ===== 工厂方法 =====

pub fn remote_record(id: &str, rr: &str, record_type: &str, status: &str) -> RemoteRecord {
    RemoteRecord {
        record_id: Some(id.to_string()),
        rr: Some(rr.to_string()),
        record_type: Some(record_type.to_string()),
        value: Some("192.0.2.1".to_string()),
        status: Some(status.to_string()),
        locked: Some(false),
        line: Some("default".to_string()),
        priority: None,
        ttl: Some(600),
        domain_name: None,
    }
}

pub fn remote_domain(name: &str) -> RemoteDomain {
    RemoteDomain {
        domain_id: Some(format!("id-{name}")),
        domain_name: Some(name.to_string()),
        puny_code: Some(name.to_string()),
        ali_domain: Some(false),
        record_count: None,
    }
}

/// 创建测试用 `ServiceContext`
pub fn create_test_context(provider: Arc<MockDnsProvider>) -> Arc<ServiceContext> {
    create_test_context_with(provider, QuerySettings::default())
}

pub fn create_test_context_with(
    provider: Arc<MockDnsProvider>,
    settings: QuerySettings,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(provider, settings))
}
