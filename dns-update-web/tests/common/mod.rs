//! HTTP 测试公共设施

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dns_update_core::{QuerySettings, ServiceContext};
use dns_update_provider::{
    DnsProvider, PaginatedResponse, PaginationParams, ProviderError, RecordPageQuery,
    RemoteDomain, RemoteRecord, SubDomainQuery,
};
use dns_update_web::AppState;

pub const ZONE: &str = "example.com";

/// Registrar stub serving one zone; counts every remote call.
pub struct StubProvider {
    records: Vec<RemoteRecord>,
    failure: Option<ProviderError>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(records: Vec<RemoteRecord>) -> Self {
        Self {
            records,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> dns_update_provider::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DnsProvider for StubProvider {
    fn id(&self) -> &'static str {
        "stub"
    }

    async fn validate_credentials(&self) -> dns_update_provider::Result<bool> {
        Ok(true)
    }

    async fn list_domains(
        &self,
        params: &PaginationParams,
    ) -> dns_update_provider::Result<PaginatedResponse<RemoteDomain>> {
        self.enter()?;
        let zone = RemoteDomain {
            domain_id: Some("zone-1".to_string()),
            domain_name: Some(ZONE.to_string()),
            puny_code: Some(ZONE.to_string()),
            ali_domain: Some(true),
            record_count: Some(self.records.len() as u64),
        };
        Ok(PaginatedResponse::new(vec![zone], params.page, params.page_size, 1))
    }

    async fn list_records(
        &self,
        query: &RecordPageQuery,
    ) -> dns_update_provider::Result<PaginatedResponse<RemoteRecord>> {
        self.enter()?;
        let items: Vec<RemoteRecord> = self
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
        let total = items.len() as u32;
        Ok(PaginatedResponse::new(items, query.page, query.page_size, total))
    }

    async fn list_sub_domain_records(
        &self,
        query: &SubDomainQuery,
    ) -> dns_update_provider::Result<Vec<RemoteRecord>> {
        self.enter()?;
        Ok(self
            .records
            .iter()
            .filter(|r| {
                r.rr
                    .as_deref()
                    .is_some_and(|rr| format!("{rr}.{ZONE}") == query.sub_domain)
            })
            .cloned()
            .collect())
    }

    async fn get_record(&self, record_id: &str) -> dns_update_provider::Result<RemoteRecord> {
        self.enter()?;
        self.records
            .iter()
            .find(|r| r.record_id.as_deref() == Some(record_id))
            .map(|r| RemoteRecord {
                domain_name: Some(ZONE.to_string()),
                ..r.clone()
            })
            .ok_or_else(|| ProviderError::RecordNotFound {
                provider: "stub".to_string(),
                record_id: record_id.to_string(),
                raw_message: Some("The DNS record does not exist.".to_string()),
            })
    }
}

pub fn record(id: &str, rr: &str, record_type: &str, status: &str) -> RemoteRecord {
    RemoteRecord {
        record_id: Some(id.to_string()),
        rr: Some(rr.to_string()),
        record_type: Some(record_type.to_string()),
        value: Some("192.0.2.10".to_string()),
        status: Some(status.to_string()),
        locked: Some(false),
        line: Some("default".to_string()),
        priority: None,
        ttl: Some(600),
        domain_name: None,
    }
}

/// www (A, ENABLE), mail (MX, DISABLE), www (TXT, DISABLE)
pub fn sample_records() -> Vec<RemoteRecord> {
    vec![
        record("1001", "www", "A", "ENABLE"),
        record("1002", "mail", "MX", "DISABLE"),
        record("1003", "www", "TXT", "DISABLE"),
    ]
}

pub fn app_state(provider: Arc<StubProvider>) -> AppState {
    AppState::new(Arc::new(ServiceContext::new(
        provider,
        QuerySettings::default(),
    )))
}
