use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    PaginatedResponse, PaginationParams, RecordPageQuery, RemoteDomain, RemoteRecord,
    SubDomainQuery,
};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时补全 record id / 域名
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// 域名（用于 `DomainNotFound`）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_record(record_id: &str) -> Self {
        Self {
            record_id: Some(record_id.to_string()),
            domain: None,
        }
    }

    pub fn for_domain(domain: &str) -> Self {
        Self {
            record_id: None,
            domain: Some(domain.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read-only DNS registrar capability.
///
/// Each method is exactly one remote request. Implementations never loop over
/// pages and never filter results client-side.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 验证凭证是否有效
    async fn validate_credentials(&self) -> Result<bool>;

    /// One page of the zones hosted under the account.
    async fn list_domains(
        &self,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<RemoteDomain>>;

    /// One page of a zone's records, filtered remotely by type and status.
    async fn list_records(&self, query: &RecordPageQuery)
    -> Result<PaginatedResponse<RemoteRecord>>;

    /// Records published under one fully-qualified name, in a single response.
    async fn list_sub_domain_records(&self, query: &SubDomainQuery) -> Result<Vec<RemoteRecord>>;

    /// A single record by its registrar id.
    ///
    /// Returns [`ProviderError::RecordNotFound`] when the id is unknown.
    async fn get_record(&self, record_id: &str) -> Result<RemoteRecord>;
}
