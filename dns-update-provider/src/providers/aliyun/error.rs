//! 阿里云错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::AliyunProvider;

/// 阿里云错误码映射（只读接口会遇到的部分）
/// 参考: <https://api.aliyun.com/document/Alidns/2015-01-09/errorCode>
impl ProviderErrorMapper for AliyunProvider {
    fn provider_name(&self) -> &'static str {
        "aliyun"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "InvalidAccessKeyId.NotFound"
                | "InvalidAccessKeyId.Inactive"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature",
            ) => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },

            // ============ 记录不存在 ============
            Some(
                "DomainRecordNotBelongToUser"
                | "DomainRecordNotFound"
                | "InvalidRecordId.NotFound"
                | "InvalidRR.NoExist"
                | "PdnsRecord.NotExists",
            ) => ProviderError::RecordNotFound {
                provider,
                record_id: context.record_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 域名不存在 ============
            Some(
                "InvalidDomainName.NoExist"
                | "DomainNotFound"
                | "IncorrectDomainUser"
                | "PdnsZone.NotExists",
            ) => ProviderError::DomainNotFound {
                provider,
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 配额限制 ============
            Some("QuotaExceeded" | "QuotaExceeded.Record" | "QuotaExceeded.SubDomain") => {
                ProviderError::QuotaExceeded {
                    provider,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 频率限流 ============
            Some("Throttling" | "Throttling.User" | "Throttling.Api") => {
                ProviderError::RateLimited {
                    provider,
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 权限不足 ============
            Some(
                "Forbidden"
                | "Forbidden.RAM"
                | "Forbidden.RiskControl"
                | "OperationDomain.NoPermission"
                | "IllegalUser",
            ) => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            Some("InvalidPageSize" | "InvalidPageNumber") => ProviderError::InvalidParameter {
                provider,
                param: "page_size".to_string(),
                detail: raw.message,
            },
            Some("InvalidDomainName.Format" | "InvalidDomainName.Suffix" | "DomainEmpty") => {
                ProviderError::InvalidParameter {
                    provider,
                    param: "domain".to_string(),
                    detail: raw.message,
                }
            }
            Some("SubDomainInvalid" | "InvalidRR.Format" | "InvalidSubDomain") => {
                ProviderError::InvalidParameter {
                    provider,
                    param: "rr".to_string(),
                    detail: raw.message,
                }
            }
            Some("InvalidRR.TypeEmpty" | "SubDomainInvalid.Type" | "InvalidType") => {
                ProviderError::InvalidParameter {
                    provider,
                    param: "type".to_string(),
                    detail: raw.message,
                }
            }

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}
