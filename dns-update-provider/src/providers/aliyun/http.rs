//! 阿里云 RPC 请求发送与错误信封解析

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client::{parse_json, send_with_retry};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256, serialize_to_query_string};

impl AliyunProvider {
    /// Execute one Alidns RPC action. Parameters travel in the query string and
    /// the body is empty.
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        params: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let query_string = serialize_to_query_string(params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();
        let authorization = self.sign(action, &query_string, &timestamp, &nonce);

        let url = if query_string.is_empty() {
            format!("https://{}/", self.host)
        } else {
            format!("https://{}/?{query_string}", self.host)
        };

        let request = self
            .client
            .post(&url)
            .header("Host", &self.host)
            .header("x-acs-action", action)
            .header("x-acs-version", ALIYUN_DNS_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let response = send_with_retry(request, self.provider_name(), action, self.retry).await?;

        let value: serde_json::Value = match parse_json(&response.body, self.provider_name()) {
            Ok(value) => value,
            Err(_) if response.status >= 400 => {
                return Err(ProviderError::NetworkError {
                    provider: self.provider_name().to_string(),
                    detail: format!("HTTP {}: {}", response.status, response.body),
                });
            }
            Err(e) => return Err(e),
        };

        // Error responses carry Code + Message, on 4xx/5xx and occasionally on 200.
        if let Some(raw) = error_envelope(&value) {
            let mapped = self.map_error(raw, ctx);
            if mapped.is_expected() {
                log::warn!("[aliyun] {action} rejected: {mapped}");
            } else {
                log::error!("[aliyun] {action} failed: {mapped}");
            }
            return Err(mapped);
        }

        if response.status >= 400 {
            return Err(ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: format!("HTTP {}: {}", response.status, response.body),
            });
        }

        serde_json::from_value(value).map_err(|e| self.parse_error(e))
    }
}

fn error_envelope(value: &serde_json::Value) -> Option<RawApiError> {
    let code = value.get("Code").and_then(|v| v.as_str())?;
    let message = value.get("Message").and_then(|v| v.as_str())?;
    Some(RawApiError::with_code(code, message))
}
