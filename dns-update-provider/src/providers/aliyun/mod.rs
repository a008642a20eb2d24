//! 阿里云 DNS Provider

mod error;
mod http;
mod provider;
mod sign;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::RetryPolicy;
use crate::providers::common::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client,
};
use crate::utils::log_sanitizer::mask_key;

pub(crate) use types::{
    DescribeDomainRecordsResponse, DescribeDomainsResponse, DescribeSubDomainRecordsResponse,
    serialize_to_query_string,
};

pub(crate) const DEFAULT_REGION_ID: &str = "cn-hangzhou";
pub(crate) const ALIYUN_DNS_VERSION: &str = "2015-01-09";
/// 空 body 的 SHA256 hash (固定值)
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Aliyun DNS provider implementation.
///
/// Authenticates via ACS3-HMAC-SHA256 signing with an Access Key ID/Secret.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_update_provider::AliyunProvider;
///
/// let provider = AliyunProvider::builder(
///     "your-access-key-id".to_string(),
///     "your-access-key-secret".to_string(),
/// )
/// .region_id("cn-shanghai")
/// .build()?;
/// # Ok::<(), dns_update_provider::ProviderError>(())
/// ```
pub struct AliyunProvider {
    pub(crate) client: Client,
    pub(crate) host: String,
    pub(crate) access_key_id: String,
    pub(crate) access_key_secret: String,
    pub(crate) retry: RetryPolicy,
}

// secret 不进日志
impl std::fmt::Debug for AliyunProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliyunProvider")
            .field("host", &self.host)
            .field("access_key_id", &mask_key(&self.access_key_id))
            .field("access_key_secret", &"********")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AliyunProvider`].
pub struct AliyunProviderBuilder {
    access_key_id: String,
    access_key_secret: String,
    region_id: String,
    max_retries: u32,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl AliyunProviderBuilder {
    fn new(access_key_id: String, access_key_secret: String) -> Self {
        Self {
            access_key_id,
            access_key_secret,
            region_id: DEFAULT_REGION_ID.to_string(),
            max_retries: 0,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Region whose Alidns endpoint is used (default: `cn-hangzhou`).
    #[must_use]
    pub fn region_id(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = region_id.into();
        self
    }

    /// Maximum number of automatic retries for transient errors (default: 0).
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// TCP connect timeout (default: 10s).
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Whole-request timeout (default: 30s).
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the [`AliyunProvider`] instance.
    pub fn build(self) -> Result<AliyunProvider> {
        let host = endpoint_host(&self.region_id);
        log::info!(
            "Aliyun DNS provider ready: endpoint={host}, access_key_id={}, max_retries={}",
            mask_key(&self.access_key_id),
            self.max_retries
        );

        Ok(AliyunProvider {
            client: create_http_client(self.connect_timeout, self.request_timeout)?,
            host,
            access_key_id: self.access_key_id,
            access_key_secret: self.access_key_secret,
            retry: RetryPolicy::with_retries(self.max_retries),
        })
    }
}

impl AliyunProvider {
    /// Creates a provider for `cn-hangzhou` with no retries.
    pub fn new(access_key_id: String, access_key_secret: String) -> Result<Self> {
        Self::builder(access_key_id, access_key_secret).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, access_key_secret: String) -> AliyunProviderBuilder {
        AliyunProviderBuilder::new(access_key_id, access_key_secret)
    }
}

/// Alidns endpoint for a region, e.g. `alidns.cn-hangzhou.aliyuncs.com`.
fn endpoint_host(region_id: &str) -> String {
    let region = region_id.trim();
    let region = if region.is_empty() {
        DEFAULT_REGION_ID
    } else {
        region
    };
    format!("alidns.{region}.aliyuncs.com")
}
