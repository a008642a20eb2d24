//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_update_provider::{AliyunProvider, DnsProvider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
}

impl TestContext {
    /// 创建 Aliyun 测试上下文
    pub fn aliyun() -> Option<Self> {
        let access_key_id = env::var("ALIYUN_ACCESS_KEY_ID").ok()?;
        let access_key_secret = env::var("ALIYUN_ACCESS_KEY_SECRET").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let mut builder = AliyunProvider::builder(access_key_id, access_key_secret).max_retries(2);
        if let Ok(region) = env::var("ALIYUN_REGION_ID") {
            builder = builder.region_id(region);
        }
        let provider = builder.build().ok()?;

        Some(Self {
            provider: Arc::new(provider),
            domain,
        })
    }

    /// 测试域名是否出现在第一页域名列表中
    pub async fn domain_is_listed(&self, page_size: u32) -> bool {
        let params = dns_update_provider::PaginationParams { page: 1, page_size };
        let Ok(response) = self.provider.list_domains(&params).await else {
            return false;
        };
        response
            .items
            .iter()
            .filter_map(|d| d.domain_name.as_deref())
            .any(|name| dns_update_provider::same_zone(name, &self.domain))
    }
}
