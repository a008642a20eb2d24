//! 配置加载：config.toml + 环境变量覆盖

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use dns_update_core::QuerySettings;
use dns_update_core::services::{Endpoint, PageSizeBounds};
use serde::Deserialize;

/// Environment variable naming the directory that holds `config.toml`.
pub const CONFIG_DIR_ENV: &str = "DNS_UPDATE_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

mod defaults {
    pub fn host() -> String {
        "0.0.0.0".to_string()
    }
    pub const fn port() -> u16 {
        8080
    }
    pub fn region_id() -> String {
        "cn-hangzhou".to_string()
    }
    pub const fn connect_timeout_secs() -> u64 {
        10
    }
    pub const fn request_timeout_secs() -> u64 {
        30
    }
    pub fn log_level() -> String {
        "info".to_string()
    }
    pub const fn concurrency() -> usize {
        1
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub aliyun: AliyunConfig,
    pub log: LogConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::host")]
    pub host: String,
    #[serde(default = "defaults::port")]
    pub port: u16,
    /// Worker threads; defaults to the number of CPUs
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn worker_count(&self) -> usize {
        self.workers.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }
}

#[derive(Clone, Deserialize)]
pub struct AliyunConfig {
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub access_key_secret: String,
    #[serde(default = "defaults::region_id")]
    pub region_id: String,
    #[serde(default)]
    pub max_retries: u32,
    #[serde(default = "defaults::connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AliyunConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            access_key_secret: String::new(),
            region_id: defaults::region_id(),
            max_retries: 0,
            connect_timeout_secs: defaults::connect_timeout_secs(),
            request_timeout_secs: defaults::request_timeout_secs(),
        }
    }
}

// 不输出 secret
impl std::fmt::Debug for AliyunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliyunConfig")
            .field(
                "access_key_id",
                &dns_update_provider::log_sanitizer::mask_key(&self.access_key_id),
            )
            .field("access_key_secret", &"********")
            .field("region_id", &self.region_id)
            .field("max_retries", &self.max_retries)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "defaults::log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Write daily-rotated files here instead of stdout
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EndpointBounds {
    pub default: Option<u32>,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "defaults::concurrency")]
    pub concurrency: usize,
    /// Keyed by endpoint: `list_domains`, `list_records`, `search`, `by_rr`,
    /// `by_type`, `by_status`
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointBounds>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            concurrency: defaults::concurrency(),
            endpoints: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load `config.toml` and apply environment overrides.
    ///
    /// Search order: `path` (file or directory), `$DNS_UPDATE_CONFIG`, `.`,
    /// `configs/`. A missing file is fine as long as the environment supplies
    /// the credentials.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let env_dir = std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from);
        let mut config = match find_config_file(path, env_dir.as_deref()) {
            Some(file) => Self::from_file(&file)?,
            None => {
                if let Some(p) = path {
                    bail!("config file not found: {}", p.display());
                }
                Self::default()
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(file: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        Self::from_toml(&text).with_context(|| format!("failed to parse {}", file.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// `PORT`, `ACCESS_KEY_ID`, `ACCESS_KEY_SECRET` and `REGION_ID` win over
    /// the file. Blank values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = get("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{port}'"))?;
        }
        if let Some(v) = get("ACCESS_KEY_ID") {
            self.aliyun.access_key_id = v;
        }
        if let Some(v) = get("ACCESS_KEY_SECRET") {
            self.aliyun.access_key_secret = v;
        }
        if let Some(v) = get("REGION_ID") {
            self.aliyun.region_id = v;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        require_value("aliyun.access_key_id", &self.aliyun.access_key_id)?;
        require_value("aliyun.access_key_secret", &self.aliyun.access_key_secret)?;
        require_value("aliyun.region_id", &self.aliyun.region_id)?;
        if self.server.port == 0 {
            bail!("server.port must not be 0");
        }
        if self.pagination.concurrency == 0 {
            bail!("pagination.concurrency must be at least 1");
        }
        self.query_settings()?;
        Ok(())
    }

    /// Page-size table and concurrency for the query services.
    pub fn query_settings(&self) -> anyhow::Result<QuerySettings> {
        let mut settings = QuerySettings::default().with_concurrency(self.pagination.concurrency);

        for (key, bounds) in &self.pagination.endpoints {
            let Some(endpoint) = Endpoint::ALL.into_iter().find(|e| e.config_key() == key.as_str()) else {
                bail!("unknown pagination endpoint '{key}'");
            };
            let current = settings.page_sizes.bounds(endpoint);
            let merged = PageSizeBounds::new(
                bounds.default.unwrap_or(current.default),
                bounds.max.unwrap_or(current.max),
            );
            settings.page_sizes = settings
                .page_sizes
                .with_bounds(endpoint, merged)
                .map_err(|e| anyhow::anyhow!("pagination.endpoints.{key}: {e}"))?;
        }

        Ok(settings)
    }
}

fn find_config_file(explicit: Option<&Path>, env_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        let candidate = if p.is_dir() {
            p.join(CONFIG_FILE_NAME)
        } else {
            p.to_path_buf()
        };
        return candidate.is_file().then_some(candidate);
    }

    env_dir
        .into_iter()
        .map(Path::to_path_buf)
        .chain([PathBuf::from("."), PathBuf::from("configs")])
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|file| file.is_file())
}

/// Rejects empty values and unexpanded `${VAR}` placeholders.
fn require_value(key: &str, value: &str) -> anyhow::Result<()> {
    let v = value.trim();
    if v.is_empty() {
        bail!("{key} is not configured");
    }
    if v.starts_with("${") && v.ends_with('}') {
        bail!("{key} is an unexpanded placeholder: {v}");
    }
    Ok(())
}
