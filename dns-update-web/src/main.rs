//! dns-update HTTP 服务入口

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dns_update_core::ServiceContext;
use dns_update_provider::{AliyunProvider, DnsProvider};
use dns_update_web::config::{AliyunConfig, AppConfig};
use dns_update_web::middleware::RequestTimer;
use dns_update_web::openapi::OPENAPI_PATH;
use dns_update_web::{AppState, configure, logging};

#[actix_web::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // logging 可能尚未初始化
            eprintln!("Error: {e:#}");
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    let _guard = logging::init(&config.log)?;

    tracing::info!("Starting dns-update");
    tracing::debug!(aliyun = ?config.aliyun, "Aliyun settings");

    let provider = build_provider(&config.aliyun)?;
    match provider.validate_credentials().await {
        Ok(true) => tracing::info!("Aliyun credentials verified"),
        Ok(false) => tracing::warn!("Aliyun rejected the configured credentials"),
        Err(e) => tracing::warn!("Could not verify Aliyun credentials: {e}"),
    }

    let settings = config.query_settings()?;
    tracing::info!(
        concurrency = settings.concurrency,
        "Query settings loaded"
    );
    let ctx = Arc::new(ServiceContext::new(Arc::new(provider), settings));
    let state = web::Data::new(AppState::new(ctx));

    let addr = (config.server.host.clone(), config.server.port);
    tracing::info!("Listening on {}:{}", addr.0, addr.1);
    tracing::info!("OpenAPI document at {OPENAPI_PATH}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestTimer)
            .configure(configure)
    })
    .workers(config.server.worker_count())
    .bind(&addr)
    .with_context(|| format!("failed to bind {}:{}", addr.0, addr.1))?
    .run()
    .await
    .context("server error")?;

    tracing::info!("dns-update stopped");
    Ok(())
}

fn build_provider(cfg: &AliyunConfig) -> anyhow::Result<AliyunProvider> {
    AliyunProvider::builder(cfg.access_key_id.clone(), cfg.access_key_secret.clone())
        .region_id(cfg.region_id.clone())
        .max_retries(cfg.max_retries)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .request_timeout(Duration::from_secs(cfg.request_timeout_secs))
        .build()
        .context("failed to build Aliyun client")
}
