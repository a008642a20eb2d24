//! # dns-update-web
//!
//! actix-web front end for the DNS query services. Routes live under
//! `/api/domains`; every error is a JSON `{"error": "..."}` body. The
//! OpenAPI document is served at [`openapi::OPENAPI_PATH`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod openapi;

use std::sync::Arc;

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use dns_update_core::{DnsService, DomainService, ServiceContext};

/// Shared per-worker state.
pub struct AppState {
    pub dns: DnsService,
    pub domains: DomainService,
}

impl AppState {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            dns: DnsService::new(Arc::clone(&ctx)),
            domains: DomainService::new(ctx),
        }
    }
}

/// Register the `/api` routes and the OpenAPI document.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .route(openapi::OPENAPI_PATH, web::get().to(openapi::openapi_json))
        .service(
            web::scope("/api/domains")
                .route("", web::get().to(handlers::list_domains))
                .service(
                    web::scope("/{domain}/records")
                        .route("", web::get().to(handlers::list_records))
                        .route("/search", web::get().to(handlers::search_records))
                        .route("/id/{record_id}", web::get().to(handlers::record_by_id))
                        .route("/rr/{rr}", web::get().to(handlers::records_by_rr))
                        .route("/type/{type}", web::get().to(handlers::records_by_type))
                        .route("/status/{status}", web::get().to(handlers::records_by_status)),
                ),
        )
        .default_service(web::to(handlers::not_found));
}

// 查询串解析失败也返回 JSON
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let body = serde_json::json!({ "error": err.to_string() });
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
