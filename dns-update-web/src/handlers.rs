//! `/api/domains` 路由处理

use actix_web::{HttpResponse, web};
use dns_update_core::services::parse_page_size;
use dns_update_core::types::{Domain, DomainRecord, ListOptions, RecordStatus, SearchOptions};
use serde::Deserialize;

use crate::AppState;
use crate::error::{ApiError, ErrorBody};

type HandlerResult = Result<HttpResponse, ApiError>;

/// `?page_size=` 原样接收，由 core 校验
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page_size: Option<String>,
}

impl PageQuery {
    fn list_options(&self) -> Result<ListOptions, ApiError> {
        Ok(ListOptions {
            page_size: parse_page_size(self.page_size.as_deref())?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub record_id: Option<String>,
    pub rr: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub status: Option<String>,
    pub page_size: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// GET /api/domains
#[utoipa::path(
    get,
    path = "/api/domains",
    tag = "domains",
    params(("page_size" = Option<u32>, Query, description = "Page size used while walking remote pages")),
    responses(
        (status = 200, description = "Every zone under the account", body = [Domain]),
        (status = 400, description = "Invalid parameter", body = ErrorBody),
        (status = 500, description = "Registrar failure", body = ErrorBody)
    )
)]
#[tracing_attributes::instrument(skip(state))]
pub async fn list_domains(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> HandlerResult {
    let domains = state.domains.list_domains(query.list_options()?).await?;
    Ok(HttpResponse::Ok().json(domains))
}

/// GET /api/domains/{domain}/records
#[utoipa::path(
    get,
    path = "/api/domains/{domain}/records",
    tag = "records",
    params(
        ("domain" = String, Path, description = "Zone name", example = "example.com"),
        ("page_size" = Option<u32>, Query, description = "Page size used while walking remote pages")
    ),
    responses(
        (status = 200, description = "Every record in the zone", body = [DomainRecord]),
        (status = 400, description = "Invalid parameter", body = ErrorBody),
        (status = 500, description = "Registrar failure", body = ErrorBody)
    )
)]
#[tracing_attributes::instrument(skip(state))]
pub async fn list_records(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> HandlerResult {
    let records = state
        .dns
        .list_records(&path, query.list_options()?)
        .await?;
    Ok(HttpResponse::Ok().json(records))
}

/// GET /api/domains/{domain}/records/search
#[utoipa::path(
    get,
    path = "/api/domains/{domain}/records/search",
    tag = "records",
    params(
        ("domain" = String, Path, description = "Zone name", example = "example.com"),
        ("record_id" = Option<String>, Query, description = "Keep only this record"),
        ("rr" = Option<String>, Query, description = "Host label; without it the result is empty"),
        ("type" = Option<String>, Query, description = "Record type"),
        ("status" = Option<String>, Query, description = "Enable or Disable"),
        ("page_size" = Option<u32>, Query, description = "Page size used while walking remote pages")
    ),
    responses(
        (status = 200, description = "Matching records", body = [DomainRecord]),
        (status = 400, description = "Invalid parameter", body = ErrorBody),
        (status = 500, description = "Registrar failure", body = ErrorBody)
    )
)]
#[tracing_attributes::instrument(skip(state))]
pub async fn search_records(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SearchQuery>,
) -> HandlerResult {
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(s.parse::<RecordStatus>()?),
        None => None,
    };

    let options = SearchOptions {
        domain_name: path.into_inner(),
        record_id: non_empty(query.record_id.as_ref()),
        rr: non_empty(query.rr.as_ref()),
        record_type: non_empty(query.record_type.as_ref()),
        status,
        page_size: parse_page_size(query.page_size.as_deref())?,
    };

    let records = state.dns.search(options).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// GET /api/domains/{domain}/records/id/{record_id}
#[utoipa::path(
    get,
    path = "/api/domains/{domain}/records/id/{record_id}",
    tag = "records",
    params(
        ("domain" = String, Path, description = "Zone name", example = "example.com"),
        ("record_id" = String, Path, description = "Registrar record ID")
    ),
    responses(
        (status = 200, description = "The record", body = DomainRecord),
        (status = 404, description = "Unknown record or owned by another zone", body = ErrorBody),
        (status = 500, description = "Registrar failure", body = ErrorBody)
    )
)]
#[tracing_attributes::instrument(skip(state))]
pub async fn record_by_id(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> HandlerResult {
    let (domain, record_id) = path.into_inner();
    let record = state.dns.get_by_id(&domain, &record_id).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// GET /api/domains/{domain}/records/rr/{rr}
#[utoipa::path(
    get,
    path = "/api/domains/{domain}/records/rr/{rr}",
    tag = "records",
    params(
        ("domain" = String, Path, description = "Zone name", example = "example.com"),
        ("rr" = String, Path, description = "Host label, at most 255 characters")
    ),
    responses(
        (status = 200, description = "Records under the host label", body = [DomainRecord]),
        (status = 400, description = "Invalid parameter", body = ErrorBody),
        (status = 500, description = "Registrar failure", body = ErrorBody)
    )
)]
#[tracing_attributes::instrument(skip(state))]
pub async fn records_by_rr(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> HandlerResult {
    let (domain, rr) = path.into_inner();
    let records = state.dns.records_by_rr(&domain, &rr).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// GET /api/domains/{domain}/records/type/{type}
#[utoipa::path(
    get,
    path = "/api/domains/{domain}/records/type/{type}",
    tag = "records",
    params(
        ("domain" = String, Path, description = "Zone name", example = "example.com"),
        ("type" = String, Path, description = "Record type", example = "A"),
        ("page_size" = Option<u32>, Query, description = "Page size used while walking remote pages")
    ),
    responses(
        (status = 200, description = "Records of the type", body = [DomainRecord]),
        (status = 400, description = "Invalid parameter", body = ErrorBody),
        (status = 500, description = "Registrar failure", body = ErrorBody)
    )
)]
#[tracing_attributes::instrument(skip(state))]
pub async fn records_by_type(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<PageQuery>,
) -> HandlerResult {
    let (domain, record_type) = path.into_inner();
    let records = state
        .dns
        .records_by_type(&domain, &record_type, query.list_options()?)
        .await?;
    Ok(HttpResponse::Ok().json(records))
}

/// GET /api/domains/{domain}/records/status/{status}
#[utoipa::path(
    get,
    path = "/api/domains/{domain}/records/status/{status}",
    tag = "records",
    params(
        ("domain" = String, Path, description = "Zone name", example = "example.com"),
        ("status" = String, Path, description = "Enable or Disable"),
        ("page_size" = Option<u32>, Query, description = "Page size used while walking remote pages")
    ),
    responses(
        (status = 200, description = "Records in the status", body = [DomainRecord]),
        (status = 400, description = "Invalid parameter", body = ErrorBody),
        (status = 500, description = "Registrar failure", body = ErrorBody)
    )
)]
#[tracing_attributes::instrument(skip(state))]
pub async fn records_by_status(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<PageQuery>,
) -> HandlerResult {
    let (domain, status) = path.into_inner();
    let status: RecordStatus = status.parse()?;
    let records = state
        .dns
        .records_by_status(&domain, status, query.list_options()?)
        .await?;
    Ok(HttpResponse::Ok().json(records))
}

/// 未匹配路由
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "not found" }))
}
