//! OpenAPI 文档

use actix_web::HttpResponse;
use dns_update_core::types::{Domain, DomainRecord};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;

/// Where the generated document is served.
pub const OPENAPI_PATH: &str = "/swagger/doc.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "dns-update",
        description = "Read-only query API over Aliyun DNS zones and records"
    ),
    paths(
        handlers::list_domains,
        handlers::list_records,
        handlers::search_records,
        handlers::record_by_id,
        handlers::records_by_rr,
        handlers::records_by_type,
        handlers::records_by_status,
    ),
    components(schemas(Domain, DomainRecord, ErrorBody)),
    tags(
        (name = "domains", description = "Zones hosted under the account"),
        (name = "records", description = "Resource records within a zone")
    )
)]
pub struct ApiDoc;

/// GET /swagger/doc.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
