//! `/api/domains` HTTP 集成测试
//!
//! 使用 `StubProvider` 替代阿里云，不需要网络。

mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use dns_update_provider::ProviderError;
use dns_update_web::configure;
use dns_update_web::middleware::RequestTimer;
use serde_json::Value;

use common::{StubProvider, sample_records};

macro_rules! app {
    ($provider:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(common::app_state($provider)))
                .wrap(RequestTimer)
                .configure(configure),
        )
        .await
    };
}

async fn get_json(
    provider: Arc<StubProvider>,
    uri: &str,
) -> (StatusCode, Value) {
    let app = app!(provider);
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}

// ============ 成功路径 ============

#[actix_web::test]
async fn test_list_domains() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(provider.clone(), "/api/domains").await;

    assert_eq!(status, StatusCode::OK);
    let domains = body.as_array().unwrap();
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0]["domain_name"], "example.com");
    assert_eq!(domains[0]["domain_id"], "zone-1");
    assert_eq!(domains[0]["puny_code"], "example.com");
    assert_eq!(domains[0]["ali_domain"], true);
    assert_eq!(provider.calls(), 1);
}

#[actix_web::test]
async fn test_list_records_json_shape() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(provider, "/api/domains/example.com/records").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first["record_id"], "1001");
    assert_eq!(first["rr"], "www");
    assert_eq!(first["type"], "A");
    assert_eq!(first["value"], "192.0.2.10");
    assert_eq!(first["status"], "ENABLE");
    assert_eq!(first["locked"], false);
    assert_eq!(first["line"], "default");
    assert_eq!(first["priority"], 0);
    assert_eq!(first["ttl"], 600);
    assert!(first.get("domain_name").is_none());
}

#[actix_web::test]
async fn test_records_by_type_and_status() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(provider.clone(), "/api/domains/example.com/records/type/MX").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["record_id"].as_str())
        .collect();
    assert_eq!(ids, vec!["1002"]);

    let (status, body) =
        get_json(provider, "/api/domains/example.com/records/status/Disable?page_size=50").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["record_id"].as_str())
        .collect();
    assert_eq!(ids, vec!["1002", "1003"]);
}

#[actix_web::test]
async fn test_search_filters_by_status() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(
        provider,
        "/api/domains/example.com/records/search?rr=www&status=Disable",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["record_id"], "1003");
}

#[actix_web::test]
async fn test_search_without_rr_is_empty() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) =
        get_json(provider.clone(), "/api/domains/example.com/records/search?type=A").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_records_by_rr_and_id() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(provider.clone(), "/api/domains/example.com/records/rr/mail").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get_json(provider, "/api/domains/example.com/records/id/1003").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record_id"], "1003");
    assert_eq!(body["type"], "TXT");
}

// ============ 400 ============

#[actix_web::test]
async fn test_page_size_out_of_range() {
    for uri in [
        "/api/domains/example.com/records/type/A?page_size=501",
        "/api/domains/example.com/records/search?rr=www&page_size=501",
        "/api/domains/example.com/records?page_size=0",
        "/api/domains?page_size=101",
    ] {
        let provider = Arc::new(StubProvider::new(sample_records()));
        let (status, body) = get_json(provider.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(error_message(&body).contains("page_size"), "{uri}: {body}");
        assert_eq!(provider.calls(), 0, "{uri}");
    }
}

#[actix_web::test]
async fn test_search_page_size_checked_without_rr() {
    for uri in [
        "/api/domains/example.com/records/search?page_size=501",
        "/api/domains/example.com/records/search?page_size=0",
        "/api/domains/example.com/records/search?type=A&page_size=501",
    ] {
        let provider = Arc::new(StubProvider::new(sample_records()));
        let (status, body) = get_json(provider.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(error_message(&body).contains("between 1 and 500"), "{uri}: {body}");
        assert_eq!(provider.calls(), 0, "{uri}");
    }

    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(
        provider.clone(),
        "/api/domains/example.com/records/search?page_size=500",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_page_size_not_a_number() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) =
        get_json(provider.clone(), "/api/domains/example.com/records?page_size=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("valid integer"));
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_invalid_status_literal() {
    for uri in [
        "/api/domains/example.com/records/status/enabled",
        "/api/domains/example.com/records/status/ENABLE",
        "/api/domains/example.com/records/search?rr=www&status=Paused",
    ] {
        let provider = Arc::new(StubProvider::new(sample_records()));
        let (status, body) = get_json(provider.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(error_message(&body).contains("Enable or Disable"), "{uri}");
        assert_eq!(provider.calls(), 0, "{uri}");
    }
}

#[actix_web::test]
async fn test_rr_too_long() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let uri = format!("/api/domains/example.com/records/rr/{}", "a".repeat(256));
    let (status, _) = get_json(provider.clone(), &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.calls(), 0);
}

// ============ 404 / 500 ============

#[actix_web::test]
async fn test_unknown_record_id() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(provider, "/api/domains/example.com/records/id/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error_message(&body).contains("9999"));
}

#[actix_web::test]
async fn test_registrar_failure_passes_message() {
    let provider = Arc::new(StubProvider::failing(ProviderError::Unknown {
        provider: "stub".to_string(),
        raw_code: Some("InternalError".to_string()),
        raw_message: "The request processing has failed due to some unknown error.".to_string(),
    }));
    let (status, body) = get_json(provider, "/api/domains/example.com/records").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error_message(&body),
        "The request processing has failed due to some unknown error."
    );
}

#[actix_web::test]
async fn test_unmatched_route() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(provider, "/api/zones").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "not found");
}

#[actix_web::test]
async fn test_openapi_document_served() {
    let provider = Arc::new(StubProvider::new(sample_records()));
    let (status, body) = get_json(provider.clone(), "/swagger/doc.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/api/domains/{domain}/records/search"]["get"].is_object());
    assert!(body["components"]["schemas"]["ErrorBody"].is_object());
    assert_eq!(provider.calls(), 0);
}

// ============ 中间件 ============

#[actix_web::test]
async fn test_timing_headers() {
    let app = app!(Arc::new(StubProvider::new(sample_records())));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/domains").to_request()).await;

    let elapsed = resp.headers().get("x-response-time").unwrap().to_str().unwrap();
    assert!(elapsed.ends_with("ms"));
    let request_id = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(request_id.len(), 36);
}

#[actix_web::test]
async fn test_request_id_echoed() {
    let app = app!(Arc::new(StubProvider::new(sample_records())));
    let req = test::TestRequest::get()
        .uri("/api/domains/example.com/records/id/9999")
        .insert_header(("X-Request-Id", "trace-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-42");
}
