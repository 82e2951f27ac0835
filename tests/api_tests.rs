//! JSON API, background and asset route tests
//!
//! Routes are mounted through `configure`, the same way the server does.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, SET_COOKIE};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use folio::api::middleware::RequestIdMiddleware;
use folio::api::services::{AppStartTime, AppState, configure};
use folio::catalog::Catalog;
use folio::config::{Environment, StaticConfig};

// =============================================================================
// Test Setup
// =============================================================================

fn test_config(environment: Environment) -> StaticConfig {
    let mut config = StaticConfig::default();
    config.site.environment = environment;
    config.contact.submit_delay_ms = 0;
    config
}

fn test_state(environment: Environment) -> AppState {
    AppState::new(Catalog::embedded(), Arc::new(test_config(environment))).with_noise_seed(7)
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new($state))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(configure),
        )
        .await
    };
}

fn content_type(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Catalog API
// =============================================================================

#[actix_rt::test]
async fn test_filter_web_projects() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/api/projects?category=web")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["total"], 4);
    let titles: Vec<&str> = body["data"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["ChordCircle", "Whitezilla", "Veshara", "PrintScript"]);
}

#[actix_rt::test]
async fn test_filter_all_returns_everything() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/api/projects?category=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["total"], Catalog::embedded().projects.len());
}

#[actix_rt::test]
async fn test_invalid_category_returns_validation_envelope() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/api/projects?category=games")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3000);
    assert!(body["data"]["errors"]["category"].is_string());
}

#[actix_rt::test]
async fn test_malformed_query_returns_bad_request_envelope() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/api/projects?featured=sometimes")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

#[actix_rt::test]
async fn test_get_project_by_id() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/api/projects/chordcircle")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["title"], "ChordCircle");

    let req = TestRequest::get()
        .uri("/api/projects/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1004);
    assert!(body.get("data").is_none());
}

#[actix_rt::test]
async fn test_skills_experience_and_summary() {
    let app = init_app!(test_state(Environment::Development));
    let catalog = Catalog::embedded();

    let req = TestRequest::get().uri("/api/skills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], catalog.skills.len());
    assert!(body["data"]["groups"].is_array());

    let req = TestRequest::get().uri("/api/experience").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], catalog.experience.len());

    let req = TestRequest::get().uri("/api/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_search_requires_query() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get().uri("/api/search?query=").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::get()
        .uri("/api/search?query=chord")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0);
}

// =============================================================================
// Contact API
// =============================================================================

#[actix_rt::test]
async fn test_contact_rejects_short_message() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "Engines",
            "message": "hi"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3000);
    assert!(body["data"]["errors"]["message"].is_string());
    assert!(body["data"]["errors"].get("name").is_none());
}

#[actix_rt::test]
async fn test_contact_accepts_valid_message() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "Engines",
            "message": "I would like to discuss the analytical engine."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert!(body["data"]["id"].is_string());
}

#[actix_rt::test]
async fn test_contact_malformed_json() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::post()
        .uri("/api/contact")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

#[actix_rt::test]
async fn test_newsletter() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::post()
        .uri("/api/newsletter")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri("/api/newsletter")
        .set_json(json!({ "email": "reader@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// =============================================================================
// Theme API
// =============================================================================

#[actix_rt::test]
async fn test_theme_toggle_cycles_from_cookie() {
    let app = init_app!(test_state(Environment::Development));

    for (current, expected) in [("light", "dark"), ("dark", "system"), ("system", "light")] {
        let req = TestRequest::post()
            .uri("/api/theme/toggle")
            .cookie(actix_web::cookie::Cookie::new("portfolio-theme", current))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(cookie.starts_with(&format!("portfolio-theme={}", expected)));
        assert!(!cookie.contains("HttpOnly"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["theme"], expected);
    }
}

#[actix_rt::test]
async fn test_theme_toggle_without_cookie_starts_from_default() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::post().uri("/api/theme/toggle").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    // 默认 system -> light
    assert_eq!(body["data"]["theme"], "light");
    assert_eq!(body["data"]["htmlClass"], "light");
}

#[actix_rt::test]
async fn test_set_theme() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::put()
        .uri("/api/theme")
        .set_json(json!({ "theme": "dark" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["theme"], "dark");
    assert_eq!(body["data"]["htmlClass"], "dark");

    let req = TestRequest::put()
        .uri("/api/theme")
        .set_json(json!({ "theme": "sepia" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["errors"]["theme"].is_string());
}

// =============================================================================
// Backgrounds
// =============================================================================

#[actix_rt::test]
async fn test_waves_frame() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/backgrounds/waves.svg?t=500&w=320&h=200&x=100&y=80")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(content_type(&resp), "image/svg+xml");
    assert_eq!(
        resp.headers().get("cache-control").unwrap().to_str().unwrap(),
        "no-store"
    );

    let body = test::read_body(resp).await;
    let svg = std::str::from_utf8(&body).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="320""#));
}

#[actix_rt::test]
async fn test_waves_frames_are_deterministic_per_seed() {
    let app = init_app!(test_state(Environment::Development));

    let uri = "/backgrounds/waves.svg?t=1000&w=200&h=100";
    let first = test::call_and_read_body(&app, TestRequest::get().uri(uri).to_request()).await;
    let second = test::call_and_read_body(&app, TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(first, second);
}

#[actix_rt::test]
async fn test_squares_frame_and_direction_validation() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/backgrounds/squares.svg?t=250&w=300&h=150&direction=up")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(content_type(&resp), "image/svg+xml");

    let req = TestRequest::get()
        .uri("/backgrounds/squares.svg?direction=sideways")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["errors"]["direction"].is_string());
}

#[actix_rt::test]
async fn test_squares_frame_with_huge_speed_is_finite() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/backgrounds/squares.svg?speed=1e308&t=100000&w=200&h=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let svg = String::from_utf8(body.to_vec()).unwrap();
    assert!(svg.contains("<rect"));
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
}

// =============================================================================
// Assets
// =============================================================================

#[actix_rt::test]
async fn test_static_assets() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get().uri("/assets/site.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(content_type(&resp), "text/css");

    let req = TestRequest::get().uri("/assets/missing.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_missing_image_falls_back_to_placeholder() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get()
        .uri("/images/not-shipped.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(content_type(&resp), "image/svg+xml");
}

#[actix_rt::test]
async fn test_service_worker_only_in_production() {
    let app = init_app!(test_state(Environment::Development));
    let req = TestRequest::get().uri("/sw.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let app = init_app!(test_state(Environment::Production));
    let req = TestRequest::get().uri("/sw.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("service-worker-allowed")
            .unwrap()
            .to_str()
            .unwrap(),
        "/"
    );
}

// =============================================================================
// Health & middleware
// =============================================================================

#[actix_rt::test]
async fn test_health_endpoints() {
    let app = init_app!(test_state(Environment::Production));

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["environment"], "production");
    assert_eq!(body["data"]["checks"]["catalog"]["violations"], 0);

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_request_id_header() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));

    let req = TestRequest::get()
        .uri("/health/live")
        .insert_header(("x-request-id", "edge-1234"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "edge-1234"
    );
}
