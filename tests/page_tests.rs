//! Server-rendered page tests
//!
//! Covers the page shell, the project filter and modal, the no-script
//! contact form fallback and the widget demo pages.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};

use folio::api::services::{AppStartTime, AppState, configure};
use folio::catalog::Catalog;
use folio::config::{Environment, StaticConfig};

fn test_state(environment: Environment) -> AppState {
    let mut config = StaticConfig::default();
    config.site.environment = environment;
    config.contact.submit_delay_ms = 0;
    AppState::new(Catalog::embedded(), Arc::new(config))
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(configure),
        )
        .await
    };
}

macro_rules! get_html {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }};
}

#[actix_rt::test]
async fn test_index_renders_all_sections() {
    let app = init_app!(test_state(Environment::Development));

    let (status, html) = get_html!(app, TestRequest::get().uri("/").to_request());
    assert_eq!(status, StatusCode::OK);
    for id in [r#"id="hero""#, r#"id="about""#, r#"id="projects""#, r#"id="contact""#] {
        assert!(html.contains(id), "missing section {}", id);
    }
    assert!(!html.contains("%MAIN%"));
    assert!(html.contains("/assets/site.js"));
    assert!(!html.contains("/assets/perf.js"));
    assert!(!html.contains("serviceWorker"));
}

#[actix_rt::test]
async fn test_production_injects_perf_and_service_worker() {
    let app = init_app!(test_state(Environment::Production));

    let (_, html) = get_html!(app, TestRequest::get().uri("/").to_request());
    assert!(html.contains("/assets/perf.js"));
    assert!(html.contains("navigator.serviceWorker.register('/sw.js')"));
}

#[actix_rt::test]
async fn test_filter_web_shows_four_projects() {
    let app = init_app!(test_state(Environment::Development));
    let total = Catalog::embedded().projects.len();

    let (_, html) = get_html!(app, TestRequest::get().uri("/?filter=web").to_request());
    assert!(html.contains(&format!("Showing 4 of {} projects", total)));
    for id in ["chordcircle", "whitezilla", "veshara", "printscript"] {
        assert!(html.contains(&format!(r#"data-project="{}""#, id)));
    }
    assert!(!html.contains(r#"data-project="ksa""#));
}

#[actix_rt::test]
async fn test_unknown_filter_falls_back_to_all() {
    let app = init_app!(test_state(Environment::Development));
    let total = Catalog::embedded().projects.len();

    let (status, html) = get_html!(app, TestRequest::get().uri("/?filter=games").to_request());
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!("Showing {0} of {0} projects", total)));
}

#[actix_rt::test]
async fn test_project_modal_locks_scroll() {
    let app = init_app!(test_state(Environment::Development));

    let (_, html) = get_html!(
        app,
        TestRequest::get().uri("/?project=chordcircle").to_request()
    );
    assert!(html.contains(r#"id="project-modal""#));
    assert!(html.contains("overflow: hidden"));

    let (_, html) = get_html!(
        app,
        TestRequest::get().uri("/?project=missing").to_request()
    );
    assert!(!html.contains(r#"id="project-modal""#));
    assert!(!html.contains("overflow: hidden"));
}

#[actix_rt::test]
async fn test_theme_cookie_sets_html_class() {
    let app = init_app!(test_state(Environment::Development));

    let (_, html) = get_html!(
        app,
        TestRequest::get()
            .uri("/")
            .cookie(Cookie::new("portfolio-theme", "dark"))
            .to_request()
    );
    assert!(html.contains(r#"class="dark""#));
    assert!(html.contains(r#"data-theme="dark""#));

    let (_, html) = get_html!(app, TestRequest::get().uri("/").to_request());
    assert!(html.contains(r#"data-theme="system""#));
}

#[actix_rt::test]
async fn test_contact_fallback_rejects_short_message() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::post()
        .uri("/contact")
        .set_form([
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("subject", "Engines"),
            ("message", "hi"),
        ])
        .to_request();
    let (status, html) = get_html!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("Message must be at least"));
    // 已填写的值保留
    assert!(html.contains(r#"value="Ada Lovelace""#));
}

#[actix_rt::test]
async fn test_contact_fallback_accepts_valid_message() {
    let app = init_app!(test_state(Environment::Development));

    let req = TestRequest::post()
        .uri("/contact")
        .set_form([
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("subject", "Engines"),
            ("message", "I would like to discuss the analytical engine."),
        ])
        .to_request();
    let (status, html) = get_html!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("form-status--success"));
}

#[actix_rt::test]
async fn test_demo_pages() {
    let app = init_app!(test_state(Environment::Development));

    for name in [
        "waves",
        "squares",
        "glare-card",
        "expandable-tabs",
        "liquid-glass-button",
        "smooth-scroll",
    ] {
        let uri = format!("/demos/{}", name);
        let (status, _) = get_html!(app, TestRequest::get().uri(&uri).to_request());
        assert_eq!(status, StatusCode::OK, "demo {} should render", name);
    }

    let (_, html) = get_html!(app, TestRequest::get().uri("/demos/smooth-scroll").to_request());
    assert!(html.contains("demo-scroll-curve"));
    assert!(html.contains(r#""frameIntervalMs""#));

    let (status, body) = get_html!(app, TestRequest::get().uri("/demos/unknown").to_request());
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
}
