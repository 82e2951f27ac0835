pub mod assets;
pub mod backgrounds;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod pages;
pub mod state;
pub mod theme;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, web};

pub use assets::AssetService;
pub use backgrounds::{BackgroundQuery, BackgroundService};
pub use catalog::CatalogService;
pub use contact::ContactApi;
pub use health::{AppStartTime, HealthService, health_routes};
pub use pages::{PageQuery, PageService};
pub use state::AppState;
pub use theme::{ThemeService, ThemeState};

use crate::api::types::{ErrorCode, error_response};

/// 请求体上限
pub const PAYLOAD_LIMIT: usize = 64 * 1024;

/// JSON API 路由
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/projects", web::get().to(CatalogService::list_projects))
        .route("/projects/{id}", web::get().to(CatalogService::get_project))
        .route("/skills", web::get().to(CatalogService::list_skills))
        .route("/experience", web::get().to(CatalogService::list_experience))
        .route("/summary", web::get().to(CatalogService::summary))
        .route("/search", web::get().to(CatalogService::search))
        .route("/contact", web::post().to(ContactApi::submit))
        .route("/newsletter", web::post().to(ContactApi::subscribe))
        .route("/theme/toggle", web::post().to(ThemeService::toggle))
        .route("/theme", web::put().to(ThemeService::set))
}

/// 装饰背景帧
pub fn background_routes() -> actix_web::Scope {
    web::scope("/backgrounds")
        .route("/waves.svg", web::get().to(BackgroundService::waves))
        .route("/squares.svg", web::get().to(BackgroundService::squares))
}

/// 页面与静态资源
pub fn page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(PageService::index))
        .route("/", web::head().to(PageService::index))
        .route("/contact", web::post().to(PageService::submit_contact))
        .route("/demos/{name}", web::get().to(PageService::demo))
        .route("/sw.js", web::get().to(AssetService::handle_service_worker))
        .route("/assets/{path:.*}", web::get().to(AssetService::handle_static))
        .route("/images/{path:.*}", web::get().to(AssetService::handle_image));
}

fn bad_request(message: String) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, &message);
    InternalError::from_response(message, response).into()
}

/// 注册全部路由，以及统一的参数解析错误格式
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req: &HttpRequest| bad_request(err.to_string())),
    )
    .app_data(
        web::JsonConfig::default()
            .limit(PAYLOAD_LIMIT)
            .error_handler(|err, _req: &HttpRequest| bad_request(err.to_string())),
    )
    .app_data(
        web::FormConfig::default()
            .limit(PAYLOAD_LIMIT)
            .error_handler(|err, _req: &HttpRequest| bad_request(err.to_string())),
    )
    .service(health_routes())
    .service(api_routes())
    .service(background_routes())
    .configure(page_routes);
}
