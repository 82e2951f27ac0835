use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, trace};

use super::AppState;
use crate::api::types::{ApiResponse, ErrorCode};
use crate::render::WebAssets;
use crate::utils::format_duration_human;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthCatalogCheck {
    pub status: String,
    pub projects: usize,
    pub skills: usize,
    pub experience: usize,
    pub violations: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthTemplatesCheck {
    pub status: String,
    pub missing: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthChecks {
    pub catalog: HealthCatalogCheck,
    pub templates: HealthTemplatesCheck,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub uptime_human: String,
    pub environment: String,
    pub checks: HealthChecks,
    pub response_time_ms: u32,
}

const REQUIRED_TEMPLATES: [&str; 4] = ["index.html", "demo.html", "assets/site.css", "assets/site.js"];

fn missing_templates() -> Vec<String> {
    REQUIRED_TEMPLATES
        .iter()
        .filter(|name| WebAssets::get(name).is_none())
        .map(|name| name.to_string())
        .collect()
}

/// Health Service
///
/// 目录违规只会降级为 degraded，页面照常渲染；缺少模板才视为不健康。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        state: web::Data<AppState>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let violations = state.catalog.validate().total();
        let catalog = HealthCatalogCheck {
            status: if violations == 0 { "healthy" } else { "degraded" }.to_string(),
            projects: state.catalog.projects.len(),
            skills: state.catalog.skills.len(),
            experience: state.catalog.experience.len(),
            violations,
        };

        let missing = missing_templates();
        let is_healthy = missing.is_empty();
        let templates = HealthTemplatesCheck {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            missing,
        };

        let now = chrono::Utc::now();
        let uptime_human = format_duration_human(app_start_time.start_datetime, now);
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

        let health_data = HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds,
            uptime_human: uptime_human.clone(),
            environment: state.config.site.environment.to_string(),
            checks: HealthChecks { catalog, templates },
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        let health_response = ApiResponse {
            code: if is_healthy {
                ErrorCode::Success as i32
            } else {
                ErrorCode::InternalServerError as i32
            },
            message: if is_healthy {
                "OK".to_string()
            } else {
                "Service Unavailable".to_string()
            },
            data: Some(health_data),
        };

        let response_status = if is_healthy {
            actix_web::http::StatusCode::OK
        } else {
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        };

        info!(
            "Health check completed in {:?}, status: {}, uptime: {}",
            start_time.elapsed(),
            if is_healthy { "healthy" } else { "unhealthy" },
            uptime_human
        );

        HttpResponse::build(response_status)
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(health_response)
    }

    // 就绪检查：模板都已打包才算就绪
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        if missing_templates().is_empty() {
            HttpResponse::Ok()
                .append_header(("Content-Type", "text/plain"))
                .body("OK")
        } else {
            HttpResponse::ServiceUnavailable()
                .append_header(("Content-Type", "text/plain"))
                .body("NOT READY")
        }
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
