use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use serde_json::json;
use tracing::{debug, trace};

use super::AppState;
use crate::api::types::{ErrorCode, error_response, success_response, validation_response};
use crate::catalog::DataSummary;
use crate::services::search;
use crate::validation::{ProjectFilterQuery, SearchQuery, validate_project_filter, validate_search};

/// 目录的只读 JSON 接口
pub struct CatalogService;

impl CatalogService {
    pub async fn list_projects(
        query: web::Query<ProjectFilterQuery>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        trace!("Listing projects with {:?}", query);
        let filter = match validate_project_filter(&query) {
            Ok(filter) => filter,
            Err(errors) => {
                debug!("Rejected project filter: {}", errors);
                return validation_response(&errors);
            }
        };

        let projects = state.catalog.projects.filter(&filter);
        success_response(json!({
            "projects": projects,
            "total": projects.len(),
        }))
    }

    pub async fn get_project(
        path: web::Path<String>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let id = path.into_inner();
        match state.catalog.projects.by_id(&id) {
            Some(project) => success_response(project),
            None => {
                debug!("Project not found: {}", id);
                error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, "Project not found")
            }
        }
    }

    pub async fn list_skills(state: web::Data<AppState>) -> impl Responder {
        success_response(json!({
            "groups": state.catalog.skills.groups(),
            "total": state.catalog.skills.len(),
        }))
    }

    pub async fn list_experience(state: web::Data<AppState>) -> impl Responder {
        success_response(json!({
            "experience": state.catalog.experience.all(),
            "total": state.catalog.experience.len(),
        }))
    }

    pub async fn summary(state: web::Data<AppState>) -> impl Responder {
        let today = chrono::Local::now().date_naive();
        success_response(DataSummary::compute(&state.catalog, today))
    }

    pub async fn search(
        query: web::Query<SearchQuery>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let (needle, scope) = match validate_search(&query) {
            Ok(parsed) => parsed,
            Err(errors) => return validation_response(&errors),
        };
        let results = search(&state.catalog, &needle, scope);
        debug!("Search '{}' in {:?}: {} hit(s)", needle, scope, results.total);
        success_response(results)
    }
}
