use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;
use crate::api::types::{ApiResponse, ErrorCode, validation_response};
use crate::site::ThemePreference;
use crate::validation::validate_theme;

/// 主题 cookie 保留一年
const THEME_COOKIE_DAYS: i64 = 365;

#[derive(Debug, Clone, Deserialize)]
pub struct SetThemeRequest {
    #[serde(default)]
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub theme: ThemePreference,
    pub html_class: Option<String>,
    pub toggle_label: String,
}

impl From<ThemePreference> for ThemeState {
    fn from(theme: ThemePreference) -> Self {
        Self {
            theme,
            html_class: theme.html_class().map(str::to_string),
            toggle_label: theme.toggle_label().to_string(),
        }
    }
}

pub struct ThemeService;

impl ThemeService {
    /// light -> dark -> system -> light
    pub async fn toggle(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
        let current = state.theme_from_request(&req);
        let next = current.next();
        debug!("Theme toggled: {} -> {}", current, next);
        Self::respond(&state, next)
    }

    pub async fn set(
        payload: web::Json<SetThemeRequest>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        match validate_theme(&payload.theme) {
            Ok(theme) => Self::respond(&state, theme),
            Err(errors) => validation_response(&errors),
        }
    }

    fn respond(state: &AppState, theme: ThemePreference) -> HttpResponse {
        // 页面脚本也会读写同名的 localStorage 键，cookie 不设 HttpOnly
        let mut cookie = Cookie::new(state.theme_cookie_name().to_string(), theme.to_string());
        cookie.set_path("/");
        cookie.set_http_only(false);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_max_age(Duration::days(THEME_COOKIE_DAYS));

        HttpResponse::Ok()
            .cookie(cookie)
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ApiResponse {
                code: ErrorCode::Success as i32,
                message: "OK".to_string(),
                data: Some(ThemeState::from(theme)),
            })
    }
}
