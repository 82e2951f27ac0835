use std::time::Instant;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::{debug, error, trace};

use super::AppState;
use crate::errors::Result;
use crate::render::{ContactFormView, Demo, PageContext, render_demo, render_page};
use crate::site::FormState;
use crate::validation::ContactForm;

/// 首页查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub filter: Option<String>,
    pub project: Option<String>,
}

pub struct PageService;

impl PageService {
    pub async fn index(
        req: HttpRequest,
        query: web::Query<PageQuery>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        trace!("Rendering index, query: {:?}", query);
        Self::render(&req, &state, &query, ContactFormView::default(), StatusCode::OK)
    }

    /// 无脚本时的表单提交：校验失败带着错误重新渲染，成功显示提示
    pub async fn submit_contact(
        req: HttpRequest,
        query: web::Query<PageQuery>,
        form: web::Form<ContactForm>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let form = form.into_inner();
        if let Err(errors) = state.contact.validate(&form) {
            return Self::render(
                &req,
                &state,
                &query,
                ContactFormView::rejected(form, errors),
                StatusCode::BAD_REQUEST,
            );
        }

        let mut status = FormState::default();
        status.submit(Instant::now());
        let result = state.contact.submit(&form).await;
        status.resolve(result.is_ok(), Instant::now());

        match result {
            Ok(receipt) => {
                debug!("Contact form accepted via page post: {}", receipt.id);
                Self::render(
                    &req,
                    &state,
                    &query,
                    ContactFormView::resolved(form, &status, Some(receipt.message)),
                    StatusCode::OK,
                )
            }
            Err(errors) => Self::render(
                &req,
                &state,
                &query,
                ContactFormView::rejected(form, errors),
                StatusCode::BAD_REQUEST,
            ),
        }
    }

    pub async fn demo(
        req: HttpRequest,
        path: web::Path<String>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let name = path.into_inner();
        match name.parse::<Demo>() {
            Ok(demo) => {
                let theme = state.theme_from_request(&req);
                html_response(StatusCode::OK, render_demo(demo, theme, &state.config))
            }
            Err(e) => {
                debug!("{}", e);
                HttpResponse::NotFound()
                    .content_type("text/plain; charset=utf-8")
                    .body("Not Found")
            }
        }
    }

    fn render(
        req: &HttpRequest,
        state: &AppState,
        query: &PageQuery,
        contact: ContactFormView,
        status: StatusCode,
    ) -> HttpResponse {
        let ctx = PageContext {
            catalog: &state.catalog,
            config: &state.config,
            theme: state.theme_from_request(req),
            filter: query.filter.as_deref(),
            project: query.project.as_deref(),
            contact,
        };
        html_response(status, render_page(&ctx))
    }
}

fn html_response(status: StatusCode, rendered: Result<String>) -> HttpResponse {
    match rendered {
        Ok(html) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Page render failed: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal Server Error")
        }
    }
}
