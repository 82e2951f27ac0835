use actix_web::{Responder, web};
use tracing::debug;

use super::AppState;
use crate::api::types::{success_response, validation_response};
use crate::validation::{ContactForm, NewsletterForm};

/// 表单的 JSON 接口，供页面脚本调用
pub struct ContactApi;

impl ContactApi {
    pub async fn submit(
        payload: web::Json<ContactForm>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        match state.contact.submit(&payload).await {
            Ok(receipt) => success_response(receipt),
            Err(errors) => {
                debug!("Contact submission rejected: {} field(s)", errors.len());
                validation_response(&errors)
            }
        }
    }

    pub async fn subscribe(
        payload: web::Json<NewsletterForm>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        match state.contact.subscribe(&payload).await {
            Ok(receipt) => success_response(receipt),
            Err(errors) => validation_response(&errors),
        }
    }
}
