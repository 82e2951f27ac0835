//! HTTP timing middleware
//!
//! Records each request's duration into the global performance table under
//! `http.<endpoint>` and logs slow requests.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::services::PerformanceMonitor;

/// 超过该耗时的请求记 warn
const SLOW_REQUEST_MS: f64 = 1000.0;

#[derive(Clone, Default)]
pub struct TimingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TimingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingService {
            service: Rc::new(service),
        }))
    }
}

pub struct TimingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TimingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();
        let endpoint = classify_endpoint(req.path());

        Box::pin(async move {
            let result = srv.call(req).await;

            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            PerformanceMonitor::global().record(&format!("http.{}", endpoint), elapsed_ms);

            let status = match &result {
                Ok(response) => response.status().as_u16(),
                Err(_) => 500,
            };
            if elapsed_ms > SLOW_REQUEST_MS {
                warn!(endpoint, status, "Slow request: {:.1}ms", elapsed_ms);
            } else {
                debug!(endpoint, status, "Request finished in {:.1}ms", elapsed_ms);
            }

            result
        })
    }
}

/// 按路径前缀归类，避免每个 URL 单独成为一个指标
pub fn classify_endpoint(path: &str) -> &'static str {
    if path.starts_with("/api/") {
        "api"
    } else if path.starts_with("/health") {
        "health"
    } else if path.starts_with("/backgrounds/") {
        "backgrounds"
    } else if path.starts_with("/assets/") || path.starts_with("/images/") || path == "/sw.js" {
        "assets"
    } else if path.starts_with("/demos/") {
        "demos"
    } else {
        "page"
    }
}
