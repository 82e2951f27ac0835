use actix_web::{HttpRequest, HttpResponse, Result, web};
use tracing::{debug, trace};

use super::AppState;
use crate::render::WebAssets;
use crate::render::placeholder::{label_from_path, project_placeholder};

/// 内嵌静态资源
pub struct AssetService;

impl AssetService {
    /// 处理 `/assets/*` 下的 CSS/JS
    pub async fn handle_static(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        match WebAssets::get(&format!("assets/{}", path)) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(Self::get_content_type(path))
                .append_header(("Cache-Control", "public, max-age=3600"))
                .body(content.data.into_owned())),
            None => {
                debug!("Static file not found: {}", path);
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }

    /// 项目截图；没有打包的图片用占位插画代替
    pub async fn handle_image(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");

        match WebAssets::get(&format!("images/{}", path)) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(Self::get_content_type(path))
                .body(content.data.into_owned())),
            None => {
                trace!("Image {} not embedded, serving placeholder", path);
                Ok(HttpResponse::Ok()
                    .content_type("image/svg+xml")
                    .body(project_placeholder(label_from_path(path))))
            }
        }
    }

    /// Service worker 只在生产环境提供
    pub async fn handle_service_worker(state: web::Data<AppState>) -> Result<HttpResponse> {
        if !state.config.site.environment.is_production() {
            trace!("Service worker requested outside production");
            return Ok(HttpResponse::NotFound().body("File not found"));
        }

        match WebAssets::get("sw.js") {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type("application/javascript")
                .append_header(("Service-Worker-Allowed", "/"))
                .body(content.data.into_owned())),
            None => Ok(HttpResponse::NotFound().body("File not found")),
        }
    }

    /// 根据文件扩展名确定 Content-Type
    fn get_content_type(path: &str) -> &'static str {
        match path.split('.').next_back() {
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(AssetService::get_content_type("site.css"), "text/css");
        assert_eq!(AssetService::get_content_type("a/b/site.js"), "application/javascript");
        assert_eq!(AssetService::get_content_type("KSA.png"), "image/png");
        assert_eq!(AssetService::get_content_type("README"), "application/octet-stream");
    }
}
