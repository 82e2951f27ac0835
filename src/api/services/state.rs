use std::sync::Arc;

use actix_web::HttpRequest;

use crate::catalog::Catalog;
use crate::config::StaticConfig;
use crate::services::ContactService;
use crate::site::ThemePreference;

/// 所有 handler 共享的只读状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<StaticConfig>,
    pub contact: ContactService,
    /// 背景噪声的种子，同一进程内每帧的波形保持连续
    pub noise_seed: u64,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Arc<StaticConfig>) -> Self {
        let contact = ContactService::from_config(&config.contact);
        Self {
            catalog: Arc::new(catalog),
            config,
            contact,
            noise_seed: rand::random::<u64>(),
        }
    }

    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = seed;
        self
    }

    pub fn theme_cookie_name(&self) -> &str {
        &self.config.site.theme_storage_key
    }

    /// cookie 优先，缺失或无法识别时使用 `site.default_theme`
    pub fn theme_from_request(&self, req: &HttpRequest) -> ThemePreference {
        match req
            .cookie(self.theme_cookie_name())
            .and_then(|c| c.value().parse::<ThemePreference>().ok())
        {
            Some(theme) => theme,
            None => ThemePreference::from_stored(Some(&self.config.site.default_theme)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    fn state() -> AppState {
        AppState::new(Catalog::default(), Arc::new(StaticConfig::default()))
    }

    #[test]
    fn test_theme_from_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new("portfolio-theme", "dark"))
            .to_http_request();
        assert_eq!(state().theme_from_request(&req), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_falls_back_to_default() {
        let req = TestRequest::default()
            .cookie(Cookie::new("portfolio-theme", "sepia"))
            .to_http_request();
        assert_eq!(state().theme_from_request(&req), ThemePreference::System);

        let mut config = StaticConfig::default();
        config.site.default_theme = "light".to_string();
        let state = AppState::new(Catalog::default(), Arc::new(config));
        let req = TestRequest::default().to_http_request();
        assert_eq!(state.theme_from_request(&req), ThemePreference::Light);
    }
}
