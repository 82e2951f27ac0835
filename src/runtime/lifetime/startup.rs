use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use crate::api::services::AppState;
use crate::catalog::Catalog;
use crate::config::StaticConfig;
use crate::render::WebAssets;
use crate::services::PerformanceMonitor;

pub struct StartupContext {
    pub state: AppState,
}

/// 准备服务器启动的上下文
///
/// 加载目录（schema 违规只记日志），确认页面模板已内嵌。
pub fn prepare_server_startup(config: Arc<StaticConfig>) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");
    PerformanceMonitor::global().mark("startup");

    let content_dir = config.site.content_dir.as_deref().map(Path::new);
    if let Some(dir) = content_dir
        && !dir.is_dir()
    {
        warn!(
            "Content directory {} does not exist, using embedded catalogs",
            dir.display()
        );
    }
    let catalog = Catalog::load(content_dir.filter(|dir| dir.is_dir()));

    if WebAssets::get("index.html").is_none() {
        bail!("Page template index.html is not embedded");
    }

    info!(
        "Environment: {}, default theme: {}",
        config.site.environment, config.site.default_theme
    );

    let state = AppState::new(catalog, config);

    if let Some(ms) = PerformanceMonitor::global().measure("startup") {
        debug!("Pre-startup processing completed in {:.2}ms", ms);
    }
    debug!(
        "Startup context ready after {}ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext { state })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_with_missing_content_dir_uses_embedded() {
        let mut config = StaticConfig::default();
        config.site.content_dir = Some("/nonexistent/folio-content".to_string());

        let startup = prepare_server_startup(Arc::new(config)).unwrap();
        assert!(!startup.state.catalog.projects.is_empty());
    }

    #[test]
    fn test_prepare_prefers_content_dir_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("projects.toml"), "projects = []\n").unwrap();
        std::fs::write(
            dir.path().join("skills.toml"),
            r#"
[[skills]]
name = "Rust"
level = 70
category = "backend"
icon = "rust"
years_of_experience = 1
"#,
        )
        .unwrap();

        let mut config = StaticConfig::default();
        config.site.content_dir = Some(dir.path().to_string_lossy().into_owned());

        let startup = prepare_server_startup(Arc::new(config)).unwrap();
        let catalog = &startup.state.catalog;
        assert!(catalog.projects.is_empty());
        assert_eq!(catalog.skills.len(), 1);
        assert!(catalog.skills.by_name("rust").is_some());
        // 目录中缺少的文件回退到内嵌版本
        assert_eq!(
            catalog.experience.len(),
            Catalog::embedded().experience.len()
        );
    }
}
