//! HTML rendering
//!
//! Pages are assembled from the embedded templates under `web/`. Each
//! `%KEY%` placeholder is substituted exactly once, so values that happen to
//! contain placeholder-like text are never expanded again.

pub mod demos;
pub mod placeholder;
pub mod sections;

use rust_embed::Embed;
use serde_json::json;

use crate::catalog::Catalog;
use crate::config::StaticConfig;
use crate::effects::FrameClock;
use crate::errors::{FolioError, Result};
use crate::site::constants::SEO;
use crate::site::{
    BodyOverflow, FormState, FormStatus, ProjectModal, ProjectsView, ThemePreference,
};
use crate::utils::escape_html;
use crate::validation::{ContactForm, FieldErrors};

pub use demos::{Demo, render_demo};

#[derive(Embed)]
#[folder = "web/"]
pub struct WebAssets;

const PAGE_TEMPLATE: &str = "index.html";
const DEMO_TEMPLATE: &str = "demo.html";

/// 联系表单的渲染状态
#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub values: ContactForm,
    pub errors: FieldErrors,
    pub status: FormStatus,
    pub status_message: Option<String>,
}

impl ContactFormView {
    pub fn rejected(values: ContactForm, errors: FieldErrors) -> Self {
        Self {
            values,
            errors,
            status: FormStatus::Idle,
            status_message: None,
        }
    }

    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Success,
            status_message: Some(message.into()),
            ..Default::default()
        }
    }

    /// 按提交状态机的当前状态构建；成功后清空表单，其余状态保留已填写的值
    pub fn resolved(values: ContactForm, state: &FormState, message: Option<String>) -> Self {
        match state.status() {
            FormStatus::Success => Self::succeeded(message.unwrap_or_default()),
            status => Self {
                values,
                status,
                status_message: message,
                ..Default::default()
            },
        }
    }
}

/// 渲染首页需要的全部输入
pub struct PageContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a StaticConfig,
    pub theme: ThemePreference,
    pub filter: Option<&'a str>,
    pub project: Option<&'a str>,
    pub contact: ContactFormView,
}

pub(crate) fn load_template(name: &str) -> Result<String> {
    let file = WebAssets::get(name)
        .ok_or_else(|| FolioError::render(format!("template {} is not embedded", name)))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|e| FolioError::render(format!("template {} is not valid UTF-8: {}", name, e)))
}

/// 单遍替换 `%KEY%` 占位符，未知的占位符原样保留
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replaced = after.find('%').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn html_class(theme: ThemePreference) -> &'static str {
    theme.html_class().unwrap_or("")
}

/// 页面脚本；生产环境额外注册 service worker 与性能监控
pub fn page_scripts(config: &StaticConfig) -> String {
    let production = config.site.environment.is_production();
    let site_config = json!({
        "themeKey": config.site.theme_storage_key,
        "production": production,
        "maxFps": config.site.max_fps,
        "frameIntervalMs": FrameClock::new(config.site.max_fps).interval_ms(),
        "contactEmail": config.contact.email,
        "submitDelayMs": config.contact.submit_delay_ms,
    });
    // JSON 放进 <script> 时需要避免提前闭合标签
    let site_config = site_config.to_string().replace("</", "<\\/");

    let mut scripts = format!(
        "<script id=\"site-config\" type=\"application/json\">{}</script>\n<script src=\"/assets/site.js\" defer></script>",
        site_config
    );
    if production {
        scripts.push_str(concat!(
            "\n<script>",
            "if('serviceWorker' in navigator){window.addEventListener('load',function(){",
            "navigator.serviceWorker.register('/sw.js').catch(function(e){console.warn('SW registration failed:',e);});",
            "});}",
            "</script>",
            "\n<script src=\"/assets/perf.js\" defer></script>"
        ));
    }
    scripts
}

pub fn render_page(ctx: &PageContext<'_>) -> Result<String> {
    let template = load_template(PAGE_TEMPLATE)?;

    let view = ProjectsView::from_query(&ctx.catalog.projects, ctx.filter);
    let mut modal = ProjectModal::new();
    modal.open(ctx.project.and_then(|id| ctx.catalog.projects.by_id(id)));

    let body_style = match modal.body_overflow() {
        BodyOverflow::Hidden => "overflow: hidden",
        BodyOverflow::Auto => "",
    };

    let today = chrono::Local::now().date_naive();
    let main = [
        sections::hero(),
        sections::about(ctx.catalog, today),
        sections::projects(&view),
        sections::contact(&ctx.contact, &ctx.config.contact),
    ]
    .join("\n");

    let modal_html = modal
        .project()
        .map(|project| sections::project_modal(project, view.filter))
        .unwrap_or_default();

    let theme = ctx.theme.to_string();
    let theme_key = escape_html(&ctx.config.site.theme_storage_key);
    let title = escape_html(SEO.title);
    let description = escape_html(SEO.description);
    let keywords = escape_html(SEO.keywords);
    let author = escape_html(SEO.author);
    let header = sections::header(ctx.theme);
    let footer = sections::footer();
    let scripts = page_scripts(ctx.config);

    let html = fill_template(
        &template,
        &[
            ("HTML_CLASS", html_class(ctx.theme)),
            ("THEME", theme.as_str()),
            ("THEME_KEY", theme_key.as_str()),
            ("TITLE", title.as_str()),
            ("DESCRIPTION", description.as_str()),
            ("KEYWORDS", keywords.as_str()),
            ("AUTHOR", author.as_str()),
            ("SITE_URL", SEO.site_url),
            ("OG_IMAGE", SEO.image),
            ("VERSION", env!("CARGO_PKG_VERSION")),
            ("BODY_STYLE", body_style),
            ("HEADER", header.as_str()),
            ("MAIN", main.as_str()),
            ("FOOTER", footer.as_str()),
            ("MODAL", modal_html.as_str()),
            ("SCRIPTS", scripts.as_str()),
        ],
    );
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_single_pass() {
        let out = fill_template(
            "<p>%A%</p><p>%B%</p> 100% sure %UNKNOWN%",
            &[("A", "%B%"), ("B", "two")],
        );
        assert_eq!(out, "<p>%B%</p><p>two</p> 100% sure %UNKNOWN%");
    }

    #[test]
    fn test_production_scripts() {
        let mut config = StaticConfig::default();
        assert!(!page_scripts(&config).contains("serviceWorker"));
        config.site.environment = crate::config::Environment::Production;
        let scripts = page_scripts(&config);
        assert!(scripts.contains("serviceWorker"));
        assert!(scripts.contains("/assets/perf.js"));
    }

    #[test]
    fn test_resolved_view_follows_form_state() {
        let values = ContactForm {
            name: "Ada".to_string(),
            ..Default::default()
        };
        let now = std::time::Instant::now();

        let mut state = FormState::default();
        state.submit(now);
        state.resolve(true, now);
        let view = ContactFormView::resolved(values.clone(), &state, Some("ok".to_string()));
        assert_eq!(view.status, FormStatus::Success);
        assert_eq!(view.values.name, "");

        let mut state = FormState::default();
        state.submit(now);
        state.resolve(false, now);
        let view = ContactFormView::resolved(values, &state, None);
        assert_eq!(view.status, FormStatus::Error);
        assert_eq!(view.values.name, "Ada");
    }

    #[test]
    fn test_frame_interval_follows_max_fps() {
        let mut config = StaticConfig::default();
        config.site.max_fps = 50;
        assert!(page_scripts(&config).contains(r#""frameIntervalMs":20.0"#));

        config.site.max_fps = 0;
        assert!(page_scripts(&config).contains(r#""frameIntervalMs":0.0"#));
    }

    #[test]
    fn test_render_page_with_modal() {
        let catalog = Catalog::embedded();
        let config = StaticConfig::default();
        let ctx = PageContext {
            catalog: &catalog,
            config: &config,
            theme: ThemePreference::Dark,
            filter: Some("web"),
            project: Some("veshara"),
            contact: ContactFormView::default(),
        };
        let html = render_page(&ctx).unwrap();
        assert!(html.contains(r#"class="dark""#));
        assert!(html.contains("Showing 4 of 5 projects"));
        assert!(html.contains(r#"id="project-modal""#));
        assert!(html.contains("overflow: hidden"));
        assert!(!html.contains("%MAIN%"));
    }

    #[test]
    fn test_unknown_project_renders_no_modal() {
        let catalog = Catalog::embedded();
        let config = StaticConfig::default();
        let ctx = PageContext {
            catalog: &catalog,
            config: &config,
            theme: ThemePreference::System,
            filter: None,
            project: Some("nope"),
            contact: ContactFormView::default(),
        };
        let html = render_page(&ctx).unwrap();
        assert!(!html.contains(r#"id="project-modal""#));
        assert!(!html.contains("overflow: hidden"));
    }
}
