use std::fmt::Write;

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::{fill_template, html_class, load_template, page_scripts, DEMO_TEMPLATE};
use crate::config::StaticConfig;
use crate::effects::{Direction, FrameClock, ScrollOptions, ScrollTarget, SmoothScroller};
use crate::errors::Result;
use crate::site::{
    ButtonSize, ButtonVariant, ExpandableTabs, GlareState, ThemePreference, liquid_button_class,
};
use crate::utils::escape_html;

/// 组件演示页
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Demo {
    Waves,
    Squares,
    GlareCard,
    ExpandableTabs,
    LiquidGlassButton,
    SmoothScroll,
}

impl Demo {
    pub fn slug(&self) -> &str {
        self.as_ref()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Demo::Waves => "Interactive Waves Background",
            Demo::Squares => "Squares Background",
            Demo::GlareCard => "Glare Card",
            Demo::ExpandableTabs => "Expandable Tabs",
            Demo::LiquidGlassButton => "Liquid Glass Button",
            Demo::SmoothScroll => "Smooth Scroll",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Demo::Waves => "Noise-driven wave lines that bend away from the cursor.",
            Demo::Squares => "A drifting grid of squares with a hover highlight, one per direction.",
            Demo::GlareCard => "Cards that tilt and catch a glare following the pointer.",
            Demo::ExpandableTabs => "Icon tabs that expand to show their label when selected.",
            Demo::LiquidGlassButton => "Every button variant in every size.",
            Demo::SmoothScroll => "Eased scrolling between sections with a fixed-header offset.",
        }
    }
}

impl std::str::FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Demo::iter()
            .find(|d| d.slug() == s)
            .ok_or_else(|| format!("Unknown demo '{}'", s))
    }
}

fn waves_content() -> String {
    r#"<div class="demo-stage demo-stage--dark">
  <img class="demo-waves" data-waves src="/backgrounds/waves.svg?w=800&amp;h=400" alt="" width="800" height="400">
</div>
<p class="demo-note">Move the pointer over the stage to disturb the lines.</p>"#
        .to_string()
}

fn squares_content() -> String {
    let mut out = String::from(r#"<div class="demo-grid">"#);
    for direction in Direction::iter() {
        let _ = write!(
            out,
            r#"<figure class="demo-stage demo-stage--dark"><img data-squares data-direction="{d}" src="/backgrounds/squares.svg?w=400&amp;h=240&amp;direction={d}" alt="" width="400" height="240"><figcaption>{d}</figcaption></figure>"#,
            d = direction.as_ref()
        );
    }
    out.push_str("</div>");
    out
}

fn glare_content() -> String {
    let style = GlareState::default().style();
    let mut out = String::from(r#"<div class="demo-grid">"#);
    for title in ["Aurora", "Nebula", "Horizon"] {
        let _ = write!(
            out,
            r#"<div class="glare-card" data-glare style="{}"><div class="glare-card__shine"></div><h3>{}</h3></div>"#,
            style, title
        );
    }
    out.push_str("</div>");
    out
}

fn tabs_content() -> String {
    let tabs = ExpandableTabs::new(["Dashboard", "Notifications", "Settings", "Support", "Security"]);
    let mut out = String::from(r#"<div class="expandable-tabs" role="tablist" data-tabs>"#);
    for (i, title) in tabs.titles().iter().enumerate() {
        let selected = tabs.selected() == Some(i);
        let _ = write!(
            out,
            r#"<button type="button" class="expandable-tab{}" role="tab" aria-selected="{}" data-tab-index="{}"><span class="expandable-tab__icon" aria-hidden="true">{}</span><span class="expandable-tab__label">{}</span></button>"#,
            if selected { " is-selected" } else { "" },
            selected,
            i,
            escape_html(&title[..1]),
            escape_html(title)
        );
        if i == 1 {
            out.push_str(r#"<span class="expandable-tabs__separator" aria-hidden="true"></span>"#);
        }
    }
    out.push_str("</div>");
    out
}

fn buttons_content() -> String {
    let mut out = String::from(r#"<div class="button-matrix">"#);
    for variant in ButtonVariant::iter() {
        let _ = write!(out, r#"<div class="button-row"><h3>{}</h3>"#, variant.as_ref());
        for size in ButtonSize::iter() {
            let label = match size {
                ButtonSize::Icon => "&#9733;".to_string(),
                other => other.as_ref().to_string(),
            };
            let _ = write!(
                out,
                r#"<button type="button" class="{}">{}</button>"#,
                liquid_button_class(variant, size),
                label
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

const CURVE_WIDTH: f64 = 240.0;
const CURVE_HEIGHT: f64 = 120.0;
const CURVE_FPS: u32 = 30;

/// 用 `SmoothScroller` 模拟一次滚动，按帧采样得到缓动曲线
fn scroll_curve() -> String {
    let distance = 1000.0;
    let mut scroller = SmoothScroller::mount(distance, 1);
    let no_targets: &[(&str, f64)] = &[];
    scroller.scroll_to(
        ScrollTarget::Position(distance),
        ScrollOptions::default(),
        no_targets,
    );

    let mut clock = FrameClock::new(CURVE_FPS);
    let mut points = Vec::new();
    let mut now = 0.0;
    // 60Hz 的 rAF，曲线按 30fps 采样
    while scroller.is_animating() {
        let position = scroller.tick(now);
        if clock.should_render(now) {
            points.push((now, position));
        }
        now += 1000.0 / 60.0;
    }
    points.push((now, scroller.position()));
    scroller.destroy();

    let duration = now.max(1.0);
    let polyline = points
        .iter()
        .map(|(t, y)| {
            format!(
                "{:.1},{:.1}",
                t / duration * CURVE_WIDTH,
                CURVE_HEIGHT - y / distance * CURVE_HEIGHT
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"<svg class="demo-scroll-curve" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-samples="{n}" aria-hidden="true"><polyline fill="none" stroke="currentColor" stroke-width="2" points="{points}"/></svg>"#,
        w = CURVE_WIDTH,
        h = CURVE_HEIGHT,
        n = points.len(),
        points = polyline
    )
}

fn scroll_content() -> String {
    let sections = ["One", "Two", "Three", "Four"];
    let mut nav = String::from(r#"<nav class="demo-scroll-nav">"#);
    let mut body = String::new();
    for (i, name) in sections.iter().enumerate() {
        let _ = write!(
            nav,
            r##"<a class="liquid-btn liquid-btn--ghost liquid-btn--sm" href="#demo-section-{i}" data-scroll-to="#demo-section-{i}">{name}</a>"##,
            i = i + 1,
            name = name
        );
        let _ = write!(
            body,
            r#"<section class="demo-scroll-section" id="demo-section-{}"><h2>Section {}</h2></section>"#,
            i + 1,
            name
        );
    }
    nav.push_str("</nav>");
    format!(
        r#"{}{}{}<button type="button" class="liquid-btn liquid-btn--default liquid-btn--md" data-scroll-top>Back to top</button>"#,
        scroll_curve(),
        nav,
        body
    )
}

pub fn render_demo(demo: Demo, theme: ThemePreference, config: &StaticConfig) -> Result<String> {
    let template = load_template(DEMO_TEMPLATE)?;
    let content = match demo {
        Demo::Waves => waves_content(),
        Demo::Squares => squares_content(),
        Demo::GlareCard => glare_content(),
        Demo::ExpandableTabs => tabs_content(),
        Demo::LiquidGlassButton => buttons_content(),
        Demo::SmoothScroll => scroll_content(),
    };
    let theme_name = theme.to_string();
    let scripts = page_scripts(config);

    Ok(fill_template(
        &template,
        &[
            ("HTML_CLASS", html_class(theme)),
            ("THEME", theme_name.as_str()),
            ("TITLE", demo.title()),
            ("DESCRIPTION", demo.description()),
            ("CONTENT", content.as_str()),
            ("SCRIPTS", scripts.as_str()),
        ],
    ))
}
