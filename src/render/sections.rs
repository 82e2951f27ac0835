//! Page sections
//!
//! Each function returns one self-contained HTML fragment. All catalog text
//! goes through `escape_html`; outbound links are only emitted when they are
//! absolute http(s) URLs.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::catalog::{Catalog, CategoryFilter, Project, format_experience_date};
use crate::config::ContactConfig;
use crate::effects::{LAYERS, Parallax, Viewport};
use crate::site::constants::{PROFILE, SOCIAL_LINKS};
use crate::site::form::error_message;
use crate::site::projects::EMPTY_FILTER_MESSAGE;
use crate::site::{
    FormStatus, MobileMenu, NAV_ITEMS, ProjectsView, ThemePreference, active_section,
};
use crate::utils::{escape_html, validate_url};

use super::ContactFormView;

/// 初始渲染时假定的视口
const RENDER_VIEWPORT: Viewport = Viewport {
    width: 1440.0,
    height: 900.0,
};

fn filter_href(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "/#projects".to_string(),
        other => format!("/?filter={}#projects", other.as_str()),
    }
}

fn project_href(project: &Project, filter: CategoryFilter) -> String {
    let id = escape_html(&project.id);
    match filter {
        CategoryFilter::All => format!("/?project={}#projects", id),
        other => format!("/?filter={}&amp;project={}#projects", other.as_str(), id),
    }
}

fn external_link(url: Option<&str>, label: &str, class: &str) -> String {
    match url.filter(|u| validate_url(u).is_ok()) {
        Some(url) => format!(
            r#"<a class="{}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            class,
            escape_html(url),
            label
        ),
        None => String::new(),
    }
}

fn tech_tags(technologies: &[String]) -> String {
    technologies
        .iter()
        .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(t)))
        .collect::<Vec<_>>()
        .join("")
}

pub fn header(theme: ThemePreference) -> String {
    // 服务端没有布局信息，初始状态：菜单收起，激活区块取默认值
    let menu = MobileMenu::default();
    let active = active_section(&[], RENDER_VIEWPORT.height);
    let mut nav = String::new();
    for item in NAV_ITEMS {
        let _ = write!(
            nav,
            r#"<li><a class="nav-link{}" href="{}" data-section="{}">{}</a></li>"#,
            if item.id == active { " is-active" } else { "" },
            item.href(),
            item.id,
            item.label
        );
    }

    format!(
        r##"<header class="site-header" data-header>
  <nav class="nav" aria-label="Primary">
    <a class="nav-logo" href="#hero">{name}</a>
    <ul class="nav-links" id="nav-links" data-menu>{nav}</ul>
    <div class="nav-actions">
      <button type="button" class="theme-toggle" data-theme-toggle data-theme="{theme}" aria-label="{label}" title="{label}">
        <span class="theme-icon theme-icon--{theme}" aria-hidden="true"></span>
      </button>
      <button type="button" class="menu-toggle" data-menu-toggle aria-controls="nav-links" aria-expanded="{expanded}" aria-label="Toggle menu">
        <span></span><span></span><span></span>
      </button>
    </div>
  </nav>
</header>"##,
        name = escape_html(PROFILE.name),
        nav = nav,
        theme = theme,
        label = theme.toggle_label(),
        expanded = menu.is_open(),
    )
}

pub fn hero() -> String {
    let parallax = Parallax::mount(RENDER_VIEWPORT, 0.0);
    let mut layers = String::new();
    for (i, layer) in LAYERS.iter().enumerate() {
        let _ = write!(
            layers,
            r#"<div class="parallax-layer parallax-layer--{}" data-depth="{}" data-scroll-factor="{}" style="transform: {}"></div>"#,
            i + 1,
            layer.depth,
            layer.scroll_factor,
            parallax.transform(*layer)
        );
    }

    format!(
        r##"<section id="hero" class="section hero" data-observe>
  <div class="hero-background" aria-hidden="true">
    <img class="hero-waves" data-waves src="/backgrounds/waves.svg?w={w}&amp;h={h}" alt="">
    {layers}
  </div>
  <div class="hero-content">
    <p class="hero-greeting">Hello, I'm</p>
    <h1 class="hero-name">{name}</h1>
    <p class="hero-role">{role}</p>
    <p class="hero-tagline">{tagline}</p>
    <div class="hero-actions">
      <a class="liquid-btn liquid-btn--default liquid-btn--lg" href="#projects" data-scroll-to="#projects">View My Work <span aria-hidden="true">&rarr;</span></a>
      <a class="liquid-btn liquid-btn--outline liquid-btn--lg" href="#contact" data-scroll-to="#contact">Contact Me <span aria-hidden="true">&#9993;</span></a>
    </div>
    <a class="scroll-indicator" href="#about" data-scroll-to="#about">
      <span>Scroll to explore</span>
      <span class="scroll-indicator__chevron" aria-hidden="true"></span>
    </a>
  </div>
</section>"##,
        w = RENDER_VIEWPORT.width,
        h = RENDER_VIEWPORT.height,
        layers = layers,
        name = escape_html(PROFILE.name),
        role = escape_html(PROFILE.role),
        tagline = escape_html(PROFILE.tagline),
    )
}

fn skills_block(catalog: &Catalog) -> String {
    if catalog.skills.is_empty() {
        return String::new();
    }
    let mut out = String::from(r#"<div class="skills"><h3>Skills</h3><div class="skill-groups">"#);
    for group in catalog.skills.groups() {
        if group.skills.is_empty() {
            continue;
        }
        let _ = write!(
            out,
            r#"<div class="skill-group"><h4 class="skill-group__title">{}</h4><ul>"#,
            group.category
        );
        for skill in group.skills {
            let _ = write!(
                out,
                r#"<li class="skill"><span class="skill__name">{}</span><span class="skill__bar" role="meter" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{level}"><span style="width: {level}%"></span></span></li>"#,
                escape_html(&skill.name),
                level = skill.level.clamp(0, 100)
            );
        }
        out.push_str("</ul></div>");
    }
    out.push_str("</div></div>");
    out
}

fn experience_block(catalog: &Catalog, today: NaiveDate) -> String {
    if catalog.experience.is_empty() {
        return String::new();
    }
    let total_years = catalog.experience.total_years(today).unwrap_or(0);
    let mut out = format!(
        r#"<div class="experience"><h3>Experience</h3><p class="experience__total">{} year{} of experience</p><ol class="timeline">"#,
        total_years,
        if total_years == 1 { "" } else { "s" }
    );
    for entry in catalog.experience.all() {
        let start = format_experience_date(&entry.start_date)
            .unwrap_or_else(|_| entry.start_date.clone());
        let end = match entry.end_date.as_deref() {
            Some(end) => format_experience_date(end).unwrap_or_else(|_| end.to_string()),
            None => "Present".to_string(),
        };
        let duration = entry.duration(today).unwrap_or_default();
        let achievements: String = entry
            .achievements
            .iter()
            .map(|a| format!("<li>{}</li>", escape_html(a)))
            .collect();
        let _ = write!(
            out,
            r#"<li class="timeline__item"><h4>{position} <span class="timeline__company">@ {company}</span></h4><p class="timeline__dates">{start} &ndash; {end} &middot; {duration}</p><p>{description}</p><ul class="timeline__achievements">{achievements}</ul><div class="tech-tags">{tags}</div></li>"#,
            position = escape_html(&entry.position),
            company = escape_html(&entry.company),
            start = escape_html(&start),
            end = escape_html(&end),
            duration = escape_html(&duration),
            description = escape_html(&entry.description),
            achievements = achievements,
            tags = tech_tags(&entry.technologies),
        );
    }
    out.push_str("</ol></div>");
    out
}

pub fn about(catalog: &Catalog, today: NaiveDate) -> String {
    let paragraphs: String = PROFILE
        .about
        .iter()
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect();
    let focus: String = PROFILE
        .focus_areas
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect();
    let current: String = PROFILE
        .current_projects
        .iter()
        .map(|c| format!("<li>{}</li>", escape_html(c)))
        .collect();

    format!(
        r#"<section id="about" class="section about" data-observe>
  <div class="section-heading">
    <h2>About Me</h2>
    <p>{lead}</p>
  </div>
  <div class="about-grid">
    <div class="about-bio">
      {paragraphs}
      <ul class="about-facts">
        <li><span class="label">Location</span> {location}</li>
        <li><span class="label">Status</span> {status}</li>
      </ul>
    </div>
    <div class="about-journey">
      <h3>Learning Journey</h3>
      <div class="journey-card"><h5>Focus Areas</h5><ul>{focus}</ul></div>
      <div class="journey-card"><h5>Current Projects</h5><ul>{current}</ul></div>
    </div>
  </div>
  {skills}
  {experience}
</section>"#,
        lead = escape_html(PROFILE.about_lead),
        paragraphs = paragraphs,
        location = escape_html(PROFILE.location),
        status = escape_html(PROFILE.status),
        focus = focus,
        current = current,
        skills = skills_block(catalog),
        experience = experience_block(catalog, today),
    )
}

fn project_card(project: &Project, filter: CategoryFilter) -> String {
    format!(
        r#"<article class="project-card{featured}" data-category="{category}" data-glare>
  <a class="project-card__link" href="{href}" data-project="{id}">
    <img class="project-card__image" src="{image}" alt="{title}" loading="lazy">
    <div class="project-card__body">
      <h3>{title}</h3>
      <p>{description}</p>
      <div class="tech-tags">{tags}</div>
    </div>
  </a>
  <div class="project-card__links">{live}{source}</div>
</article>"#,
        featured = if project.featured { " is-featured" } else { "" },
        category = project.category,
        href = project_href(project, filter),
        id = escape_html(&project.id),
        image = escape_html(&project.image),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        tags = tech_tags(&project.technologies),
        live = external_link(project.live_url.as_deref(), "Live Demo", "project-link"),
        source = external_link(project.github_url.as_deref(), "Source", "project-link"),
    )
}

pub fn projects(view: &ProjectsView<'_>) -> String {
    let mut filters = String::new();
    for option in CategoryFilter::all_options() {
        let active = option == view.filter;
        let _ = write!(
            filters,
            r#"<a class="filter-btn{}" href="{}" data-filter="{}" aria-pressed="{}">{}</a>"#,
            if active { " is-active" } else { "" },
            filter_href(option),
            option.as_str(),
            active,
            option.label()
        );
    }

    let grid = if view.is_empty() {
        format!(r#"<p class="projects-empty">{}</p>"#, EMPTY_FILTER_MESSAGE)
    } else {
        let cards: String = view
            .visible
            .iter()
            .map(|p| project_card(p, view.filter))
            .collect();
        format!(r#"<div class="projects-grid">{}</div>"#, cards)
    };

    format!(
        r#"<section id="projects" class="section projects" data-observe>
  <div class="section-heading">
    <h2>Projects</h2>
    <p>A selection of things I've built while learning</p>
  </div>
  <div class="project-filters" role="toolbar" aria-label="Filter projects">{filters}</div>
  <p class="projects-count" data-projects-count>{count}</p>
  {grid}
</section>"#,
        filters = filters,
        count = view.count_label(),
        grid = grid,
    )
}

pub fn project_modal(project: &Project, filter: CategoryFilter) -> String {
    let gallery: String = project
        .images
        .iter()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{} screenshot" loading="lazy">"#,
                escape_html(src),
                escape_html(&project.title)
            )
        })
        .collect();

    format!(
        r#"<div class="modal-backdrop" id="project-modal" data-modal data-close-href="{close}">
  <div class="modal-dialog" role="dialog" aria-modal="true" aria-labelledby="project-modal-title">
    <a class="modal-close" href="{close}" aria-label="Close">&times;</a>
    <img class="modal-hero" src="{image}" alt="{title}">
    <h2 id="project-modal-title">{title}</h2>
    <span class="modal-category">{category}</span>
    <p class="modal-description">{long}</p>
    <div class="tech-tags">{tags}</div>
    <div class="modal-gallery">{gallery}</div>
    <div class="modal-links">{live}{source}</div>
  </div>
</div>"#,
        close = filter_href(filter),
        image = escape_html(&project.image),
        title = escape_html(&project.title),
        category = project.category,
        long = escape_html(&project.long_description),
        tags = tech_tags(&project.technologies),
        gallery = gallery,
        live = external_link(project.live_url.as_deref(), "Live Demo", "liquid-btn liquid-btn--default liquid-btn--md"),
        source = external_link(project.github_url.as_deref(), "View Code", "liquid-btn liquid-btn--outline liquid-btn--md"),
    )
}

fn field(
    view: &ContactFormView,
    name: &str,
    label: &str,
    value: &str,
    input: &str,
) -> String {
    let error = view.errors.get(name);
    let error_html = error
        .map(|e| {
            format!(
                r#"<p class="field-error" id="{}-error" data-error-for="{}">{}</p>"#,
                name,
                name,
                escape_html(e)
            )
        })
        .unwrap_or_else(|| {
            format!(
                r#"<p class="field-error" id="{}-error" data-error-for="{}" hidden></p>"#,
                name, name
            )
        });
    let invalid = if error.is_some() {
        r#" aria-invalid="true""#
    } else {
        ""
    };
    let control = match input {
        "textarea" => format!(
            r#"<textarea id="{name}" name="{name}" rows="6" aria-describedby="{name}-error"{invalid}>{value}</textarea>"#,
            name = name,
            invalid = invalid,
            value = escape_html(value)
        ),
        kind => format!(
            r#"<input id="{name}" name="{name}" type="{kind}" value="{value}" aria-describedby="{name}-error"{invalid}>"#,
            name = name,
            kind = kind,
            invalid = invalid,
            value = escape_html(value)
        ),
    };
    format!(
        r#"<div class="form-field"><label for="{}">{}</label>{}{}</div>"#,
        name, label, control, error_html
    )
}

pub fn contact(view: &ContactFormView, config: &ContactConfig) -> String {
    let (status_class, status_text) = match view.status {
        FormStatus::Success => (
            "form-status form-status--success",
            view.status_message.clone().unwrap_or_default(),
        ),
        FormStatus::Error => (
            "form-status form-status--error",
            view.status_message
                .clone()
                .unwrap_or_else(|| error_message(&config.email)),
        ),
        _ => ("form-status", String::new()),
    };

    let socials: String = SOCIAL_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<li><a class="social-link social-link--{}" href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                link.name,
                escape_html(link.href),
                link.label
            )
        })
        .collect();

    let values = &view.values;
    format!(
        r#"<section id="contact" class="section contact" data-observe>
  <div class="section-heading">
    <h2>Get In Touch</h2>
    <p>Have a project in mind or just want to say hello? Drop me a message.</p>
  </div>
  <div class="contact-grid">
    <form class="contact-form" method="post" action="/contact" data-contact-form novalidate>
      {name}
      {email}
      {subject}
      {message}
      <p class="char-count" data-char-count>{chars}/{max}</p>
      <button type="submit" class="liquid-btn liquid-btn--default liquid-btn--lg" data-submit>Send Message</button>
      <div class="{status_class}" data-form-status role="status" aria-live="polite"{hidden}>{status_text}</div>
    </form>
    <aside class="contact-info">
      <h3>Let's connect</h3>
      <p><a href="mailto:{email_addr}">{email_addr}</a></p>
      <ul class="social-links">{socials}</ul>
    </aside>
  </div>
</section>"#,
        name = field(view, "name", "Name", &values.name, "text"),
        email = field(view, "email", "Email", &values.email, "email"),
        subject = field(view, "subject", "Subject", &values.subject, "text"),
        message = field(view, "message", "Message", &values.message, "textarea"),
        chars = values.message.chars().count(),
        max = config.max_message_length,
        status_class = status_class,
        hidden = if status_text.is_empty() { " hidden" } else { "" },
        status_text = escape_html(&status_text),
        email_addr = escape_html(&config.email),
        socials = socials,
    )
}

pub fn footer() -> String {
    format!(
        r##"<footer class="site-footer">
  <p>&copy; {year} {name}. Built with Rust.</p>
  <a class="back-to-top" href="#hero" data-scroll-top>Back to top</a>
</footer>"##,
        year = chrono::Local::now().format("%Y"),
        name = escape_html(PROFILE.name),
    )
}
