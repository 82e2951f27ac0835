pub mod url_validator;

pub use url_validator::{UrlValidationError, validate_url};

use chrono::{DateTime, Utc};

/// 转义 HTML 文本与属性值
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 人类可读的运行时长，例如 `2d 3h`、`5m`
pub fn format_duration_human(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = to.signed_duration_since(from).num_seconds().max(0);

    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    match (days, hours, minutes) {
        (d, 0, _) if d > 0 => format!("{}d", d),
        (d, h, _) if d > 0 => format!("{}d {}h", d, h),
        (_, h, 0) if h > 0 => format!("{}h", h),
        (_, h, m) if h > 0 => format!("{}h {}m", h, m),
        (_, _, m) if m > 0 => format!("{}m", m),
        _ => format!("{}s", seconds),
    }
}
