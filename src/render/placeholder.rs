use crate::utils::escape_html;

/// 缺少项目截图时的占位插画
pub fn project_placeholder(label: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300" width="400" height="300" role="img" aria-label="{label}">
<defs>
<linearGradient id="sky" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#1e293b"/><stop offset="100%" stop-color="#334155"/></linearGradient>
<linearGradient id="hill" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#3b82f6" stop-opacity="0.55"/><stop offset="100%" stop-color="#8b5cf6" stop-opacity="0.35"/></linearGradient>
</defs>
<rect width="400" height="300" fill="url(#sky)"/>
<path d="M0 200 Q80 160 160 180 Q240 200 320 170 Q360 155 400 175 L400 300 L0 300 Z" fill="url(#hill)"/>
<path d="M0 260 Q100 240 200 255 Q300 270 400 250 L400 300 L0 300 Z" fill="#0f172a" fill-opacity="0.8"/>
<circle cx="320" cy="80" r="25" fill="#f8fafc" fill-opacity="0.7"/>
<text x="200" y="140" text-anchor="middle" font-family="system-ui, sans-serif" font-size="22" fill="#e2e8f0">{label}</text>
</svg>"##,
        label = escape_html(label)
    )
}

/// 从图片路径推出占位文字：`/images/ChordC.png` -> `ChordC`
pub fn label_from_path(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.split('.').next().filter(|s| !s.is_empty()).unwrap_or("Project")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_path() {
        assert_eq!(label_from_path("/images/ChordC.png"), "ChordC");
        assert_eq!(label_from_path("KSA.png"), "KSA");
        assert_eq!(label_from_path(".png"), "Project");
    }

    #[test]
    fn test_placeholder_escapes_label() {
        let svg = project_placeholder("<x>");
        assert!(svg.contains("&lt;x&gt;"));
        assert!(svg.starts_with("<svg"));
    }
}
