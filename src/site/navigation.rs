use serde::Serialize;

/// 导航项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "hero",
        label: "Home",
    },
    NavItem {
        id: "about",
        label: "About",
    },
    NavItem {
        id: "projects",
        label: "Projects",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

pub const DEFAULT_SECTION: &str = "hero";

/// 观察带距视口顶部的比例（rootMargin -20% 0 -80% 0）
const BAND_RATIO: f64 = 0.2;

/// 移动端菜单
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// 选中任一导航项都会收起菜单
    pub fn select(&mut self, item: &NavItem) -> String {
        self.open = false;
        item.href()
    }
}

/// 区块在视口中的位置，相对视口顶部
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// 当前激活的区块
///
/// 以视口 20% 高度处的水平线为准，按文档顺序取最后一个覆盖该线的区块；
/// 没有区块覆盖时保持 `hero`。
pub fn active_section(sections: &[SectionBox], viewport_height: f64) -> &str {
    if viewport_height <= 0.0 {
        return DEFAULT_SECTION;
    }
    let band = viewport_height * BAND_RATIO;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(band))
        .map(|s| s.id.as_str())
        .unwrap_or(DEFAULT_SECTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(scroll: f64) -> Vec<SectionBox> {
        // 每个区块 800px 高，依次排列
        NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| SectionBox::new(item.id, i as f64 * 800.0 - scroll, 800.0))
            .collect()
    }

    #[test]
    fn test_nav_items() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["hero", "about", "projects", "contact"]);
        assert_eq!(NAV_ITEMS[2].href(), "#projects");
    }

    #[test]
    fn test_menu_closes_on_select() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.select(&NAV_ITEMS[3]), "#contact");
        assert!(!menu.is_open());
    }

    #[test]
    fn test_active_section_band() {
        let viewport = 1000.0;
        assert_eq!(active_section(&layout(0.0), viewport), "hero");
        // about 顶部在 150px，已越过 200px 的观察线
        assert_eq!(active_section(&layout(650.0), viewport), "about");
        // about 顶部在 250px，观察线仍在 hero 内
        assert_eq!(active_section(&layout(550.0), viewport), "hero");
        assert_eq!(active_section(&layout(2500.0), viewport), "contact");
    }

    #[test]
    fn test_active_section_defaults_to_hero() {
        assert_eq!(active_section(&[], 900.0), "hero");
        let far = vec![SectionBox::new("about", 5000.0, 100.0)];
        assert_eq!(active_section(&far, 900.0), "hero");
        assert_eq!(active_section(&layout(0.0), 0.0), "hero");
    }
}
