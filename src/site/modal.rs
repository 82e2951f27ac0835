use crate::catalog::Project;

/// 页面滚动锁，对应 `body` 的 overflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyOverflow {
    #[default]
    Auto,
    Hidden,
}

/// 键盘输入，只关心 Escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Escape,
    Other(&'a str),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(key: &'a str) -> Self {
        if key == "Escape" {
            Key::Escape
        } else {
            Key::Other(key)
        }
    }
}

/// 点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 点击落在遮罩本身（target == currentTarget）
    Backdrop,
    /// 点击落在对话框内部
    Dialog,
}

/// 项目详情弹窗
#[derive(Debug, Clone, Default)]
pub struct ProjectModal {
    project: Option<Project>,
    overflow: BodyOverflow,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn body_overflow(&self) -> BodyOverflow {
        self.overflow
    }

    /// 没有项目时不做任何事
    pub fn open(&mut self, project: Option<&Project>) {
        if let Some(project) = project {
            self.project = Some(project.clone());
            self.overflow = BodyOverflow::Hidden;
        }
    }

    pub fn close(&mut self) {
        self.project = None;
        self.overflow = BodyOverflow::Auto;
    }

    pub fn on_key<'a>(&mut self, key: impl Into<Key<'a>>) {
        if self.is_open() && key.into() == Key::Escape {
            self.close();
        }
    }

    pub fn on_click(&mut self, target: ClickTarget) {
        if self.is_open() && target == ClickTarget::Backdrop {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn first_project() -> Project {
        Catalog::embedded().projects.all()[0].clone()
    }

    #[test]
    fn test_open_locks_scroll() {
        let project = first_project();
        let mut modal = ProjectModal::new();
        modal.open(Some(&project));
        assert!(modal.is_open());
        assert_eq!(modal.project().map(|p| p.id.as_str()), Some(project.id.as_str()));
        assert_eq!(modal.body_overflow(), BodyOverflow::Hidden);
    }

    #[test]
    fn test_escape_closes_and_restores_scroll() {
        let project = first_project();
        let mut modal = ProjectModal::new();
        modal.open(Some(&project));
        modal.on_key("Enter");
        assert!(modal.is_open());
        modal.on_key("Escape");
        assert!(!modal.is_open());
        assert_eq!(modal.body_overflow(), BodyOverflow::Auto);
    }

    #[test]
    fn test_only_backdrop_click_closes() {
        let project = first_project();
        let mut modal = ProjectModal::new();
        modal.open(Some(&project));
        modal.on_click(ClickTarget::Dialog);
        assert!(modal.is_open());
        modal.on_click(ClickTarget::Backdrop);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_without_project_is_noop() {
        let mut modal = ProjectModal::new();
        modal.open(None);
        assert!(!modal.is_open());
        assert_eq!(modal.body_overflow(), BodyOverflow::Auto);
    }
}
