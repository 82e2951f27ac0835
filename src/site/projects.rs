use crate::catalog::{CategoryFilter, Project, ProjectCatalog};

pub const EMPTY_FILTER_MESSAGE: &str = "No projects found for the selected filter.";

/// 项目区块的当前筛选结果
#[derive(Debug, Clone)]
pub struct ProjectsView<'a> {
    pub filter: CategoryFilter,
    pub visible: Vec<&'a Project>,
    pub total: usize,
}

impl<'a> ProjectsView<'a> {
    pub fn new(catalog: &'a ProjectCatalog, filter: CategoryFilter) -> Self {
        Self {
            filter,
            visible: catalog.by_category(filter),
            total: catalog.len(),
        }
    }

    /// 从查询参数构建，无法识别的值按 `all` 处理
    pub fn from_query(catalog: &'a ProjectCatalog, raw: Option<&str>) -> Self {
        let filter = raw.and_then(|r| r.parse().ok()).unwrap_or_default();
        Self::new(catalog, filter)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn count_label(&self) -> String {
        format!(
            "Showing {} of {} projects",
            self.visible.len(),
            self.total
        )
    }
}
