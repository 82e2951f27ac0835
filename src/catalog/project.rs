use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::schema::{FieldChecker, SchemaViolation, Validate};

/// 项目分类
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Api,
    Other,
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::iter()
            .find(|c| c.as_ref() == s.trim().to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Invalid project category: '{}'. Valid: web, mobile, desktop, api, other",
                    s
                )
            })
    }
}

/// 项目区的筛选按钮：`all` 或某个分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// 按钮顺序：all, web, mobile, desktop, api, other
    pub fn all_options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => match category {
                ProjectCategory::Web => "web",
                ProjectCategory::Mobile => "mobile",
                ProjectCategory::Desktop => "desktop",
                ProjectCategory::Api => "api",
                ProjectCategory::Other => "other",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            other => other.as_str(),
        }
    }

    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<ProjectCategory>()
            .map(CategoryFilter::Only)
            .map_err(|_| {
                format!(
                    "Invalid category filter: '{}'. Valid: all, web, mobile, desktop, api, other",
                    s
                )
            })
    }
}

/// 作品集项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn uses_technology(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(&needle))
    }
}

impl Validate for Project {
    fn violations(&self) -> Vec<SchemaViolation> {
        let mut check = FieldChecker::new("project", &self.id);
        check.non_empty("id", &self.id);
        check.length("title", &self.title, 1, 100);
        check.length("description", &self.description, 1, 300);
        check.length("long_description", &self.long_description, 1, 1000);
        check.min_items("technologies", &self.technologies, 1);
        check.non_empty("image", &self.image);
        for image in &self.images {
            check.non_empty("images", image);
        }
        check.url("live_url", self.live_url.as_deref());
        check.url("github_url", self.github_url.as_deref());
        check.finish()
    }
}

/// 组合筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: Option<CategoryFilter>,
    pub technology: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.category
            .is_none_or(|filter| filter.matches(project.category))
            && self
                .technology
                .as_deref()
                .is_none_or(|tech| project.uses_technology(tech))
            && self.featured.is_none_or(|f| project.featured == f)
    }
}

/// 项目目录，保持源文件中的顺序
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCatalog {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// `all` 返回全部项目，其余只返回该分类，顺序不变
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// 技术标签大小写不敏感的子串匹配
    pub fn by_technology(&self, technology: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.uses_technology(technology))
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, filter: &ProjectFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    /// 出现过的分类，按枚举顺序去重
    pub fn categories(&self) -> Vec<ProjectCategory> {
        ProjectCategory::iter()
            .filter(|c| self.projects.iter().any(|p| p.category == *c))
            .collect()
    }
}
