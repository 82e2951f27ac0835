//! Static content catalogs
//!
//! Projects, skills and experience are authored as TOML under `content/`
//! and embedded into the binary. `site.content_dir` may point at a directory
//! whose files take precedence over the embedded copies.
//!
//! Schema violations are logged and never block rendering: a violating entry
//! is kept, a file that fails to parse yields an empty catalog.

pub mod experience;
pub mod project;
pub mod schema;
pub mod skill;
pub mod summary;

use std::path::Path;

use rust_embed::Embed;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

pub use experience::{Experience, ExperienceCatalog, calculate_duration, format_experience_date};
pub use project::{CategoryFilter, Project, ProjectCatalog, ProjectCategory, ProjectFilter};
pub use schema::{SchemaViolation, Validate};
pub use skill::{Skill, SkillCatalog, SkillCategory, SkillGroup};
pub use summary::DataSummary;

use crate::errors::{FolioError, Result};

#[derive(Embed)]
#[folder = "content/"]
struct ContentFiles;

const PROJECTS_FILE: &str = "projects.toml";
const SKILLS_FILE: &str = "skills.toml";
const EXPERIENCE_FILE: &str = "experience.toml";

/// 全部目录
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub projects: ProjectCatalog,
    pub skills: SkillCatalog,
    pub experience: ExperienceCatalog,
}

/// 每个目录的 schema 违规
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub projects: Vec<SchemaViolation>,
    pub skills: Vec<SchemaViolation>,
    pub experience: Vec<SchemaViolation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.projects.is_empty() && self.skills.is_empty() && self.experience.is_empty()
    }

    pub fn total(&self) -> usize {
        self.projects.len() + self.skills.len() + self.experience.len()
    }

    /// 逐条记录结果，只写日志，不返回错误
    pub fn log(&self) {
        info!("Validating portfolio data...");
        for (name, violations) in [
            ("Projects", &self.projects),
            ("Skills", &self.skills),
            ("Experience", &self.experience),
        ] {
            if violations.is_empty() {
                info!("{} data validation passed", name);
            } else {
                for violation in violations {
                    error!("{} data validation failed: {}", name, violation);
                }
            }
        }

        if self.is_valid() {
            info!("All portfolio data validation passed");
        } else {
            error!(
                "Portfolio data validation found {} violation(s)",
                self.total()
            );
        }
    }
}

impl Catalog {
    /// 从内嵌内容加载，`content_dir` 中存在的文件优先
    pub fn load(content_dir: Option<&Path>) -> Self {
        let catalog = Self {
            projects: load_or_empty(content_dir, PROJECTS_FILE),
            skills: load_or_empty(content_dir, SKILLS_FILE),
            experience: load_or_empty(content_dir, EXPERIENCE_FILE),
        };
        info!(
            "Catalog loaded: {} projects, {} skills, {} experience entries",
            catalog.projects.len(),
            catalog.skills.len(),
            catalog.experience.len()
        );
        catalog.validate().log();
        catalog
    }

    /// 仅使用内嵌内容
    pub fn embedded() -> Self {
        Self::load(None)
    }

    /// 从 TOML 文本直接构建，不做任何回退
    pub fn from_sources(projects: &str, skills: &str, experience: &str) -> Result<Self> {
        Ok(Self {
            projects: toml::from_str(projects)?,
            skills: toml::from_str(skills)?,
            experience: toml::from_str(experience)?,
        })
    }

    pub fn validate(&self) -> ValidationReport {
        ValidationReport {
            projects: schema::validate_all(self.projects.all()),
            skills: schema::validate_all(self.skills.all()),
            experience: schema::validate_all(self.experience.all()),
        }
    }
}

fn load_or_empty<T: DeserializeOwned + Default>(content_dir: Option<&Path>, name: &str) -> T {
    match read_source(content_dir, name).and_then(|src| Ok(toml::from_str::<T>(&src)?)) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Failed to load {}: {}", name, e);
            T::default()
        }
    }
}

fn read_source(content_dir: Option<&Path>, name: &str) -> Result<String> {
    if let Some(dir) = content_dir {
        let path = dir.join(name);
        if path.exists() {
            debug!("Loading {} from {}", name, path.display());
            return Ok(std::fs::read_to_string(&path)?);
        }
        warn!(
            "{} not found in {}, using embedded copy",
            name,
            dir.display()
        );
    }

    let file = ContentFiles::get(name)
        .ok_or_else(|| FolioError::not_found(format!("embedded content file {}", name)))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|e| FolioError::catalog_parse(format!("{} is not valid UTF-8: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.projects.len(), 5);
        assert!(catalog.skills.is_empty());
        assert!(catalog.experience.is_empty());
        assert!(catalog.validate().is_valid());
    }

    #[test]
    fn test_embedded_web_filter_fixture() {
        let catalog = Catalog::embedded();
        let titles: Vec<_> = catalog
            .projects
            .by_category(CategoryFilter::Only(ProjectCategory::Web))
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["ChordCircle", "Whitezilla", "Veshara", "PrintScript"]
        );
    }

    #[test]
    fn test_from_sources_rejects_broken_toml() {
        assert!(Catalog::from_sources("projects = [", "", "").is_err());
    }
}
