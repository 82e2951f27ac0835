use chrono::NaiveDate;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::{Catalog, SkillCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub total: usize,
    pub featured: usize,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSummary {
    pub total: usize,
    pub categories: Vec<String>,
    pub average_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceSummary {
    pub total: usize,
    pub total_years: u32,
    pub current_position: String,
}

/// 目录统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSummary {
    pub projects: ProjectSummary,
    pub skills: SkillSummary,
    pub experience: ExperienceSummary,
}

impl DataSummary {
    pub fn compute(catalog: &Catalog, today: NaiveDate) -> Self {
        let projects = ProjectSummary {
            total: catalog.projects.len(),
            featured: catalog.projects.featured().len(),
            categories: catalog
                .projects
                .categories()
                .iter()
                .map(ToString::to_string)
                .collect(),
        };

        let skills = SkillSummary {
            total: catalog.skills.len(),
            categories: SkillCategory::iter().map(|c| c.to_string()).collect(),
            average_level: catalog.skills.average_level(None),
        };

        // 日期格式错误已在加载时记录，这里按 0 年处理
        let total_years = catalog.experience.total_years(today).unwrap_or(0);
        let experience = ExperienceSummary {
            total: catalog.experience.len(),
            total_years,
            current_position: catalog
                .experience
                .current()
                .map(|e| e.position.clone())
                .unwrap_or_default(),
        };

        Self {
            projects,
            skills,
            experience,
        }
    }
}
