use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use super::{FieldErrors, char_len};
use crate::catalog::{CategoryFilter, ProjectFilter};
use crate::site::ThemePreference;

const MAX_QUERY_LENGTH: usize = 100;
const MAX_TECHNOLOGY_LENGTH: usize = 50;

/// `/api/projects` 查询参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectFilterQuery {
    pub category: Option<String>,
    pub technology: Option<String>,
    pub featured: Option<bool>,
}

/// `/api/search` 查询参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub category: Option<String>,
}

/// 搜索范围
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Projects,
    Skills,
    Experience,
}

impl SearchScope {
    pub fn includes(&self, other: SearchScope) -> bool {
        *self == SearchScope::All || *self == other
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "projects" => Ok(Self::Projects),
            "skills" => Ok(Self::Skills),
            "experience" => Ok(Self::Experience),
            _ => Err(format!(
                "Invalid search category '{}'. Valid options: all, projects, skills, experience",
                s
            )),
        }
    }
}

pub fn validate_project_filter(query: &ProjectFilterQuery) -> Result<ProjectFilter, FieldErrors> {
    let mut errors = FieldErrors::new();

    let category = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(raw) => match CategoryFilter::from_str(raw) {
            Ok(filter) => Some(filter),
            Err(_) => {
                errors.add(
                    "category",
                    "Category must be one of: all, web, mobile, desktop, api, other",
                );
                None
            }
        },
        None => None,
    };

    let technology = query
        .technology
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if technology.is_some_and(|t| char_len(t) > MAX_TECHNOLOGY_LENGTH) {
        errors.add("technology", "Technology must be less than 50 characters");
    }

    errors.into_result()?;
    Ok(ProjectFilter {
        category,
        technology: technology.map(str::to_string),
        featured: query.featured,
    })
}

pub fn validate_search(query: &SearchQuery) -> Result<(String, SearchScope), FieldErrors> {
    let mut errors = FieldErrors::new();

    let needle = query.query.trim();
    if needle.is_empty() {
        errors.add("query", "Search query is required");
    } else if char_len(needle) > MAX_QUERY_LENGTH {
        errors.add("query", "Search query is too long");
    }

    let scope = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(raw) => SearchScope::from_str(raw).unwrap_or_else(|e| {
            errors.add("category", e);
            SearchScope::All
        }),
        None => SearchScope::All,
    };

    errors.into_result()?;
    Ok((needle.to_string(), scope))
}

pub fn validate_theme(value: &str) -> Result<ThemePreference, FieldErrors> {
    ThemePreference::from_str(value).map_err(|_| {
        let mut errors = FieldErrors::new();
        errors.add("theme", "Theme must be one of: light, dark, system");
        errors
    })
}
