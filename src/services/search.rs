use serde::Serialize;

use crate::catalog::{Catalog, Experience, Project, Skill};
use crate::validation::SearchScope;

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub query: String,
    pub category: SearchScope,
    pub projects: Vec<&'a Project>,
    pub skills: Vec<&'a Skill>,
    pub experience: Vec<&'a Experience>,
    pub total: usize,
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| contains(v, needle))
}

/// 大小写不敏感的子串搜索，`needle` 应已去除首尾空白
pub fn search<'a>(catalog: &'a Catalog, needle: &str, scope: SearchScope) -> SearchResults<'a> {
    let lowered = needle.to_lowercase();
    let needle = lowered.as_str();

    let projects: Vec<&Project> = if scope.includes(SearchScope::Projects) {
        catalog
            .projects
            .all()
            .iter()
            .filter(|p| {
                contains(&p.title, needle)
                    || contains(&p.description, needle)
                    || contains(&p.long_description, needle)
                    || any_contains(&p.technologies, needle)
            })
            .collect()
    } else {
        Vec::new()
    };

    let skills: Vec<&Skill> = if scope.includes(SearchScope::Skills) {
        catalog
            .skills
            .all()
            .iter()
            .filter(|s| contains(&s.name, needle))
            .collect()
    } else {
        Vec::new()
    };

    let experience: Vec<&Experience> = if scope.includes(SearchScope::Experience) {
        catalog
            .experience
            .all()
            .iter()
            .filter(|e| {
                contains(&e.company, needle)
                    || contains(&e.position, needle)
                    || any_contains(&e.technologies, needle)
            })
            .collect()
    } else {
        Vec::new()
    };

    let total = projects.len() + skills.len() + experience.len();
    SearchResults {
        query: lowered.clone(),
        category: scope,
        projects,
        skills,
        experience,
        total,
    }
}
