use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::schema::{FieldChecker, SchemaViolation, Validate};

/// 技能分类
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Design,
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for SkillCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::iter()
            .find(|c| c.as_ref() == s.trim().to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Invalid skill category: '{}'. Valid: frontend, backend, tools, design",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 1-100，越界值在加载时记录但保留
    pub level: i64,
    pub category: SkillCategory,
    pub icon: String,
    pub years_of_experience: f32,
}

impl Validate for Skill {
    fn violations(&self) -> Vec<SchemaViolation> {
        let mut check = FieldChecker::new("skill", &self.name);
        check.length("name", &self.name, 1, 50);
        check.range("level", self.level as f64, 1.0, 100.0);
        check.non_empty("icon", &self.icon);
        check.range(
            "years_of_experience",
            f64::from(self.years_of_experience),
            0.0,
            20.0,
        );
        check.finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup<'a> {
    pub category: SkillCategory,
    pub skills: Vec<&'a Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCatalog {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl SkillCatalog {
    pub const DEFAULT_TOP_LIMIT: usize = 8;

    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// 四个分组，按分类固定顺序，空分组也保留
    pub fn groups(&self) -> Vec<SkillGroup<'_>> {
        SkillCategory::iter()
            .map(|category| SkillGroup {
                category,
                skills: self.by_category(category),
            })
            .collect()
    }

    pub fn by_category(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// 按熟练度降序取前 `limit` 个，同分保持原顺序
    pub fn top(&self, limit: usize) -> Vec<&Skill> {
        let mut sorted: Vec<&Skill> = self.skills.iter().collect();
        sorted.sort_by(|a, b| b.level.cmp(&a.level));
        sorted.truncate(limit);
        sorted
    }

    pub fn by_name(&self, name: &str) -> Option<&Skill> {
        self.skills
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// 平均熟练度（四舍五入），没有技能时为 0
    pub fn average_level(&self, category: Option<SkillCategory>) -> u32 {
        let levels: Vec<i64> = self
            .skills
            .iter()
            .filter(|s| category.is_none_or(|c| s.category == c))
            .map(|s| s.level)
            .collect();

        if levels.is_empty() {
            return 0;
        }

        let total: i64 = levels.iter().sum();
        (total as f64 / levels.len() as f64).round().max(0.0) as u32
    }
}
