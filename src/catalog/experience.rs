use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::schema::{FieldChecker, SchemaViolation, Validate};
use crate::errors::{FolioError, Result};

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// YYYY-MM
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// 任职时长，结束日期缺省时算到 `today`
    pub fn duration(&self, today: NaiveDate) -> Result<String> {
        calculate_duration(&self.start_date, self.end_date.as_deref(), today)
    }
}

impl Validate for Experience {
    fn violations(&self) -> Vec<SchemaViolation> {
        let mut check = FieldChecker::new("experience", &self.id);
        check.non_empty("id", &self.id);
        check.length("company", &self.company, 1, 100);
        check.length("position", &self.position, 1, 100);
        check.year_month("start_date", Some(self.start_date.as_str()));
        check.year_month("end_date", self.end_date.as_deref());
        check.length("description", &self.description, 1, 500);
        for achievement in &self.achievements {
            check.length("achievements", achievement, 1, 200);
        }
        for tech in &self.technologies {
            check.non_empty("technologies", tech);
        }
        check.finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceCatalog {
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl ExperienceCatalog {
    pub fn new(experience: Vec<Experience>) -> Self {
        Self { experience }
    }

    pub fn all(&self) -> &[Experience] {
        &self.experience
    }

    pub fn len(&self) -> usize {
        self.experience.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experience.is_empty()
    }

    pub fn current(&self) -> Option<&Experience> {
        self.experience.iter().find(|e| e.is_current())
    }

    pub fn previous(&self) -> Vec<&Experience> {
        self.experience.iter().filter(|e| !e.is_current()).collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&Experience> {
        self.experience.iter().find(|e| e.id == id)
    }

    /// 去重并排序后的技术列表
    pub fn all_technologies(&self) -> Vec<String> {
        let mut techs: Vec<String> = self
            .experience
            .iter()
            .flat_map(|e| e.technologies.iter().cloned())
            .collect();
        techs.sort();
        techs.dedup();
        techs
    }

    pub fn by_technology(&self, technology: &str) -> Vec<&Experience> {
        let needle = technology.to_lowercase();
        self.experience
            .iter()
            .filter(|e| {
                e.technologies
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// 从最后一条（最早的）经历开始算起的年数，向上取整
    pub fn total_years(&self, today: NaiveDate) -> Result<u32> {
        let Some(earliest) = self.experience.last() else {
            return Ok(0);
        };
        let start = parse_year_month(&earliest.start_date)?;
        let days = (today - start).num_days().unsigned_abs();
        Ok(days.div_ceil(365) as u32)
    }
}

/// 解析 `YYYY-MM` 为当月第一天
pub fn parse_year_month(value: &str) -> Result<NaiveDate> {
    if !super::schema::is_year_month(value) {
        return Err(FolioError::date_parse(format!(
            "Invalid year-month '{}', expected YYYY-MM",
            value
        )));
    }
    Ok(NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")?)
}

/// `2024-03` -> `Mar 2024`
pub fn format_experience_date(value: &str) -> Result<String> {
    let date = parse_year_month(value)?;
    Ok(format!(
        "{} {}",
        MONTH_ABBR[date.month0() as usize],
        date.year()
    ))
}

/// 时长描述，例如 `1 year 2 months`
///
/// 月数按 30 天向上取整计算。
pub fn calculate_duration(start: &str, end: Option<&str>, today: NaiveDate) -> Result<String> {
    let start = parse_year_month(start)?;
    let end = match end {
        Some(end) => parse_year_month(end)?,
        None => today,
    };

    let days = (end - start).num_days().unsigned_abs();
    let total_months = days.div_ceil(30);
    let years = total_months / 12;
    let months = total_months % 12;

    let plural = |n: u64, unit: &str| format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" });

    Ok(if years == 0 {
        plural(months, "month")
    } else if months == 0 {
        plural(years, "year")
    } else {
        format!("{} {}", plural(years, "year"), plural(months, "month"))
    })
}
