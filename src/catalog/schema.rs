//! 目录数据的 schema 校验
//!
//! 校验只产出违规列表，不会拒绝数据：调用方负责记录日志，页面照常渲染。

use serde::Serialize;

/// 单条 schema 违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    pub entity: &'static str,
    pub id: String,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}': {} {}",
            self.entity, self.id, self.field, self.message
        )
    }
}

/// 可被 schema 校验的目录条目
pub trait Validate {
    fn violations(&self) -> Vec<SchemaViolation>;
}

/// 逐字段累积违规
pub(crate) struct FieldChecker {
    entity: &'static str,
    id: String,
    violations: Vec<SchemaViolation>,
}

impl FieldChecker {
    pub(crate) fn new(entity: &'static str, id: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.into(),
            violations: Vec::new(),
        }
    }

    fn push(&mut self, field: &str, message: String) {
        self.violations.push(SchemaViolation {
            entity: self.entity,
            id: self.id.clone(),
            field: field.to_string(),
            message,
        });
    }

    /// 字符数（Unicode 标量）必须落在 [min, max]
    pub(crate) fn length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min {
            self.push(field, format!("must contain at least {} character(s)", min));
        } else if len > max {
            self.push(field, format!("must contain at most {} character(s)", max));
        }
    }

    pub(crate) fn non_empty(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.push(field, "must not be empty".to_string());
        }
    }

    pub(crate) fn range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if value < min || value > max {
            self.push(field, format!("must be between {} and {}", min, max));
        }
    }

    pub(crate) fn min_items<T>(&mut self, field: &str, items: &[T], min: usize) {
        if items.len() < min {
            self.push(field, format!("must contain at least {} item(s)", min));
        }
    }

    pub(crate) fn url(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value
            && let Err(e) = crate::utils::validate_url(value)
        {
            self.push(field, e.to_string());
        }
    }

    pub(crate) fn year_month(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value
            && !is_year_month(value)
        {
            self.push(field, "must use the YYYY-MM format".to_string());
        }
    }

    pub(crate) fn finish(self) -> Vec<SchemaViolation> {
        self.violations
    }
}

/// `YYYY-MM`，四位年份两位月份
pub fn is_year_month(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// 校验一组条目并汇总违规
pub fn validate_all<T: Validate>(items: &[T]) -> Vec<SchemaViolation> {
    items.iter().flat_map(Validate::violations).collect()
}
