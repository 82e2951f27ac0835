//! Validate command

use std::path::Path;

use colored::Colorize;

use crate::catalog::{Catalog, ValidationReport};
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// 校验目录，存在违规时返回 `ValidationFailed`
pub fn validate_catalogs(config: &StaticConfig) -> Result<(), CliError> {
    let catalog = Catalog::load(config.site.content_dir.as_deref().map(Path::new));
    print_report(&catalog, &catalog.validate())
}

fn print_report(catalog: &Catalog, report: &ValidationReport) -> Result<(), CliError> {
    for (name, count, violations) in [
        ("Projects", catalog.projects.len(), &report.projects),
        ("Skills", catalog.skills.len(), &report.skills),
        ("Experience", catalog.experience.len(), &report.experience),
    ] {
        if violations.is_empty() {
            println!("{} {} ({} entries)", "✓".green(), name.bold(), count);
        } else {
            println!("{} {} ({} entries)", "✗".red(), name.bold(), count);
            for violation in violations {
                println!("    {}", violation.to_string().red());
            }
        }
    }

    if report.is_valid() {
        println!("{}", "All portfolio data validation passed".green());
        Ok(())
    } else {
        Err(CliError::ValidationFailed(report.total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalogs_pass() {
        assert!(validate_catalogs(&StaticConfig::default()).is_ok());
    }

    #[test]
    fn test_violations_fail() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("experience.toml"),
            r#"
[[experience]]
id = ""
company = ""
position = "Engineer"
start_date = "not-a-date"
description = "x"
technologies = []
"#,
        )
        .unwrap();

        let mut config = StaticConfig::default();
        config.site.content_dir = Some(dir.path().to_string_lossy().into_owned());

        match validate_catalogs(&config) {
            Err(CliError::ValidationFailed(count)) => assert!(count > 0),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }
}
