//! CLI interface module
//!
//! Development commands: `clean-dev`, `validate`, `config generate`.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use commands::{clean_dev, config_generate, validate_catalogs};

#[derive(Debug)]
pub enum CliError {
    /// 目录存在 schema 违规
    ValidationFailed(usize),
    /// 开发服务器无法启动
    LaunchFailed(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ValidationFailed(count) => {
                format!("Validation failed: {} violation(s)", count)
            }
            CliError::LaunchFailed(msg) => format!("Failed to start development server: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ValidationFailed(count) => format!(
                "{} {}",
                "Validation failed:".red().bold(),
                format!("{} violation(s)", count).white()
            ),
            CliError::LaunchFailed(msg) => format!(
                "{} {}",
                "Failed to start development server:".red().bold(),
                msg.white()
            ),
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }

    /// 所有失败都以 1 退出
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::FolioError> for CliError {
    fn from(err: crate::errors::FolioError) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: Arc<StaticConfig>) -> Result<(), CliError> {
    match cmd {
        Commands::CleanDev => clean_dev(config).await,
        Commands::Validate => validate_catalogs(&config),
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
    }
}
