//! Clean-dev command: clear cached build artifacts, then run the dev server

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;
use tracing::{debug, warn};

use crate::config::{Environment, StaticConfig, update_config};
use crate::interfaces::cli::CliError;
use crate::runtime::modes::run_server;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanStatus {
    Removed,
    /// 路径不存在，跳过
    Missing,
    /// 路径指向工作目录之外，拒绝删除
    Rejected,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub path: PathBuf,
    pub status: CleanStatus,
}

/// 删除 `root` 下的缓存路径，逐条返回结果
///
/// 删除失败不会中断后续路径。
pub fn clean_paths(root: &Path, paths: &[String]) -> Vec<CleanOutcome> {
    paths
        .iter()
        .map(|relative| {
            let path = root.join(relative);
            let status = if !is_contained(relative) {
                CleanStatus::Rejected
            } else {
                match remove_path(&path) {
                    Ok(true) => CleanStatus::Removed,
                    Ok(false) => CleanStatus::Missing,
                    Err(e) => CleanStatus::Failed(e.to_string()),
                }
            };
            debug!("clean-dev {}: {:?}", path.display(), status);
            CleanOutcome { path, status }
        })
        .collect()
}

fn is_contained(relative: &str) -> bool {
    let path = Path::new(relative);
    !relative.trim().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn remove_path(path: &Path) -> io::Result<bool> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if metadata.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }
    Ok(true)
}

fn report(outcome: &CleanOutcome) {
    let shown = outcome.path.display().to_string();
    match &outcome.status {
        CleanStatus::Removed => println!("  {} {}", "Removed".green(), shown.blue()),
        CleanStatus::Missing => println!("  {} {}", "Not found, skipped".dimmed(), shown.dimmed()),
        CleanStatus::Rejected => {
            warn!("Refusing to remove path outside the working directory: {}", shown);
            println!(
                "  {} {}",
                "Outside working directory, skipped".yellow(),
                shown.blue()
            )
        }
        CleanStatus::Failed(e) => {
            println!("  {} {}: {}", "Failed to remove".red(), shown.blue(), e.red())
        }
    }
}

/// `folio clean-dev`
pub async fn clean_dev(config: Arc<StaticConfig>) -> Result<(), CliError> {
    let root = std::env::current_dir()
        .map_err(|e| CliError::CommandError(format!("Cannot resolve working directory: {}", e)))?;
    clean_dev_in(&root, config).await
}

/// 在指定根目录下执行 clean-dev，服务器退出后返回
pub async fn clean_dev_in(root: &Path, config: Arc<StaticConfig>) -> Result<(), CliError> {
    println!("{}", "Cleaning development environment...".bold().cyan());
    for outcome in clean_paths(root, &config.dev.clean_paths) {
        report(&outcome);
    }
    println!("{}", "Environment cleaned successfully".green());
    println!("{}", "Starting development server...".bold().cyan());

    let mut dev_config = (*config).clone();
    dev_config.site.environment = Environment::Development;
    // 全局配置同步为开发模式，供日志与性能监控读取
    update_config(dev_config.clone());

    run_server(Arc::new(dev_config))
        .await
        .map_err(|e| CliError::LaunchFailed(format!("{:#}", e)))
}
