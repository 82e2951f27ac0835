//! Panic handler module
//!
//! Every panic is appended to `crash.log`. Server mode prints a colored report
//! with the backtrace; CLI commands print a one-line message.

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

pub const CRASH_LOG: &str = "crash.log";

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Server,
    Cli,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        let message = panic_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        let report = format_crash_report(&timestamp, &message, &location, &format!("{:?}", backtrace));

        if let Err(e) = append_crash_log(CRASH_LOG, &report) {
            eprintln!("Failed to write crash log: {}", e);
        }

        match mode {
            RunMode::Server => display_server_panic(&message, &location, &backtrace),
            RunMode::Cli => display_simple_panic(&message),
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn display_server_panic(message: &str, location: &str, backtrace: &std::backtrace::Backtrace) {
    use colored::Colorize;

    let rule = "═══════════════════════════════════════════════════".red().bold();
    eprintln!();
    eprintln!("{}", rule);
    eprintln!("{}", "PANIC".red().bold());
    eprintln!("{}", rule);
    eprintln!();
    eprintln!("{} {}", "Reason:".yellow().bold(), message.white());
    eprintln!("{} {}", "Location:".yellow().bold(), location.white());
    eprintln!();
    eprintln!("{}", "Backtrace:".yellow().bold());
    eprintln!("{}", format!("{:?}", backtrace).dimmed());
    eprintln!();
    eprintln!("{}", format!("Details saved to {}", CRASH_LOG).cyan());
    eprintln!("{}", rule);
    eprintln!();
}

fn display_simple_panic(message: &str) {
    eprintln!();
    eprintln!("Program panicked: {}", message);
    eprintln!("Details saved to {}, please check the log file", CRASH_LOG);
    eprintln!();
}

pub fn format_crash_report(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &str,
) -> String {
    format!(
        "==========================================\n\
         Crash Report - {}\n\
         ==========================================\n\
         Message: {}\n\
         Location: {}\n\
         \nBacktrace:\n\
         {}\n\
         ==========================================\n\n",
        timestamp, message, location, backtrace
    )
}

pub fn append_crash_log(path: impl AsRef<std::path::Path>, report: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(report.as_bytes())
}
