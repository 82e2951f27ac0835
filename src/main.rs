use clap::Parser;
use tracing::error;

use folio::cli::Cli;
use folio::config::{get_config, init_config, init_config_from};
use folio::runtime::modes::{Mode, detect_mode};
use folio::system::{RunMode, init_logging, install_panic_hook};

#[actix_web::main]
async fn main() {
    let cli = Cli::parse();

    let mode = detect_mode(&cli);
    install_panic_hook(match mode {
        Mode::Server => RunMode::Server,
        _ => RunMode::Cli,
    });

    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    let config = get_config();

    // 日志必须在任何模式运行前初始化，guard 持有到进程结束
    let _log_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    match mode {
        Mode::Cli => {
            let Some(command) = cli.command else {
                return;
            };
            if let Err(e) =
                folio::interfaces::cli::run_cli_command(command, config).await
            {
                eprintln!("{}", e.format_colored());
                std::process::exit(e.exit_code());
            }
        }
        Mode::Server => {
            if let Err(e) = folio::runtime::modes::run_server(config).await {
                error!("Server error: {:#}", e);
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            eprintln!("No execution mode available: enable the `server` feature");
            std::process::exit(1);
        }
    }
}
