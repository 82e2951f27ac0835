//! Mode routing
//!
//! - Server mode (HTTP server), the default when no subcommand is given
//! - CLI mode (`clean-dev`, `validate`, `config generate`)

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "server")]
pub use server::run_server;

use crate::cli::Cli;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "server")]
    Server,
    #[cfg(feature = "cli")]
    Cli,
    Unknown,
}

/// Detect which mode to run based on the parsed command line
///
/// 1. A subcommand with the CLI feature enabled -> CLI mode
/// 2. Otherwise, with the server feature enabled -> Server mode
/// 3. Otherwise -> Unknown (no features enabled)
pub fn detect_mode(cli: &Cli) -> Mode {
    #[cfg(feature = "cli")]
    if cli.command.is_some() {
        return Mode::Cli;
    }
    #[cfg(not(feature = "cli"))]
    let _ = cli;

    #[cfg(feature = "server")]
    return Mode::Server;

    #[cfg(not(feature = "server"))]
    Mode::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_subcommand_is_server() {
        let cli = Cli::parse_from(["folio"]);
        assert_eq!(detect_mode(&cli), Mode::Server);

        let cli = Cli::parse_from(["folio", "-c", "site.toml"]);
        assert_eq!(detect_mode(&cli), Mode::Server);
    }

    #[test]
    fn test_subcommand_is_cli() {
        let cli = Cli::parse_from(["folio", "clean-dev"]);
        assert_eq!(detect_mode(&cli), Mode::Cli);
    }
}
