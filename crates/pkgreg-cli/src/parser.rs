//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface of the package registry.
#[derive(Parser)]
#[command(name = "pkgreg")]
#[command(about = "Run and query a package registry")]
#[command(version)]
pub struct Cli {
    /// Registry base URL for client commands
    #[arg(long, global = true, env = "PKGREG_REGISTRY_URL")]
    pub registry: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_parses_to_none() {
        let cli = Cli::parse_from(["pkgreg", "--verbose"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "pkgreg",
            "--verbose",
            "summary",
            "--registry",
            "http://r.example:9000",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.registry.as_deref(), Some("http://r.example:9000"));
        assert!(matches!(cli.command, Some(Commands::Summary)));
    }

    #[test]
    fn test_download_args() {
        let cli = Cli::parse_from(["pkgreg", "download", "foo", "1.0.0", "--print-only"]);
        match cli.command {
            Some(Commands::Download {
                package,
                version,
                print_only,
            }) => {
                assert_eq!(package, "foo");
                assert_eq!(version, "1.0.0");
                assert!(print_only);
            }
            _ => panic!("expected download command"),
        }
    }
}
