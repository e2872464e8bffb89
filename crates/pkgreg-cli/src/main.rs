//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers; local commands go through
//! `CliContext`, remote ones through the registry client.

use clap::{CommandFactory, Parser};
use pkgreg_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use pkgreg_core::IndexQuery;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help().ok();
        std::process::exit(CliError::MissingCommand.exit_code());
    };

    if let Err(e) = run(cli.registry, command).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(registry: Option<String>, command: Commands) -> Result<(), CliError> {
    let config = CliConfig::with_defaults(registry)?;

    match command {
        Commands::Serve {
            port,
            allow_origins,
        } => handlers::serve::execute(&config, port, allow_origins).await,
        Commands::Publish {
            name,
            version,
            user_id,
        } => {
            let ctx = bootstrap(&config)
                .await
                .map_err(|e| CliError::Database(format!("{e:#}")))?;
            handlers::publish::execute(&ctx, &name, &version, user_id).await
        }
        Commands::List {
            page,
            per_page,
            letter,
        } => {
            let query = IndexQuery {
                page,
                per_page,
                letter,
            };
            handlers::list::execute(&config, query).await
        }
        Commands::Show { name } => handlers::show::execute(&config, &name).await,
        Commands::Summary => handlers::summary::execute(&config).await,
        Commands::Download {
            package,
            version,
            print_only,
        } => handlers::download::execute(&config, &package, &version, print_only).await,
    }
}
