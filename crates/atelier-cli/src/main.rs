use clap::{Parser, Subcommand};

mod catalog;
mod social;

#[derive(Debug, Parser)]
#[command(name = "atelier-cli")]
#[command(about = "Atelier command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and filter the creation catalog.
    Catalog {
        #[command(subcommand)]
        command: catalog::CatalogCommands,
    },
    /// Connect social accounts and view synthetic analytics.
    Social {
        #[command(subcommand)]
        command: social::SocialCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let config = atelier_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Catalog { command } => catalog::run(&config, command),
        Commands::Social { command } => social::run(&config, command),
    }
}
