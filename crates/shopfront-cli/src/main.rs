use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Shopfront CLI - call the storefront API from a terminal", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/shopfront/client.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one request and print the unwrapped `data`
    Request(commands::request::RequestArgs),
    /// Print the breadcrumb trail for a category
    Breadcrumb(commands::breadcrumb::BreadcrumbArgs),
    /// Show the resolved client configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Request(args) => commands::request::run(config, args).await?,
        Commands::Breadcrumb(args) => commands::breadcrumb::run(config, args).await?,
        Commands::Config => commands::print_config(&config),
    }

    Ok(())
}
