mod render;
mod scan;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::scan::ScanArgs;

#[derive(Debug, Parser)]
#[command(name = "radar")]
#[command(about = "Search academic sources and triage each result with an LLM")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search, rank every result, and print the sorted report
    Scan(ScanArgs),
    /// List evaluation personas with their policy and expanded ranks
    Personas,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Scan(args)) => {
            let config = radar_core::load_app_config()?;
            let env_filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();

            scan::run_scan(&config, args).await?;
        }
        Some(Commands::Personas) => print!("{}", render::render_personas()),
        None => println!("no command given; run `radar --help` for usage"),
    }

    Ok(())
}
