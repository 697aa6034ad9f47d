//! wise CLI Application
//!
//! Terminal console for observing and driving tasks on the wise backend.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use wise_core::{ClientBuilder, ConsoleConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        base_url,
        timeout_ms,
        no_color,
        command,
    } = Args::parse();

    let mut config =
        ConsoleConfig::load(config.as_deref()).context("Failed to load configuration")?;
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_ms) = timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    config.validate().context("Invalid configuration")?;

    let client = ClientBuilder::from_config(&config)
        .build()
        .context("Failed to initialize client")?;
    info!("wise console targeting {}", client.base_url());

    let cli = Cli::new(client, config, TerminalRenderer::new(!no_color));

    match command {
        Some(Commands::Task { command }) => cli.handle_task_command(command).await,
        None => cli.print_page(&cli.default_list_params()).await,
    }
}
