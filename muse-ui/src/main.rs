//! Muse - creative slogan generator.
//!
//! Main entry point for the Iced-based GUI.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use muse_core::{ControllerOptions, IdeaService, PlacementConfig};
use muse_llm::{create_llm_client, LlmConfig};
use muse_ui::app;
use muse_ui::cli::Args;
use muse_ui::state::MuseSettings;

fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // .env is optional
    if let Err(e) = dotenv::dotenv() {
        tracing::debug!("No .env loaded: {}", e);
    }

    let config = LlmConfig::from_env().context("failed to load LLM configuration")?;
    let config = args.apply(config).context("invalid command-line override")?;
    let provider = create_llm_client(&config)?;

    let settings = MuseSettings {
        service: IdeaService::new(provider, config.model.clone(), config.temperature),
        controller: ControllerOptions {
            float_fused_results: args.float_fused,
        },
        placement: PlacementConfig::default(),
        seed: args.seed,
    };

    tracing::info!(model = %config.model, "Starting Muse");
    app::run(settings)?;
    Ok(())
}
