use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cropcast::check;
use cropcast::cli::{Cli, Commands};
use cropcast::config::Config;
use cropcast::constants::ARTIFACT_PATH;
use cropcast::predictor::ModelState;
use cropcast::server::{self, ArtifactState, ErrorPolicy, RulesState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.clone()).context("Configuration error")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let errors = ErrorPolicy {
        expose_details: config.debug.expose_error_details,
    };
    if errors.expose_details {
        tracing::debug!("Internal error details are returned to clients");
    }

    match cli.command.unwrap_or(Commands::Rules) {
        Commands::Rules => {
            tracing::info!("Starting rule-based predictor service");
            let state = Arc::new(RulesState::new(errors));
            for (position, (rule, crop)) in state.cascade.list_rules().iter().enumerate() {
                tracing::debug!("Crop rule {}: {} -> {}", position + 1, rule, crop);
            }
            let router = server::rules_router(state, &config.server)?;
            server::serve(router, &config).await?;
        }
        Commands::Artifact => {
            tracing::info!("Starting artifact-backed recommendation service");
            let model = ModelState::load(Path::new(ARTIFACT_PATH));
            tracing::info!("Model state: {:?}", model);
            let state = Arc::new(ArtifactState::new(model, errors));
            let router = server::artifact_router(state, &config.server)?;
            server::serve(router, &config).await?;
        }
        Commands::Check => run_check()?,
    }

    Ok(())
}

fn run_check() -> anyhow::Result<()> {
    let model = ModelState::load(Path::new(ARTIFACT_PATH));
    println!("Model: {} ({:?})", ARTIFACT_PATH, model);

    let results = check::run_samples(&model).context("Model check failed")?;
    for (i, (input, label)) in results.iter().enumerate() {
        match label {
            Ok(label) => println!("Test case {}: {:?} -> Prediction: {}", i + 1, input, label),
            Err(e) => println!("Test case {}: {:?} -> Error: {}", i + 1, input, e),
        }
    }

    Ok(())
}
