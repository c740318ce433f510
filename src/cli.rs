use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cropcast", version, about = "Crop recommendation and yield prediction API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen on this port, overriding config and PORT
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Serve the rule-based predictors (default)
    Rules,
    /// Serve recommendations from the trained model artifact
    Artifact,
    /// Load the model artifact and run sample inputs through it
    Check,
}
