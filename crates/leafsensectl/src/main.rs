//! LeafSense Control - CLI client for the LeafSense advisory engine
//!
//! Diagnose leaves (simulated classifier), chat about the detected
//! condition, and get weather-conditioned farming tips.

mod commands;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "leafsensectl")]
#[command(about = "LeafSense - Crop disease advisory engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diagnose a leaf (simulated classification)
    Diagnose {
        /// Path to the leaf photo (recorded with the scan)
        #[arg(long)]
        image: Option<String>,
    },

    /// Ask the advisory engine about the last diagnosed condition
    Chat {
        /// The question; omit to see the conversation so far
        question: Vec<String>,

        /// Clear the conversation history
        #[arg(long)]
        clear: bool,
    },

    /// Show current weather and advisory tips for your location
    Weather {
        /// Override the configured latitude
        #[arg(long)]
        latitude: Option<f64>,

        /// Override the configured longitude
        #[arg(long)]
        longitude: Option<f64>,

        /// Disease context for the tips (defaults to the last scan)
        #[arg(long)]
        disease: Option<String>,
    },

    /// Show scan history
    History {
        /// Delete one scan by id
        #[arg(long)]
        delete: Option<String>,

        /// Clear all scan history
        #[arg(long)]
        clear: bool,
    },

    /// List the disease knowledge base
    Diseases,

    /// Show or update profile settings
    Profile {
        /// Set the farmer name
        #[arg(long)]
        name: Option<String>,

        /// Set the UI language (en, hi, es)
        #[arg(long)]
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Diagnose { image } => commands::diagnose(image),
        Commands::Chat { question, clear } => commands::chat(question, clear),
        Commands::Weather {
            latitude,
            longitude,
            disease,
        } => commands::weather(latitude, longitude, disease).await,
        Commands::History { delete, clear } => commands::history(delete, clear),
        Commands::Diseases => commands::diseases(),
        Commands::Profile { name, language } => commands::profile(name, language),
    }
}
