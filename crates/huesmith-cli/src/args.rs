//! CLI argument definitions using clap
//!
//! - huesmith "prompt"                    # Generate a palette
//! - huesmith "prompt" -i photo.jpg       # Seed with colors from an image
//! - huesmith serve                       # Run the relay service
//! - huesmith config init/show            # Manage configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huesmith")]
#[command(about = "AI-assisted Tailwind CSS palette generator")]
#[command(
    long_about = r#"huesmith - AI-assisted Tailwind CSS palette generator

USAGE:
  huesmith "tropical theme with warm colors"     # Generate a palette
  huesmith "surfing vibes" -i beach.jpg -i sunset.png
  huesmith serve                                 # Run the relay service

UTILITY COMMANDS:
  huesmith config init               # Create a config file
  huesmith config show               # Show current config

The credential is read from HUESMITH_API_KEY / OPENAI_API_KEY or the config
file; without one, generation is refused before anything reaches the network."#
)]
#[command(version)]
pub struct Cli {
    /// Palette prompt, at least 10 characters (omit for an interactive prompt)
    pub prompt: Option<String>,

    /// Image file whose dominant colors seed the palette (repeatable)
    #[arg(short = 'i', long = "image")]
    pub images: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Relay base URL override
    #[arg(long, env = "HUESMITH_RELAY_URL")]
    pub relay_url: Option<String>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay service
    Serve {
        /// Bind address override (host:port)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Where to write it (defaults to ./huesmith.json)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration with the credential masked
    Show,
}
