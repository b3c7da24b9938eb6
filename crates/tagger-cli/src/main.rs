//! Tagger CLI - render HTML tags from the command line.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::render::Part;

#[derive(Parser)]
#[command(name = "tagger")]
#[command(about = "Render HTML tags from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to tagger.toml config file
    #[arg(short, long, default_value = "tagger.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tag
    Render {
        /// Tag name or preset name
        identifier: String,

        /// Content, or the preset argument for presets
        content: Option<String>,

        /// Attribute as name=value, may be repeated
        #[arg(short = 'a', long = "attr")]
        attrs: Vec<String>,

        /// Which part of the tag to print
        #[arg(long, value_enum, default_value = "full")]
        part: Part,
    },

    /// Print a tag's identifier, attributes and content as JSON
    Inspect {
        /// Tag name or preset name
        identifier: String,

        /// Content, or the preset argument for presets
        content: Option<String>,

        /// Attribute as name=value, may be repeated
        #[arg(short = 'a', long = "attr")]
        attrs: Vec<String>,
    },

    /// List registered presets
    Presets,

    /// Write a default tagger.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Render {
            identifier,
            content,
            attrs,
            part,
        } => {
            commands::render::run(&cli.config, &identifier, content.as_deref(), &attrs, part)?;
        }
        Commands::Inspect {
            identifier,
            content,
            attrs,
        } => {
            commands::inspect::run(&cli.config, &identifier, content.as_deref(), &attrs)?;
        }
        Commands::Presets => {
            commands::presets::run(&cli.config)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
    }

    Ok(())
}
