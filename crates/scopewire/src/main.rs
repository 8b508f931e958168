//! scopewire - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scopewire compile <bindings> [-o plan.json]` | Compile every binding into a plan |
//! | `scopewire tokenize <bindings> <id> [--json]` | Show the token tree of one identifier |
//! | `scopewire get <bindings> <id>` | Resolve one identifier |
//! | `scopewire run <plan> <id>` | Resolve one identifier from a compiled plan |
//! | `scopewire types` | List buildable types |

use anyhow::Context;
use clap::{Parser, Subcommand};
use scopewire::commands;
use scopewire_infrastructure::config::ConfigLoader;
use scopewire_infrastructure::logging::init_logging;
use std::path::PathBuf;

/// Command line interface for scopewire
#[derive(Parser, Debug)]
#[command(name = "scopewire")]
#[command(about = "scopewire - Path-keyed object-graph resolver")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile every binding into a plan document
    Compile {
        /// JSON or TOML bindings file
        bindings: PathBuf,

        /// Write the plan here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the token tree of one identifier
    Tokenize {
        bindings: PathBuf,
        identifier: String,

        /// Render as JSON instead of script text
        #[arg(long)]
        json: bool,
    },

    /// Resolve one identifier
    Get {
        bindings: PathBuf,
        identifier: String,
    },

    /// Resolve one identifier from a compiled plan
    Run {
        plan: PathBuf,
        identifier: String,
    },

    /// List buildable types
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Command::Compile { bindings, output } => {
            let plan = commands::compile(&bindings, &config)
                .with_context(|| format!("Failed to compile {}", bindings.display()))?;
            match output {
                Some(path) => {
                    std::fs::write(&path, plan)
                        .with_context(|| format!("Failed to write plan {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Plan written");
                }
                None => println!("{plan}"),
            }
        }
        Command::Tokenize {
            bindings,
            identifier,
            json,
        } => println!("{}", commands::tokenize(&bindings, &identifier, json, &config)?),
        Command::Get {
            bindings,
            identifier,
        } => println!("{}", commands::get(&bindings, &identifier, &config)?),
        Command::Run { plan, identifier } => {
            println!("{}", commands::run(&plan, &identifier, &config)?);
        }
        Command::Types => {
            for name in commands::types() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
