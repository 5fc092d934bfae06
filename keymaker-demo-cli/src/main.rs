//! Keymaker Demo CLI
//!
//! Command-line walkthrough of a person commissioning a key and being told
//! when it is ready.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "keymaker-demo")]
#[command(about = "Keymaker Demo CLI - watch a keymaker report back to its delegate", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the lost house key story
    Story,

    /// Commission a key for someone
    Commission {
        /// Name of the person who needs the key
        #[arg(short, long, default_value = keymaker_lib::person::DEFAULT_NAME)]
        name: String,

        /// Shape of the key to produce
        #[arg(short, long, default_value = "Basic")]
        shape: String,

        /// Produce the key without registering the person first
        #[arg(long)]
        unregistered: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("keymaker_demo_cli=debug,keymaker_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("keymaker_demo_cli=info,keymaker_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Story => {
            commands::story::run(cli.verbose)?;
        }
        Commands::Commission {
            name,
            shape,
            unregistered,
            json,
        } => {
            commands::commission::run(&name, &shape, !unregistered, json, cli.verbose)?;
        }
    }

    Ok(())
}
