//! Castlink CLI
//!
//! Command-line queries over a castlink movie dataset.
//!
//! # Commands
//!
//! - `connect` - Find the shortest chain of co-appearances between two people
//! - `credits` - List the films a person appears in
//! - `cast` - List the people appearing in a film
//! - `verify` - Verify index ordering and record well-formedness
//! - `interactive` - Prompt loop for repeated connection queries

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Castlink command-line movie connection tools.
#[derive(Parser)]
#[command(name = "castlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dataset directory holding actordata and moviedata
    #[arg(global = true, short, long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest chain of co-appearances between two people
    Connect {
        /// The source person's name, exactly as indexed
        source: String,

        /// The destination person's name, exactly as indexed
        dest: String,

        /// Maximum number of hops to search
        #[arg(short, long, default_value_t = castlink_core::MAX_DEGREE)]
        max_degree: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the films a person appears in
    Credits {
        /// The person's name, exactly as indexed
        name: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the people appearing in a film
    Cast {
        /// The film's title, exactly as indexed
        title: String,

        /// The film's release year
        year: u16,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Verify index ordering and record well-formedness
    Verify,

    /// Prompt loop for repeated connection queries
    Interactive,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Connect {
            source,
            dest,
            max_degree,
            format,
        } => {
            let data_dir = cli.data_dir.ok_or("Data directory required for connect")?;
            commands::connect::run(&data_dir, &source, &dest, max_degree, &format)?;
        }
        Commands::Credits { name, format } => {
            let data_dir = cli.data_dir.ok_or("Data directory required for credits")?;
            commands::credits::run(&data_dir, &name, &format)?;
        }
        Commands::Cast {
            title,
            year,
            format,
        } => {
            let data_dir = cli.data_dir.ok_or("Data directory required for cast")?;
            commands::cast::run(&data_dir, &title, year, &format)?;
        }
        Commands::Verify => {
            let data_dir = cli.data_dir.ok_or("Data directory required for verify")?;
            commands::verify::run(&data_dir)?;
        }
        Commands::Interactive => {
            let data_dir = cli
                .data_dir
                .ok_or("Data directory required for interactive")?;
            commands::interactive::run(&data_dir)?;
        }
    }

    Ok(())
}
