//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use licmatch::core::expression::MergeMode;
use licmatch::output::OutputMode;

/// licmatch - License expression algebra and revision matching
#[derive(Parser, Debug)]
#[command(
    name = "licmatch",
    version,
    about = "License expression algebra and revision matching",
    long_about = "Normalize, expand and merge SPDX-like license expressions.\n\n\
                  The match command decides whether two revisions of a component\n\
                  carry the same licensing evidence."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the global one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical form of an expression
    Normalize {
        /// License expression
        expression: String,
    },

    /// Print the DNF clauses of an expression, one per line
    Expand {
        /// License expression
        expression: String,
    },

    /// Print every license an expression mentions
    Flatten {
        /// License expression
        expression: String,
    },

    /// Merge a proposed expression into a base expression
    Merge {
        /// Expression being added
        proposed: String,

        /// Existing expression
        base: String,

        /// Merge mode: OR (independent facts) or AND (joint facts)
        #[arg(short, long, default_value = "OR")]
        mode: MergeMode,
    },

    /// Check whether an expression satisfies a constraint
    Satisfies {
        /// License expression
        expression: String,

        /// Constraint expression
        constraint: String,
    },

    /// Look up identifiers for full license names
    Lookup {
        /// Full license names, e.g. "MIT License"
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Compare the licensing evidence of two revision documents
    Match {
        /// Source revision document (JSON)
        source: PathBuf,

        /// Target revision document (JSON)
        target: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Normalize { expression }) => commands::normalize(&expression, output_mode),
        Some(Command::Expand { expression }) => commands::expand(&expression, output_mode),
        Some(Command::Flatten { expression }) => commands::flatten(&expression, output_mode),
        Some(Command::Merge {
            proposed,
            base,
            mode,
        }) => commands::merge(&proposed, &base, mode, output_mode),
        Some(Command::Satisfies {
            expression,
            constraint,
        }) => commands::satisfies(&expression, &constraint, output_mode),
        Some(Command::Lookup { names }) => commands::lookup(&names, output_mode),
        Some(Command::Match { source, target }) => {
            commands::match_revisions(&source, &target, cli.config.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": licmatch::VERSION
                    })
                );
            } else {
                println!("licmatch v{}", licmatch::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": licmatch::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("licmatch v{}", licmatch::VERSION);
                println!("\nRun 'licmatch --help' for usage");
            }
            Ok(())
        },
    }
}
