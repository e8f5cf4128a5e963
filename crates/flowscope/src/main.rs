//! Flowscope CLI - workflow graph analysis from the command line.
//!
//! Flowscope analyzes workflow dependency graphs: DAG validity, depth
//! statistics, per-node adjacency, and reprocess-scope previews over
//! built-in or JSON-supplied scenarios.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use flowscope::reprocess::ReprocessMode;
use flowscope::scenario;
use tracing_subscriber::EnvFilter;

mod cli;

/// Flowscope: workflow DAG analysis and reprocess previews.
#[derive(Parser)]
#[command(name = "flowscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// JSON scenario pack to analyze (defaults to the built-in scenarios)
    #[arg(short = 'f', long, global = true)]
    scenarios_file: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available scenarios
    Scenarios,

    /// Check whether a scenario's graph is a valid DAG
    Check {
        /// Scenario id (defaults to the first scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// Show summary metrics and the depth distribution
    Stats {
        /// Scenario id (defaults to the first scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// Show a node with its incoming and outgoing edges
    Inspect {
        /// Node id to inspect
        node: String,

        /// Scenario id (defaults to the first scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// Preview which nodes a reprocess action would touch
    Scope {
        /// Selected node id
        node: String,

        /// Scenario id (defaults to the first scenario)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Where the replay starts
        #[arg(short, long, value_enum, default_value_t = ReprocessMode::FromNode)]
        mode: ReprocessMode,

        /// Include advisory edges in root discovery and propagation
        #[arg(long)]
        include_advisory: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Resolve the scenario set once; every command reads from it.
    let scenarios = match &cli.scenarios_file {
        Some(path) => match scenario::load_scenarios(path) {
            Ok(scenarios) => scenarios,
            Err(e) => {
                eprintln!("{}: {e}", "error".red().bold());
                return ExitCode::FAILURE;
            }
        },
        None => scenario::builtin_scenarios(),
    };

    let result = match cli.command {
        Commands::Scenarios => {
            cli::scenarios::run(&scenarios);
            Ok(())
        }
        Commands::Check { scenario } => cli::check::run(&scenarios, scenario.as_deref()),
        Commands::Stats { scenario } => cli::stats::run(&scenarios, scenario.as_deref()),
        Commands::Inspect { node, scenario } => {
            cli::inspect::run(&scenarios, scenario.as_deref(), &node)
        }
        Commands::Scope {
            node,
            scenario,
            mode,
            include_advisory,
        } => cli::scope::run(&scenarios, scenario.as_deref(), &node, mode, include_advisory),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
