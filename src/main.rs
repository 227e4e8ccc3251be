//! CLI entry point for the burrow solver.
//!
//! Usage:
//!   burrow-solver solve <burrow.txt> [options]
//!   burrow-solver solve --stdin [options]
//!
//! Options:
//!   --unfold              Solve the part-two variant (rooms deepened to 4)
//!   --timeout <seconds>   Maximum search time (default: 60)
//!   --best-first          Use the frontier search instead of memoized
//!                         recursion

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use burrow_solver::{solve, Algorithm, SolverConfig, SolverResult, State};

#[derive(Parser)]
#[command(name = "burrow-solver")]
#[command(about = "Minimum-cost search for the amphipod burrow sorting puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the minimum sorting cost for a burrow diagram
    Solve {
        /// Path to the burrow diagram (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the diagram from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Deepen the rooms to 4 with the part-two inserted rows
        #[arg(long)]
        unfold: bool,

        /// Maximum search time in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,

        /// Use the uniform-cost frontier search
        #[arg(long)]
        best_first: bool,
    },
}

/// Output format for a solve run
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<u64>,
    search_exhausted: bool,
    states_expanded: usize,
    memo_hits: usize,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            unfold,
            timeout,
            best_first,
        } => {
            // Read the diagram
            let diagram = if stdin {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
                buffer
            } else if let Some(path) = file {
                match fs::read_to_string(&path) {
                    Ok(contents) => contents,
                    Err(e) => {
                        eprintln!("Error reading file {:?}: {}", path, e);
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            // Parse the burrow
            let state = match State::parse(diagram.trim_end()) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error parsing burrow diagram: {}", e);
                    std::process::exit(1);
                }
            };
            let state = if unfold {
                match state.unfolded() {
                    Some(s) => s,
                    None => {
                        eprintln!(
                            "Error: --unfold requires a folded (2-deep) diagram, got depth {}",
                            state.burrow().depth()
                        );
                        std::process::exit(1);
                    }
                }
            } else {
                state
            };

            let config = SolverConfig {
                timeout: Duration::from_secs(timeout),
                algorithm: if best_first {
                    Algorithm::BestFirst
                } else {
                    Algorithm::Memoized
                },
            };

            let result = solve(&state, &config);
            let output = format_result(&result);

            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if result.cost.is_some() {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn format_result(result: &SolverResult) -> SolveOutput {
    SolveOutput {
        solved: result.cost.is_some(),
        cost: result.cost,
        search_exhausted: result.search_exhausted,
        states_expanded: result.states_expanded,
        memo_hits: result.memo_hits,
        time_elapsed_ms: result.time_elapsed_ms,
    }
}
