use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dynin_report::{ReplayLog, graph};

#[derive(Parser)]
#[command(name = "dynin", version, about = "Inspect and validate inlining decision logs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate that a decision log parses as replay input.
    Check {
        /// Path to a report written by a previous run.
        log: PathBuf,
    },
    /// Print the override table a log would produce.
    Dump {
        log: PathBuf,
        /// Emit the raw decision records as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Render the caller/callee pairs of a log as a Graphviz digraph.
    Graph {
        log: PathBuf,
    },
}

fn main() -> ExitCode {
    dynin_utils::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dynin: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { log } => {
            let parsed = ReplayLog::load(&log)?;
            println!("ok: {} decision(s)", parsed.records().len());
        }
        Command::Dump { log, json } => {
            let parsed = ReplayLog::load(&log)?;
            if json {
                println!("{}", serde_json::to_string_pretty(parsed.records())?);
            } else {
                let table = parsed.into_table();
                let mut entries: Vec<_> = table.iter().collect();
                entries.sort_unstable();
                for (location, inlined) in entries {
                    println!(
                        "{location} -> {}",
                        if inlined { "inline" } else { "no-inline" }
                    );
                }
            }
        }
        Command::Graph { log } => {
            let parsed = ReplayLog::load(&log)?;
            print!("{}", graph::to_dot(parsed.records()));
        }
    }

    Ok(())
}
