//! Scenario runner CLI
//!
//! Runs encirclement-capture scenarios through rg_core and prints the
//! resulting captures and territory scores. `scatter` generates
//! seeded random scenario files for quick experiments.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rg_core::api::{RunRequest, RunResponse, StoneSpec};
use rg_core::SCHEMA_VERSION;

#[derive(Parser)]
#[command(name = "rg_cli")]
#[command(about = "Run encirclement-capture scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file and print the report
    Run {
        /// Scenario JSON file path
        #[arg(long)]
        file: PathBuf,

        /// Print the raw response JSON instead of a summary
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Generate a seeded random scenario file
    Scatter {
        /// Output scenario JSON file path
        #[arg(long)]
        out: PathBuf,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Stones per team
        #[arg(long, default_value = "20")]
        stones: usize,

        /// Half-width of the square scatter area
        #[arg(long, default_value = "100.0")]
        spread: f32,

        /// Engine steps the scenario will run
        #[arg(long, default_value = "50")]
        ticks: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file, json } => run(&file, json),
        Commands::Scatter { out, seed, stones, spread, ticks } => {
            scatter(&out, seed, stones, spread, ticks)
        }
    }
}

fn run(file: &PathBuf, raw: bool) -> Result<()> {
    let request = fs::read_to_string(file)
        .with_context(|| format!("reading scenario file {}", file.display()))?;
    let response_json =
        rg_core::run_scenario_json(&request).context("running scenario")?;

    if raw {
        println!("{}", response_json);
        return Ok(());
    }

    let response: RunResponse =
        serde_json::from_str(&response_json).context("parsing engine response")?;
    println!("scenario: {}", response.name);
    println!("ticks:    {}", response.ticks_run);
    if response.captures.is_empty() {
        println!("captures: none");
    } else {
        println!("captures: {}", response.captures.len());
        for capture in &response.captures {
            println!("  tick {:>4}  stone {}", capture.tick, capture.piece);
        }
    }
    match response.final_scores {
        Some(scores) => {
            println!("score:    team_a {:.1} / team_b {:.1}", scores.team_a, scores.team_b)
        }
        None => println!("score:    (no scoring pass ran)"),
    }
    Ok(())
}

fn scatter(out: &PathBuf, seed: u64, stones: usize, spread: f32, ticks: u32) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut specs = Vec::with_capacity(stones * 2);

    for team in ["team_a", "team_b"] {
        for _ in 0..stones {
            specs.push(StoneSpec {
                x: rng.gen_range(-spread..=spread),
                y: rng.gen_range(-spread..=spread),
                tags: vec![team.to_string()],
                radius: Some(6.0),
                capturable: true,
            });
        }
    }

    let request = RunRequest {
        schema_version: SCHEMA_VERSION,
        name: format!("scatter-{}", seed),
        ticks,
        dt: 0.25,
        config: None,
        stones: specs,
    };

    let json = serde_json::to_string_pretty(&request)?;
    fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    log::info!("wrote {} stones to {}", stones * 2, out.display());
    println!("wrote scenario {} ({} stones) to {}", request.name, stones * 2, out.display());
    Ok(())
}
