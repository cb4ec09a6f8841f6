//! AI Simulator CLI - fast in-memory dice games between computer players.
//!
//! Games run straight through the turn state machine with no settle or
//! pacing delays, so thousands of games finish in seconds.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use kingdom_dice::domain::rules::DEFAULT_TARGET_SCORE;
use kingdom_dice::domain::seed_derivation::derive_game_seed;
use metrics::{build_game_metrics, GameMetricsInput};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory dice game simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI difficulty per seat, in turn order (repeat for each seat)
    #[arg(long = "seat", value_enum, num_args = 1, default_values = ["easy", "hard"])]
    seats: Vec<AiType>,

    /// Use this difficulty for every seat
    #[arg(long, conflicts_with = "seats")]
    all: Option<AiType>,

    /// Number of seats when --all is given
    #[arg(long, default_value = "2", requires = "all")]
    players: usize,

    /// Points needed to win
    #[arg(long, default_value_t = DEFAULT_TARGET_SCORE)]
    target: u32,

    /// Base seed; game N plays with a seed derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the JSONL file with gzip
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, value_enum, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_types: Vec<AiType> = match args.all {
        Some(ai) => vec![ai; args.players],
        None => args.seats.clone(),
    };
    let seat_names: Vec<String> = seat_types.iter().map(|t| t.name().to_string()).collect();
    let difficulties: Vec<_> = seat_types.iter().map(|t| t.difficulty()).collect();

    if args.show_output {
        info!(games = args.games, seats = ?seat_names, target = args.target, "Starting AI simulator");
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => derive_game_seed(base, u64::from(game_num)),
            None => rand::random(),
        };

        let game_res = Simulator::new(game_seed, &difficulties, args.target)
            .and_then(Simulator::simulate_game);

        match game_res {
            Ok(result) => {
                let metrics = build_game_metrics(
                    GameMetricsInput {
                        game_id: game_num,
                        seed: game_seed,
                        seats: &seat_names,
                        target_score: args.target,
                        total_games: args.games,
                        duration_ms: game_start.elapsed().as_secs_f64() * 1000.0,
                        level: &args.metrics_level,
                    },
                    &result,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(game = game_num, scores = ?result.final_scores(), "Game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &seat_names, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    seats: &[String],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = vec![0u32; seats.len()];
    let mut totals = vec![0u64; seats.len()];
    let mut turns = vec![0usize; seats.len()];
    for result in results {
        wins[result.winner] += 1;
        for (seat, player) in result.players.iter().enumerate() {
            totals[seat] += u64::from(player.total_score);
        }
        for t in &result.turns {
            turns[t.seat] += 1;
        }
    }

    println!("\n=== Results by Seat ===");
    let games = results.len() as f64;
    for (seat, name) in seats.iter().enumerate() {
        println!(
            "Seat {} ({}): avg score={:.1}, avg turns={:.1}, wins={} ({:.1}%)",
            seat,
            name,
            totals[seat] as f64 / games,
            turns[seat] as f64 / games,
            wins[seat],
            f64::from(wins[seat]) / games * 100.0
        );
    }
}
