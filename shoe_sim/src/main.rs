use clap::{Parser, Subcommand};
use shoe_sim::write::{write_statistics, Format};
use shoe_sim::{
    SimulationConfig, SimulationEngine, SimulationError, MAX_DECKS, MAX_PLAYERS, MIN_DECKS,
    MIN_PLAYERS,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shoe_sim", about = "Multi-deck blackjack shoe simulator")]
struct Cli {
    /// Number of players at the table (1-7)
    #[arg(long, short, env = "SHOE_SIM_PLAYERS", default_value_t = 1)]
    players: usize,
    /// Number of decks in the shoe (1-8)
    #[arg(long, short, env = "SHOE_SIM_DECKS", default_value_t = 1)]
    decks: usize,
    /// Seed for shuffling, makes runs repeatable
    #[arg(long, env = "SHOE_SIM_SEED")]
    seed: Option<u64>,
    /// Write statistics as JSON instead of a table
    #[arg(long)]
    json: bool,
    /// Write statistics to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single hand and show how every seat did
    Play,
    /// Simulate a number of hands
    Simulate {
        #[arg(long, short = 'n', default_value_t = 1000)]
        hands: u64,
    },
}

/// Falls back to a single player or deck when the requested count is outside the supported range.
fn clamp_or_default(value: usize, min: usize, max: usize, what: &str) -> usize {
    if (min..=max).contains(&value) {
        value
    } else {
        log::warn!("invalid number of {what} ({value}), defaulting to 1");
        1
    }
}

fn run(cli: Cli) -> Result<(), SimulationError> {
    let mut builder = SimulationConfig::new();
    builder
        .num_players(clamp_or_default(cli.players, MIN_PLAYERS, MAX_PLAYERS, "players"))
        .num_decks(clamp_or_default(cli.decks, MIN_DECKS, MAX_DECKS, "decks"));
    if let Some(seed) = cli.seed {
        builder.seed(seed);
    }
    let mut engine = SimulationEngine::new(builder.build())?;

    match cli.command {
        Command::Play => {
            let round = engine.play_one_round()?;
            for player in &round.per_player {
                println!(
                    "Player {} had {} = {} | Dealer had {} = {} → {}",
                    player.seat + 1,
                    player.hand,
                    player.total,
                    round.dealer.hand,
                    round.dealer.total,
                    player.resolution
                );
            }
            if round.marker_drawn {
                println!("Marker appeared, reshuffling deck.");
            }
        }
        Command::Simulate { hands } => {
            println!("--- Running simulation for {hands} hands ---");
            engine.run_many_with_progress(hands, |played, total| {
                println!("Progress: {played}/{total} hands");
            })?;
            println!("--- Simulation of {hands} hands completed ---");
        }
    }

    let format = if cli.json { Format::Json } else { Format::Table };
    let statistics = engine.statistics();
    match cli.out {
        Some(path) => {
            write_statistics(&statistics, format, File::create(&path)?)?;
            log::info!("statistics written to {}", path.display());
        }
        None => write_statistics(&statistics, format, std::io::stdout().lock())?,
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
