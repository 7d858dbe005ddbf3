use shoe_sim::prelude::*;

/// Parses an optional positional argument, `None` when it was not given.
fn parse_arg<T: std::str::FromStr>(arg: Option<String>) -> Result<Option<T>, String>
where
    T::Err: std::fmt::Display,
{
    arg.map(|s| s.parse::<T>().map_err(|e| format!("{s}: {e}")))
        .transpose()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let numb_rounds_result = if let Some(n) = args.next() {
        n.parse::<u64>()
    } else {
        eprintln!("usage: play_n_rounds ROUNDS [PLAYERS] [DECKS] [SEED]");
        std::process::exit(1);
    };

    let mut numb_rounds = match numb_rounds_result {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let (players, decks, seed) = match (
        parse_arg::<usize>(args.next()),
        parse_arg::<usize>(args.next()),
        parse_arg::<u64>(args.next()),
    ) {
        (Ok(p), Ok(d), Ok(s)) => (p.unwrap_or(1), d.unwrap_or(1), s),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let mut builder = SimulationConfig::new();
    builder.num_players(players).num_decks(decks);
    if let Some(seed) = seed {
        builder.seed(seed);
    }
    let mut engine = match SimulationEngine::new(builder.build()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    while numb_rounds > 0 {
        let round = match engine.play_one_round() {
            Ok(round) => round,
            Err(e) => {
                eprintln!("error: {e}");
                return;
            }
        };

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
            println!("Marker card appeared, reshuffling deck.");
        } else if round.reshuffled {
            println!("Not enough cards in the shoe, reshuffled.");
        }
        println!();

        numb_rounds -= 1;
    }

    println!("{}", engine.statistics());
    println!(
        "{:<40}{:>40}",
        "number of reshuffles:",
        engine.num_reshuffles()
    );
}
