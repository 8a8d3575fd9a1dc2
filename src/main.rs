//! Expedition CLI - play a session at the terminal.
//!
//! Seats `--humans` interactive players first, then fills the rest of the
//! roster with computer players.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use gem_expedition::{
    Choice, ExpeditionConfig, GameBuilder, PlayerId, RoundObserver, RoundResult, RoundSnapshot,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "expedition")]
#[command(about = "Push-your-luck expedition card game")]
struct Args {
    /// Total number of players
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// How many of the players are interactive humans
    #[arg(long, default_value = "1")]
    humans: usize,

    /// Number of rounds (overrides the config file)
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Game seed for a reproducible session (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON rule config (card counts and hazard kinds)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print snapshots as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Text or JSON-lines rendering of round events.
struct ConsoleObserver {
    json: bool,
}

impl RoundObserver for ConsoleObserver {
    fn on_round_start(&mut self, round_number: u32) {
        if !self.json {
            println!("### Round {round_number} start ###");
        }
    }

    fn on_reveal(&mut self, snapshot: &RoundSnapshot) {
        if self.json {
            match serde_json::to_string(snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("could not encode snapshot: {e}"),
            }
            return;
        }

        if let Some(card) = snapshot.opened_cards.last() {
            println!("Opened \"{}\"", card.label());
        }
        println!();
        println!("RoundHistory: {}", snapshot.path_line());
        let status: Vec<_> = snapshot
            .players
            .values()
            .map(|p| {
                format!(
                    "{{ name: \"{}\", gem: {}, totalGem: {}, status: {:?} }}",
                    p.name, p.acquired_total, p.stored_total, p.status
                )
            })
            .collect();
        println!("PlayerStatus: [{}]\n", status.join(",\n"));
    }

    fn on_round_end(&mut self, result: &RoundResult) {
        if self.json {
            match serde_json::to_string(result) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("could not encode round result: {e}"),
            }
        } else {
            println!("### Round {} over: {:?} ###\n", result.number, result.end);
        }
    }
}

/// Blocking stdin prompt for one human seat.
fn stdin_prompt(name: String) -> impl FnMut(&RoundSnapshot, PlayerId) -> Choice {
    move |round: &RoundSnapshot, me: PlayerId| {
        let stdin = io::stdin();
        loop {
            print!(
                "{name} [{} in hand, path {}]: Are you doing? [explore, back] >> ",
                round.player(me).acquired_total,
                round.path_line()
            );
            if let Err(e) = io::stdout().flush() {
                warn!("could not flush prompt: {e}");
            }

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                // closed input: head home
                Ok(0) | Err(_) => return Choice::Retreat,
                Ok(_) => {}
            }
            match line.trim() {
                "explore" => {
                    println!("{name}: GO!");
                    return Choice::Continue;
                }
                "back" => {
                    println!("{name}: <<<");
                    return Choice::Retreat;
                }
                _ => continue,
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => ExpeditionConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ExpeditionConfig::default(),
    };
    if let Some(rounds) = args.rounds {
        config = config.with_rounds(rounds);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let humans = args.humans.min(args.players);
    if humans < args.humans {
        warn!("only {} players requested, seating {} humans", args.players, humans);
    }

    let mut builder = GameBuilder::new().config(config);
    for i in 1..=humans {
        let name = format!("Human {i}");
        builder = builder.human(name.clone(), stdin_prompt(name));
    }
    for i in 1..=(args.players - humans) {
        builder = builder.computer(format!("Computer {i}"));
    }

    let mut game = builder.build()?;
    info!(seed = game.seed(), "session ready");

    let mut observer = ConsoleObserver { json: args.json };
    let summary = game.play(&mut observer)?;

    if !args.json {
        println!("=== Final standings (seed {}) ===", summary.seed);
        for (rank, standing) in summary.standings.iter().enumerate() {
            println!(
                "{}. {} - {} gems {:?}",
                rank + 1,
                standing.name,
                standing.total,
                standing.per_round
            );
        }
    }

    Ok(())
}
