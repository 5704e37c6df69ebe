use battleship_ai::{init_logging, Difficulty, Duel};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Tier {
    Easy,
    Medium,
    Hard,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
        }
    }
}

/// Run AI-vs-AI Battleship matches and print a JSON report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Tier::Hard)]
    player1: Tier,
    #[arg(long, value_enum, default_value_t = Tier::Medium)]
    player2: Tier,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut wins = [0usize; 2];
    let mut total_shots = [0usize; 2];
    for _ in 0..cli.games {
        let mut duel = Duel::new(cli.player1.into(), cli.player2.into(), &mut rng)?;
        let winner = duel.run(&mut rng)?;
        wins[winner.index()] += 1;
        let shots = duel.shots();
        total_shots[0] += shots[0];
        total_shots[1] += shots[1];
    }

    let report = json!({
        "seed": seed,
        "games": cli.games,
        "player1": {
            "difficulty": format!("{:?}", cli.player1),
            "wins": wins[0],
            "shots": total_shots[0],
        },
        "player2": {
            "difficulty": format!("{:?}", cli.player2),
            "wins": wins[1],
            "shots": total_shots[1],
        },
    });
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
