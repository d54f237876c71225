//! Line-based client for the dungeon simulation.
//!
//! Reads one command per line from stdin and prints the turn's narration.
//! Player name, map and seed come from the environment:
//!
//! ```bash
//! NECRO_PLAYER=Ares NECRO_MAP=map1 NECRO_SEED=7 cargo run -p necro-cli
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use necro_runtime::{DEFAULT_MAP, Session, map_names};

struct CliConfig {
    player: String,
    map: String,
    seed: u64,
}

impl CliConfig {
    fn from_env() -> Result<Self> {
        let seed = match std::env::var("NECRO_SEED") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("NECRO_SEED is not a number: {raw}"))?,
            Err(_) => 0,
        };
        Ok(Self {
            player: std::env::var("NECRO_PLAYER").unwrap_or_else(|_| "Ares".to_string()),
            map: std::env::var("NECRO_MAP").unwrap_or_else(|_| DEFAULT_MAP.to_string()),
            seed,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::from_env()?;
    let mut session = Session::new(&config.player, &config.map, config.seed)
        .with_context(|| format!("failed to load map {:?} (known: {:?})", config.map, map_names()))?;

    tracing::info!(player = %config.player, map = %config.map, seed = config.seed, "session started");

    println!("You are {}, alone in the dark. Type a command.", config.player);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "quit" | "exit") {
            break;
        }

        let result = session.apply_turn(input)?;
        println!("{}", result.description);

        if result.game_over {
            break;
        }
    }

    Ok(())
}
