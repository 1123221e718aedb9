#![doc = include_str!("../README.md")]

mod config;
mod play;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use config::Config;
use env_logger::Env;
use games::board::Direction;
use games::fifteen::{GameOfFifteen, RandomGameOfFifteenInitializer};
use games::game::Game;
use games::game2048::{Game2048, RandomGame2048Initializer};
use log::{info, warn};
use play::{parse_command, play, Command};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GameKind {
    #[value(name = "2048")]
    Twenty48,
    Fifteen,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 or the Game of Fifteen in the console")]
struct Cli {
    /// Game to play
    #[arg(long, value_enum, default_value = "2048")]
    game: GameKind,

    /// TOML file with game settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed of the random number generator (overrides the config)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Board width (overrides the config)
    #[arg(long, value_name = "N")]
    width: Option<usize>,

    /// Make N random moves instead of reading moves from the standard input
    #[arg(long, value_name = "N")]
    auto: Option<usize>,
}

fn new_game(kind: GameKind, config: &Config, width: usize, seed: u64) -> Result<Box<dyn Game>> {
    let rng = ChaCha8Rng::seed_from_u64(seed);
    let game: Box<dyn Game> = match kind {
        GameKind::Twenty48 => Box::new(
            Game2048::new(width, RandomGame2048Initializer::with_four_probability(rng, config.four_probability))?
                .with_target(config.target)
                .with_full_lines(config.full_lines.into())
        ),
        GameKind::Fifteen => Box::new(GameOfFifteen::new(width, RandomGameOfFifteenInitializer::new(rng))?),
    };
    Ok(game)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = cli.config.as_ref().map(Config::from_toml).transpose()?.unwrap_or_default();
    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    let width = cli.width.unwrap_or(config.width);
    info!("Playing {:?} on {width}x{width} board, seed {seed}", cli.game);

    let mut game = new_game(cli.game, &config, width, seed)?;
    game.initialize()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match cli.auto {
        Some(moves) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
            let commands = (0..moves).map(|_| Command::Move(Direction::ALL[rng.gen_range(0..Direction::ALL.len())]));
            play(game.as_mut(), commands, &mut out)?
        }
        None => {
            let commands = io::stdin().lock().lines().map_while(|line| line.ok()).filter_map(|line| {
                let command = parse_command(&line);
                if command.is_none() { warn!("unknown command {line:?}, use w/a/s/d or q"); }
                command
            });
            play(game.as_mut(), commands, &mut out)?
        }
    };
    info!("Finished after {} moves: won={}, stuck={}, score={}", summary.moves, summary.won, summary.stuck, summary.score);
    Ok(())
}
