//! The 2048 game: <https://en.wikipedia.org/wiki/2048_(video_game)>.

use crate::board::{Board, Cell, Direction, GameBoard};
use crate::error::GameError;
use crate::game::Game;
use crate::moves::{move_values, FullLines};
use log::{trace, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Value of the tile which wins the game.
pub const DEFAULT_TARGET: u32 = 2048;

/// Probability that a new tile is 4 (rather than 2).
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Chooses where new tiles appear and what values they have.
pub trait Game2048Initializer {
    /// Returns the cell and value of the next tile or `None` if `board` has no empty cell.
    fn next_value(&mut self, board: &GameBoard<u32>) -> Option<(Cell, u32)>;
}

/// Puts 2 (or 4 with given probability) into a random empty cell.
pub struct RandomGame2048Initializer<R> {
    rng: R,
    four_probability: f64
}

impl<R: Rng> RandomGame2048Initializer<R> {
    pub fn new(rng: R) -> Self { Self::with_four_probability(rng, DEFAULT_FOUR_PROBABILITY) }

    /// `four_probability` is clamped to the range [0, 1].
    pub fn with_four_probability(rng: R, four_probability: f64) -> Self {
        let four_probability = if four_probability.is_finite() { four_probability.clamp(0.0, 1.0) } else { DEFAULT_FOUR_PROBABILITY };
        Self { rng, four_probability }
    }
}

impl<R: Rng> Game2048Initializer for RandomGame2048Initializer<R> {
    fn next_value(&mut self, board: &GameBoard<u32>) -> Option<(Cell, u32)> {
        let cell = *board.filter(|v| v.is_none()).choose(&mut self.rng)?;
        let value = if self.rng.gen_bool(self.four_probability) { 4 } else { 2 };
        Some((cell, value))
    }
}

/// Adds a new value produced by `initializer` to `board`.
/// Returns `false` if the initializer did not produce any value.
pub fn add_new_value(board: &mut GameBoard<u32>, initializer: &mut impl Game2048Initializer) -> bool {
    match initializer.next_value(board) {
        Some((cell, value)) => {
            trace!("new tile {value} at {cell}");
            board.set(cell, Some(value));
            true
        }
        None => {
            warn!("no empty cell for a new tile");
            false
        }
    }
}

pub struct Game2048<I> {
    board: GameBoard<u32>,
    initializer: I,
    target: u32,
    full_lines: FullLines,
    score: u64
}

impl<I: Game2048Initializer> Game2048<I> {
    pub fn new(width: usize, initializer: I) -> Result<Self, GameError> {
        Ok(Self {
            board: GameBoard::new(width)?,
            initializer,
            target: DEFAULT_TARGET,
            full_lines: FullLines::default(),
            score: 0
        })
    }

    /// Sets the value of the tile that wins the game.
    pub fn with_target(mut self, target: u32) -> Self { self.target = target; self }

    pub fn with_full_lines(mut self, full_lines: FullLines) -> Self { self.full_lines = full_lines; self }

    #[inline] pub fn board(&self) -> &GameBoard<u32> { &self.board }

    #[inline] pub fn target(&self) -> u32 { self.target }

    /// Returns `true` if some row or column has two equal neighbours.
    fn has_equal_neighbours(&self) -> bool {
        self.board.all_cells().any(|c| {
            let Some(v) = self.board.get(c) else { return false };
            [Direction::Right, Direction::Down].into_iter()
                .filter_map(|d| self.board.neighbour(c, d))
                .any(|n| self.board.get(n) == Some(v))
        })
    }
}

impl<I: Game2048Initializer> Game for Game2048<I> {
    fn initialize(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            add_new_value(&mut self.board, &mut self.initializer);
        }
        Ok(())
    }

    fn can_move(&self) -> bool {
        self.board.any(|v| v.is_none())
            || (self.full_lines == FullLines::Merge && self.has_equal_neighbours())
    }

    fn has_won(&self) -> bool {
        self.board.any(|v| v.map_or(false, |v| *v >= self.target))
    }

    fn process_move(&mut self, direction: Direction) {
        let score = &mut self.score;
        // tiles stop growing at u32::MAX
        let merge = |v: u32| {
            let merged = v.saturating_mul(2);
            *score += merged as u64;
            merged
        };
        if move_values(&mut self.board, direction, self.full_lines, merge) {
            add_new_value(&mut self.board, &mut self.initializer);
        }
    }

    fn get(&self, i: usize, j: usize) -> Option<u32> {
        self.board.cell_or_none(i, j).and_then(|c| self.board.get(c).copied())
    }

    #[inline] fn width(&self) -> usize { self.board.width() }

    /// Sum of the values of all tiles created by merging.
    #[inline] fn score(&self) -> u64 { self.score }
}
