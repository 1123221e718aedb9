//! The Game of Fifteen: <https://en.wikipedia.org/wiki/15_puzzle>.

pub mod state;

use crate::board::neighbors::{cell_nr, construct_neighbors, neighbor_in, neighbors_of, Neighbors, MAX_BOARD_SIZE};
use crate::board::Direction;
use crate::error::GameError;
use crate::game::Game;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use self::state::State;

pub const MIN_WIDTH: usize = 2;
pub const MAX_WIDTH: usize = 4;

/// Returns `true` if `permutation` has an even number of inversions.
///
/// A puzzle with the blank in the last cell can be solved iff the permutation of its tiles is even.
pub fn is_even_permutation(permutation: &[u8]) -> bool {
    let mut inversions = 0usize;
    for (i, a) in permutation.iter().enumerate() {
        inversions += permutation[i+1..].iter().filter(|b| *b < a).count();
    }
    inversions % 2 == 0
}

/// Provides the initial arrangement of tiles.
pub trait GameOfFifteenInitializer {
    /// Returns a permutation of `1..width*width`, the tiles of all cells but the last, row by row.
    fn initial_permutation(&mut self, width: usize) -> Vec<u8>;
}

/// Gives a random permutation that can be solved.
pub struct RandomGameOfFifteenInitializer<R> {
    rng: R
}

impl<R: Rng> RandomGameOfFifteenInitializer<R> {
    pub fn new(rng: R) -> Self { Self { rng } }
}

impl<R: Rng> GameOfFifteenInitializer for RandomGameOfFifteenInitializer<R> {
    fn initial_permutation(&mut self, width: usize) -> Vec<u8> {
        let mut tiles: Vec<u8> = (1..(width * width) as u8).collect();
        tiles.shuffle(&mut self.rng);
        if !is_even_permutation(&tiles) && tiles.len() >= 2 {
            tiles.swap(0, 1);
        }
        tiles
    }
}

pub struct GameOfFifteen<I> {
    width: u8,
    neighbors: Neighbors,
    state: State,
    blank: u8,
    initializer: I
}

impl<I: GameOfFifteenInitializer> GameOfFifteen<I> {
    /// Constructs the game in the goal state, `width` must be in range `MIN_WIDTH..=MAX_WIDTH`.
    pub fn new(width: usize, initializer: I) -> Result<Self, GameError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(GameError::InvalidWidth { width, min: MIN_WIDTH, max: MAX_WIDTH });
        }
        let w = width as u8;
        Ok(Self {
            width: w,
            neighbors: construct_neighbors(w, w),
            state: State::goal(w * w),
            blank: w * w - 1,
            initializer
        })
    }

    #[inline] fn board_size(&self) -> u8 { self.width * self.width }
}

impl<I: GameOfFifteenInitializer> Game for GameOfFifteen<I> {
    fn initialize(&mut self) -> Result<(), GameError> {
        let size = self.board_size();
        let tiles = self.initializer.initial_permutation(self.width as usize);
        let mut seen = [false; MAX_BOARD_SIZE];
        let is_permutation = tiles.len() + 1 == size as usize
            && tiles.iter().all(|t| (1..size).contains(t) && !std::mem::replace(&mut seen[*t as usize], true));
        if !is_permutation {
            return Err(GameError::NotAPermutation { expected_len: size as usize });
        }
        self.state = tiles.into_iter().chain(std::iter::once(0)).collect();
        self.blank = self.state.blank_position(size)
            .ok_or(GameError::NotAPermutation { expected_len: size as usize })?;
        Ok(())
    }

    fn can_move(&self) -> bool {
        !neighbors_of(&self.neighbors, self.blank).is_empty()
    }

    /// The tiles are in order and the blank is in the last cell.
    fn has_won(&self) -> bool {
        let size = self.board_size();
        self.state.iter(size - 1).eq(1..size)
    }

    /// Slides the tile adjacent to the blank into the blank, so that it moves in `direction`.
    fn process_move(&mut self, direction: Direction) {
        if let Some(from) = neighbor_in(&self.neighbors, self.blank, direction.opposite()) {
            let tile = self.state.move_blank(self.blank, from);
            debug!("tile {tile} moved {direction}");
            self.blank = from;
        }
    }

    fn get(&self, i: usize, j: usize) -> Option<u32> {
        let w = self.width as usize;
        if i >= w || j >= w { return None; }
        match self.state.tile_at(cell_nr(self.width, j as u8, i as u8)) {
            0 => None,
            t => Some(t as u32)
        }
    }

    #[inline] fn width(&self) -> usize { self.width as usize }
}
