use crate::board::Direction;
use crate::error::GameError;

/// Common interface of games played by moving tiles on a square board.
pub trait Game {
    /// Prepares the initial board.
    fn initialize(&mut self) -> Result<(), GameError>;

    /// Returns `true` if the player can still make a move.
    fn can_move(&self) -> bool;

    fn has_won(&self) -> bool;

    fn process_move(&mut self, direction: Direction);

    /// Value of the tile at row `i` and column `j`, `None` if the cell is empty or outside the board.
    fn get(&self, i: usize, j: usize) -> Option<u32>;

    fn width(&self) -> usize;

    /// Points collected so far, 0 for games without scoring.
    fn score(&self) -> u64 { 0 }
}
