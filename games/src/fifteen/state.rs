use std::iter::FromIterator;

/// Number of bits needed to store either tile number or its position (index of the board cell).
pub const BITS_PER_CELL: u8 = 4;

/// 0..01..1 mask with BITS_PER_CELL bits set.
pub const BITS_PER_CELL_MASK64: u64 = (1u64<<BITS_PER_CELL)-1;

/// Board state of the sliding puzzle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct State {
    /// Indexed by board indices, gives tiles numbers that occupy given board cell (0 for blank).
    pub board: u64,
}

impl FromIterator<u8> for State {
    fn from_iter<T: IntoIterator<Item=u8>>(tiles: T) -> Self {
        let mut board = 0u64;
        let mut index = 0;
        for t in tiles {
            board |= (t as u64) << index;
            index += BITS_PER_CELL;
        }
        Self { board }
    }
}

impl State {

    /// Constructs goal state for the board with board_size cells:
    /// tiles 1, 2, ... in order and blank in the last cell.
    pub fn goal(board_size: u8) -> Self {
        (1..board_size).chain(std::iter::once(0)).collect()
    }

    /// Swap blank with the tile that occupy new_blank_position.
    /// Returns number of this tile.
    pub fn move_blank(&mut self, current_blank_position: u8, new_blank_position: u8) -> u8 {
        let new_blank_index = new_blank_position * BITS_PER_CELL;
        let result = (self.board >> new_blank_index) & BITS_PER_CELL_MASK64;
        self.board &= !(BITS_PER_CELL_MASK64 << new_blank_index);       // clear cell which should be blank
        self.board |= result << (current_blank_position * BITS_PER_CELL);    // set old blank cell to result
        result as u8
    }

    /// Tile at position.
    #[inline] pub fn tile_at(&self, position: u8) -> u8 {
        ((self.board >> (position * BITS_PER_CELL)) & BITS_PER_CELL_MASK64) as u8
    }

    /// Returns position of the blank among the first board_size cells.
    pub fn blank_position(&self, board_size: u8) -> Option<u8> {
        (0..board_size).find(|p| self.tile_at(*p) == 0)
    }

    /// Returns tiles of the first board_size cells.
    #[inline] pub fn iter(&self, board_size: u8) -> TilesIterator {
        TilesIterator::new(self.board, board_size)
    }
}

#[derive(Copy, Clone)]
pub struct TilesIterator {
    rest: u64,
    remaining: u8
}

impl TilesIterator {
    #[inline] pub fn new(board: u64, board_size: u8) -> Self {
        Self { rest: board, remaining: board_size }
    }
}

impl Iterator for TilesIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        self.remaining -= 1;
        let result = (self.rest & BITS_PER_CELL_MASK64) as u8;
        self.rest >>= BITS_PER_CELL;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}
