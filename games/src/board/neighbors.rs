use crate::board::Direction;
use arrayvec::ArrayVec;

/// Marks the lack of neighbor in the given direction.
pub const DENIED: u8 = u8::MAX;

/// Maximal number of cells supported by the neighbors table.
pub const MAX_BOARD_SIZE: usize = 16;

/// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
pub type Neighbors = [[u8; 4]; MAX_BOARD_SIZE];

/// Returns cell number = index of cell with given (c, r) coordinates in the board with given number of cols.
#[inline(always)] pub fn cell_nr(cols: u8, c: u8, r: u8) -> u8 { r * cols + c }

/// Constructs neighbors matrix for the board of the size `cols` x `rows`.
/// `cols * rows` must not exceed `MAX_BOARD_SIZE`.
pub fn construct_neighbors(cols: u8, rows: u8) -> Neighbors {
    let mut neighbors = [[DENIED; 4]; MAX_BOARD_SIZE];
    for r in 0..rows {
        for c in 0..cols {
            let cell = &mut neighbors[cell_nr(cols, c, r) as usize];
            if c != 0 { cell[Direction::Left.index()] = cell_nr(cols, c-1, r); }
            if r != 0 { cell[Direction::Up.index()] = cell_nr(cols, c, r-1); }
            if c+1 != cols { cell[Direction::Right.index()] = cell_nr(cols, c+1, r); }
            if r+1 != rows { cell[Direction::Down.index()] = cell_nr(cols, c, r+1); }
        }
    }
    neighbors
}

/// Returns the neighbor of `cell` in the given `direction`, if there is one.
#[inline] pub fn neighbor_in(neighbors: &Neighbors, cell: u8, direction: Direction) -> Option<u8> {
    let n = neighbors[cell as usize][direction.index()];
    (n != DENIED).then_some(n)
}

/// Returns neighbors (cell numbers) of the given `cell`.
pub fn neighbors_of(neighbors: &Neighbors, cell: u8) -> ArrayVec::<u8, 4> {
    Direction::ALL.iter().filter_map(|d| neighbor_in(neighbors, cell, *d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::iter::FromIterator;

    #[test]
    fn test_cell_nr() {
        assert_eq!(cell_nr(2, 0, 0), 0);
        assert_eq!(cell_nr(2, 1, 0), 1);
        assert_eq!(cell_nr(2, 0, 1), 2);
        assert_eq!(cell_nr(2, 1, 1), 3);
        assert_eq!(cell_nr(2, 0, 2), 4);
        assert_eq!(cell_nr(2, 1, 2), 5);
    }

    #[test]
    fn test_neighbors_3x2() {
        let neighbors = construct_neighbors(3, 2);
        assert_eq!(neighbor_in(&neighbors, cell_nr(3, 0, 0), Direction::Left), None);
        assert_eq!(neighbor_in(&neighbors, cell_nr(3, 0, 0), Direction::Up), None);
        assert_eq!(neighbor_in(&neighbors, cell_nr(3, 0, 0), Direction::Right), Some(cell_nr(3, 1, 0)));
        assert_eq!(neighbor_in(&neighbors, cell_nr(3, 0, 0), Direction::Down), Some(cell_nr(3, 0, 1)));
        let neighbors_of_00 = neighbors_of(&neighbors, cell_nr(3, 0, 0));
        assert_eq!(neighbors_of_00.as_slice(), &[cell_nr(3, 1, 0), cell_nr(3, 0, 1)]);

        assert_eq!(neighbors[cell_nr(3, 1, 1) as usize][Direction::Left.index()], cell_nr(3, 0, 1));
        assert_eq!(neighbors[cell_nr(3, 1, 1) as usize][Direction::Up.index()], cell_nr(3, 1, 0));
        assert_eq!(neighbors[cell_nr(3, 1, 1) as usize][Direction::Right.index()], cell_nr(3, 2, 1));
        assert_eq!(neighbors[cell_nr(3, 1, 1) as usize][Direction::Down.index()], DENIED);
        assert_eq!(neighbors_of(&neighbors, cell_nr(3, 1, 1)).len(), 3);

        assert_eq!(neighbors_of(&neighbors, cell_nr(3, 2, 1)).len(), 2);
    }

    #[test]
    fn test_neighbors_4x4_corners() {
        let neighbors = construct_neighbors(4, 4);
        assert_eq!(neighbors_of(&neighbors, 0).len(), 2);
        assert_eq!(neighbors_of(&neighbors, 5).len(), 4);
        assert_eq!(neighbor_in(&neighbors, 15, Direction::Up), Some(11));
        assert_eq!(neighbor_in(&neighbors, 15, Direction::Left), Some(14));
        assert_eq!(neighbor_in(&neighbors, 15, Direction::Down), None);
    }
}
