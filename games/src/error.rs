/// Errors reported while constructing boards and games or addressing their cells.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board width {width}, expected a value in {min}..={max}")]
    InvalidWidth { width: usize, min: usize, max: usize },
    #[error("cell ({i}, {j}) is outside the board of width {width}")]
    CellOutOfBounds { i: usize, j: usize, width: usize },
    #[error("initial tiles are not a permutation of 1..{expected_len}")]
    NotAPermutation { expected_len: usize },
}
