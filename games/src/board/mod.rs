pub mod neighbors;

use crate::error::GameError;
use std::fmt;

/// Largest supported board width.
pub const MAX_WIDTH: usize = u8::MAX as usize;

/// Cell of the square board, `i` is the row and `j` the column, both counted from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub i: usize,
    pub j: usize
}

impl Cell {
    #[inline] pub fn new(i: usize, j: usize) -> Self { Self { i, j } }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// A direction to move tiles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    /// Index used by neighbors tables.
    #[inline] pub const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    #[inline] pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// Storage of optional values addressed by cells, as seen by the move logic.
pub trait Board<T> {
    /// Value stored in `cell` or `None` if the cell is empty.
    fn get(&self, cell: Cell) -> Option<&T>;

    /// Stores `value` in `cell`, `None` empties the cell.
    fn set(&mut self, cell: Cell, value: Option<T>);

    /// Returns all rows (for horizontal directions) or columns (for vertical ones),
    /// each one ordered so that its first cell is the one tiles travel towards.
    fn cells_in_direction(&self, direction: Direction) -> Vec<Vec<Cell>>;
}

/// Square `width` x `width` board of optional values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameBoard<T> {
    width: usize,
    /// Row-major cell values.
    values: Vec<Option<T>>
}

impl<T> GameBoard<T> {
    /// Constructs the empty board. `width` must be in range 1..=MAX_WIDTH.
    pub fn new(width: usize) -> Result<Self, GameError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(GameError::InvalidWidth { width, min: 1, max: MAX_WIDTH });
        }
        let mut values = Vec::with_capacity(width * width);
        values.resize_with(width * width, || None);
        Ok(Self { width, values })
    }

    /// Constructs the board with cells filled row by row from `values`.
    /// Cells without a corresponding value stay empty, surplus values are ignored.
    pub fn from_values(width: usize, values: impl IntoIterator<Item=Option<T>>) -> Result<Self, GameError> {
        let mut result = Self::new(width)?;
        for (slot, value) in result.values.iter_mut().zip(values) {
            *slot = value;
        }
        Ok(result)
    }

    #[inline] pub fn width(&self) -> usize { self.width }

    #[inline] fn index(&self, cell: Cell) -> usize { cell.i * self.width + cell.j }

    /// Returns the cell at (i, j) or `None` if it lies outside the board.
    pub fn cell_or_none(&self, i: usize, j: usize) -> Option<Cell> {
        (i < self.width && j < self.width).then(|| Cell::new(i, j))
    }

    /// Returns the cell at (i, j) or an error if it lies outside the board.
    pub fn cell(&self, i: usize, j: usize) -> Result<Cell, GameError> {
        self.cell_or_none(i, j).ok_or(GameError::CellOutOfBounds { i, j, width: self.width })
    }

    /// Returns all cells, row by row.
    pub fn all_cells(&self) -> impl Iterator<Item=Cell> + '_ {
        (0..self.width).flat_map(move |i| (0..self.width).map(move |j| Cell::new(i, j)))
    }

    /// Returns cells of the row `i` with columns given by `js` (in order), skipping columns outside the board.
    pub fn row(&self, i: usize, js: impl IntoIterator<Item=usize>) -> Vec<Cell> {
        if i >= self.width { return Vec::new(); }
        js.into_iter().filter(|j| *j < self.width).map(|j| Cell::new(i, j)).collect()
    }

    /// Returns cells of the column `j` with rows given by `is` (in order), skipping rows outside the board.
    pub fn column(&self, is: impl IntoIterator<Item=usize>, j: usize) -> Vec<Cell> {
        if j >= self.width { return Vec::new(); }
        is.into_iter().filter(|i| *i < self.width).map(|i| Cell::new(i, j)).collect()
    }

    /// Returns the cell adjacent to `cell` in the given `direction`, if there is one.
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let Cell { i, j } = cell;
        match direction {
            Direction::Up => i.checked_sub(1).map(|i| Cell::new(i, j)),
            Direction::Down => self.cell_or_none(i + 1, j),
            Direction::Left => j.checked_sub(1).map(|j| Cell::new(i, j)),
            Direction::Right => self.cell_or_none(i, j + 1),
        }
    }

    /// Returns values of all cells, row by row.
    pub fn values(&self) -> impl Iterator<Item=Option<&T>> + '_ {
        self.values.iter().map(Option::as_ref)
    }

    /// Returns cells whose values satisfy `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Vec<Cell> {
        self.all_cells().filter(|c| predicate(self.get(*c))).collect()
    }

    /// Returns the first cell (row by row) whose value satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Option<Cell> {
        self.all_cells().find(|c| predicate(self.get(*c)))
    }

    pub fn any(&self, predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.values().any(predicate)
    }

    pub fn all(&self, predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.values().all(predicate)
    }
}

impl<T> Board<T> for GameBoard<T> {
    #[inline] fn get(&self, cell: Cell) -> Option<&T> {
        self.values[self.index(cell)].as_ref()
    }

    #[inline] fn set(&mut self, cell: Cell, value: Option<T>) {
        let index = self.index(cell);
        self.values[index] = value;
    }

    fn cells_in_direction(&self, direction: Direction) -> Vec<Vec<Cell>> {
        let w = self.width;
        match direction {
            Direction::Left => (0..w).map(|i| self.row(i, 0..w)).collect(),
            Direction::Right => (0..w).map(|i| self.row(i, (0..w).rev())).collect(),
            Direction::Up => (0..w).map(|j| self.column(0..w, j)).collect(),
            Direction::Down => (0..w).map(|j| self.column((0..w).rev(), j)).collect(),
        }
    }
}

/// Writes `width` rows of `width` values given by `value_at(i, j)`, `.` marks empty cells.
pub fn write_grid<T, W, F>(out: &mut W, width: usize, mut value_at: F) -> fmt::Result
    where T: fmt::Display, W: fmt::Write + ?Sized, F: FnMut(usize, usize) -> Option<T>
{
    for i in 0..width {
        for j in 0..width {
            match value_at(i, j) {
                Some(v) => write!(out, "{:>6}", v)?,
                None => write!(out, "{:>6}", '.')?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for GameBoard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.width, |i, j| self.get(Cell::new(i, j)))
    }
}
