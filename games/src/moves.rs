//! Applying a directional move to every row or column of a board.

use crate::board::{Board, Cell, Direction};
use crate::compactor::move_and_merge_equal;
use log::debug;

/// How lines that are entirely full are handled by `move_values_in_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FullLines {
    /// Full (and empty) lines are left untouched, every other line is compacted and reported as changed,
    /// even if compaction gives the same line.
    Skip,
    /// Every non-empty line is compacted and reported as changed only if its content differs afterwards.
    /// Full lines with equal neighbours are merged.
    #[default]
    Merge,
}

/// Moves the values stored in `cells` towards the first cell, merging equal neighbours with `merge`.
/// Returns `true` if the line was changed (see `FullLines` for the meaning of a change).
pub fn move_values_in_line<T, B, F>(board: &mut B, cells: &[Cell], full_lines: FullLines, merge: F) -> bool
    where T: PartialEq + Clone, B: Board<T> + ?Sized, F: FnMut(T) -> T
{
    let before: Vec<Option<T>> = cells.iter().map(|c| board.get(*c).cloned()).collect();
    if before.iter().all(Option::is_none) { return false; }
    if full_lines == FullLines::Skip && before.iter().all(Option::is_some) { return false; }

    let mut merged = move_and_merge_equal(before.iter().cloned(), merge).into_iter();
    let mut changed = full_lines == FullLines::Skip;
    for (cell, old) in cells.iter().zip(before) {
        let new = merged.next();
        if new != old { changed = true; }
        board.set(*cell, new);
    }
    changed
}

/// Moves the values of the whole `board` in the given `direction`.
/// Returns `true` if any row (or column) was changed.
pub fn move_values<T, B, F>(board: &mut B, direction: Direction, full_lines: FullLines, mut merge: F) -> bool
    where T: PartialEq + Clone, B: Board<T> + ?Sized, F: FnMut(T) -> T
{
    let mut changed = false;
    for line in board.cells_in_direction(direction) {
        // every line must be moved, so no short-circuit here
        changed |= move_values_in_line(&mut *board, &line, full_lines, &mut merge);
    }
    debug!("move {direction} ({full_lines:?}): changed={changed}");
    changed
}
