//! Sliding and merging of a single row (or column) of the board.

/// Moves all present values to the beginning (by removing `None`s) and merges equal neighbours.
///
/// Two values are neighbours if they are adjacent after the `None`s are removed.
/// The pair is replaced by `merge(value)` and the merged value is never merged again during the same call,
/// so each value takes part in at most one merge.
///
/// With `merge` doubling its argument:
/// - `2, 2, 4` gives `4, 4`,
/// - `2, None` gives `2`,
/// - `4, None, 2, 2` gives `4, 4`,
/// - `2, 2, None, 2` gives `4, 2`,
/// - `2, 2, 2, 2` gives `4, 4`.
pub fn move_and_merge_equal<T, F>(slots: impl IntoIterator<Item=Option<T>>, mut merge: F) -> Vec<T>
    where T: PartialEq, F: FnMut(T) -> T
{
    let mut dense = slots.into_iter().flatten().peekable();
    let mut result = Vec::new();
    while let Some(value) = dense.next() {
        if dense.next_if_eq(&value).is_some() {
            result.push(merge(value));
        } else {
            result.push(value);
        }
    }
    result
}

/// Like `move_and_merge_equal`, but pads the result with `None`s to the length of `slots`.
pub fn compact_line<T, F>(slots: &[Option<T>], merge: F) -> Vec<Option<T>>
    where T: PartialEq + Clone, F: FnMut(T) -> T
{
    let mut result: Vec<Option<T>> = move_and_merge_equal(slots.iter().cloned(), merge)
        .into_iter().map(Some).collect();
    result.resize_with(slots.len(), || None);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(v: u32) -> u32 { v * 2 }

    fn compact(slots: &[Option<u32>]) -> Vec<u32> {
        move_and_merge_equal(slots.iter().cloned(), double)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compact(&[]), Vec::<u32>::new());
        assert_eq!(compact(&[None, None]), Vec::<u32>::new());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(compact(&[Some(2)]), vec![2]);
        assert_eq!(compact(&[None, None, Some(8), None]), vec![8]);
    }

    #[test]
    fn test_pair_merges() {
        assert_eq!(compact(&[Some(2), Some(2)]), vec![4]);
        assert_eq!(compact(&[Some(2), None, Some(2), Some(2)]), vec![4, 2]);
        assert_eq!(compact(&[Some(2), Some(2), None, Some(2)]), vec![4, 2]);
        assert_eq!(compact(&[None, Some(2), Some(2), Some(2)]), vec![4, 2]);
    }

    #[test]
    fn test_merged_value_is_not_merged_again() {
        assert_eq!(compact(&[Some(2), Some(2), Some(4)]), vec![4, 4]);
        assert_eq!(compact(&[Some(2), Some(2), Some(2), Some(2)]), vec![4, 4]);
        assert_eq!(compact(&[Some(4), Some(2), Some(2), Some(4)]), vec![4, 4, 4]);
    }

    #[test]
    fn test_different_values_are_kept() {
        assert_eq!(compact(&[Some(2), Some(4), Some(2), Some(4)]), vec![2, 4, 2, 4]);
        assert_eq!(compact(&[Some(4), None, None, Some(2)]), vec![4, 2]);
    }

    #[test]
    fn test_merge_of_strings() {
        let merged = move_and_merge_equal(
            [Some("b"), None, Some("a"), Some("a")].iter().map(|s| s.map(String::from)),
            |s| s.repeat(2));
        assert_eq!(merged, vec!["b".to_string(), "aa".to_string()]);
    }

    #[test]
    fn test_merge_called_once_per_pair() {
        let mut calls = Vec::new();
        let merged = move_and_merge_equal([Some(2), Some(2), Some(2), None, Some(8), Some(8)],
            |v| { calls.push(v); v * 2 });
        assert_eq!(merged, vec![4, 2, 16]);
        assert_eq!(calls, vec![2, 8]);
    }

    #[test]
    fn test_compact_line_pads() {
        assert_eq!(compact_line(&[Some(2), Some(2), Some(4), Some(4)], double), vec![Some(4), Some(8), None, None]);
        assert_eq!(compact_line(&[None, None, None, Some(2)], double), vec![Some(2), None, None, None]);
        assert_eq!(compact_line::<u32, _>(&[None, None], double), vec![None, None]);
        assert_eq!(compact_line::<u32, _>(&[], double), vec![]);
    }
}
