//! Slice parameter normalisation.

/// Resolve a possibly-negative `(index, length)` pair against `count`.
///
/// Returns the `(offset, len)` of the sub-range to copy:
///
/// - a negative `index` starts that far from the end (clamped to 0);
/// - `None` length means "to the end";
/// - a negative `length` stops that far from the end;
/// - the length is clamped so the range never passes `count`.
///
/// An index at or past the end yields an empty range.
pub fn normalize(count: usize, index: isize, length: Option<isize>) -> (usize, usize) {
    let count_i = count as isize;
    if count == 0 || index >= count_i {
        return (0, 0);
    }
    let offset = if index < 0 {
        (count_i + index).max(0)
    } else {
        index
    };
    let remaining = count_i - offset;
    let len = match length {
        None => remaining,
        Some(length) if length < 0 => (remaining + length).max(0),
        Some(length) => length.min(remaining),
    };
    (offset as usize, len as usize)
}
