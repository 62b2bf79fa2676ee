//! Placement of periodic contribution events across a series.

/// Day indices receiving a periodic contribution event.
///
/// `count` events are spread across `len` days with a spacing of
/// `len / count` (integer division), landing at indices `0, step, 2*step, ..`.
/// The truncated spacing keeps the events evenly spaced but not necessarily
/// aligned with the last day; days after the final event receive no further
/// contribution.
///
/// `count = 0` yields no events. Callers must ensure `count <= len`; the
/// engine rejects anything else before scheduling.
pub fn contribution_indices(count: usize, len: usize) -> Vec<usize> {
    if count == 0 || len == 0 {
        return Vec::new();
    }
    let step = len / count;
    (0..count).map(|i| i * step).collect()
}
