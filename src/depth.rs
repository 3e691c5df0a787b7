//! Depth-sequence normalization.
//!
//! An outline's depths must satisfy the step rule: an entry may be at most
//! one level deeper than its immediate predecessor. A node cannot skip
//! introducing intermediate parents, but it may dedent back to any
//! shallower ancestor level, so only *increases* are ever clamped.

/// Clamp the whole depth sequence to the step rule, left to right.
///
/// `depths[0]` is never modified. Idempotent: normalizing an already
/// normalized sequence is a no-op.
pub fn normalize(depths: &mut [i32]) {
    normalize_from(depths, 1);
}

/// Clamp the step rule starting at index `start`.
///
/// Entries before `start` keep their values untouched; entry `start` and
/// everything after it are clamped against their immediate predecessor.
/// Used after an explicit re-indent nudge, where the user's own requested
/// depth must survive and only the successors are re-checked against it.
pub fn normalize_from(depths: &mut [i32], start: usize) {
    for i in start.max(1)..depths.len() {
        if depths[i] > depths[i - 1] + 1 {
            depths[i] = depths[i - 1] + 1;
        }
    }
}
