//! Tree-connector prefix derivation.
//!
//! Given a depth sequence, produce one box-drawing prefix per entry so the
//! outline renders with the conventional tree look:
//!
//! ```text
//! src
//! ├───a
//! └───b
//!     ├───ba
//!     └───bb
//! ```
//!
//! The pass runs bottom-up with a per-level visibility array: a level is
//! "visible" while some later entry still continues that branch, which is
//! exactly the information needed to choose between a mid-branch
//! connector, a last-child elbow, a continuation bar, or blank space.
//! Visibility at any index depends on everything below it, so prefixes are
//! recomputed wholesale, never patched incrementally.

/// Continuation bar through an ancestor level that has more siblings below.
pub const CONTINUATION: &str = "│   ";
/// Blank run under an ancestor level whose branch is finished.
pub const BLANK: &str = "    ";
/// Connector for an entry with a shallower-or-equal entry below it.
pub const BRANCH: &str = "├───";
/// Connector for the last entry of its branch.
pub const ELBOW: &str = "└───";

/// Derive one prefix string per entry from the depth sequence.
///
/// Pure function of `depths`: identical sequences yield identical
/// prefixes regardless of entry text or call history. Entries at depth 0
/// (or any transiently negative depth) get an empty prefix.
pub fn render(depths: &[i32]) -> Vec<String> {
    let mut prefixes = vec![String::new(); depths.len()];
    if depths.is_empty() {
        return prefixes;
    }

    let max_depth = depths.iter().copied().max().unwrap_or(0).max(0) as usize;
    let mut visible = vec![false; max_depth + 1];

    let mut next_depth = depths[depths.len() - 1];
    for i in (0..depths.len()).rev() {
        let cur = depths[i];

        // The entry below was shallower: every level it cut off starts a
        // fresh branch, with no continuation drawn through it.
        if next_depth < cur {
            for level in (next_depth + 1).max(1)..=cur {
                visible[level as usize] = false;
            }
        }
        next_depth = cur;

        if cur > 0 {
            let prefix = &mut prefixes[i];
            for level in 1..cur as usize {
                prefix.push_str(if visible[level] { CONTINUATION } else { BLANK });
            }
            prefix.push_str(if visible[cur as usize] { BRANCH } else { ELBOW });
            visible[cur as usize] = true;
        }
    }

    prefixes
}
