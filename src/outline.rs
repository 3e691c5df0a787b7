use crate::types::{Entry, Row};
use crate::{depth, prefix};

/// The ordered entry store plus its derived prefix cache.
///
/// Each entry is one composite record, so a single `Vec` operation keeps
/// text, depth, and tags aligned through every mutation. The prefix cache
/// is refreshed by the store itself after anything that can change depths
/// or order; callers read it, never write it.
///
/// Index arguments are asserted in range by the caller (the engine keeps
/// focus within bounds); an out-of-range index is a programming error and
/// panics rather than clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<Entry>,
    prefixes: Vec<String>,
    label_count: usize,
}

impl Outline {
    /// Create an empty outline whose entries carry `label_count` tags each.
    pub fn new(label_count: usize) -> Self {
        Self {
            entries: Vec::new(),
            prefixes: Vec::new(),
            label_count,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.label_count
    }

    pub fn entry(&self, at: usize) -> &Entry {
        &self.entries[at]
    }

    pub fn depth(&self, at: usize) -> i32 {
        self.entries[at].depth
    }

    pub fn prefix(&self, at: usize) -> &str {
        &self.prefixes[at]
    }

    /// Display views of all entries, in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.entries.iter().zip(&self.prefixes).map(|(e, p)| Row {
            text: e.text.as_str(),
            prefix: p.as_str(),
            depth: e.depth,
            tags: &e.tags,
        })
    }

    /// Insert a new entry at `at` (0 <= at <= len) with empty text and a
    /// zero-filled tag vector, then renormalize and refresh prefixes.
    pub fn insert(&mut self, at: usize, depth: i32) {
        let entry = Entry::with_tags(String::new(), depth, vec![false; self.label_count]);
        self.entries.insert(at, entry);
        self.normalize();
    }

    /// Remove the entry at `at`, then renormalize and refresh prefixes.
    ///
    /// Defined no-op when only one entry remains; returns whether an entry
    /// was actually removed.
    pub fn remove(&mut self, at: usize) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.remove(at);
        self.normalize();
        true
    }

    /// Exchange entries `i` and `j` wholesale, cached prefixes included.
    ///
    /// Does not renormalize: reordering may leave a transiently invalid
    /// depth that a later normalization pass clamps.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.prefixes.swap(i, j);
    }

    /// Store a raw depth value and refresh prefixes.
    ///
    /// The value may be negative or violate the step rule; callers decide
    /// when the next normalization pass runs.
    pub fn set_depth(&mut self, at: usize, depth: i32) {
        self.entries[at].depth = depth;
        self.refresh_prefixes();
    }

    pub fn set_text(&mut self, at: usize, text: String) {
        self.entries[at].text = text;
    }

    /// Flip one tag on the entry at `at`.
    pub fn toggle_tag(&mut self, at: usize, tag: usize) {
        let slot = &mut self.entries[at].tags[tag];
        *slot = !*slot;
    }

    /// Clamp the whole depth sequence to the step rule and refresh prefixes.
    pub fn normalize(&mut self) {
        self.normalize_depths(1);
    }

    /// Clamp only the entries strictly after `at`, leaving the depth at
    /// `at` itself untouched, and refresh prefixes. Used after a re-indent
    /// nudge so the user's requested depth is never clamped back down.
    pub fn normalize_after(&mut self, at: usize) {
        self.normalize_depths(at + 1);
    }

    /// Clone the entries for the persistence collaborator.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    /// Replace the whole outline. Tag vectors are padded or truncated to
    /// the label count so alignment holds regardless of what was loaded.
    pub fn replace(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        for entry in &mut self.entries {
            entry.tags.resize(self.label_count, false);
        }
        self.normalize();
    }

    fn normalize_depths(&mut self, start: usize) {
        let mut depths: Vec<i32> = self.entries.iter().map(|e| e.depth).collect();
        depth::normalize_from(&mut depths, start);
        for (entry, d) in self.entries.iter_mut().zip(&depths) {
            entry.depth = *d;
        }
        self.prefixes = prefix::render(&depths);
    }

    fn refresh_prefixes(&mut self) {
        let depths: Vec<i32> = self.entries.iter().map(|e| e.depth).collect();
        self.prefixes = prefix::render(&depths);
    }
}
