/// One node of the outline.
///
/// Entries are composite records: text, indentation depth, and the tag
/// vector travel together through every insert, remove, and swap, so the
/// three can never fall out of alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Free-text label of the node.
    pub text: String,
    /// Indentation level. Conventionally non-negative; a raw re-indent can
    /// leave a transiently negative value, which renders as depth 0.
    pub depth: i32,
    /// Boolean tags, one per label in the engine's label set. Empty when
    /// labeling is disabled.
    pub tags: Vec<bool>,
}

impl Entry {
    /// Create an entry with no tags set.
    pub fn new(text: impl Into<String>, depth: i32) -> Self {
        Self {
            text: text.into(),
            depth,
            tags: Vec::new(),
        }
    }

    /// Create an entry with an explicit tag vector.
    pub fn with_tags(text: impl Into<String>, depth: i32, tags: Vec<bool>) -> Self {
        Self {
            text: text.into(),
            depth,
            tags,
        }
    }
}

/// A borrowed display view of one entry: what a renderer needs to draw a
/// single outline line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub text: &'a str,
    /// Derived box-drawing connector prefix; draw it before `text`.
    pub prefix: &'a str,
    pub depth: i32,
    pub tags: &'a [bool],
}

/// The current interaction mode of the engine.
///
/// The same input commands perform different actions depending on the
/// mode. Mode-specific state (the captured reorder index, the live edit
/// buffer, the tag cursor) lives inside the variant that needs it, so an
/// edit buffer cannot exist outside Edit and a grabbed entry cannot exist
/// outside Reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Moving focus through the outline.
    Navigate,
    /// Focus shifted sideways onto the focused entry's tag vector.
    /// Up/down and confirm act on `cursor` instead of the outline.
    Tags {
        /// Index into the focused entry's tag vector.
        cursor: usize,
    },
    /// The focused entry is captured and moves/re-indents with the cursor.
    Reorder {
        /// The captured entry's current index; follows it through swaps.
        grabbed: usize,
    },
    /// Text entry on the focused entry.
    Edit {
        /// Working copy of the entry's text; committed on Confirm,
        /// discarded on Cancel.
        buffer: String,
        /// Cursor position in grapheme clusters, within `[0, len]`.
        cursor: usize,
    },
}

/// The closed set of abstract input commands accepted by the engine.
///
/// Hosts either produce these directly or go through the key layer in
/// [`crate::key`], which reproduces the conventional terminal bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Enter: insert-and-edit in Navigate, start editing in Reorder,
    /// commit in Edit, toggle in Tags.
    Confirm,
    /// Escape: discard the edit buffer.
    Cancel,
    /// Space: capture/release the focused entry, or flip a tag.
    Toggle,
    /// Remove the focused entry, or the grapheme after the cursor in Edit.
    Delete,
    /// Remove the focused entry, or the grapheme before the cursor in Edit.
    Backspace,
    Home,
    End,
    /// Insert one character at the edit cursor. Ignored outside Edit.
    CharacterInsert(char),
}
