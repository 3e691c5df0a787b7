use unicode_segmentation::UnicodeSegmentation;

use crate::key::{InputEvent, keymap};
use crate::outline::Outline;
use crate::types::{Entry, InputCommand, Mode, Row};

/// The modal outline-editing engine.
///
/// One engine owns one outline and drives it from abstract input commands.
/// Interaction is modal: the same command means different things in
/// Navigate, Reorder, Edit, and the Tags sub-mode, and any command the
/// current mode does not recognize is reported as unconsumed so the host
/// can fall through to its own handling (global focus traversal, quit
/// keys, and so on).
#[derive(Debug, Clone)]
pub struct Engine {
    outline: Outline,
    focus: usize,
    mode: Mode,
}

/// Display-ready copy of the engine's interaction state.
#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub mode: Mode,
    pub focus: usize,
    /// The captured entry index; meaningful only while reordering.
    pub selection: Option<usize>,
}

#[derive(Default)]
pub struct EngineBuilder {
    label_count: usize,
    entries: Vec<Entry>,
}

impl EngineBuilder {
    /// Enable tagging with a label set of `count` labels. Zero disables
    /// tagging and the Tags sub-mode entirely.
    pub fn labels(mut self, count: usize) -> Self {
        self.label_count = count;
        self
    }

    /// Pre-populate the outline. Tag vectors are padded or truncated to
    /// the label count; depths are normalized.
    pub fn entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn build(self) -> Engine {
        let mut outline = Outline::new(self.label_count);
        outline.replace(self.entries);
        Engine {
            outline,
            focus: 0,
            mode: Mode::Navigate,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interaction mode, including the live edit buffer and cursor
    /// while editing and the tag cursor while in the Tags sub-mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// The captured entry index; `Some` only while reordering.
    pub fn selection(&self) -> Option<usize> {
        match self.mode {
            Mode::Reorder { grabbed } => Some(grabbed),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            mode: self.mode.clone(),
            focus: self.focus,
            selection: self.selection(),
        }
    }

    pub fn len(&self) -> usize {
        self.outline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.outline.label_count()
    }

    pub fn is_labeling_enabled(&self) -> bool {
        self.outline.label_count() > 0
    }

    /// Display views of all entries, in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.outline.rows()
    }

    /// Replace the whole outline: focus returns to 0, mode to Navigate,
    /// depths are normalized and prefixes recomputed.
    pub fn load(&mut self, entries: Vec<Entry>) {
        self.outline.replace(entries);
        self.focus = 0;
        self.mode = Mode::Navigate;
    }

    /// Clone the current entries for the persistence collaborator.
    /// `load(export())` reproduces an equivalent outline.
    pub fn export(&self) -> Vec<Entry> {
        self.outline.entries()
    }

    /// Process one abstract input command; returns whether it was consumed.
    pub fn handle_input(&mut self, input: InputCommand) -> bool {
        match self.mode {
            Mode::Navigate => self.on_navigate(input),
            Mode::Tags { cursor } => self.on_tags(input, cursor),
            Mode::Reorder { .. } => self.on_reorder(input),
            Mode::Edit { .. } => self.on_edit(input),
        }
    }

    /// Key layer on top of [`handle_input`](Self::handle_input): translate
    /// a host key event through the conventional keymap and process it.
    pub fn handle_event(&mut self, input: InputEvent) -> bool {
        let command = match input {
            InputEvent::ReceivedChar(ch) => InputCommand::CharacterInsert(ch),
            InputEvent::Key(key) => {
                let editing = matches!(self.mode, Mode::Edit { .. });
                match keymap(key, editing) {
                    Some(command) => command,
                    None => return false,
                }
            }
        };
        self.handle_input(command)
    }

    fn on_navigate(&mut self, input: InputCommand) -> bool {
        match input {
            InputCommand::MoveDown => {
                self.move_focus(1);
                true
            }
            InputCommand::MoveUp => {
                self.move_focus(-1);
                true
            }
            InputCommand::Toggle => {
                if !self.outline.is_empty() {
                    self.mode = Mode::Reorder {
                        grabbed: self.focus,
                    };
                }
                true
            }
            InputCommand::Confirm => {
                // Every new entry is born in text-entry mode, one level
                // below the entry it was created under.
                if self.outline.is_empty() {
                    self.outline.insert(0, 0);
                    self.focus = 0;
                } else {
                    let depth = self.outline.depth(self.focus) + 1;
                    self.outline.insert(self.focus + 1, depth);
                    self.focus += 1;
                }
                self.enter_edit();
                true
            }
            InputCommand::Delete | InputCommand::Backspace => {
                self.remove_focused();
                true
            }
            InputCommand::MoveRight => {
                if self.is_labeling_enabled() && !self.outline.is_empty() {
                    self.mode = Mode::Tags { cursor: 0 };
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn on_tags(&mut self, input: InputCommand, cursor: usize) -> bool {
        let count = self.outline.label_count();
        match input {
            InputCommand::MoveDown => {
                self.mode = Mode::Tags {
                    cursor: (cursor + 1) % count,
                };
                true
            }
            InputCommand::MoveUp => {
                self.mode = Mode::Tags {
                    cursor: (cursor + count - 1) % count,
                };
                true
            }
            InputCommand::Confirm | InputCommand::Toggle => {
                self.outline.toggle_tag(self.focus, cursor);
                true
            }
            InputCommand::MoveLeft => {
                self.mode = Mode::Navigate;
                true
            }
            InputCommand::Delete | InputCommand::Backspace => {
                self.remove_focused();
                true
            }
            _ => false,
        }
    }

    fn on_reorder(&mut self, input: InputCommand) -> bool {
        match input {
            InputCommand::MoveDown => {
                self.swap_focused(1);
                true
            }
            InputCommand::MoveUp => {
                self.swap_focused(-1);
                true
            }
            InputCommand::MoveRight => {
                self.nudge_depth(1);
                true
            }
            InputCommand::MoveLeft => {
                self.nudge_depth(-1);
                true
            }
            InputCommand::Toggle => {
                self.mode = Mode::Navigate;
                true
            }
            InputCommand::Confirm => {
                self.enter_edit();
                true
            }
            InputCommand::Delete | InputCommand::Backspace => {
                self.remove_focused();
                self.mode = Mode::Navigate;
                true
            }
            _ => false,
        }
    }

    fn on_edit(&mut self, input: InputCommand) -> bool {
        let Mode::Edit { buffer, cursor } = &mut self.mode else {
            return false;
        };
        match input {
            InputCommand::CharacterInsert(ch) => {
                let at = byte_offset(buffer, *cursor);
                buffer.insert(at, ch);
                *cursor += 1;
                true
            }
            InputCommand::MoveLeft => {
                *cursor = cursor.saturating_sub(1);
                true
            }
            InputCommand::MoveRight => {
                if *cursor < grapheme_len(buffer) {
                    *cursor += 1;
                }
                true
            }
            InputCommand::Home => {
                *cursor = 0;
                true
            }
            InputCommand::End => {
                *cursor = grapheme_len(buffer);
                true
            }
            InputCommand::Backspace => {
                if *cursor > 0 {
                    *cursor -= 1;
                    remove_grapheme(buffer, *cursor);
                }
                true
            }
            InputCommand::Delete => {
                if *cursor < grapheme_len(buffer) {
                    remove_grapheme(buffer, *cursor);
                }
                true
            }
            InputCommand::Confirm => {
                let text = std::mem::take(buffer);
                self.outline.set_text(self.focus, text);
                self.mode = Mode::Navigate;
                true
            }
            InputCommand::Cancel => {
                self.mode = Mode::Navigate;
                true
            }
            _ => false,
        }
    }

    /// Move focus straight to a resolved index, e.g. from host mouse
    /// hit-testing. The index wraps like keyboard navigation. Tag focus
    /// returns to the list; while reordering (or editing), the captured
    /// entry travels to the new position.
    pub fn focus_to(&mut self, index: usize) {
        let n = self.outline.len();
        if n == 0 {
            return;
        }
        let index = index % n;
        if matches!(self.mode, Mode::Tags { .. }) {
            self.mode = Mode::Navigate;
        }
        if index == self.focus {
            return;
        }
        match self.mode {
            Mode::Reorder { .. } => {
                self.outline.swap(self.focus, index);
                self.mode = Mode::Reorder { grabbed: index };
            }
            Mode::Edit { .. } => {
                self.outline.swap(self.focus, index);
            }
            _ => {}
        }
        self.focus = index;
    }

    /// Wrap-around focus move; no-op on an empty outline.
    fn move_focus(&mut self, delta: isize) {
        let n = self.outline.len();
        if n == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(n as isize) as usize;
    }

    /// Swap the focused entry with its wrap-around neighbor and follow it.
    fn swap_focused(&mut self, delta: isize) {
        let n = self.outline.len();
        if n == 0 {
            return;
        }
        let dst = (self.focus as isize + delta).rem_euclid(n as isize) as usize;
        self.outline.swap(self.focus, dst);
        self.focus = dst;
        self.mode = Mode::Reorder { grabbed: dst };
    }

    /// Apply the user's explicit ±1 re-indent raw, then re-check only the
    /// successors against it; the requested value itself is never clamped.
    fn nudge_depth(&mut self, delta: i32) {
        if self.outline.is_empty() {
            return;
        }
        let depth = self.outline.depth(self.focus) + delta;
        self.outline.set_depth(self.focus, depth);
        self.outline.normalize_after(self.focus);
    }

    /// Remove the focused entry (defined no-op on the last one) and pull
    /// focus back in range if it fell off the end.
    fn remove_focused(&mut self) {
        if self.outline.remove(self.focus) && self.focus >= self.outline.len() {
            self.focus = self.outline.len() - 1;
        }
    }

    /// Seed the edit buffer from the focused entry, cursor at the end.
    fn enter_edit(&mut self) {
        let text = self.outline.entry(self.focus).text.clone();
        let cursor = grapheme_len(&text);
        self.mode = Mode::Edit {
            buffer: text,
            cursor,
        };
    }
}

fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of the grapheme at `cursor`, or the end of the string.
fn byte_offset(s: &str, cursor: usize) -> usize {
    s.grapheme_indices(true)
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn remove_grapheme(s: &mut String, at: usize) {
    if let Some((start, grapheme)) = s.grapheme_indices(true).nth(at) {
        let end = start + grapheme.len();
        s.drain(start..end);
    }
}
