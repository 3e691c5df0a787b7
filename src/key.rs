use crate::types::InputCommand;

/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    /// The Enter/Return key.
    Enter,
    /// The Escape key, used to cancel an edit.
    Esc,
    Backspace,
    Delete,
    Home,
    End,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

/// Input events that can be processed by the engine's key layer.
///
/// This enum distinguishes between key presses (used for commands)
/// and text input (used while editing an entry's label). The separate
/// character channel lets hosts forward composed characters and IME input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press event, typically used for commands and navigation.
    Key(KeyEvent),
    /// A character received in text input mode.
    ReceivedChar(char),
}

/// Map a key event to an abstract command using the conventional bindings:
/// arrows move, Enter confirms, Esc cancels, Space toggles, Backspace and
/// Delete remove, Home/End jump.
///
/// While `editing` is set, printable character keys (without Ctrl/Alt)
/// become [`InputCommand::CharacterInsert`] instead, so Space inserts a
/// space rather than toggling. Unmapped keys yield `None`.
pub fn keymap(event: KeyEvent, editing: bool) -> Option<InputCommand> {
    if editing
        && let KeyCode::Char(c) = event.code
        && !event.mods.intersects(Modifiers::CTRL | Modifiers::ALT)
    {
        return Some(InputCommand::CharacterInsert(c));
    }

    match event.code {
        KeyCode::Up => Some(InputCommand::MoveUp),
        KeyCode::Down => Some(InputCommand::MoveDown),
        KeyCode::Left => Some(InputCommand::MoveLeft),
        KeyCode::Right => Some(InputCommand::MoveRight),
        KeyCode::Enter => Some(InputCommand::Confirm),
        KeyCode::Esc => Some(InputCommand::Cancel),
        KeyCode::Char(' ') => Some(InputCommand::Toggle),
        KeyCode::Backspace => Some(InputCommand::Backspace),
        KeyCode::Delete => Some(InputCommand::Delete),
        KeyCode::Home => Some(InputCommand::Home),
        KeyCode::End => Some(InputCommand::End),
        KeyCode::Char(_) => None,
    }
}
