pub mod depth;
pub mod engine;
pub mod key;
pub mod outline;
pub mod prefix;
pub mod types;

pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers, keymap};
pub use crate::outline::Outline;
pub use crate::types::{Entry, InputCommand, Mode, Row};
