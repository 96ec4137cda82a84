//! Input plumbing between the terminal and the navigation engine.

pub mod event;
pub mod input_queue;
pub mod keymap;

pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use input_queue::{input_queue, DirectionalThrottle, InputProcessor, InputQueue, InputSender};
pub use keymap::Keymap;
