//! Terminal front end glue (crossterm).
//!
//! Kept apart from the navigation core so the library builds without any
//! terminal crates.

pub mod crossterm;
pub mod terminal_guard;
