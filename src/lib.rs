//! padnav: spatial focus navigation for immediate-mode UIs.
//!
//! Modules:
//! - core: input events, keymap, bounded input queue
//! - services: runtime configuration and the settings file
//! - ui: identity hashing, layout recording, focus registry, spatial index,
//!   navigation engine, widgets and render backends
//! - app: the two-screen demo driven by the engine
//! - tui: crossterm glue for the terminal demo

pub mod app;
pub mod core;
pub mod services;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
