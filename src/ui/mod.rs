//! UI layer: spatial focus navigation over an immediate-mode layout pass.
//!
//! Widgets declare their elements into a [`core::frame::LayoutFrame`] and
//! paint into a [`core::painter::Painter`]; backends turn the paint list into
//! terminal cells without leaking `ratatui` types into the widgets.

pub mod core;

pub mod backend;

pub mod widgets;
