//! Input Module
//!
//! Platform-agnostic input handling for the character controller. The
//! controllers consume a per-frame [`InputState`] snapshot; the
//! [`InputCollector`] builds one from raw key/mouse events so the core
//! never depends on a windowing crate.

pub mod collector;
pub mod state;

pub use collector::{InputCollector, KeyCode};
pub use state::InputState;
