//! Per-Frame Input Snapshot
//!
//! The controller core never talks to input devices. An external input
//! collaborator (see [`super::collector`]) assembles an `InputState` before
//! the frame's update runs, and the controllers read it without mutating it.
//!
//! # Contract
//!
//! - `movement` and `look` are continuous values, refreshed every frame.
//!   `movement` is clamped to the unit circle by the input layer.
//! - `jump_requested` and `dash_requested` are edge-triggered: true for
//!   exactly the frame the action fired, then cleared by the input layer
//!   whether or not the request was honored.

use glam::Vec2;

/// Input snapshot consumed by the controllers for one simulation frame.
///
/// Coordinate convention: `movement.x` is strafe right, `movement.y` is
/// forward. `look.x` is horizontal look delta (right positive), `look.y`
/// is vertical look delta (up positive); both are unitless per-frame
/// deltas, device-scaled by the input layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Movement direction, clamped to the unit circle.
    pub movement: Vec2,
    /// Look delta for this frame.
    pub look: Vec2,
    /// Jump action fired this frame (one-shot).
    pub jump_requested: bool,
    /// Dash action fired this frame (one-shot).
    pub dash_requested: bool,
    /// Sprint modifier held this frame.
    pub sprint: bool,
}

impl InputState {
    /// Create an idle snapshot (no movement, no look, no actions).
    pub fn idle() -> Self {
        Self::default()
    }

    /// True if there is any movement input at all.
    pub fn has_movement(&self) -> bool {
        self.movement != Vec2::ZERO
    }
}
