//! Input Collector
//!
//! Turns raw key and mouse-delta events into per-frame [`InputState`]
//! snapshots. Decoupled from any windowing system: callers translate their
//! backend's key codes into the small [`KeyCode`] subset here.
//!
//! Jump and dash are edge-triggered with press debounce: holding the key
//! produces exactly one request until the key is released and pressed again.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickstep_engine::input::{InputCollector, KeyCode};
//!
//! let mut collector = InputCollector::new();
//!
//! collector.handle_key(KeyCode::W, true);
//! collector.handle_key(KeyCode::Space, true);
//! collector.handle_mouse_delta(4.0, -1.5);
//!
//! let input = collector.snapshot();
//! // ... run the frame update ...
//! collector.end_frame();
//! ```

use glam::Vec2;

use super::state::InputState;

/// Key codes relevant to the character controller.
///
/// A deliberate subset; anything else maps to `Unknown` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key - forward movement
    W,
    /// A key - left strafe
    A,
    /// S key - backward movement
    S,
    /// D key - right strafe
    D,
    /// Space - jump
    Space,
    /// Q key - dash
    Q,
    /// Left Shift - sprint modifier
    ShiftLeft,
    /// Right Shift - sprint modifier
    ShiftRight,
    /// Catch-all for unsupported keys
    Unknown,
}

/// Collects raw input events and produces per-frame snapshots.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    // Movement keys (WASD)
    key_forward: bool,
    key_backward: bool,
    key_left: bool,
    key_right: bool,

    // Sprint modifier
    key_sprint: bool,

    // Edge-triggered actions (debounced on press)
    jump_was_pressed: bool,
    jump_triggered: bool,
    dash_was_pressed: bool,
    dash_triggered: bool,

    // Mouse delta accumulator
    look_delta: Vec2,
}

impl InputCollector {
    /// Create a collector with all inputs released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was relevant to the controller.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.key_forward = pressed;
                true
            }
            KeyCode::S => {
                self.key_backward = pressed;
                true
            }
            KeyCode::A => {
                self.key_left = pressed;
                true
            }
            KeyCode::D => {
                self.key_right = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.key_sprint = pressed;
                true
            }
            KeyCode::Space => {
                if pressed && !self.jump_was_pressed {
                    self.jump_triggered = true;
                }
                self.jump_was_pressed = pressed;
                true
            }
            KeyCode::Q => {
                if pressed && !self.dash_was_pressed {
                    self.dash_triggered = true;
                }
                self.dash_was_pressed = pressed;
                true
            }
            KeyCode::Unknown => false,
        }
    }

    /// Accumulate a mouse movement delta.
    ///
    /// Positive `dx` is rightward, positive `dy` is upward.
    pub fn handle_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Build the snapshot for the current frame.
    ///
    /// The movement vector is clamped to the unit circle so diagonal input
    /// is not faster than cardinal input.
    pub fn snapshot(&self) -> InputState {
        let movement = Vec2::new(
            (self.key_right as i32 - self.key_left as i32) as f32,
            (self.key_forward as i32 - self.key_backward as i32) as f32,
        )
        .clamp_length_max(1.0);

        InputState {
            movement,
            look: self.look_delta,
            jump_requested: self.jump_triggered,
            dash_requested: self.dash_triggered,
            sprint: self.key_sprint,
        }
    }

    /// Reset per-frame state: one-shot triggers and the mouse accumulator.
    ///
    /// Held key states persist until the key is released.
    pub fn end_frame(&mut self) {
        self.jump_triggered = false;
        self.dash_triggered = false;
        self.look_delta = Vec2::ZERO;
    }

    /// Fully reset all input state, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_axes() {
        let mut collector = InputCollector::new();
        collector.handle_key(KeyCode::W, true);
        assert_eq!(collector.snapshot().movement, Vec2::new(0.0, 1.0));

        collector.handle_key(KeyCode::W, false);
        collector.handle_key(KeyCode::S, true);
        assert_eq!(collector.snapshot().movement, Vec2::new(0.0, -1.0));

        collector.handle_key(KeyCode::W, true);
        // W + S cancel out
        assert_eq!(collector.snapshot().movement.y, 0.0);
    }

    #[test]
    fn test_diagonal_clamped_to_unit_circle() {
        let mut collector = InputCollector::new();
        collector.handle_key(KeyCode::W, true);
        collector.handle_key(KeyCode::D, true);

        let movement = collector.snapshot().movement;
        assert!((movement.length() - 1.0).abs() < 1e-5);
        assert!(movement.x > 0.0 && movement.y > 0.0);
    }

    #[test]
    fn test_jump_edge_trigger_debounce() {
        let mut collector = InputCollector::new();

        collector.handle_key(KeyCode::Space, true);
        assert!(collector.snapshot().jump_requested);

        collector.end_frame();
        // Still held: no re-trigger
        collector.handle_key(KeyCode::Space, true);
        assert!(!collector.snapshot().jump_requested);

        // Release and press again triggers
        collector.handle_key(KeyCode::Space, false);
        collector.handle_key(KeyCode::Space, true);
        assert!(collector.snapshot().jump_requested);
    }

    #[test]
    fn test_dash_edge_trigger_single_shot() {
        let mut collector = InputCollector::new();

        collector.handle_key(KeyCode::Q, true);
        assert!(collector.snapshot().dash_requested);
        collector.end_frame();

        // Held across many frames: exactly one request was produced
        for _ in 0..10 {
            collector.handle_key(KeyCode::Q, true);
            assert!(!collector.snapshot().dash_requested);
            collector.end_frame();
        }

        collector.handle_key(KeyCode::Q, false);
        collector.handle_key(KeyCode::Q, true);
        assert!(collector.snapshot().dash_requested);
    }

    #[test]
    fn test_mouse_delta_accumulates_and_resets() {
        let mut collector = InputCollector::new();
        collector.handle_mouse_delta(1.0, 0.5);
        collector.handle_mouse_delta(0.5, 0.25);
        assert_eq!(collector.snapshot().look, Vec2::new(1.5, 0.75));

        collector.end_frame();
        assert_eq!(collector.snapshot().look, Vec2::ZERO);
    }

    #[test]
    fn test_end_frame_preserves_held_keys() {
        let mut collector = InputCollector::new();
        collector.handle_key(KeyCode::W, true);
        collector.handle_key(KeyCode::ShiftLeft, true);
        collector.end_frame();

        let input = collector.snapshot();
        assert_eq!(input.movement, Vec2::new(0.0, 1.0));
        assert!(input.sprint);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut collector = InputCollector::new();
        collector.handle_key(KeyCode::W, true);
        collector.handle_key(KeyCode::Space, true);
        collector.handle_mouse_delta(2.0, 2.0);

        collector.reset();
        assert_eq!(collector.snapshot(), InputState::idle());
    }

    #[test]
    fn test_unknown_key_not_handled() {
        let mut collector = InputCollector::new();
        assert!(!collector.handle_key(KeyCode::Unknown, true));
        assert_eq!(collector.snapshot(), InputState::idle());
    }
}
