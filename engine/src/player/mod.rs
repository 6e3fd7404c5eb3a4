//! Player Module
//!
//! Capsule-body motion for the first-person controller.
//!
//! # Components
//!
//! - [`MotionController`] - camera-relative horizontal movement, gravity and
//!   jumping, and submission of per-frame displacements to the capsule mover
//! - [`DashState`] - the dash override state machine: flight timer, cooldown
//!   countdown, and the direction frozen at dash start

pub mod dash;
pub mod motion_controller;

pub use dash::DashState;
pub use motion_controller::{MOVE_INPUT_THRESHOLD, MotionController};
