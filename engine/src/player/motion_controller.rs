//! Motion Controller
//!
//! Owns the capsule's per-frame motion: camera-relative horizontal movement,
//! gravity and jumping, and the dash override. Each frame it computes desired
//! displacements and submits them to the external capsule mover, which
//! resolves collisions and reports the grounded state back.
//!
//! # Per-Frame Order
//!
//! 1. Tick the dash cooldown countdown.
//! 2. While a dash is in flight: submit the dash displacement and nothing
//!    else. Gravity and normal movement stay suspended; vertical velocity is
//!    pinned to zero.
//! 3. Otherwise: submit the horizontal pass, integrate gravity and submit
//!    the vertical pass, then process the jump trigger and finally the dash
//!    trigger. A jump only changes velocity (the body moves next frame), and
//!    a dash started this frame zeroes vertical velocity, which is why the
//!    dash trigger wins when both actions arrive in the same frame. The
//!    started dash begins displacing the body on the following frame.
//!
//! Other controllers read this frame's `is_dashing` / `is_grounded` /
//! `is_moving` after the update completes.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickstep_engine::player::MotionController;
//! use quickstep_engine::physics::FlatGroundMover;
//!
//! let mut motion = MotionController::new(config.motion);
//! let mut mover = FlatGroundMover::new();
//!
//! // Each frame:
//! motion.update(&input, body_yaw_deg, dt, &mut mover);
//! if motion.is_dashing() {
//!     // camera reacts this same frame
//! }
//! ```

use glam::Vec3;

use crate::config::MotionConfig;
use crate::input::InputState;
use crate::physics::CapsuleMover;

use super::dash::DashState;

/// Movement input below this magnitude counts as standing still. Also the
/// cutoff under which a dash falls back to the body's forward direction.
pub const MOVE_INPUT_THRESHOLD: f32 = 0.1;

/// Capsule motion state: vertical velocity, grounded flag, dash machine.
#[derive(Debug, Clone)]
pub struct MotionController {
    config: MotionConfig,
    vertical_velocity: f32,
    grounded: bool,
    moving: bool,
    dash: DashState,
}

impl MotionController {
    /// Create a controller at rest. Grounded state is unknown until the
    /// first update queries the mover.
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            vertical_velocity: 0.0,
            grounded: false,
            moving: false,
            dash: DashState::new(),
        }
    }

    /// Movement tunables this controller runs with.
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Current vertical velocity in m/s, positive up.
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// True if the last sweep left the capsule on walkable ground.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// True while the dash override is in flight.
    pub fn is_dashing(&self) -> bool {
        self.dash.is_active()
    }

    /// True if this frame's movement input exceeds the dead zone.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// True from dash start until the post-dash cooldown expires.
    pub fn dash_cooldown_active(&self) -> bool {
        self.dash.cooldown_active()
    }

    /// Run one simulation frame.
    ///
    /// `body_yaw_deg` orients the horizontal input: forward input moves
    /// along the body's facing. The mover is called once (dash) or twice
    /// (horizontal then vertical) per frame.
    pub fn update(
        &mut self,
        input: &InputState,
        body_yaw_deg: f32,
        dt: f32,
        mover: &mut dyn CapsuleMover,
    ) {
        // Clamp delta time to prevent physics explosions
        let dt = dt.clamp(0.0001, 0.1);

        self.moving = input.movement.length() > MOVE_INPUT_THRESHOLD;
        self.dash.tick_cooldown(dt);

        if self.dash.is_active() {
            self.dash_tick(dt, mover);
            return;
        }

        let forward = forward_from_yaw(body_yaw_deg);
        let right = right_from_yaw(body_yaw_deg);

        // Horizontal pass
        let was_grounded = self.grounded;
        let wish = (forward * input.movement.y + right * input.movement.x).normalize_or_zero();
        let speed = if input.sprint {
            self.config.move_speed * self.config.sprint_multiplier
        } else {
            self.config.move_speed
        };
        self.submit(mover, wish * speed * dt);

        // Vertical pass. While grounded the velocity is held at a small
        // negative stick value so the ground probe keeps contact.
        if was_grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = self.config.ground_stick_speed;
        }
        self.vertical_velocity += self.config.gravity * dt;
        self.submit(mover, Vec3::new(0.0, self.vertical_velocity * dt, 0.0));

        // Jump changes velocity only; integration consumes it next frame.
        if input.jump_requested && self.grounded {
            self.vertical_velocity = self.config.jump_impulse;
            log::trace!("jump, vertical velocity {}", self.vertical_velocity);
        }

        // Dash trigger runs last: zeroing vertical velocity here is what
        // gives dash priority over a same-frame jump.
        if input.dash_requested && self.dash.can_begin() {
            let wish_dir = forward * input.movement.y + right * input.movement.x;
            let direction = if wish_dir.length() < MOVE_INPUT_THRESHOLD {
                forward
            } else {
                wish_dir.normalize()
            };
            self.vertical_velocity = 0.0;
            self.dash.begin(direction, self.config.dash_duration);
            log::debug!(
                "dash started, direction ({:.2}, {:.2}, {:.2})",
                direction.x,
                direction.y,
                direction.z
            );
        }
    }

    /// Dash in-flight frame: one sweep along the frozen direction, gravity
    /// suspended. The final frame's time slice is clipped so total travel
    /// equals `dash_distance` at any frame rate.
    fn dash_tick(&mut self, dt: f32, mover: &mut dyn CapsuleMover) {
        let slice = self.dash.step(dt, self.config.dash_cooldown);
        let desired = self.dash.direction() * self.config.dash_speed() * slice;
        self.submit(mover, desired);
        self.vertical_velocity = 0.0;
        if !self.dash.is_active() {
            log::debug!("dash ended, cooldown {:.2}s", self.config.dash_cooldown);
        }
    }

    fn submit(&mut self, mover: &mut dyn CapsuleMover, desired: Vec3) {
        let result = mover.sweep(desired);
        self.grounded = result.grounded;
    }
}

/// Horizontal forward vector for a body yaw in degrees. Yaw 0 faces -Z.
fn forward_from_yaw(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Horizontal right vector, perpendicular to forward in the XZ plane.
fn right_from_yaw(yaw_deg: f32) -> Vec3 {
    let forward = forward_from_yaw(yaw_deg);
    Vec3::new(-forward.z, 0.0, forward.x)
}
