//! Dash State Machine
//!
//! A dash is a timed, constant-speed horizontal override: while it is in
//! flight the motion controller skips normal movement and gravity and pushes
//! the body along a direction frozen at dash start. When the timer runs out
//! a cooldown countdown begins; a new dash cannot start while either the
//! dash or its cooldown is live.
//!
//! Both timers are plain per-frame countdowns owned by this struct and
//! decremented by the motion controller's update, so every state transition
//! happens inside the frame update and simulated time drives the tests.

use glam::Vec3;

/// Dash timers and the frozen dash direction.
#[derive(Debug, Clone, Copy)]
pub struct DashState {
    active: bool,
    time_remaining: f32,
    cooldown_active: bool,
    cooldown_remaining: f32,
    direction: Vec3,
}

impl Default for DashState {
    fn default() -> Self {
        Self {
            active: false,
            time_remaining: 0.0,
            cooldown_active: false,
            cooldown_remaining: 0.0,
            direction: Vec3::NEG_Z,
        }
    }
}

impl DashState {
    /// Create an idle dash state.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the dash override is in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True from dash start until the post-dash cooldown expires.
    pub fn cooldown_active(&self) -> bool {
        self.cooldown_active
    }

    /// Direction frozen at dash start. Unit length, horizontal.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Seconds of dash flight left.
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    /// A new dash may start: none in flight and no cooldown pending.
    pub fn can_begin(&self) -> bool {
        !self.active && !self.cooldown_active
    }

    /// Start a dash. The caller checks [`Self::can_begin`] first.
    ///
    /// The cooldown flag raises immediately, concurrent with the dash
    /// itself; its countdown is armed when the dash ends.
    pub fn begin(&mut self, direction: Vec3, duration: f32) {
        self.active = true;
        self.cooldown_active = true;
        self.time_remaining = duration;
        self.cooldown_remaining = 0.0;
        self.direction = direction;
    }

    /// Advance the in-flight dash by one frame.
    ///
    /// Returns the effective time slice to convert into displacement. The
    /// final frame's slice is clipped to the remaining dash time so the
    /// summed displacement equals the configured dash distance at any frame
    /// rate. Returns 0 when no dash is in flight.
    pub fn step(&mut self, dt: f32, cooldown: f32) -> f32 {
        if !self.active {
            return 0.0;
        }
        let slice = dt.min(self.time_remaining);
        self.time_remaining -= dt;
        if self.time_remaining <= 0.0 {
            self.active = false;
            self.time_remaining = 0.0;
            self.cooldown_remaining = cooldown;
            if cooldown <= 0.0 {
                self.cooldown_active = false;
            }
        }
        slice
    }

    /// Count the post-dash cooldown down. No-op while the dash is in
    /// flight or once the cooldown has already cleared.
    pub fn tick_cooldown(&mut self, dt: f32) {
        if self.active || !self.cooldown_active {
            return;
        }
        self.cooldown_remaining -= dt;
        if self.cooldown_remaining <= 0.0 {
            self.cooldown_remaining = 0.0;
            self.cooldown_active = false;
        }
    }
}
