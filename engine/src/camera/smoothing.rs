//! Smooth-Damp Filter
//!
//! A critically-damped spring filter for scalar values: the output chases a
//! moving target and settles in roughly `smooth_time` seconds without
//! oscillating. Used by the smoothed look variant to take the jitter out of
//! raw mouse deltas at the cost of a little latency.

/// Minimum smooth time, guards the division in the spring constant.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Critically-damped spring state for one scalar channel.
///
/// Each filtered value needs its own `SmoothDamp` because the spring
/// carries velocity between frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothDamp {
    velocity: f32,
}

impl SmoothDamp {
    /// Create a filter at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any accumulated spring velocity.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }

    /// Advance the filter one frame and return the new smoothed value.
    ///
    /// `current` is the previous smoothed value, `target` where it should
    /// head, `smooth_time` the approximate settle time in seconds. The
    /// result never overshoots the target.
    pub fn update(&mut self, current: f32, target: f32, smooth_time: f32, dt: f32) -> f32 {
        if dt <= 0.0 {
            return current;
        }
        let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);

        // Pade approximation of exp(-omega * dt) for the critically damped
        // spring; stable for the frame times a game loop produces.
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let change = current - target;
        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * exp;
        let mut output = target + (change + temp) * exp;

        // Clamp at the target if the spring carried us past it.
        if (target - current > 0.0) == (output > target) {
            output = target;
            self.velocity = 0.0;
        }
        output
    }
}
