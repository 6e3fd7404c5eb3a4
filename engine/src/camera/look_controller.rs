//! Look Controller
//!
//! Converts per-frame look input into camera pitch and an incremental body
//! yaw. Pitch accumulates on the camera and is clamped; yaw is handed back
//! as a per-frame delta that the rig composes into the body's orientation,
//! so no absolute yaw is tracked here.
//!
//! Two application variants, selected by [`LookConfig::smoothing`]:
//!
//! - **Immediate**: raw values applied directly. Zero latency.
//! - **Smoothed**: pitch and the yaw delta each run through their own
//!   critically-damped [`SmoothDamp`] filter before application, hiding
//!   mouse jitter at the cost of a little latency.
//!
//! Angles are degrees throughout; positive pitch looks down.

use glam::Vec2;

use crate::config::{LookConfig, LookSmoothing};

use super::smoothing::SmoothDamp;

/// What the renderer applies this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookOutput {
    /// Camera pitch in degrees, within the configured clamp.
    pub pitch_deg: f32,
    /// Incremental body yaw for this frame, in degrees.
    pub yaw_delta_deg: f32,
}

/// Pitch accumulation and look smoothing state.
#[derive(Debug, Clone)]
pub struct LookController {
    config: LookConfig,
    /// Accumulated, clamped pitch target.
    pitch_deg: f32,
    /// Filtered pitch actually published (smoothed variant).
    smoothed_pitch_deg: f32,
    pitch_filter: SmoothDamp,
    /// Filtered per-frame yaw delta (smoothed variant).
    smoothed_yaw_delta_deg: f32,
    yaw_filter: SmoothDamp,
}

impl LookController {
    /// Create a controller looking straight ahead.
    pub fn new(config: LookConfig) -> Self {
        Self {
            config,
            pitch_deg: 0.0,
            smoothed_pitch_deg: 0.0,
            pitch_filter: SmoothDamp::new(),
            smoothed_yaw_delta_deg: 0.0,
            yaw_filter: SmoothDamp::new(),
        }
    }

    /// Look tunables this controller runs with.
    pub fn config(&self) -> &LookConfig {
        &self.config
    }

    /// The pitch currently published to the renderer, in degrees.
    pub fn pitch_deg(&self) -> f32 {
        match self.config.smoothing {
            LookSmoothing::Immediate => self.pitch_deg,
            LookSmoothing::Smoothed => self.smoothed_pitch_deg,
        }
    }

    /// Run one frame of look processing.
    pub fn update(&mut self, look: Vec2, dt: f32) -> LookOutput {
        let dt = dt.clamp(0.0001, 0.1);
        let clamp = self.config.pitch_clamp_deg;

        let yaw_delta = look.x * self.config.sensitivity_x * dt;
        self.pitch_deg =
            (self.pitch_deg - look.y * self.config.sensitivity_y * dt).clamp(-clamp, clamp);

        match self.config.smoothing {
            LookSmoothing::Immediate => LookOutput {
                pitch_deg: self.pitch_deg,
                yaw_delta_deg: yaw_delta,
            },
            LookSmoothing::Smoothed => {
                // The filters chase the clamped pitch and the raw yaw step
                // independently; pitch is re-clamped so the published value
                // honors the limit every frame.
                self.smoothed_pitch_deg = self
                    .pitch_filter
                    .update(
                        self.smoothed_pitch_deg,
                        self.pitch_deg,
                        self.config.smooth_time,
                        dt,
                    )
                    .clamp(-clamp, clamp);
                self.smoothed_yaw_delta_deg = self.yaw_filter.update(
                    self.smoothed_yaw_delta_deg,
                    yaw_delta,
                    self.config.smooth_time,
                    dt,
                );
                LookOutput {
                    pitch_deg: self.smoothed_pitch_deg,
                    yaw_delta_deg: self.smoothed_yaw_delta_deg,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn immediate_config() -> LookConfig {
        LookConfig {
            smoothing: LookSmoothing::Immediate,
            ..LookConfig::default()
        }
    }

    #[test]
    fn test_immediate_pitch_accumulates() {
        let mut look = LookController::new(immediate_config());

        // Looking up (positive y) decreases pitch
        let out = look.update(Vec2::new(0.0, 1.0), DT);
        let expected = -30.0 * DT;
        assert!((out.pitch_deg - expected).abs() < 1e-4);

        let out = look.update(Vec2::new(0.0, 1.0), DT);
        assert!((out.pitch_deg - 2.0 * expected).abs() < 1e-4);
    }

    #[test]
    fn test_immediate_yaw_delta() {
        let mut look = LookController::new(immediate_config());
        let out = look.update(Vec2::new(2.0, 0.0), DT);
        assert!((out.yaw_delta_deg - 2.0 * 30.0 * DT).abs() < 1e-4);
        // Yaw is a per-frame delta, not accumulated
        let out = look.update(Vec2::ZERO, DT);
        assert_eq!(out.yaw_delta_deg, 0.0);
    }

    #[test]
    fn test_pitch_clamps_at_limit() {
        let mut look = LookController::new(immediate_config());

        // Drag down hard for a long time
        for _ in 0..600 {
            let out = look.update(Vec2::new(0.0, -50.0), DT);
            assert!(out.pitch_deg <= 80.0 + 1e-4);
        }
        assert!((look.pitch_deg() - 80.0).abs() < 1e-4);

        // And up
        for _ in 0..600 {
            let out = look.update(Vec2::new(0.0, 50.0), DT);
            assert!(out.pitch_deg >= -80.0 - 1e-4);
        }
        assert!((look.pitch_deg() + 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_smoothed_pitch_lags_then_converges() {
        let mut look = LookController::new(LookConfig::default());

        // One sharp look-down frame
        let out = look.update(Vec2::new(0.0, -10.0), DT);
        let target = 10.0 * 30.0 * DT;
        assert!(out.pitch_deg < target, "smoothed output must lag the target");
        assert!(out.pitch_deg > 0.0);

        // With no further input the filter settles on the target
        let mut last = out.pitch_deg;
        for _ in 0..120 {
            last = look.update(Vec2::ZERO, DT).pitch_deg;
        }
        assert!((last - target).abs() < 1e-3);
    }

    #[test]
    fn test_smoothed_pitch_stays_clamped() {
        let mut look = LookController::new(LookConfig::default());
        for _ in 0..1000 {
            let out = look.update(Vec2::new(0.0, -100.0), DT);
            assert!(out.pitch_deg.abs() <= 80.0 + 1e-4);
        }
    }

    #[test]
    fn test_smoothed_yaw_decays_after_input_stops() {
        let mut look = LookController::new(LookConfig::default());

        let mut spinning = 0.0;
        for _ in 0..30 {
            spinning = look.update(Vec2::new(5.0, 0.0), DT).yaw_delta_deg;
        }
        assert!(spinning > 0.0);

        // Input stops; the smoothed delta eases out instead of snapping
        let first_idle = look.update(Vec2::ZERO, DT).yaw_delta_deg;
        assert!(first_idle > 0.0);
        assert!(first_idle < spinning);

        let mut last = first_idle;
        for _ in 0..120 {
            last = look.update(Vec2::ZERO, DT).yaw_delta_deg;
        }
        assert!(last.abs() < 1e-3);
    }

    #[test]
    fn test_published_pitch_accessor_matches_output() {
        let mut look = LookController::new(LookConfig::default());
        let out = look.update(Vec2::new(0.0, -3.0), DT);
        assert_eq!(look.pitch_deg(), out.pitch_deg);

        let mut look = LookController::new(immediate_config());
        let out = look.update(Vec2::new(0.0, -3.0), DT);
        assert_eq!(look.pitch_deg(), out.pitch_deg);
    }
}
