//! Headbob Controller
//!
//! A periodic vertical offset on the camera's local position that sells
//! footstep motion. The bob plays only while the body is moving, grounded,
//! and not dashing; in every other state the camera eases back to its rest
//! position. The sine phase is never reset, so a bob that stops and
//! restarts resumes mid-wave instead of popping.

use glam::Vec3;

use crate::config::HeadbobConfig;

/// Decay rate toward rest when headbob is disabled outright.
pub const DISABLED_RETURN_RATE: f32 = 10.0;

/// Decay rate toward rest when the bob is suspended by movement state.
/// Slower than the disabled rate; the disabled case settles faster.
pub const SUSPENDED_RETURN_RATE: f32 = 8.0;

/// Camera local-position bob state.
#[derive(Debug, Clone)]
pub struct HeadbobController {
    config: HeadbobConfig,
    /// Monotonic sine phase in radians.
    phase: f32,
    /// Camera local position at startup; the bob oscillates around this.
    rest_position: Vec3,
    local_position: Vec3,
}

impl HeadbobController {
    /// Create a controller with the camera at its rest local position.
    ///
    /// `rest_position` is captured once here and never changes.
    pub fn new(config: HeadbobConfig, rest_position: Vec3) -> Self {
        Self {
            config,
            phase: 0.0,
            rest_position,
            local_position: rest_position,
        }
    }

    /// Headbob tunables this controller runs with.
    pub fn config(&self) -> &HeadbobConfig {
        &self.config
    }

    /// The camera's current local position.
    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    /// Current offset from the rest position.
    pub fn offset(&self) -> Vec3 {
        self.local_position - self.rest_position
    }

    /// Current sine phase in radians.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Run one frame; returns the new camera local position.
    ///
    /// The movement signals come from the motion controller's update
    /// earlier in the same frame.
    pub fn update(&mut self, dt: f32, moving: bool, grounded: bool, dashing: bool) -> Vec3 {
        let dt = dt.clamp(0.0001, 0.1);

        if !self.config.enabled {
            self.settle(dt, DISABLED_RETURN_RATE);
        } else if !moving || !grounded || dashing {
            self.settle(dt, SUSPENDED_RETURN_RATE);
        } else {
            self.phase += dt * self.config.speed;
            let bob = self.phase.sin() * self.config.strength;
            self.local_position = self.rest_position + Vec3::new(0.0, bob, 0.0);
        }
        self.local_position
    }

    fn settle(&mut self, dt: f32, rate: f32) {
        self.local_position = self
            .local_position
            .lerp(self.rest_position, (dt * rate).min(1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const REST: Vec3 = Vec3::new(0.0, 1.6, 0.0);

    fn bobbing() -> HeadbobController {
        let mut headbob = HeadbobController::new(HeadbobConfig::default(), REST);
        // A few active frames to build up an offset
        for _ in 0..4 {
            headbob.update(DT, true, true, false);
        }
        assert!(headbob.offset().length() > 1e-4);
        headbob
    }

    #[test]
    fn test_starts_at_rest() {
        let headbob = HeadbobController::new(HeadbobConfig::default(), REST);
        assert_eq!(headbob.local_position(), REST);
        assert_eq!(headbob.offset(), Vec3::ZERO);
        assert_eq!(headbob.phase(), 0.0);
    }

    #[test]
    fn test_bob_is_vertical_sine() {
        let mut headbob = HeadbobController::new(HeadbobConfig::default(), REST);
        headbob.update(DT, true, true, false);

        let expected_phase = DT * 12.0;
        assert!((headbob.phase() - expected_phase).abs() < 1e-6);
        let expected = expected_phase.sin() * 0.05;
        let offset = headbob.offset();
        assert!((offset.y - expected).abs() < 1e-6);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.z, 0.0);
    }

    #[test]
    fn test_stationary_keeps_camera_at_rest() {
        let mut headbob = HeadbobController::new(HeadbobConfig::default(), REST);
        for _ in 0..100 {
            headbob.update(DT, false, true, false);
            assert!(headbob.offset().length() < 1e-6);
        }
    }

    #[test]
    fn test_disabled_stays_at_rest_in_every_state() {
        let config = HeadbobConfig {
            enabled: false,
            ..HeadbobConfig::default()
        };
        let mut headbob = HeadbobController::new(config, REST);
        for _ in 0..100 {
            headbob.update(DT, true, true, false);
            assert_eq!(headbob.offset(), Vec3::ZERO);
        }
    }

    #[test]
    fn test_suspended_decays_to_rest() {
        let mut headbob = bobbing();
        for _ in 0..100 {
            headbob.update(DT, false, true, false);
        }
        assert!(headbob.offset().length() < 1e-5);
    }

    #[test]
    fn test_airborne_suspends_bob() {
        let mut headbob = bobbing();
        let phase_before = headbob.phase();
        let offset_before = headbob.offset().length();

        headbob.update(DT, true, false, false);
        assert_eq!(headbob.phase(), phase_before);
        assert!(headbob.offset().length() < offset_before);
    }

    #[test]
    fn test_dash_suspends_bob() {
        let mut headbob = bobbing();
        let phase_before = headbob.phase();

        headbob.update(DT, true, true, true);
        assert_eq!(headbob.phase(), phase_before);
    }

    #[test]
    fn test_phase_resumes_where_it_left_off() {
        let mut headbob = bobbing();
        let phase_at_suspend = headbob.phase();

        // Suspended frames freeze the phase
        for _ in 0..30 {
            headbob.update(DT, false, true, false);
        }
        assert_eq!(headbob.phase(), phase_at_suspend);

        // Resuming advances from the frozen phase, no reset to zero
        headbob.update(DT, true, true, false);
        assert!((headbob.phase() - (phase_at_suspend + DT * 12.0)).abs() < 1e-6);
    }

    #[test]
    fn test_disabled_settles_faster_than_suspended() {
        let mut suspended = bobbing();
        let mut disabled = bobbing();
        // Same starting offset, different decay branch
        disabled.config.enabled = false;

        suspended.update(DT, false, true, false);
        disabled.update(DT, false, true, false);
        assert!(disabled.offset().length() < suspended.offset().length());
    }
}
