//! Field-of-View Controller
//!
//! Eases the camera's field of view toward a target: the normal FOV in
//! regular play, a wider FOV while dashing for a sense of speed. The ease
//! is exponential, never a hard snap, so the lens keeps settling for a few
//! frames after a dash starts or ends.

use crate::config::FovConfig;

/// Current field of view and its ease state. Degrees throughout.
#[derive(Debug, Clone)]
pub struct FovController {
    config: FovConfig,
    current_fov: f32,
}

impl FovController {
    /// Create a controller resting at the normal field of view.
    pub fn new(config: FovConfig) -> Self {
        Self {
            current_fov: config.normal_fov,
            config,
        }
    }

    /// FOV tunables this controller runs with.
    pub fn config(&self) -> &FovConfig {
        &self.config
    }

    /// The field of view the renderer applies this frame, in degrees.
    pub fn fov(&self) -> f32 {
        self.current_fov
    }

    /// Run one frame; returns the new field of view.
    pub fn update(&mut self, dt: f32, dashing: bool) -> f32 {
        let dt = dt.clamp(0.0001, 0.1);
        let target = if dashing {
            self.config.dash_fov
        } else {
            self.config.normal_fov
        };
        self.current_fov += (target - self.current_fov) * (dt * self.config.smooth_speed).min(1.0);
        self.current_fov
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_starts_at_normal_fov() {
        let fov = FovController::new(FovConfig::default());
        assert_eq!(fov.fov(), 70.0);
    }

    #[test]
    fn test_eases_toward_dash_fov_without_snapping() {
        let mut fov = FovController::new(FovConfig::default());

        let first = fov.update(DT, true);
        assert!(first > 70.0);
        assert!(first < 85.0, "one frame must not snap to the target");

        let mut last = first;
        for _ in 0..200 {
            let next = fov.update(DT, true);
            assert!(next >= last);
            assert!(next <= 85.0 + 1e-4);
            last = next;
        }
        assert!((last - 85.0).abs() < 0.01);
    }

    #[test]
    fn test_eases_back_after_dash_ends() {
        let mut fov = FovController::new(FovConfig::default());
        for _ in 0..30 {
            fov.update(DT, true);
        }
        let widened = fov.fov();
        assert!(widened > 80.0);

        // Keeps settling, does not snap back
        let first = fov.update(DT, false);
        assert!(first < widened);
        assert!(first > 70.0);

        for _ in 0..200 {
            fov.update(DT, false);
        }
        assert!((fov.fov() - 70.0).abs() < 0.01);
    }

    #[test]
    fn test_large_dt_saturates_instead_of_overshooting() {
        let mut fov = FovController::new(FovConfig::default());
        // dt * smooth_speed would exceed 1 without the saturation; dt also
        // clamps at 0.1 s, so the factor is 0.8 here
        let result = fov.update(0.5, true);
        assert!(result <= 85.0);
        assert!(result > 70.0);
    }
}
