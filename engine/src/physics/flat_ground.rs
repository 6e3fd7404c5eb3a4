//! Flat-Ground Mover
//!
//! The simplest possible [`CapsuleMover`]: an infinite horizontal plane at a
//! configurable height, no walls, no slopes. Downward sweeps clamp at the
//! plane and report grounded. The test suite and the demo binary run the
//! controller against this mover; production integrations supply their own.

use glam::Vec3;

use super::mover::{CapsuleMover, MoveResult};

/// Capsule mover over an infinite flat ground plane.
#[derive(Debug, Clone, Copy)]
pub struct FlatGroundMover {
    position: Vec3,
    ground_height: f32,
}

impl Default for FlatGroundMover {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            ground_height: 0.0,
        }
    }
}

impl FlatGroundMover {
    /// Create a mover resting at the origin with ground at y = 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mover with a custom ground plane height.
    pub fn with_ground_height(ground_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, ground_height, 0.0),
            ground_height,
        }
    }

    /// Current capsule position (feet).
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the capsule, e.g. to start a scenario airborne.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Ground plane height.
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }
}

impl CapsuleMover for FlatGroundMover {
    fn sweep(&mut self, desired: Vec3) -> MoveResult {
        let mut target = self.position + desired;
        let grounded = if target.y <= self.ground_height {
            target.y = self.ground_height;
            true
        } else {
            false
        };
        let achieved = target - self.position;
        self.position = target;
        MoveResult { achieved, grounded }
    }
}
