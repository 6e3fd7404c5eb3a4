//! Character Rig
//!
//! Owns one character's controllers and runs them in the required order
//! every simulation frame: motion first, then the camera-side controllers,
//! which read the motion controller's freshly updated dash/grounded/moving
//! signals. That ordering is the contract that keeps the camera reacting to
//! this frame's dash, not last frame's.
//!
//! The rig validates its configuration once at construction and never
//! checks it again per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickstep_engine::config::ControllerConfig;
//! use quickstep_engine::physics::FlatGroundMover;
//! use quickstep_engine::rig::CharacterRig;
//! use glam::Vec3;
//!
//! let mut rig = CharacterRig::new(ControllerConfig::default(), Vec3::new(0.0, 1.6, 0.0))?;
//! let mut mover = FlatGroundMover::new();
//!
//! // Each frame:
//! let pose = rig.update(&input, dt, &mut mover);
//! renderer.set_camera(pose.pitch_deg, pose.local_position, pose.fov_deg, rig.body_yaw_deg());
//! ```

use glam::Vec3;

use crate::camera::{FovController, HeadbobController, LookController};
use crate::config::{ConfigError, ControllerConfig};
use crate::input::InputState;
use crate::physics::CapsuleMover;
use crate::player::MotionController;

/// Camera state for the renderer to apply after one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera pitch in degrees, positive looks down.
    pub pitch_deg: f32,
    /// Camera local position including the headbob offset.
    pub local_position: Vec3,
    /// Field of view in degrees.
    pub fov_deg: f32,
}

/// One character's complete controller stack.
#[derive(Debug, Clone)]
pub struct CharacterRig {
    motion: MotionController,
    look: LookController,
    headbob: HeadbobController,
    fov: FovController,
    /// Body yaw in degrees, wrapped to [0, 360).
    body_yaw_deg: f32,
}

impl CharacterRig {
    /// Build a rig from a validated configuration.
    ///
    /// `camera_rest_position` is the camera's local position at rest,
    /// captured once; the headbob oscillates around it. Degenerate
    /// tunables fail here, not during play.
    pub fn new(config: ControllerConfig, camera_rest_position: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            motion: MotionController::new(config.motion),
            look: LookController::new(config.look),
            headbob: HeadbobController::new(config.headbob, camera_rest_position),
            fov: FovController::new(config.fov),
            body_yaw_deg: 0.0,
        })
    }

    /// Run one simulation frame and return the camera pose to render.
    ///
    /// The mover is the external collision resolver for this character's
    /// capsule; it is called once or twice during the motion update.
    pub fn update(
        &mut self,
        input: &InputState,
        dt: f32,
        mover: &mut dyn CapsuleMover,
    ) -> CameraPose {
        // Clamp delta time to prevent physics explosions
        let dt = dt.clamp(0.0001, 0.1);

        self.motion.update(input, self.body_yaw_deg, dt, mover);

        // Late phase: these observe this frame's motion signals.
        let look = self.look.update(input.look, dt);
        self.body_yaw_deg = (self.body_yaw_deg + look.yaw_delta_deg).rem_euclid(360.0);

        let local_position = self.headbob.update(
            dt,
            self.motion.is_moving(),
            self.motion.is_grounded(),
            self.motion.is_dashing(),
        );
        let fov_deg = self.fov.update(dt, self.motion.is_dashing());

        CameraPose {
            pitch_deg: look.pitch_deg,
            local_position,
            fov_deg,
        }
    }

    /// Body yaw in degrees, wrapped to [0, 360).
    pub fn body_yaw_deg(&self) -> f32 {
        self.body_yaw_deg
    }

    /// The motion controller's read-only signals.
    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    /// The look controller (published pitch, tunables).
    pub fn look(&self) -> &LookController {
        &self.look
    }

    /// The headbob controller (local position, phase).
    pub fn headbob(&self) -> &HeadbobController {
        &self.headbob
    }

    /// The field-of-view controller.
    pub fn fov(&self) -> &FovController {
        &self.fov
    }
}
