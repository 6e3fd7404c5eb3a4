//! Quickstep Engine
//!
//! A headless first-person character controller: per-frame move/look input
//! plus jump and dash triggers in, camera pose (pitch, local position,
//! field of view) and capsule displacement requests out. Collision
//! resolution, input devices, and rendering stay behind narrow seams so the
//! whole controller runs and tests without a window.
//!
//! # Modules
//!
//! - [`input`] - per-frame input snapshots and the platform-agnostic collector
//! - [`player`] - capsule motion: movement, gravity, jump, and the dash override
//! - [`camera`] - look smoothing, headbob, and field-of-view easing
//! - [`physics`] - the capsule-mover seam and a flat-ground test mover
//! - [`config`] - tunables with serde round-trip and fail-fast validation
//! - [`rig`] - the per-frame orchestrator tying one character together
//!
//! # Example
//!
//! ```ignore
//! use quickstep_engine::config::ControllerConfig;
//! use quickstep_engine::input::{InputCollector, KeyCode};
//! use quickstep_engine::physics::FlatGroundMover;
//! use quickstep_engine::rig::CharacterRig;
//! use glam::Vec3;
//!
//! let mut rig = CharacterRig::new(ControllerConfig::default(), Vec3::new(0.0, 1.6, 0.0))?;
//! let mut mover = FlatGroundMover::new();
//! let mut collector = InputCollector::new();
//!
//! // Per frame: feed events, snapshot, update, render, reset.
//! collector.handle_key(KeyCode::W, true);
//! let input = collector.snapshot();
//! let pose = rig.update(&input, dt, &mut mover);
//! collector.end_frame();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod rig;

// Re-export the types most integrations touch
pub use config::{ControllerConfig, ConfigError};
pub use input::{InputCollector, InputState, KeyCode};
pub use physics::{CapsuleMover, FlatGroundMover, MoveResult};
pub use player::MotionController;
pub use rig::{CameraPose, CharacterRig};
