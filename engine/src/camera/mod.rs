//! Camera Module
//!
//! Camera-side controllers for the first-person rig: look (pitch/yaw with
//! optional smoothing), headbob, and field-of-view easing. Window-system
//! agnostic; outputs are plain numbers the renderer applies.

pub mod fov;
pub mod headbob;
pub mod look_controller;
pub mod smoothing;

pub use fov::FovController;
pub use headbob::{DISABLED_RETURN_RATE, HeadbobController, SUSPENDED_RETURN_RATE};
pub use look_controller::{LookController, LookOutput};
pub use smoothing::SmoothDamp;
