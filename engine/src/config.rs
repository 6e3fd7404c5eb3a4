//! Controller Configuration
//!
//! All tunable parameters for the character controller, grouped per
//! subsystem. Every struct round-trips through serde so tuning lives in
//! JSON files rather than code, and `Default` carries the shipped values.
//!
//! Degenerate tunables are a configuration error, rejected once at rig
//! construction via [`ControllerConfig::validate`] rather than silently
//! skipped per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickstep_engine::config::ControllerConfig;
//!
//! let mut config = ControllerConfig::default();
//! config.motion.move_speed = 9.0;
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tunable was outside its valid range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("gravity must be negative, it points down (got {0})")]
    GravityNotDownward(f32),

    #[error("pitch clamp must be in (0, 90] degrees (got {0})")]
    PitchClampOutOfRange(f32),

    #[error("failed to parse controller config: {0}")]
    Parse(#[from] serde_json::Error),
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Movement, jump, and dash tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Horizontal movement speed in m/s.
    pub move_speed: f32,
    /// Speed multiplier while sprinting. 1.0 disables sprint.
    pub sprint_multiplier: f32,
    /// Upward velocity applied on jump in m/s.
    pub jump_impulse: f32,
    /// Gravity acceleration in m/s², negative is down.
    pub gravity: f32,
    /// Downward velocity held while grounded, in m/s. Slightly negative so
    /// the ground probe keeps contact instead of oscillating.
    pub ground_stick_speed: f32,
    /// Total dash travel distance in meters.
    pub dash_distance: f32,
    /// Dash duration in seconds.
    pub dash_duration: f32,
    /// Cooldown after a dash ends before the next can start, in seconds.
    pub dash_cooldown: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            sprint_multiplier: 1.0, // reserved: sprint ships disabled
            jump_impulse: 6.0,
            gravity: -20.0,
            ground_stick_speed: -2.0,
            dash_distance: 8.0,
            dash_duration: 0.15,
            dash_cooldown: 1.0,
        }
    }
}

impl MotionConfig {
    /// Dash travel speed in m/s.
    pub fn dash_speed(&self) -> f32 {
        self.dash_distance / self.dash_duration
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("move_speed", self.move_speed)?;
        require_positive("sprint_multiplier", self.sprint_multiplier)?;
        require_positive("jump_impulse", self.jump_impulse)?;
        require_positive("dash_distance", self.dash_distance)?;
        require_positive("dash_duration", self.dash_duration)?;
        require_non_negative("dash_cooldown", self.dash_cooldown)?;
        if self.gravity >= 0.0 {
            return Err(ConfigError::GravityNotDownward(self.gravity));
        }
        Ok(())
    }
}

/// How look input reaches the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookSmoothing {
    /// Raw deltas applied directly. Zero latency, shows mouse jitter.
    Immediate,
    /// Smooth-damped pitch and yaw. Hides jitter, adds a little latency.
    #[default]
    Smoothed,
}

/// Look sensitivity, pitch clamp, and smoothing tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Horizontal look sensitivity, degrees per input unit per second.
    pub sensitivity_x: f32,
    /// Vertical look sensitivity, degrees per input unit per second.
    pub sensitivity_y: f32,
    /// Pitch is clamped to ±this many degrees.
    pub pitch_clamp_deg: f32,
    /// Immediate or smoothed application.
    pub smoothing: LookSmoothing,
    /// Settle time of the smoothing filter in seconds (smoothed only).
    pub smooth_time: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity_x: 30.0,
            sensitivity_y: 30.0,
            pitch_clamp_deg: 80.0,
            smoothing: LookSmoothing::default(),
            smooth_time: 0.03,
        }
    }
}

impl LookConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("sensitivity_x", self.sensitivity_x)?;
        require_positive("sensitivity_y", self.sensitivity_y)?;
        if !(self.pitch_clamp_deg > 0.0 && self.pitch_clamp_deg <= 90.0) {
            return Err(ConfigError::PitchClampOutOfRange(self.pitch_clamp_deg));
        }
        if self.smoothing == LookSmoothing::Smoothed {
            require_positive("smooth_time", self.smooth_time)?;
        }
        Ok(())
    }
}

/// Headbob tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadbobConfig {
    /// Master switch. When off the camera settles to rest and stays there.
    pub enabled: bool,
    /// Peak vertical offset in meters.
    pub strength: f32,
    /// Bob frequency in radians per second.
    pub speed: f32,
}

impl Default for HeadbobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 0.05,
            speed: 12.0,
        }
    }
}

impl HeadbobConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("headbob strength", self.strength)?;
        require_positive("headbob speed", self.speed)?;
        Ok(())
    }
}

/// Field-of-view tunables, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FovConfig {
    /// Field of view during normal movement.
    pub normal_fov: f32,
    /// Field of view target while dashing.
    pub dash_fov: f32,
    /// Exponential ease rate toward the current target, per second.
    pub smooth_speed: f32,
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            normal_fov: 70.0,
            dash_fov: 85.0,
            smooth_speed: 8.0,
        }
    }
}

impl FovConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("normal_fov", self.normal_fov)?;
        require_positive("dash_fov", self.dash_fov)?;
        require_positive("fov smooth_speed", self.smooth_speed)?;
        Ok(())
    }
}

/// Full tuning surface for one character rig.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub motion: MotionConfig,
    pub look: LookConfig,
    pub headbob: HeadbobConfig,
    pub fov: FovConfig,
}

impl ControllerConfig {
    /// Parse a config from JSON. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject degenerate tunables. Called once at rig construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion.validate()?;
        self.look.validate()?;
        self.headbob.validate()?;
        self.fov.validate()?;
        Ok(())
    }
}
