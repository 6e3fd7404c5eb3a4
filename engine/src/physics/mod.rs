//! Physics Module
//!
//! Holds the seam to the external collision resolver and a minimal
//! flat-ground implementation of it for tests and headless demos. No
//! collision math lives in this crate; the resolver behind the
//! [`CapsuleMover`] trait owns all of it.

pub mod flat_ground;
pub mod mover;

pub use flat_ground::FlatGroundMover;
pub use mover::{CapsuleMover, MoveResult};
