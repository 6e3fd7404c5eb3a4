//! Capsule Mover Seam
//!
//! Collision resolution lives outside this crate. The controller hands the
//! external resolver a desired displacement and gets back what actually
//! happened: the achieved displacement after collision/slope handling and
//! whether the capsule ended the sweep resting on walkable ground.
//!
//! The motion controller calls the mover once or twice per frame: a
//! horizontal pass followed by a vertical pass in normal movement, or a
//! single pass while a dash is in flight. The two-call split is part of the
//! contract; merging the passes changes how the resolver handles slopes.

use glam::Vec3;

/// Outcome of one sweep through the external collision resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Displacement actually applied after collision resolution.
    pub achieved: Vec3,
    /// True if the capsule rests on walkable ground after the sweep.
    pub grounded: bool,
}

/// External collision resolver for a capsule body.
pub trait CapsuleMover {
    /// Attempt to displace the capsule by `desired` world-space meters.
    fn sweep(&mut self, desired: Vec3) -> MoveResult;
}
