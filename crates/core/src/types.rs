use bitflags::bitflags;
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a tracked transform in a [`crate::registry::TargetRegistry`].
    pub struct TargetId;
}

bitflags! {
    /// Collision categories understood by the ray-query capability.
    ///
    /// The layout mirrors the broad-phase groups of the host engine; this
    /// crate only ever combines them into filter masks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionGroup: u16 {
        const WALL = 1 << 0;
        const FLOOR = 1 << 1;
        const PLAYER = 1 << 2;
        const ENEMY = 1 << 3;
        const PROP = 1 << 4;
    }
}

impl CollisionGroup {
    /// Filter for line-of-sight rays: everything except the chaser's own
    /// category and its quarry's, so neither body occludes the view test.
    pub fn sight_filter() -> Self {
        Self::all() ^ (Self::PLAYER | Self::ENEMY)
    }
}

/// Per-tick locomotion decision produced by a [`crate::follow::PathFollower`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Steering {
    /// Face `facing` radians of yaw (about +Y, measured by `atan2(dx, dz)`)
    /// and move forward at the follower's configured speed.
    Forward { facing: f32 },
    /// Stay put this tick. Facing is left as-is by the caller.
    Hold,
}

impl Steering {
    pub fn is_moving(self) -> bool {
        matches!(self, Self::Forward { .. })
    }
}
