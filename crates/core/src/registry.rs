//! Stable-id lookup from follow targets to live world positions.
//!
//! Followers never hold a direct reference to the thing they chase; they
//! hold a [`TargetId`] and resolve it here every tick. A target that has
//! been despawned simply stops resolving, and the follower degrades to
//! holding position instead of reading freed state.

use glam::Vec3;
use slotmap::SlotMap;

use crate::types::TargetId;

#[derive(Default)]
pub struct TargetRegistry {
    positions: SlotMap<TargetId, Vec3>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new target, returning the handle followers should store.
    pub fn register(&mut self, position: Vec3) -> TargetId {
        self.positions.insert(position)
    }

    /// Move a tracked target. Returns false if the id is no longer live.
    pub fn update(&mut self, id: TargetId, position: Vec3) -> bool {
        match self.positions.get_mut(id) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    /// Stop tracking a target. Ids are never reused for a different target.
    pub fn remove(&mut self, id: TargetId) -> bool {
        self.positions.remove(id).is_some()
    }

    pub fn position(&self, id: TargetId) -> Option<Vec3> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
