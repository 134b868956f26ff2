//! Target chasing: visibility-gated pursuit with graph-planned fallback.
//!
//! Every simulation tick a follower first tries the cheap thing: look
//! straight at the target and walk toward it. Only when the view ray is
//! blocked does it fall back to the box graph: replan at most once per
//! repath interval, then walk the planned box centers waypoint by waypoint.
//! Both failure modes (target not locatable in any box, no route through
//! the graph) degrade to holding position; they are never errors.

use std::collections::VecDeque;

use glam::{Vec2, Vec3};
use log::debug;

use crate::raycast::CollisionQuery;
use crate::registry::TargetRegistry;
use crate::roomgen::Room;
use crate::types::{CollisionGroup, Steering, TargetId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowConfig {
    /// Minimum seconds between graph replans while the view is blocked.
    pub repath_interval: f32,
    /// Forward speed handed to the motor layer alongside the facing.
    pub move_speed: f32,
    /// Offset from the agent origin to its eye, where view rays start.
    pub eye_offset: Vec3,
    /// Horizontal distance at which a waypoint counts as reached.
    pub waypoint_radius: f32,
    /// Categories the view ray may collide with.
    pub sight_mask: CollisionGroup,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            repath_interval: 1.0,
            move_speed: 5.0,
            eye_offset: Vec3::new(0.0, 1.0, 0.0),
            waypoint_radius: 1.0,
            sight_mask: CollisionGroup::sight_filter(),
        }
    }
}

/// Per-agent pursuit state machine. One instance per following agent; the
/// room is shared read-only between all of them.
pub struct PathFollower {
    config: FollowConfig,
    target: TargetId,
    path: Vec<Vec3>,
    waypoint_index: usize,
    repath_timer: f32,
}

impl PathFollower {
    pub fn new(target: TargetId, config: FollowConfig) -> Self {
        Self { config, target, path: Vec::new(), waypoint_index: 0, repath_timer: 0.0 }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Remaining planned waypoints, for debug overlays.
    pub fn pending_waypoints(&self) -> &[Vec3] {
        &self.path[self.waypoint_index.min(self.path.len())..]
    }

    /// How far along the current plan the follower has advanced.
    pub fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Advance one fixed simulation step.
    pub fn tick(
        &mut self,
        dt: f32,
        position: Vec3,
        room: &Room,
        targets: &TargetRegistry,
        rays: &impl CollisionQuery,
    ) -> Steering {
        self.repath_timer += dt;

        // A despawned target stops resolving; stand down rather than chase
        // stale coordinates.
        let Some(target_position) = targets.position(self.target) else {
            return Steering::Hold;
        };

        let eye = position + self.config.eye_offset;
        let hit = rays.cast_ray(eye, target_position, self.config.sight_mask);

        if hit.distance >= eye.distance(target_position) {
            // Clear line of sight: head straight for the target. The stored
            // path is left alone; it only matters while the view is blocked.
            return Steering::Forward { facing: facing_toward(eye, target_position) };
        }

        if self.repath_timer >= self.config.repath_interval {
            self.replan(position, target_position, room);
            // Subtract rather than reset so accumulated overshoot carries
            // into the next interval instead of drifting the cadence.
            self.repath_timer -= self.config.repath_interval;
        }

        if self.waypoint_index < self.path.len() {
            let waypoint = self.path[self.waypoint_index];
            if horizontal_distance(position, waypoint) <= self.config.waypoint_radius {
                self.waypoint_index += 1;
            }
            return Steering::Forward { facing: facing_toward(position, waypoint) };
        }

        Steering::Hold
    }

    fn replan(&mut self, position: Vec3, target_position: Vec3, room: &Room) {
        match find_path(room, ground(position), ground(target_position)) {
            PathOutcome::Found(path) => {
                self.path = path.iter().map(|&index| box_center(room, index)).collect();
                self.waypoint_index = 0;
            }
            PathOutcome::Unreachable => {
                // The graph was searched and came up empty: drop the stale
                // plan and hold until the view clears or a later replan
                // succeeds.
                debug!("follower replan found no route; holding");
                self.path.clear();
                self.waypoint_index = 0;
            }
            PathOutcome::OffMesh => {
                // Either endpoint is outside every box (mid-doorway, on a
                // wall). Keep walking the previous plan; the next interval
                // retries.
            }
        }
    }
}

/// Result of a box-graph search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    /// Ordered box indices from the start box to the finish box inclusive.
    Found(Vec<usize>),
    /// Both endpoints were located but no chain of openings connects them.
    Unreachable,
    /// At least one endpoint is not inside any box.
    OffMesh,
}

/// Breadth-first search over the box adjacency graph.
///
/// The frontier is first-in/first-out and boxes are marked discovered when
/// first seen, so the predecessor chain yields a route with the fewest box
/// transitions, not merely a valid one.
pub fn find_path(room: &Room, start: Vec2, finish: Vec2) -> PathOutcome {
    let (Some(start_box), Some(finish_box)) = (room.box_at(start), room.box_at(finish)) else {
        return PathOutcome::OffMesh;
    };

    let mut previous: Vec<Option<usize>> = vec![None; room.boxes.len()];
    let mut frontier = VecDeque::new();
    previous[start_box] = Some(start_box);
    frontier.push_back(start_box);

    while let Some(current) = frontier.pop_front() {
        if current == finish_box {
            break;
        }
        for &next in &room.adjacency[current] {
            if previous[next].is_some() {
                continue;
            }
            previous[next] = Some(current);
            frontier.push_back(next);
        }
    }

    if previous[finish_box].is_none() {
        return PathOutcome::Unreachable;
    }

    let mut path = vec![finish_box];
    let mut current = finish_box;
    while current != start_box {
        current = previous[current].expect("every discovered box has a predecessor");
        path.push(current);
    }
    path.reverse();
    PathOutcome::Found(path)
}

fn box_center(room: &Room, index: usize) -> Vec3 {
    let center = room.boxes[index].center();
    Vec3::new(center.x, 0.0, center.y)
}

fn ground(position: Vec3) -> Vec2 {
    Vec2::new(position.x, position.z)
}

fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    ground(a).distance(ground(b))
}

/// Yaw toward `to`, matching the motor convention `atan2(dx, dz)`.
fn facing_toward(from: Vec3, to: Vec3) -> f32 {
    let delta = to - from;
    delta.x.atan2(delta.z)
}
