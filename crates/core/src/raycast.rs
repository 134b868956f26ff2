//! Ray-query capability consumed by path following.
//!
//! The follower only ever asks one question of the physics layer: "walking
//! my eye ray toward the target, how far until something solid?". The trait
//! keeps that seam narrow so the host engine's collision world can sit
//! behind it; [`RoomRayCaster`] is the self-contained implementation used by
//! tests and tooling, intersecting against the room's own wall sides.

use glam::{Vec2, Vec3};

use crate::roomgen::{Room, WallSide};
use crate::types::CollisionGroup;

/// Opaque handle to whatever the ray struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColliderId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the nearest blocking surface. A miss
    /// reports infinity, mirroring engines that report the hit point "very
    /// far away" when nothing is struck.
    pub distance: f32,
    pub collider: Option<ColliderId>,
}

impl RayHit {
    pub fn miss() -> Self {
        Self { distance: f32::INFINITY, collider: None }
    }

    pub fn is_hit(self) -> bool {
        self.collider.is_some()
    }
}

pub trait CollisionQuery {
    /// Cast a segment from `origin` to `target`, reporting the nearest hit
    /// among categories selected by `mask`. Hits beyond `target` are not
    /// reported.
    fn cast_ray(&self, origin: Vec3, target: Vec3, mask: CollisionGroup) -> RayHit;
}

/// Intersects rays against a room's wall sides in the ground plane.
///
/// Walls are treated as full-height vertical planes, so only the XZ
/// projection of the ray matters; the reported distance is measured along
/// the full 3D segment.
pub struct RoomRayCaster<'a> {
    room: &'a Room,
}

impl<'a> RoomRayCaster<'a> {
    pub fn new(room: &'a Room) -> Self {
        Self { room }
    }
}

impl CollisionQuery for RoomRayCaster<'_> {
    fn cast_ray(&self, origin: Vec3, target: Vec3, mask: CollisionGroup) -> RayHit {
        if !mask.contains(CollisionGroup::WALL) {
            return RayHit::miss();
        }

        let from = Vec2::new(origin.x, origin.z);
        let to = Vec2::new(target.x, target.z);

        let mut nearest: Option<(f32, usize)> = None;
        for (index, side) in self.room.sides.iter().enumerate() {
            let Some(t) = intersect_axis_aligned(from, to, side_span(side)) else {
                continue;
            };
            if nearest.is_none_or(|(best, _)| t < best) {
                nearest = Some((t, index));
            }
        }

        match nearest {
            Some((t, index)) => RayHit {
                distance: t * origin.distance(target),
                collider: Some(ColliderId(index as u32)),
            },
            None => RayHit::miss(),
        }
    }
}

/// A wall side as (fixed axis, fixed coordinate, varying interval).
struct SideSpan {
    vertical: bool,
    fixed: f32,
    lo: f32,
    hi: f32,
}

fn side_span(side: &WallSide) -> SideSpan {
    if side.is_vertical() {
        SideSpan {
            vertical: true,
            fixed: side.x0 as f32,
            lo: side.y0.min(side.y1) as f32,
            hi: side.y0.max(side.y1) as f32,
        }
    } else {
        SideSpan {
            vertical: false,
            fixed: side.y0 as f32,
            lo: side.x0.min(side.x1) as f32,
            hi: side.x0.max(side.x1) as f32,
        }
    }
}

/// Parameter `t` in `[0, 1]` where the segment `from -> to` crosses the
/// wall's line within the wall's interval, or `None`. Segments running
/// parallel to the wall never report a crossing.
fn intersect_axis_aligned(from: Vec2, to: Vec2, span: SideSpan) -> Option<f32> {
    let (along_fixed, along_varying) = if span.vertical {
        ((from.x, to.x), (from.y, to.y))
    } else {
        ((from.y, to.y), (from.x, to.x))
    };

    let delta = along_fixed.1 - along_fixed.0;
    if delta.abs() < f32::EPSILON {
        return None;
    }

    let t = (span.fixed - along_fixed.0) / delta;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    let crossing = along_varying.0 + t * (along_varying.1 - along_varying.0);
    (span.lo..=span.hi).contains(&crossing).then_some(t)
}

#[cfg(test)]
mod tests {
    use crate::roomgen::{RoomBox, build_room};

    use super::*;

    #[test]
    fn ray_reports_the_nearest_wall() {
        let room = build_room(vec![RoomBox { left: -5, right: 5, bottom: -5, top: 5 }]);
        let caster = RoomRayCaster::new(&room);

        let hit = caster.cast_ray(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(10.0, 1.0, 0.0),
            CollisionGroup::sight_filter(),
        );
        assert!(hit.is_hit());
        assert!((hit.distance - 5.0).abs() < 1e-4, "distance was {}", hit.distance);
    }

    #[test]
    fn segment_short_of_the_wall_misses() {
        let room = build_room(vec![RoomBox { left: -5, right: 5, bottom: -5, top: 5 }]);
        let caster = RoomRayCaster::new(&room);

        let hit = caster.cast_ray(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
            CollisionGroup::sight_filter(),
        );
        assert!(!hit.is_hit());
        assert_eq!(hit.distance, f32::INFINITY);
    }

    #[test]
    fn ray_through_a_doorway_sees_past_the_shared_boundary() {
        // Two flush boxes: the boundary at x = 0 is open, so a ray across it
        // only stops at the far exterior wall.
        let room = build_room(vec![
            RoomBox { left: -6, right: 0, bottom: -3, top: 3 },
            RoomBox { left: 0, right: 6, bottom: -3, top: 3 },
        ]);
        let caster = RoomRayCaster::new(&room);

        let hit = caster.cast_ray(
            Vec3::new(-4.0, 1.0, 0.0),
            Vec3::new(9.0, 1.0, 0.0),
            CollisionGroup::sight_filter(),
        );
        assert!(hit.is_hit());
        assert!((hit.distance - 10.0).abs() < 1e-4, "distance was {}", hit.distance);
    }

    #[test]
    fn mask_without_walls_disables_the_test_double() {
        let room = build_room(vec![RoomBox { left: -5, right: 5, bottom: -5, top: 5 }]);
        let caster = RoomRayCaster::new(&room);

        let hit = caster.cast_ray(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(10.0, 1.0, 0.0),
            CollisionGroup::PLAYER | CollisionGroup::ENEMY,
        );
        assert!(!hit.is_hit());
    }
}
