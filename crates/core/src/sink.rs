//! Render-facing room data: wall volumes and floor slabs.
//!
//! The presentation layer never reads boxes or sides directly; it receives
//! axis-aligned volumes it can mesh or hand to a physics broad-phase. Each
//! wall side extrudes one unit along its normal and [`WALL_HEIGHT`] units
//! up; each box becomes a one-unit slab under the walk plane.

use glam::Vec3;

use crate::roomgen::{Room, RoomBox, WallSide};

pub const WALL_HEIGHT: f32 = 6.0;
pub const WALL_THICKNESS: f32 = 1.0;
pub const FLOOR_THICKNESS: f32 = 1.0;

/// Axis-aligned volume in world space. Extents are always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Volume {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Consumer of the room's renderable/collidable geometry.
pub trait RoomSink {
    fn add_wall(&mut self, volume: Volume);
    fn add_floor(&mut self, volume: Volume);
}

/// Feed every wall and floor volume of a room into `sink`, walls first.
pub fn emit_room(room: &Room, sink: &mut impl RoomSink) {
    for side in &room.sides {
        sink.add_wall(wall_volume(side));
    }
    for room_box in &room.boxes {
        sink.add_floor(floor_slab(room_box));
    }
}

/// Extrude a wall side into a solid volume. The normal's sign decides which
/// side of the wall line the slab occupies, so walls grow into the open
/// space they face rather than into the neighboring cell.
pub fn wall_volume(side: &WallSide) -> Volume {
    let (size_x, size_z) = if side.is_horizontal() {
        ((side.x1 - side.x0) as f32, side.normal.y as f32 * WALL_THICKNESS)
    } else {
        (side.normal.x as f32 * WALL_THICKNESS, (side.y1 - side.y0) as f32)
    };

    Volume {
        center: Vec3::new(
            side.x0 as f32 + size_x / 2.0,
            WALL_HEIGHT / 2.0,
            side.y0 as f32 + size_z / 2.0,
        ),
        half_extents: Vec3::new(size_x.abs() / 2.0, WALL_HEIGHT / 2.0, size_z.abs() / 2.0),
    }
}

/// Slab spanning the box footprint, its top face on the walk plane's level.
pub fn floor_slab(room_box: &RoomBox) -> Volume {
    let size = Vec3::new(room_box.width() as f32, FLOOR_THICKNESS, room_box.height() as f32);
    Volume {
        center: Vec3::new(
            room_box.left as f32 + size.x / 2.0,
            size.y / 2.0,
            room_box.bottom as f32 + size.z / 2.0,
        ),
        half_extents: size / 2.0,
    }
}
