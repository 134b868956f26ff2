//! Public data model for generated rooms: boxes, wall sides, bounds, adjacency.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// One axis-aligned rectangular cell of a room layout.
///
/// Edges are integers with `left < right` and `bottom < top`. A point is
/// inside the box over the half-open range `[left, right) x [bottom, top)`,
/// so cells that share an edge never both claim it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBox {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

impl RoomBox {
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    pub fn height(self) -> i32 {
        self.top - self.bottom
    }

    pub fn area(self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) as f32 / 2.0,
            (self.bottom + self.top) as f32 / 2.0,
        )
    }

    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.left as f32
            && point.x < self.right as f32
            && point.y >= self.bottom as f32
            && point.y < self.top as f32
    }
}

/// A solid boundary edge between walkable space and everything else.
///
/// Endpoints are integers and the side is purely horizontal (`y0 == y1`) or
/// purely vertical (`x0 == x1`). The unit `normal` points from the wall line
/// into the open space it faces, and doubles as the extrusion direction when
/// the side is turned into a render volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSide {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub normal: IVec2,
}

impl WallSide {
    pub fn is_horizontal(self) -> bool {
        self.y0 == self.y1
    }

    pub fn is_vertical(self) -> bool {
        self.x0 == self.x1
    }

    /// True once both endpoints coincide; such sides are dropped after the
    /// overlap-resolution pass.
    pub fn is_degenerate(self) -> bool {
        self.x0 == self.x1 && self.y0 == self.y1
    }

    /// Length along the varying axis.
    pub fn len(self) -> i32 {
        (self.x1 - self.x0).abs() + (self.y1 - self.y0).abs()
    }
}

/// Integer bounding rectangle over every box edge in a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn width(self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> i32 {
        self.max_y - self.min_y
    }
}

/// Immutable aggregate produced once per level and shared read-only by every
/// follower and by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub boxes: Vec<RoomBox>,
    pub sides: Vec<WallSide>,
    pub bounds: Bounds,
    /// For each box index, the indices of boxes reachable through a shared
    /// opening. Symmetric; each list sorted ascending.
    pub adjacency: Vec<Vec<usize>>,
}

impl Room {
    /// Index of the box whose half-open extent contains `point`, if any.
    /// `None` means the point sits in a wall or outside the room entirely.
    pub fn box_at(&self, point: Vec2) -> Option<usize> {
        self.boxes.iter().position(|room_box| room_box.contains(point))
    }

    pub fn total_area(&self) -> u64 {
        self.boxes.iter().map(|room_box| room_box.area()).sum()
    }

    /// Stable little-endian encoding of the whole aggregate, used for
    /// determinism checks and the generation fingerprint.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.bounds.min_x.to_le_bytes());
        bytes.extend(self.bounds.min_y.to_le_bytes());
        bytes.extend(self.bounds.max_x.to_le_bytes());
        bytes.extend(self.bounds.max_y.to_le_bytes());

        bytes.extend((self.boxes.len() as u32).to_le_bytes());
        for room_box in &self.boxes {
            bytes.extend(room_box.left.to_le_bytes());
            bytes.extend(room_box.right.to_le_bytes());
            bytes.extend(room_box.bottom.to_le_bytes());
            bytes.extend(room_box.top.to_le_bytes());
        }

        bytes.extend((self.sides.len() as u32).to_le_bytes());
        for side in &self.sides {
            bytes.extend(side.x0.to_le_bytes());
            bytes.extend(side.y0.to_le_bytes());
            bytes.extend(side.x1.to_le_bytes());
            bytes.extend(side.y1.to_le_bytes());
            bytes.extend(side.normal.x.to_le_bytes());
            bytes.extend(side.normal.y.to_le_bytes());
        }

        for neighbors in &self.adjacency {
            bytes.extend((neighbors.len() as u32).to_le_bytes());
            for &neighbor in neighbors {
                bytes.extend((neighbor as u32).to_le_bytes());
            }
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
