//! Wall outline construction: per-box candidates, overlap resolution, cleanup.
//!
//! Boxes are placed flush against each other by the generator, so every
//! boundary between two boxes shows up twice as coincident wall candidates.
//! The resolution pass trims those coincident spans away, which is exactly
//! what turns a stack of rectangles into rooms with doorways: interior
//! boundaries open up, exterior runs stay walled.

use glam::IVec2;

use super::adjacency::build_adjacency;
use super::model::{Bounds, Room, RoomBox, WallSide};

/// Build the immutable room aggregate from a finished box layout.
pub fn build_room(boxes: Vec<RoomBox>) -> Room {
    let bounds = bounds_of(&boxes);
    let mut sides = wall_candidates(&boxes);
    resolve_overlaps(&mut sides);
    sides.retain(|side| !side.is_degenerate());
    let adjacency = build_adjacency(&boxes);
    Room { boxes, sides, bounds, adjacency }
}

fn bounds_of(boxes: &[RoomBox]) -> Bounds {
    let mut boxes = boxes.iter();
    let Some(first) = boxes.next() else {
        return Bounds::default();
    };

    let mut bounds =
        Bounds { min_x: first.left, min_y: first.bottom, max_x: first.right, max_y: first.top };
    for room_box in boxes {
        bounds.min_x = bounds.min_x.min(room_box.left);
        bounds.min_y = bounds.min_y.min(room_box.bottom);
        bounds.max_x = bounds.max_x.max(room_box.right);
        bounds.max_y = bounds.max_y.max(room_box.top);
    }
    bounds
}

/// Four directed candidates per box: top, right, bottom, left. Normals point
/// into the box's own open interior.
fn wall_candidates(boxes: &[RoomBox]) -> Vec<WallSide> {
    let mut sides = Vec::with_capacity(boxes.len() * 4);
    for b in boxes {
        sides.push(WallSide { x0: b.left, y0: b.top, x1: b.right, y1: b.top, normal: IVec2::NEG_Y });
        sides.push(WallSide {
            x0: b.right,
            y0: b.bottom,
            x1: b.right,
            y1: b.top,
            normal: IVec2::NEG_X,
        });
        sides.push(WallSide {
            x0: b.left,
            y0: b.bottom,
            x1: b.right,
            y1: b.bottom,
            normal: IVec2::Y,
        });
        sides.push(WallSide { x0: b.left, y0: b.bottom, x1: b.left, y1: b.top, normal: IVec2::X });
    }
    sides
}

/// Pairwise overlap resolution over collinear sides.
///
/// Visits every ordered pair (outer `i`, inner `j != i`) in fixed index
/// order and mutates both sides in place; the iteration order is part of
/// the determinism contract. Four cases per orientation:
/// - `i` fully contains `j`: `i` is truncated to stop where `j` starts and
///   the remaining tail is reassigned to `j`, which inherits `i`'s normal.
/// - `j` fully contains `i`: the mirrored transformation.
/// - exactly one endpoint of `i` falls strictly inside `j`: both sides are
///   trimmed to the intersection point, leaving a gap over the shared span.
///   (Two sub-cases, one per endpoint ordering.)
///
/// A side that collapses to a point keeps participating in later pairs,
/// since a containment case can hand it a new span, so degenerates are only
/// filtered once the full scan is done.
fn resolve_overlaps(sides: &mut [WallSide]) {
    for i in 0..sides.len() {
        for j in 0..sides.len() {
            if i == j || sides[j].is_degenerate() {
                continue;
            }

            let mut side = sides[i];
            let mut other = sides[j];

            if side.is_horizontal() && other.is_horizontal() && side.y0 == other.y0 {
                if side.x0 <= other.x0 && side.x1 >= other.x1 {
                    let tail = side.x1;
                    side.x1 = other.x0;
                    other.x0 = other.x1;
                    other.x1 = tail;
                    other.normal = side.normal;
                } else if side.x0 >= other.x0 && side.x1 <= other.x1 {
                    let tail = other.x1;
                    other.x1 = side.x0;
                    side.x0 = side.x1;
                    side.x1 = tail;
                    side.normal = other.normal;
                } else if side.x0 > other.x0 && side.x0 < other.x1 && side.x1 > other.x1 {
                    let cut = other.x1;
                    other.x1 = side.x0;
                    side.x0 = cut;
                } else if side.x1 > other.x0 && side.x1 < other.x1 && side.x0 < other.x0 {
                    let cut = side.x1;
                    side.x1 = other.x0;
                    other.x0 = cut;
                }
            }

            if side.is_vertical() && other.is_vertical() && side.x0 == other.x0 {
                if side.y0 <= other.y0 && side.y1 >= other.y1 {
                    let tail = side.y1;
                    side.y1 = other.y0;
                    other.y0 = other.y1;
                    other.y1 = tail;
                    other.normal = side.normal;
                } else if side.y0 >= other.y0 && side.y1 <= other.y1 {
                    let tail = other.y1;
                    other.y1 = side.y0;
                    side.y0 = side.y1;
                    side.y1 = tail;
                    side.normal = other.normal;
                } else if side.y0 > other.y0 && side.y0 < other.y1 && side.y1 > other.y1 {
                    let cut = other.y1;
                    other.y1 = side.y0;
                    side.y0 = cut;
                } else if side.y1 > other.y0 && side.y1 < other.y1 && side.y0 < other.y0 {
                    let cut = side.y1;
                    side.y1 = other.y0;
                    other.y0 = cut;
                }
            }

            sides[i] = side;
            sides[j] = other;
        }
    }
}
