//! Box-to-box adjacency derived from shared open boundaries.

use super::model::RoomBox;

/// Two boxes are adjacent when they sit flush on one axis and their extents
/// on the other axis overlap with positive length. These are exactly the
/// coincident wall spans that the overlap-resolution pass trims into
/// openings. A corner-only touch (zero-length overlap) keeps a wall and is
/// not adjacency.
pub(super) fn build_adjacency(boxes: &[RoomBox]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); boxes.len()];
    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            if shares_opening(boxes[i], boxes[j]) {
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }
    }
    adjacency
}

fn shares_opening(a: RoomBox, b: RoomBox) -> bool {
    let vertical_overlap = a.top.min(b.top) - a.bottom.max(b.bottom);
    let horizontal_overlap = a.right.min(b.right) - a.left.max(b.left);

    if (a.right == b.left || b.right == a.left) && vertical_overlap > 0 {
        return true;
    }
    (a.top == b.bottom || b.top == a.bottom) && horizontal_overlap > 0
}
