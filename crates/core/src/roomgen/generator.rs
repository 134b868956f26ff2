//! Box placement: grows a connected layout outward from a centered root box.

use std::fmt;

use log::debug;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::model::RoomBox;

/// Tuning knobs for a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomParams {
    /// Generation stops once the summed box area reaches this.
    pub minimum_area: u32,
    /// Inclusive lower bound for each box's width and height.
    pub min_box_size: i32,
    /// Inclusive upper bound for each box's width and height.
    pub max_box_size: i32,
}

impl Default for RoomParams {
    fn default() -> Self {
        Self { minimum_area: 2500, min_box_size: 5, max_box_size: 15 }
    }
}

impl RoomParams {
    pub fn validate(&self) -> Result<(), RoomParamsError> {
        if self.min_box_size <= 0 {
            return Err(RoomParamsError::NonPositiveBoxSize(self.min_box_size));
        }
        if self.min_box_size > self.max_box_size {
            return Err(RoomParamsError::InvertedSizeRange {
                min: self.min_box_size,
                max: self.max_box_size,
            });
        }
        if self.minimum_area == 0 {
            return Err(RoomParamsError::ZeroArea);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomParamsError {
    NonPositiveBoxSize(i32),
    InvertedSizeRange { min: i32, max: i32 },
    ZeroArea,
}

impl fmt::Display for RoomParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBoxSize(size) => {
                write!(f, "box size bound {size} must be positive")
            }
            Self::InvertedSizeRange { min, max } => {
                write!(f, "minimum box size {min} exceeds maximum {max}")
            }
            Self::ZeroArea => write!(f, "minimum area must be nonzero"),
        }
    }
}

impl std::error::Error for RoomParamsError {}

/// Deterministic box-layout generator.
///
/// Owns its random stream; two generators seeded identically and asked for
/// the same parameters produce identical layouts. Draw order is part of the
/// contract: per box, width then height, then (for non-root boxes) one
/// direction draw.
pub struct RoomGenerator {
    rng: ChaCha8Rng,
}

impl RoomGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Place boxes until the accumulated area reaches `params.minimum_area`.
    pub fn generate(&mut self, params: &RoomParams) -> Result<Vec<RoomBox>, RoomParamsError> {
        self.generate_with_steps(params, |_| {})
    }

    /// Like [`generate`](Self::generate), invoking `on_step` with the layout
    /// so far after every box placed past the root. Lets diagnostic tooling
    /// raster each intermediate layout without threading I/O through here.
    pub fn generate_with_steps(
        &mut self,
        params: &RoomParams,
        mut on_step: impl FnMut(&[RoomBox]),
    ) -> Result<Vec<RoomBox>, RoomParamsError> {
        params.validate()?;

        // Root box: centered on the origin, ceiling the positive half and
        // flooring the negative half so odd sizes keep their exact extent.
        let width = self.size_draw(params);
        let height = self.size_draw(params);
        let mut current_area = width as u64 * height as u64;
        let root = RoomBox {
            left: -(width / 2),
            right: (width + 1) / 2,
            bottom: -(height / 2),
            top: (height + 1) / 2,
        };

        let mut boxes = vec![root];
        let mut rightmost = 0_usize;
        let mut leftmost = 0_usize;
        let mut bottommost = 0_usize;
        let mut topmost = 0_usize;

        while current_area < params.minimum_area as u64 {
            let width = self.size_draw(params);
            let height = self.size_draw(params);
            current_area += width as u64 * height as u64;

            // Eight placements: four anchor sides, each with two cross-axis
            // alignment alternates.
            let direction = self.rng.next_u32() % 8;
            let anchor = match direction / 2 {
                0 => boxes[rightmost],
                1 => boxes[leftmost],
                2 => boxes[bottommost],
                _ => boxes[topmost],
            };

            let mut new_box = RoomBox { left: 0, right: 0, bottom: 0, top: 0 };
            match direction / 2 {
                0 => {
                    new_box.left = anchor.right;
                    new_box.right = new_box.left + width;
                }
                1 => {
                    new_box.right = anchor.left;
                    new_box.left = new_box.right - width;
                }
                2 => {
                    new_box.top = anchor.bottom;
                    new_box.bottom = new_box.top - height;
                }
                _ => {
                    new_box.bottom = anchor.top;
                    new_box.top = new_box.bottom + height;
                }
            }

            if direction < 4 {
                if direction % 2 == 0 {
                    new_box.top = anchor.top;
                    new_box.bottom = new_box.top - height;
                } else {
                    new_box.bottom = anchor.bottom;
                    new_box.top = new_box.bottom + height;
                }
            } else if direction % 2 == 0 {
                new_box.left = anchor.left;
                new_box.right = new_box.left + width;
            } else {
                new_box.right = anchor.right;
                new_box.left = new_box.right - width;
            }

            // Strict comparisons: on a tie the earlier box keeps the title.
            if new_box.right > boxes[rightmost].right {
                rightmost = boxes.len();
            }
            if new_box.left < boxes[leftmost].left {
                leftmost = boxes.len();
            }
            if new_box.bottom < boxes[bottommost].bottom {
                bottommost = boxes.len();
            }
            if new_box.top > boxes[topmost].top {
                topmost = boxes.len();
            }

            boxes.push(new_box);
            on_step(&boxes);
        }

        debug!("room layout reached area {current_area} with {} boxes", boxes.len());
        Ok(boxes)
    }

    fn size_draw(&mut self, params: &RoomParams) -> i32 {
        let span = (params.max_box_size - params.min_box_size + 1) as u32;
        params.min_box_size + (self.rng.next_u32() % span) as i32
    }
}
