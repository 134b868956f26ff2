//! Procedural room domain split into coherent submodules.

pub mod model;

mod adjacency;
mod generator;
mod geometry;
mod raster;

pub use generator::{RoomGenerator, RoomParams, RoomParamsError};
pub use geometry::build_room;
pub use model::{Bounds, Room, RoomBox, WallSide};
pub use raster::{RasterError, RoomRaster, rasterize, write_raster};

/// Generate a layout and build the room aggregate in one step.
pub fn generate_room(seed: u64, params: &RoomParams) -> Result<Room, RoomParamsError> {
    let boxes = RoomGenerator::new(seed).generate(params)?;
    Ok(build_room(boxes))
}

#[cfg(test)]
mod tests {
    use super::{RoomGenerator, RoomParams, build_room};

    #[test]
    fn generate_room_matches_manual_composition() {
        let seed = 123_u64;
        let params = RoomParams::default();

        let from_helper = super::generate_room(seed, &params).expect("valid params");
        let boxes = RoomGenerator::new(seed).generate(&params).expect("valid params");
        let from_parts = build_room(boxes);

        assert_eq!(from_helper, from_parts);
    }
}
