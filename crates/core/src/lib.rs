pub mod follow;
pub mod raycast;
pub mod registry;
pub mod roomgen;
pub mod sink;
pub mod types;

pub use follow::{FollowConfig, PathFollower, PathOutcome, find_path};
pub use raycast::{ColliderId, CollisionQuery, RayHit, RoomRayCaster};
pub use registry::TargetRegistry;
pub use roomgen::{
    Bounds, RasterError, Room, RoomBox, RoomGenerator, RoomParams, RoomParamsError, RoomRaster,
    WallSide, build_room, generate_room, rasterize, write_raster,
};
pub use sink::{RoomSink, Volume, emit_room};
pub use types::{CollisionGroup, Steering, TargetId};
