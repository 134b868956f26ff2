//! Diagnostic raster dumps of a room's wall outline.
//!
//! The output is an uncompressed 24-bit BMP, one pixel per integer cell of
//! the room's bounding rectangle, rows stored bottom-up so image y grows
//! with world y. The background is black and each wall side is drawn as a
//! one-pixel-wide run in a bright color derived from its index, so split
//! sides stay visually distinguishable across regenerations. Purely a
//! debugging aid; nothing reads these files back.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::model::Room;

/// RGB pixel grid covering the room bounds, rows bottom-up.
pub struct RoomRaster {
    pub width: u32,
    pub height: u32,
    /// `width * height * 3` bytes, row-major from the bottom row.
    pub pixels: Vec<u8>,
}

#[derive(Debug)]
pub enum RasterError {
    /// A room with no boxes has a zero-size bounding rectangle.
    EmptyRoom,
    Io(io::Error),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoom => write!(f, "cannot rasterize a room with no boxes"),
            Self::Io(e) => write!(f, "raster I/O error: {e}"),
        }
    }
}

impl std::error::Error for RasterError {}

impl From<io::Error> for RasterError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Paint the room's wall sides over a black background.
pub fn rasterize(room: &Room) -> Result<RoomRaster, RasterError> {
    if room.boxes.is_empty() {
        return Err(RasterError::EmptyRoom);
    }

    let width = (room.bounds.width() + 1) as u32;
    let height = (room.bounds.height() + 1) as u32;
    let mut pixels = vec![0_u8; width as usize * height as usize * 3];

    for (index, side) in room.sides.iter().enumerate() {
        let color = side_color(index);
        let column = (side.x0.min(side.x1) - room.bounds.min_x) as u32;
        let row = (side.y0.min(side.y1) - room.bounds.min_y) as u32;

        let (run_width, run_height) = if side.is_vertical() {
            (1, (side.y1 - side.y0).unsigned_abs())
        } else {
            ((side.x1 - side.x0).unsigned_abs(), 1)
        };

        for y in row..(row + run_height).min(height) {
            for x in column..(column + run_width).min(width) {
                let offset = (y * width + x) as usize * 3;
                pixels[offset..offset + 3].copy_from_slice(&color);
            }
        }
    }

    Ok(RoomRaster { width, height, pixels })
}

/// Rasterize and encode to an uncompressed 24-bit BMP file.
pub fn write_raster(room: &Room, path: &Path) -> Result<(), RasterError> {
    let raster = rasterize(room)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode_bmp(&raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Bright, deterministic per-side color: every channel in `127..=255`.
fn side_color(index: usize) -> [u8; 3] {
    let mut mixed = (index as u64).wrapping_mul(0xD6E8_FD9A_5B89_7A4D) ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 29;

    let channel = |bits: u64| 127 + (bits as u8 % 129);
    [channel(mixed), channel(mixed >> 8), channel(mixed >> 16)]
}

fn encode_bmp(raster: &RoomRaster, writer: &mut impl Write) -> io::Result<()> {
    const FILE_HEADER_LEN: u32 = 14;
    const INFO_HEADER_LEN: u32 = 40;

    let row_bytes = raster.width * 3;
    let row_padding = (4 - row_bytes % 4) % 4;
    let image_bytes = (row_bytes + row_padding) * raster.height;
    let file_bytes = FILE_HEADER_LEN + INFO_HEADER_LEN + image_bytes;

    writer.write_all(b"BM")?;
    writer.write_all(&file_bytes.to_le_bytes())?;
    writer.write_all(&0_u32.to_le_bytes())?;
    writer.write_all(&(FILE_HEADER_LEN + INFO_HEADER_LEN).to_le_bytes())?;

    writer.write_all(&INFO_HEADER_LEN.to_le_bytes())?;
    writer.write_all(&(raster.width as i32).to_le_bytes())?;
    writer.write_all(&(raster.height as i32).to_le_bytes())?;
    writer.write_all(&1_u16.to_le_bytes())?;
    writer.write_all(&24_u16.to_le_bytes())?;
    writer.write_all(&0_u32.to_le_bytes())?;
    writer.write_all(&image_bytes.to_le_bytes())?;
    writer.write_all(&2835_i32.to_le_bytes())?;
    writer.write_all(&2835_i32.to_le_bytes())?;
    writer.write_all(&0_u32.to_le_bytes())?;
    writer.write_all(&0_u32.to_le_bytes())?;

    // BMP stores the bottom row first, which is also how the raster is laid
    // out, so rows go out in buffer order. Pixels flip RGB -> BGR.
    let padding = [0_u8; 3];
    for row in 0..raster.height {
        let start = (row * raster.width) as usize * 3;
        let end = start + raster.width as usize * 3;
        for pixel in raster.pixels[start..end].chunks_exact(3) {
            writer.write_all(&[pixel[2], pixel[1], pixel[0]])?;
        }
        writer.write_all(&padding[..row_padding as usize])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use glam::Vec2;

    use super::super::geometry::build_room;
    use super::super::model::RoomBox;
    use super::*;

    fn two_box_room() -> Room {
        build_room(vec![
            RoomBox { left: -4, right: 0, bottom: -3, top: 3 },
            RoomBox { left: 0, right: 5, bottom: -3, top: 3 },
        ])
    }

    #[test]
    fn raster_dimensions_track_the_bounds() {
        let raster = rasterize(&two_box_room()).expect("non-empty room");
        assert_eq!(raster.width, 10);
        assert_eq!(raster.height, 7);
        assert_eq!(raster.pixels.len(), 10 * 7 * 3);
    }

    #[test]
    fn walls_are_bright_and_interiors_stay_black() {
        let room = two_box_room();
        let raster = rasterize(&room).expect("non-empty room");

        // World (-4, -3) is the bottom-left wall corner: pixel (0, 0).
        let corner = &raster.pixels[0..3];
        assert!(corner.iter().all(|&channel| channel >= 127), "corner not painted: {corner:?}");

        // The room center is open floor and must stay black.
        assert!(room.box_at(Vec2::new(-2.0, 0.0)).is_some());
        let center_offset = ((3 * raster.width + 2) as usize) * 3;
        assert_eq!(&raster.pixels[center_offset..center_offset + 3], &[0, 0, 0]);
    }

    #[test]
    fn side_colors_are_deterministic_per_index() {
        assert_eq!(side_color(0), side_color(0));
        assert_ne!(side_color(0), side_color(1));
        for index in 0..32 {
            assert!(side_color(index).iter().all(|&channel| channel >= 127));
        }
    }

    #[test]
    fn empty_room_is_refused() {
        let room = build_room(Vec::new());
        assert!(matches!(rasterize(&room), Err(RasterError::EmptyRoom)));
    }

    #[test]
    fn written_file_is_a_well_formed_bmp() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("room.bmp");
        write_raster(&two_box_room(), &path).expect("write succeeds");

        let bytes = fs::read(&path).expect("file readable");
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), bytes.len() as u32);
        assert_eq!(i32::from_le_bytes(bytes[18..22].try_into().unwrap()), 10);
        assert_eq!(i32::from_le_bytes(bytes[22..26].try_into().unwrap()), 7);
        assert_eq!(u16::from_le_bytes(bytes[28..30].try_into().unwrap()), 24);
    }
}
