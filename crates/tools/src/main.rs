use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use warren_core::{Room, RoomGenerator, RoomParams, build_room, write_raster};

mod params_file;

#[derive(Parser)]
#[command(author, version, about = "Generate a room layout and dump diagnostics", long_about = None)]
struct Args {
    /// Seed for the layout; drawn from process entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file overriding the default generation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving rasters and the JSON summary
    #[arg(short, long, default_value = "room-out")]
    out: PathBuf,

    /// Write one BMP per placement step, not just the final layout
    #[arg(long)]
    steps: bool,

    /// Also write room.json with the full aggregate
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = match &args.config {
        Some(path) => params_file::load_params(path)?,
        None => RoomParams::default(),
    };
    params.validate().context("generation parameters are invalid")?;

    let seed = args.seed.unwrap_or_else(entropy_seed);
    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    let room = generate(seed, &params, &args)?;

    write_raster(&room, &args.out.join("room.bmp"))
        .with_context(|| format!("failed to write raster into {}", args.out.display()))?;

    if args.json {
        let file = File::create(args.out.join("room.json"))
            .with_context(|| format!("failed to create room.json in {}", args.out.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &room)
            .context("failed to serialize the room")?;
    }

    let opening_count: usize =
        room.adjacency.iter().map(|neighbors| neighbors.len()).sum::<usize>() / 2;
    println!("Seed: {seed}");
    println!("Boxes: {}", room.boxes.len());
    println!("Total area: {}", room.total_area());
    println!("Wall sides: {}", room.sides.len());
    println!("Openings: {opening_count}");
    println!(
        "Bounds: [{}, {}] x [{}, {}]",
        room.bounds.min_x, room.bounds.max_x, room.bounds.min_y, room.bounds.max_y
    );
    println!("Fingerprint: {:016x}", room.fingerprint());

    Ok(())
}

fn generate(seed: u64, params: &RoomParams, args: &Args) -> Result<Room> {
    let mut generator = RoomGenerator::new(seed);

    let boxes = if args.steps {
        let mut step_index = 0_usize;
        generator.generate_with_steps(params, |layout_so_far| {
            let snapshot = build_room(layout_so_far.to_vec());
            let path = args.out.join(format!("room{step_index}.bmp"));
            if let Err(error) = write_raster(&snapshot, &path) {
                warn!("skipping step raster {}: {error}", path.display());
            }
            step_index += 1;
        })?
    } else {
        generator.generate(params)?
    };

    Ok(build_room(boxes))
}

/// One-shot seed for runs that did not pin one: wall-clock nanos and the
/// process id, finalized with a 64-bit mix so close-together runs still
/// land far apart.
fn entropy_seed() -> u64 {
    let now_nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());

    let mut value = (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17);
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
