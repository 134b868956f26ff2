//! TOML-backed generation parameter files.
//!
//! Any subset of the fields may be present; missing ones fall back to the
//! crate defaults, so a file can pin just the knob under investigation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use warren_core::RoomParams;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ParamsFile {
    minimum_area: Option<u32>,
    min_box_size: Option<i32>,
    max_box_size: Option<i32>,
}

pub fn load_params(path: &Path) -> Result<RoomParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: ParamsFile = toml::from_str(&text)
        .with_context(|| format!("{} is not a valid parameter file", path.display()))?;

    let defaults = RoomParams::default();
    Ok(RoomParams {
        minimum_area: file.minimum_area.unwrap_or(defaults.minimum_area),
        min_box_size: file.min_box_size.unwrap_or(defaults.min_box_size),
        max_box_size: file.max_box_size.unwrap_or(defaults.max_box_size),
    })
}
