//! Packed tile descriptors.
//!
//! A tile descriptor is a fixed-width integer that says which tileset entry a
//! grid cell shows and how it is drawn. Two layouts exist:
//!
//! - [`TileData`], 16 bits: 11-bit tile id, rotation, flips and a collision bit.
//! - [`TileDataEx`], 32 bits: 12-bit tile id, 8-bit palette index, 3-bit z-order,
//!   the same transform bits and 4 reserved bits.
//!
//! Setters never fail. Values wider than their field are masked to the field
//! width, so `set_tile_id(2048)` on a [`TileData`] stores `0`. Code that keeps
//! tile ids in wider integers relies on this wrap-around.
mod constants;
mod flags;
mod tile_data;
mod tile_data_ex;

pub use constants::*;
pub use flags::{TileExFlags, TileFlags};
pub use tile_data::TileData;
pub use tile_data_ex::TileDataEx;

/// Quarter turns to degrees.
fn rotation_to_degrees(rotation: u8) -> f32 {
    rotation as f32 * 90.0
}

fn rotation_to_radians(rotation: u8) -> f32 {
    rotation as f32 * std::f32::consts::FRAC_PI_2
}
