//! SPRTZ sprite container.
//!
//! A file is a 16-byte little-endian header, a palette section and the
//! run-length coded pixel plane:
//!
//! ```text
//! "SPTZ" | version u16 | width u8 | height u8 | pixels u32 | compressed u32
//! v1: 42 bytes RGB for indices 2..15
//! v2: descriptor u8, a standard palette id (0..31) or 0xFF followed by 42 bytes RGB
//! RLE pixel data, see [`rle`]
//! ```
pub mod constants;
pub mod error;
mod parser;
pub mod rle;
mod types;
mod utils;
mod writer;

pub use rle::estimate_compressed_size;
pub use types::*;
pub use utils::*;
pub use writer::{encode_v1, encode_v2_auto, encode_v2_custom, encode_v2_standard};
