//! 16-color palettes and the standard palette library.
//!
//! Every palette holds 16 RGBA colors. Index 0 is always transparent black and
//! index 1 opaque black, so formats only ever store indices 2..15.
//!
//! [`StandardPaletteLibrary`] holds the 32 named palettes that sprites can
//! reference by id instead of embedding their own colors.
mod color;
pub mod constants;
pub mod error;
mod json;
mod library;
mod parser;
mod types;
mod writer;

pub use color::*;
pub use constants::*;
pub use error::PaletteError;
pub use library::StandardPaletteLibrary;
pub use types::*;
