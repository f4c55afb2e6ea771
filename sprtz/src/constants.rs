pub const SPRTZ_MAGIC: &[u8; 4] = b"SPTZ";
pub const SPRTZ_VERSION_1: u16 = 1;
pub const SPRTZ_VERSION_2: u16 = 2;

pub const HEADER_LENGTH: usize = 16;
/// Magic plus version, all [`crate::file_version`] looks at.
pub const VERSION_PREFIX_LENGTH: usize = 6;

/// Colors 2..15 as RGB.
pub const CUSTOM_PALETTE_LENGTH: usize = 14 * 3;

/// Sizes the sprite editor produces. Other sizes are still accepted.
pub const SPRITE_SIZES: [u8; 3] = [8, 16, 40];

pub const MAX_PIXEL_VALUE: u8 = 15;

pub const SHORT_RUN_MAX: usize = 15;
pub const LONG_RUN_MAX: usize = 255;
pub const LONG_RUN_MARKER: u8 = 0xF0;
pub const LONG_RUN_LENGTH: usize = 3;
