pub const STANDARD_PALETTE_COUNT: usize = 32;
pub const STANDARD_PALETTE_COLORS: usize = 16;

/// Palette descriptor byte meaning "custom palette follows".
pub const PALETTE_MODE_CUSTOM: u8 = 0xFF;

pub const PALETTE_INDEX_TRANSPARENT: usize = 0;
pub const PALETTE_INDEX_BLACK: usize = 1;
pub const PALETTE_INDEX_FIRST_COLOR: usize = 2;
pub const PALETTE_USABLE_COLORS: usize = 14;

/// Average per-channel difference tolerated by [`MATCH_THRESHOLD`].
pub const MATCH_TOLERANCE_PER_CHANNEL: u32 = 8;

/// Largest total distance still reported as a match: every slot of the
/// palette off by [`MATCH_TOLERANCE_PER_CHANNEL`] on each of R, G and B.
pub const MATCH_THRESHOLD: u32 = STANDARD_PALETTE_COLORS as u32
    * 3
    * MATCH_TOLERANCE_PER_CHANNEL
    * MATCH_TOLERANCE_PER_CHANNEL;

// Retro platforms
pub const STANDARD_PALETTE_C64: u8 = 0;
pub const STANDARD_PALETTE_CGA: u8 = 1;
pub const STANDARD_PALETTE_CGA_ALT: u8 = 2;
pub const STANDARD_PALETTE_ZX_SPECTRUM: u8 = 3;
pub const STANDARD_PALETTE_NES: u8 = 4;
pub const STANDARD_PALETTE_GAMEBOY: u8 = 5;
pub const STANDARD_PALETTE_GAMEBOY_COLOR: u8 = 6;
pub const STANDARD_PALETTE_APPLE_II: u8 = 7;

// Biomes
pub const STANDARD_PALETTE_FOREST: u8 = 8;
pub const STANDARD_PALETTE_DESERT: u8 = 9;
pub const STANDARD_PALETTE_ICE: u8 = 10;
pub const STANDARD_PALETTE_OCEAN: u8 = 11;
pub const STANDARD_PALETTE_LAVA: u8 = 12;
pub const STANDARD_PALETTE_SWAMP: u8 = 13;
pub const STANDARD_PALETTE_CAVE: u8 = 14;
pub const STANDARD_PALETTE_MOUNTAIN: u8 = 15;

// Themed
pub const STANDARD_PALETTE_DUNGEON: u8 = 16;
pub const STANDARD_PALETTE_NEON: u8 = 17;
pub const STANDARD_PALETTE_PASTEL: u8 = 18;
pub const STANDARD_PALETTE_EARTH: u8 = 19;
pub const STANDARD_PALETTE_METAL: u8 = 20;
pub const STANDARD_PALETTE_CRYSTAL: u8 = 21;
pub const STANDARD_PALETTE_TOXIC: u8 = 22;
pub const STANDARD_PALETTE_BLOOD: u8 = 23;

// Utility
pub const STANDARD_PALETTE_GRAYSCALE: u8 = 24;
pub const STANDARD_PALETTE_SEPIA: u8 = 25;
pub const STANDARD_PALETTE_BLUE_TINT: u8 = 26;
pub const STANDARD_PALETTE_GREEN_TINT: u8 = 27;
pub const STANDARD_PALETTE_RED_TINT: u8 = 28;
pub const STANDARD_PALETTE_HIGH_CONTRAST: u8 = 29;
pub const STANDARD_PALETTE_COLORBLIND_SAFE: u8 = 30;
pub const STANDARD_PALETTE_NIGHT_MODE: u8 = 31;
