pub const TILE_EMPTY: u16 = 0;
pub const TILE_MAX_ID: u16 = 2047;

pub const TILEEX_EMPTY: u16 = 0;
pub const TILEEX_MAX_ID: u16 = 4095;
pub const TILEEX_MAX_PALETTE: u8 = 255;
pub const TILEEX_MAX_ZORDER: u8 = 7;

/// Quarter turns, clockwise.
pub const ROTATION_0: u8 = 0;
pub const ROTATION_90: u8 = 1;
pub const ROTATION_180: u8 = 2;
pub const ROTATION_270: u8 = 3;

pub const ZORDER_BACKGROUND: u8 = 0;
pub const ZORDER_BACK: u8 = 1;
pub const ZORDER_MIDBACK: u8 = 2;
/// Z-order given to tiles upgraded from the 16-bit layout.
pub const ZORDER_NORMAL: u8 = 3;
pub const ZORDER_MIDFRONT: u8 = 4;
pub const ZORDER_FRONT: u8 = 5;
pub const ZORDER_TOP: u8 = 6;
pub const ZORDER_UI: u8 = 7;
