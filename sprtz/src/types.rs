use palette::{Palette, PALETTE_MODE_CUSTOM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprtzHeader {
    pub version: u16,
    pub width: u8,
    pub height: u8,
    /// Always `width * height`.
    pub uncompressed_size: u32,
    /// Length of the RLE section after the palette section.
    pub compressed_size: u32,
}

impl SprtzHeader {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Indexed sprite, one byte per pixel, row-major, values 0..15.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub width: u8,
    pub height: u8,
    pub pixels: Vec<u8>,
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    /// Colors stored in the file.
    Custom,
    /// Colors resolved from the standard palette library.
    Standard(u8),
}

impl PaletteSource {
    pub fn is_standard(&self) -> bool {
        matches!(self, PaletteSource::Standard(_))
    }

    /// Palette descriptor byte as stored by version 2.
    pub fn mode(&self) -> u8 {
        match self {
            PaletteSource::Custom => PALETTE_MODE_CUSTOM,
            PaletteSource::Standard(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSprite {
    pub header: SprtzHeader,
    pub palette_source: PaletteSource,
    pub sprite: Sprite,
}
