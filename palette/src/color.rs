use serde::{Deserialize, Serialize};

use crate::constants::{
    PALETTE_INDEX_BLACK, PALETTE_INDEX_FIRST_COLOR, PALETTE_INDEX_TRANSPARENT,
    STANDARD_PALETTE_COLORS,
};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl PaletteColor {
    /// Index 0 of every palette.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Index 1 of every palette.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// `0xRRGGBBAA`
    pub fn to_rgba32(&self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    pub fn from_rgba32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::new(r, g, b, a)
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Squared RGB distance. Alpha is ignored.
    pub fn distance(&self, other: &PaletteColor) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;

        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 4]> for PaletteColor {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<[u8; 3]> for PaletteColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// One 16-color palette.
///
/// By convention index 0 is transparent black and index 1 is opaque black,
/// leaving 14 usable colors in indices 2..15. The type does not enforce this;
/// see [`enforce_convention`].
pub type Palette = [PaletteColor; STANDARD_PALETTE_COLORS];

/// Convention colors at 0 and 1, opaque black everywhere else.
pub fn empty_palette() -> Palette {
    let mut res = [PaletteColor::BLACK; STANDARD_PALETTE_COLORS];
    res[PALETTE_INDEX_TRANSPARENT] = PaletteColor::TRANSPARENT;
    res
}

pub fn follows_convention(palette: &Palette) -> bool {
    palette[PALETTE_INDEX_TRANSPARENT] == PaletteColor::TRANSPARENT
        && palette[PALETTE_INDEX_BLACK] == PaletteColor::BLACK
}

/// Overwrites indices 0 and 1 with their fixed colors and makes 2..15 opaque.
pub fn enforce_convention(palette: &mut Palette) {
    palette[PALETTE_INDEX_TRANSPARENT] = PaletteColor::TRANSPARENT;
    palette[PALETTE_INDEX_BLACK] = PaletteColor::BLACK;

    palette[PALETTE_INDEX_FIRST_COLOR..]
        .iter_mut()
        .for_each(|color| color.a = 255);
}

/// Flattens to 64 bytes of RGBA.
pub fn palette_to_rgba(palette: &Palette) -> [u8; STANDARD_PALETTE_COLORS * 4] {
    let mut res = [0u8; STANDARD_PALETTE_COLORS * 4];

    res.chunks_exact_mut(4)
        .zip(palette.iter())
        .for_each(|(out, color)| out.copy_from_slice(&color.to_array()));

    res
}

pub fn palette_from_rgba(rgba: &[u8; STANDARD_PALETTE_COLORS * 4]) -> Palette {
    let mut res = [PaletteColor::TRANSPARENT; STANDARD_PALETTE_COLORS];

    res.iter_mut()
        .zip(rgba.chunks_exact(4))
        .for_each(|(color, c)| *color = PaletteColor::new(c[0], c[1], c[2], c[3]));

    res
}

/// Sum of [`PaletteColor::distance`] over all 16 slots.
pub fn palette_distance(a: &Palette, b: &Palette) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| x.distance(y)).sum()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rgba32() {
        let color = PaletteColor::new(0x12, 0x34, 0x56, 0x78);

        assert_eq!(color.to_rgba32(), 0x12345678);
        assert_eq!(PaletteColor::from_rgba32(0x12345678), color);
    }

    #[test]
    fn transparency() {
        assert!(PaletteColor::TRANSPARENT.is_transparent());
        assert!(!PaletteColor::TRANSPARENT.is_opaque());
        assert!(PaletteColor::BLACK.is_opaque());
        assert!(!PaletteColor::new(1, 2, 3, 128).is_opaque());
    }

    #[test]
    fn distance_ignores_alpha() {
        let a = PaletteColor::new(10, 20, 30, 0);
        let b = PaletteColor::new(13, 16, 30, 255);

        assert_eq!(a.distance(&b), 9 + 16);
        assert_eq!(b.distance(&a), 9 + 16);
    }

    #[test]
    fn convention() {
        let mut palette = [PaletteColor::new(200, 100, 50, 7); STANDARD_PALETTE_COLORS];
        assert!(!follows_convention(&palette));

        enforce_convention(&mut palette);

        assert!(follows_convention(&palette));
        assert_eq!(palette[2], PaletteColor::rgb(200, 100, 50));
        assert!(follows_convention(&empty_palette()));
    }

    #[test]
    fn rgba_flatten() {
        let mut palette = empty_palette();
        palette[5] = PaletteColor::rgb(1, 2, 3);

        let rgba = palette_to_rgba(&palette);

        assert_eq!(&rgba[0..8], &[0, 0, 0, 0, 0, 0, 0, 255]);
        assert_eq!(&rgba[20..24], &[1, 2, 3, 255]);
        assert_eq!(palette_from_rgba(&rgba), palette);
    }
}
