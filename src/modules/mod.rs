pub mod convert;
pub mod info;
pub mod palettes;
pub mod tile;
pub mod upgrade;

#[cfg(test)]
pub(crate) mod test_utils {
    use palette::{empty_palette, Palette, PaletteColor};
    use sprtz::Sprite;

    pub fn custom_palette() -> Palette {
        let mut palette = empty_palette();

        for i in 0..14u8 {
            palette[2 + i as usize] = PaletteColor::rgb(250 - i * 9, i * 3, 128);
        }

        palette
    }

    pub fn stripes(size: u8) -> Sprite {
        Sprite {
            width: size,
            height: size,
            pixels: (0..size as usize * size as usize)
                .map(|i| (i / size as usize % 16) as u8)
                .collect(),
            palette: custom_palette(),
        }
    }
}
