use std::{fs::File, io::Read, path::Path};

use image::{Rgba, RgbaImage};
use log::debug;
use palette::{
    empty_palette, PaletteColor, StandardPaletteLibrary, MATCH_THRESHOLD, PALETTE_INDEX_BLACK,
    PALETTE_INDEX_FIRST_COLOR, PALETTE_INDEX_TRANSPARENT, PALETTE_USABLE_COLORS,
};

use crate::{
    constants::{HEADER_LENGTH, SPRTZ_MAGIC, SPRTZ_VERSION_1, SPRTZ_VERSION_2, VERSION_PREFIX_LENGTH},
    error::SprtzError,
    parser::{parse_header, parse_sprtz},
    writer::{encode_v1, encode_v2_auto, encode_v2_custom, encode_v2_standard},
    DecodedSprite, PaletteSource, Sprite, SprtzHeader,
};

impl SprtzHeader {
    /// Reads and validates the 16-byte header without touching the rest.
    pub fn peek(bytes: &[u8]) -> Result<Self, SprtzError> {
        if bytes.len() < HEADER_LENGTH {
            return Err(SprtzError::Truncated {
                expect: HEADER_LENGTH,
                have: bytes.len(),
            });
        }

        let (_, (magic, header)) = parse_header(bytes).map_err(|op| SprtzError::NomError {
            source: op.to_owned(),
        })?;

        if magic != SPRTZ_MAGIC.as_slice() {
            return Err(SprtzError::UnknownMagic {
                magic: magic.to_vec(),
            });
        }

        if header.version != SPRTZ_VERSION_1 && header.version != SPRTZ_VERSION_2 {
            return Err(SprtzError::UnsupportedVersion {
                version: header.version,
            });
        }

        if header.uncompressed_size as usize != header.pixel_count() {
            return Err(SprtzError::MismatchedPixelCount {
                width: header.width,
                height: header.height,
                expect: header.pixel_count(),
                have: header.uncompressed_size as usize,
            });
        }

        Ok(header)
    }
}

impl Sprite {
    /// Transparent black sprite with the convention palette.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![PALETTE_INDEX_TRANSPARENT as u8; width as usize * height as usize],
            palette: empty_palette(),
        }
    }

    pub fn pixel(&self, x: u8, y: u8) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn to_rgba8(&self) -> RgbaImage {
        let stride_length = self.width as u32;
        let mut image = RgbaImage::new(self.width as u32, self.height as u32);

        image.enumerate_pixels_mut().for_each(|(x, y, pixel)| {
            let color_index = self
                .pixels
                .get((x + y * stride_length) as usize)
                .copied()
                .unwrap_or(PALETTE_INDEX_TRANSPARENT as u8);
            let color = self.palette[(color_index & 0x0F) as usize];

            *pixel = Rgba(color.to_array());
        });

        image
    }

    /// Builds an indexed sprite from an image.
    ///
    /// Pixels with zero alpha become index 0 and opaque black becomes index 1.
    /// Every other color takes the next free slot from index 2 in the order it
    /// is first seen, with alpha dropped.
    pub fn from_rgba8(image: &RgbaImage) -> Result<Self, SprtzError> {
        let (width, height) = image.dimensions();

        if width > u8::MAX as u32 || height > u8::MAX as u32 {
            return Err(SprtzError::DimensionsTooLarge { width, height });
        }

        let mut colors: Vec<PaletteColor> = Vec::with_capacity(PALETTE_USABLE_COLORS);
        let mut pixels = Vec::with_capacity((width * height) as usize);

        for &Rgba([r, g, b, a]) in image.pixels() {
            let index = if a == 0 {
                PALETTE_INDEX_TRANSPARENT
            } else if (r, g, b) == (0, 0, 0) {
                PALETTE_INDEX_BLACK
            } else {
                let color = PaletteColor::rgb(r, g, b);

                let position = colors.iter().position(|&c| c == color).unwrap_or_else(|| {
                    colors.push(color);
                    colors.len() - 1
                });

                PALETTE_INDEX_FIRST_COLOR + position
            };

            pixels.push(index as u8);
        }

        if colors.len() > PALETTE_USABLE_COLORS {
            return Err(SprtzError::TooManyColors {
                count: colors.len(),
            });
        }

        let mut palette = empty_palette();
        palette[PALETTE_INDEX_FIRST_COLOR..PALETTE_INDEX_FIRST_COLOR + colors.len()]
            .copy_from_slice(&colors);

        debug!("Indexed {}x{} image into {} colors", width, height, colors.len());

        Ok(Self {
            width: width as u8,
            height: height as u8,
            pixels,
            palette,
        })
    }
}

/// Decodes a version 1 file.
pub fn decode_v1(bytes: &[u8]) -> Result<Sprite, SprtzError> {
    let header = SprtzHeader::peek(bytes)?;

    if header.version != SPRTZ_VERSION_1 {
        return Err(SprtzError::UnsupportedVersion {
            version: header.version,
        });
    }

    parse_sprtz(bytes, None).map(|decoded| decoded.sprite)
}

/// Decodes a version 1 or 2 file, resolving standard palettes from `library`.
pub fn decode(bytes: &[u8], library: &StandardPaletteLibrary) -> Result<DecodedSprite, SprtzError> {
    parse_sprtz(bytes, Some(library))
}

pub fn save_sprtz(
    path: impl AsRef<Path>,
    width: u8,
    height: u8,
    pixels: &[u8],
    palette: &palette::Palette,
) -> Result<(), SprtzError> {
    let bytes = encode_v1(width, height, pixels, palette)?;
    std::fs::write(path, bytes)?;

    Ok(())
}

pub fn load_sprtz(path: impl AsRef<Path>) -> Result<Sprite, SprtzError> {
    let file = std::fs::read(path)?;

    decode_v1(&file)
}

pub fn save_sprtz_v2_standard(
    path: impl AsRef<Path>,
    width: u8,
    height: u8,
    pixels: &[u8],
    id: u8,
) -> Result<(), SprtzError> {
    let bytes = encode_v2_standard(width, height, pixels, id)?;
    std::fs::write(path, bytes)?;

    Ok(())
}

pub fn save_sprtz_v2_custom(
    path: impl AsRef<Path>,
    width: u8,
    height: u8,
    pixels: &[u8],
    palette: &palette::Palette,
) -> Result<(), SprtzError> {
    let bytes = encode_v2_custom(width, height, pixels, palette)?;
    std::fs::write(path, bytes)?;

    Ok(())
}

/// Saves as version 2, referencing a standard palette within [`MATCH_THRESHOLD`]
/// when there is one.
pub fn save_sprtz_v2_auto(
    path: impl AsRef<Path>,
    sprite: &Sprite,
    library: &StandardPaletteLibrary,
) -> Result<PaletteSource, SprtzError> {
    let (bytes, source) = encode_v2_auto(sprite, library, MATCH_THRESHOLD)?;
    std::fs::write(path, bytes)?;

    Ok(source)
}

pub fn load_sprtz_v2(
    path: impl AsRef<Path>,
    library: &StandardPaletteLibrary,
) -> Result<DecodedSprite, SprtzError> {
    let file = std::fs::read(path)?;

    decode(&file, library)
}

/// 1 or 2 for a SPRTZ file, 0 for anything else including unreadable files.
///
/// Only the first 6 bytes are read.
pub fn file_version(path: impl AsRef<Path>) -> u16 {
    let mut prefix = [0u8; VERSION_PREFIX_LENGTH];

    let read = File::open(path).and_then(|mut file| file.read_exact(&mut prefix));

    if read.is_err() || &prefix[..4] != SPRTZ_MAGIC.as_slice() {
        return 0;
    }

    match u16::from_le_bytes([prefix[4], prefix[5]]) {
        version @ (SPRTZ_VERSION_1 | SPRTZ_VERSION_2) => version,
        _ => 0,
    }
}
