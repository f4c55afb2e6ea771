use log::{debug, warn};
use nom::{
    bytes::complete::take,
    combinator::map,
    multi::count,
    number::complete::{le_u16, le_u32, le_u8},
    IResult as _IResult, Parser,
};
use palette::{
    empty_palette, Palette, PaletteColor, StandardPaletteLibrary, PALETTE_INDEX_FIRST_COLOR,
    PALETTE_MODE_CUSTOM, PALETTE_USABLE_COLORS,
};

use crate::{
    constants::{CUSTOM_PALETTE_LENGTH, HEADER_LENGTH, SPRTZ_VERSION_1},
    error::SprtzError,
    rle, DecodedSprite, PaletteSource, Sprite, SprtzHeader,
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

/// Magic and header fields, unvalidated.
pub fn parse_header(i: &'_ [u8]) -> IResult<'_, (&'_ [u8], SprtzHeader)> {
    map(
        (take(4usize), le_u16, le_u8, le_u8, le_u32, le_u32),
        |(magic, version, width, height, uncompressed_size, compressed_size)| {
            (
                magic,
                SprtzHeader {
                    version,
                    width,
                    height,
                    uncompressed_size,
                    compressed_size,
                },
            )
        },
    )
    .parse(i)
}

/// Indices 2..15 as RGB. The other two come from the palette convention.
pub fn parse_custom_palette(i: &'_ [u8]) -> IResult<'_, Palette> {
    map(
        count(
            map((le_u8, le_u8, le_u8), |(r, g, b)| PaletteColor::rgb(r, g, b)),
            PALETTE_USABLE_COLORS,
        ),
        |colors| {
            let mut palette = empty_palette();
            palette[PALETTE_INDEX_FIRST_COLOR..].copy_from_slice(&colors);
            palette
        },
    )
    .parse(i)
}

fn nom_error(op: nom::Err<nom::error::Error<&[u8]>>) -> SprtzError {
    SprtzError::NomError {
        source: op.to_owned(),
    }
}

fn custom_palette_section<'a>(
    i: &'a [u8],
    file_length: usize,
) -> Result<(&'a [u8], Palette), SprtzError> {
    if i.len() < CUSTOM_PALETTE_LENGTH {
        return Err(SprtzError::Truncated {
            expect: file_length - i.len() + CUSTOM_PALETTE_LENGTH,
            have: file_length,
        });
    }

    parse_custom_palette(i).map_err(nom_error)
}

/// Decodes a whole file. `library` is only consulted for version 2 files
/// that reference a standard palette.
pub fn parse_sprtz(
    bytes: &[u8],
    library: Option<&StandardPaletteLibrary>,
) -> Result<DecodedSprite, SprtzError> {
    let header = SprtzHeader::peek(bytes)?;
    let i = &bytes[HEADER_LENGTH..];

    let (i, palette_source, palette) = if header.version == SPRTZ_VERSION_1 {
        let (i, palette) = custom_palette_section(i, bytes.len())?;
        (i, PaletteSource::Custom, palette)
    } else {
        if i.is_empty() {
            return Err(SprtzError::Truncated {
                expect: HEADER_LENGTH + 1,
                have: bytes.len(),
            });
        }

        let (i, mode) = le_u8(i).map_err(nom_error)?;

        match mode {
            PALETTE_MODE_CUSTOM => {
                let (i, palette) = custom_palette_section(i, bytes.len())?;
                (i, PaletteSource::Custom, palette)
            }
            id if StandardPaletteLibrary::is_standard_palette_mode(id) => {
                let library = library
                    .filter(|library| library.is_initialized())
                    .ok_or(SprtzError::PaletteLibraryUninitialized)?;
                let palette = library
                    .copy_palette(id)
                    .ok_or(SprtzError::UnknownStandardPalette { id })?;

                (i, PaletteSource::Standard(id), palette)
            }
            mode => return Err(SprtzError::InvalidPaletteMode { mode }),
        }
    };

    let compressed_size = header.compressed_size as usize;

    if i.len() < compressed_size {
        return Err(SprtzError::TruncatedPixelData {
            expect: compressed_size,
            have: i.len(),
        });
    }

    let (compressed, rest) = i.split_at(compressed_size);

    if !rest.is_empty() {
        warn!("Ignoring {} trailing bytes after pixel data", rest.len());
    }

    let pixels = rle::decompress(compressed, header.pixel_count())?;

    debug!(
        "Decoded v{} {}x{} sprite, {:?} palette, {} -> {} bytes",
        header.version,
        header.width,
        header.height,
        palette_source,
        compressed_size,
        pixels.len()
    );

    Ok(DecodedSprite {
        header,
        palette_source,
        sprite: Sprite {
            width: header.width,
            height: header.height,
            pixels,
            palette,
        },
    })
}
