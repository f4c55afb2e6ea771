//! Binary `.pal` source format.
//!
//! ```text
//! 0x00  4   "STPL"
//! 0x04  2   version (1 or 2)
//! 0x06  2   palette count (32)
//! 0x08  8   reserved
//! 0x10  2048  32 palettes × 16 colors × RGBA
//! ```
//!
//! Version 2 appends one metadata record per palette, in id order:
//! category byte, `u8` length + name, `u16` length + description.
//! Version 1 has no metadata and gets generated names.
use nom::{
    bytes::complete::take,
    combinator::{map, map_opt, map_res},
    multi::{count, length_data},
    number::complete::{le_u16, le_u8},
    IResult as _IResult, Parser,
};

use crate::{
    color::{palette_from_rgba, Palette},
    constants::{STANDARD_PALETTE_COLORS, STANDARD_PALETTE_COUNT},
    error::PaletteError,
    types::{Category, StandardPalette, StandardPaletteInfo},
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

pub const BINARY_MAGIC: &[u8; 4] = b"STPL";
pub const BINARY_VERSION_COLORS_ONLY: u16 = 1;
pub const BINARY_VERSION_METADATA: u16 = 2;
pub const BINARY_HEADER_LENGTH: usize = 16;
pub const BINARY_COLOR_BLOCK_LENGTH: usize =
    STANDARD_PALETTE_COUNT * STANDARD_PALETTE_COLORS * 4;

pub struct BinaryHeader<'a> {
    pub magic: &'a [u8],
    pub version: u16,
    pub palette_count: u16,
}

pub fn parse_header(i: &'_ [u8]) -> IResult<'_, BinaryHeader<'_>> {
    map(
        (take(4usize), le_u16, le_u16, take(8usize)),
        |(magic, version, palette_count, _reserved)| BinaryHeader {
            magic,
            version,
            palette_count,
        },
    )
    .parse(i)
}

pub fn parse_palette_colors(i: &'_ [u8]) -> IResult<'_, Palette> {
    map(take(STANDARD_PALETTE_COLORS * 4), |bytes: &[u8]| {
        let mut rgba = [0u8; STANDARD_PALETTE_COLORS * 4];
        rgba.copy_from_slice(bytes);

        palette_from_rgba(&rgba)
    })
    .parse(i)
}

fn utf8(bytes: &[u8]) -> Result<String, std::str::Utf8Error> {
    std::str::from_utf8(bytes).map(str::to_owned)
}

pub fn parse_metadata(i: &'_ [u8]) -> IResult<'_, (Category, String, String)> {
    (
        map_opt(le_u8, Category::from_byte),
        map_res(length_data(le_u8), utf8),
        map_res(length_data(le_u16), utf8),
    )
        .parse(i)
}

fn generated_info(id: u8) -> StandardPaletteInfo {
    StandardPaletteInfo {
        id,
        name: format!("Palette {id}"),
        description: format!("Standard palette {id}"),
        category: Category::Unknown,
    }
}

pub fn parse_binary(bytes: &[u8]) -> Result<Vec<StandardPalette>, PaletteError> {
    let expect = BINARY_HEADER_LENGTH + BINARY_COLOR_BLOCK_LENGTH;

    if bytes.len() < expect {
        return Err(PaletteError::Truncated {
            expect,
            have: bytes.len(),
        });
    }

    let (i, header) = parse_header(bytes).map_err(|op| PaletteError::NomError {
        source: op.to_owned(),
    })?;

    if header.magic != BINARY_MAGIC {
        return Err(PaletteError::UnknownMagic {
            magic: header.magic.to_vec(),
        });
    }

    if header.version != BINARY_VERSION_COLORS_ONLY && header.version != BINARY_VERSION_METADATA {
        return Err(PaletteError::UnsupportedVersion {
            version: header.version,
        });
    }

    if header.palette_count as usize != STANDARD_PALETTE_COUNT {
        return Err(PaletteError::MismatchedPaletteCount {
            expect: STANDARD_PALETTE_COUNT,
            have: header.palette_count as usize,
        });
    }

    let (i, colors) = count(parse_palette_colors, STANDARD_PALETTE_COUNT)
        .parse(i)
        .map_err(|op| PaletteError::NomError {
            source: op.to_owned(),
        })?;

    let infos: Vec<StandardPaletteInfo> = if header.version == BINARY_VERSION_COLORS_ONLY {
        (0..STANDARD_PALETTE_COUNT as u8).map(generated_info).collect()
    } else {
        let (_, metadata) = count(parse_metadata, STANDARD_PALETTE_COUNT)
            .parse(i)
            .map_err(|op| PaletteError::NomError {
                source: op.to_owned(),
            })?;

        metadata
            .into_iter()
            .enumerate()
            .map(|(id, (category, name, description))| StandardPaletteInfo {
                id: id as u8,
                name,
                description,
                category,
            })
            .collect()
    };

    Ok(infos
        .into_iter()
        .zip(colors)
        .map(|(info, colors)| StandardPalette { info, colors })
        .collect())
}
