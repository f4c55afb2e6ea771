//! JSON source format.
//!
//! ```json
//! { "version": 1, "palettes": [ { "id": 0, "name": "C64", "description": "...",
//!   "category": "retro", "colors": [ { "r": 0, "g": 0, "b": 0, "a": 0 }, ... ] } ] }
//! ```
//!
//! `a` may be omitted and then means opaque.
use serde::{Deserialize, Serialize};

use crate::{
    color::PaletteColor,
    constants::{STANDARD_PALETTE_COLORS, STANDARD_PALETTE_COUNT},
    error::PaletteError,
    types::{Category, StandardPalette, StandardPaletteInfo},
};

pub const JSON_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PaletteFile {
    #[serde(default = "default_version")]
    version: u32,
    palettes: Vec<PaletteEntry>,
}

fn default_version() -> u32 {
    JSON_FORMAT_VERSION
}

#[derive(Debug, Serialize, Deserialize)]
struct PaletteEntry {
    id: u8,
    name: String,
    #[serde(default)]
    description: String,
    category: Category,
    colors: Vec<PaletteColor>,
}

pub fn parse_json(s: &str) -> Result<Vec<StandardPalette>, PaletteError> {
    validate(serde_json::from_str(s)?)
}

/// Same as [`parse_json`] but rejects input that is not valid UTF-8.
pub fn parse_json_bytes(bytes: &[u8]) -> Result<Vec<StandardPalette>, PaletteError> {
    validate(serde_json::from_slice(bytes)?)
}

fn validate(file: PaletteFile) -> Result<Vec<StandardPalette>, PaletteError> {
    if file.palettes.len() != STANDARD_PALETTE_COUNT {
        return Err(PaletteError::MismatchedPaletteCount {
            expect: STANDARD_PALETTE_COUNT,
            have: file.palettes.len(),
        });
    }

    let mut slots: Vec<Option<StandardPalette>> = vec![None; STANDARD_PALETTE_COUNT];

    for entry in file.palettes {
        let id = entry.id;

        if id as usize >= STANDARD_PALETTE_COUNT {
            return Err(PaletteError::InvalidPaletteId { id });
        }

        let colors: [PaletteColor; STANDARD_PALETTE_COLORS] =
            entry
                .colors
                .try_into()
                .map_err(|colors: Vec<PaletteColor>| PaletteError::MismatchedColorCount {
                    id,
                    expect: STANDARD_PALETTE_COLORS,
                    have: colors.len(),
                })?;

        let slot = &mut slots[id as usize];

        if slot.is_some() {
            return Err(PaletteError::DuplicatePaletteId { id });
        }

        *slot = Some(StandardPalette {
            info: StandardPaletteInfo {
                id,
                name: entry.name,
                description: entry.description,
                category: entry.category,
            },
            colors,
        });
    }

    // 32 entries with unique ids below 32 fill every slot
    Ok(slots.into_iter().flatten().collect())
}

pub fn write_json(palettes: &[StandardPalette]) -> Result<String, PaletteError> {
    let file = PaletteFile {
        version: JSON_FORMAT_VERSION,
        palettes: palettes
            .iter()
            .map(|palette| PaletteEntry {
                id: palette.info.id,
                name: palette.info.name.clone(),
                description: palette.info.description.clone(),
                category: palette.info.category,
                colors: palette.colors.to_vec(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&file)?)
}
