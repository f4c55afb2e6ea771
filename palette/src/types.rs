use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::Palette, error::PaletteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Retro,
    Biome,
    Themed,
    Utility,
    /// Sources without metadata, such as version 1 `.pal` files. Never
    /// accepted by name.
    #[serde(skip_deserializing)]
    Unknown,
}

impl Category {
    /// Categories a palette can be filed under by name.
    pub const NAMED: [Category; 4] = [
        Category::Retro,
        Category::Biome,
        Category::Themed,
        Category::Utility,
    ];

    pub const ALL: [Category; 5] = [
        Category::Retro,
        Category::Biome,
        Category::Themed,
        Category::Utility,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Retro => "retro",
            Category::Biome => "biome",
            Category::Themed => "themed",
            Category::Utility => "utility",
            Category::Unknown => "unknown",
        }
    }

    /// Tag used in the binary `.pal` metadata block.
    pub fn to_byte(self) -> u8 {
        match self {
            Category::Retro => 0,
            Category::Biome => 1,
            Category::Themed => 2,
            Category::Utility => 3,
            Category::Unknown => 0xFF,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.to_byte() == byte)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::NAMED
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| PaletteError::UnknownCategory { name: s.to_owned() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardPaletteInfo {
    pub id: u8,
    pub name: String,
    pub description: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardPalette {
    pub info: StandardPaletteInfo,
    pub colors: Palette,
}

/// Result of a nearest-palette search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteMatch {
    pub id: u8,
    /// Sum of squared RGB differences over all 16 slots.
    pub distance: u32,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_parse() {
        for category in Category::NAMED {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }

        assert!(matches!(
            "unknown".parse::<Category>(),
            Err(PaletteError::UnknownCategory { .. })
        ));
        assert!("Retro".parse::<Category>().is_err());
    }

    #[test]
    fn unknown_only_by_byte() {
        assert_eq!(Category::from_byte(0xFF), Some(Category::Unknown));
        assert_eq!(Category::from_byte(3), Some(Category::Utility));
        assert_eq!(Category::from_byte(4), None);
    }
}
