use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Standard palette library is not initialized")]
    NotInitialized,
    #[error("I/O error on {path}: {source}")]
    IOError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("Expected {expect} palettes, parsed {have}")]
    MismatchedPaletteCount { expect: usize, have: usize },
    #[error("Expected {expect} colors for palette {id}, got {have}")]
    MismatchedColorCount { id: u8, expect: usize, have: usize },
    #[error("Invalid palette ID: {id}")]
    InvalidPaletteId { id: u8 },
    #[error("Duplicate palette ID: {id}")]
    DuplicatePaletteId { id: u8 },
    #[error("Invalid binary format: bad magic number {magic:?}")]
    UnknownMagic { magic: Vec<u8> },
    #[error("Unsupported binary version: {version}")]
    UnsupportedVersion { version: u16 },
    #[error("Binary file too small: expected {expect} bytes, have {have}")]
    Truncated { expect: usize, have: usize },
    #[error("Error parsing binary palette metadata: {source}")]
    NomError {
        #[source]
        source: nom::Err<nom::error::Error<Vec<u8>>>,
    },
    #[error("Unknown palette category: {name}")]
    UnknownCategory { name: String },
}
