#[derive(Debug, thiserror::Error)]
pub enum SprtzError {
    #[error("Error parsing sprite: {source}")]
    NomError {
        #[source]
        source: nom::Err<nom::error::Error<Vec<u8>>>,
    },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
    #[error("File too small: expected at least {expect} bytes, have {have}")]
    Truncated { expect: usize, have: usize },
    #[error("Unknown SPRTZ magic: {magic:?}")]
    UnknownMagic { magic: Vec<u8> },
    #[error("Unsupported SPRTZ version: {version}")]
    UnsupportedVersion { version: u16 },
    #[error("Expected {expect} pixels for a {width}x{height} sprite, have {have}")]
    MismatchedPixelCount {
        width: u8,
        height: u8,
        expect: usize,
        have: usize,
    },
    #[error("Pixel {index} has value {value}, expected 0..15")]
    InvalidPixelValue { index: usize, value: u8 },
    #[error("Invalid palette mode: {mode:#04x}")]
    InvalidPaletteMode { mode: u8 },
    #[error("Invalid standard palette ID: {id}")]
    InvalidStandardPaletteId { id: u8 },
    #[error("Standard palette library is not initialized")]
    PaletteLibraryUninitialized,
    #[error("Standard palette {id} is not in the library")]
    UnknownStandardPalette { id: u8 },
    #[error("Pixel data truncated: expected {expect} bytes, have {have}")]
    TruncatedPixelData { expect: usize, have: usize },
    #[error("Truncated long run at offset {offset}")]
    TruncatedRun { offset: usize },
    #[error("Zero-length run at offset {offset}")]
    EmptyRun { offset: usize },
    #[error("Non-zero padding in long run at offset {offset}")]
    InvalidRunPadding { offset: usize },
    #[error("Decompressed size mismatch: got {have}, expected {expect}")]
    MismatchedDecompressedSize { expect: usize, have: usize },
    #[error("Sprite dimensions {width}x{height} do not fit in a SPRTZ header")]
    DimensionsTooLarge { width: u32, height: u32 },
    #[error("Image uses {count} colors, at most 14 fit besides transparent and black")]
    TooManyColors { count: usize },
}
