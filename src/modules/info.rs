use std::{fmt, path::PathBuf};

use palette::StandardPaletteLibrary;
use sprtz::{decode, PaletteSource, SprtzHeader};

pub struct SprtzInfo {
    pub path: PathBuf,
    pub header: SprtzHeader,
    pub palette_source: PaletteSource,
    pub palette_name: Option<String>,
    pub file_size: usize,
}

impl SprtzInfo {
    /// Compressed pixel bytes over raw pixel bytes.
    pub fn compression_ratio(&self) -> f32 {
        if self.header.uncompressed_size == 0 {
            return 0.;
        }

        self.header.compressed_size as f32 / self.header.uncompressed_size as f32
    }
}

impl fmt::Display for SprtzInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = match (self.palette_source, &self.palette_name) {
            (PaletteSource::Standard(id), Some(name)) => format!("standard palette {id} ({name})"),
            (PaletteSource::Standard(id), None) => format!("standard palette {id}"),
            (PaletteSource::Custom, _) => "custom palette".to_string(),
        };

        write!(
            f,
            "{}: v{} {}x{}, {}, {} -> {} bytes ({:.1}%), {} bytes on disk",
            self.path.display(),
            self.header.version,
            self.header.width,
            self.header.height,
            palette,
            self.header.uncompressed_size,
            self.header.compressed_size,
            self.compression_ratio() * 100.,
            self.file_size
        )
    }
}

/// Fully decodes the file so a corrupt pixel section is reported too.
pub fn sprtz_info(
    path: impl Into<PathBuf>,
    library: &StandardPaletteLibrary,
) -> eyre::Result<SprtzInfo> {
    let path: PathBuf = path.into();
    let bytes = std::fs::read(&path)?;

    let decoded = decode(&bytes, library)?;

    let palette_name = match decoded.palette_source {
        PaletteSource::Standard(id) => library.palette_name(id).map(str::to_string),
        PaletteSource::Custom => None,
    };

    Ok(SprtzInfo {
        path,
        header: decoded.header,
        palette_source: decoded.palette_source,
        palette_name,
        file_size: bytes.len(),
    })
}
