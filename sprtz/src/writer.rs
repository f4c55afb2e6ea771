use byte_writer::ByteWriter;
use log::{debug, warn};
use palette::{
    follows_convention, Palette, StandardPaletteLibrary, PALETTE_INDEX_FIRST_COLOR,
    PALETTE_MODE_CUSTOM,
};

use crate::{
    constants::{
        CUSTOM_PALETTE_LENGTH, HEADER_LENGTH, SPRTZ_MAGIC, SPRTZ_VERSION_1, SPRTZ_VERSION_2,
    },
    error::SprtzError,
    rle, PaletteSource, Sprite, SprtzHeader,
};

trait WriteToWriter {
    fn write_to_bytes(&self, writer: &mut ByteWriter);
}

/// What follows the header.
enum PaletteSection<'a> {
    /// Version 1, colors without a descriptor.
    Embedded(&'a Palette),
    Custom(&'a Palette),
    Standard(u8),
}

impl WriteToWriter for SprtzHeader {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let Self {
            version,
            width,
            height,
            uncompressed_size,
            compressed_size,
        } = self;

        writer.append_u8_slice(SPRTZ_MAGIC);
        writer.append_u16(*version);
        writer.append_u8(*width);
        writer.append_u8(*height);
        writer.append_u32(*uncompressed_size);
        writer.append_u32(*compressed_size);
    }
}

impl WriteToWriter for Palette {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        self[PALETTE_INDEX_FIRST_COLOR..]
            .iter()
            .for_each(|color| writer.append_u8_slice(&[color.r, color.g, color.b]));
    }
}

impl WriteToWriter for PaletteSection<'_> {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        match self {
            PaletteSection::Embedded(palette) => palette.write_to_bytes(writer),
            PaletteSection::Custom(palette) => {
                writer.append_u8(PALETTE_MODE_CUSTOM);
                palette.write_to_bytes(writer);
            }
            PaletteSection::Standard(id) => writer.append_u8(*id),
        }
    }
}

fn encode(
    version: u16,
    width: u8,
    height: u8,
    pixels: &[u8],
    palette: PaletteSection,
) -> Result<Vec<u8>, SprtzError> {
    let expect = width as usize * height as usize;

    if pixels.len() != expect {
        return Err(SprtzError::MismatchedPixelCount {
            width,
            height,
            expect,
            have: pixels.len(),
        });
    }

    if let PaletteSection::Embedded(colors) | PaletteSection::Custom(colors) = &palette {
        if !follows_convention(colors) {
            warn!("Palette indices 0 and 1 are not transparent and black, they will not be stored");
        }
    }

    let compressed = rle::compress(pixels, width as usize)?;

    let mut writer = ByteWriter::with_capacity(
        HEADER_LENGTH + 1 + CUSTOM_PALETTE_LENGTH + compressed.len(),
    );

    let header = SprtzHeader {
        version,
        width,
        height,
        uncompressed_size: expect as u32,
        // patched below
        compressed_size: 0,
    };
    header.write_to_bytes(&mut writer);
    palette.write_to_bytes(&mut writer);

    let pixel_offset = writer.get_offset();
    writer.append_u8_slice(&compressed);
    let compressed_size = (writer.get_offset() - pixel_offset) as u32;
    writer.replace_with_u32(HEADER_LENGTH - 4, compressed_size);

    debug!(
        "Encoded v{} {}x{} sprite, {} -> {} bytes",
        version, width, height, expect, compressed_size
    );

    Ok(writer.into_bytes())
}

/// Version 1 file with `palette` embedded.
pub fn encode_v1(
    width: u8,
    height: u8,
    pixels: &[u8],
    palette: &Palette,
) -> Result<Vec<u8>, SprtzError> {
    encode(
        SPRTZ_VERSION_1,
        width,
        height,
        pixels,
        PaletteSection::Embedded(palette),
    )
}

/// Version 2 file referencing standard palette `id`.
pub fn encode_v2_standard(
    width: u8,
    height: u8,
    pixels: &[u8],
    id: u8,
) -> Result<Vec<u8>, SprtzError> {
    if !StandardPaletteLibrary::is_valid_palette_id(id) {
        return Err(SprtzError::InvalidStandardPaletteId { id });
    }

    encode(
        SPRTZ_VERSION_2,
        width,
        height,
        pixels,
        PaletteSection::Standard(id),
    )
}

/// Version 2 file with `palette` embedded after the 0xFF descriptor.
pub fn encode_v2_custom(
    width: u8,
    height: u8,
    pixels: &[u8],
    palette: &Palette,
) -> Result<Vec<u8>, SprtzError> {
    encode(
        SPRTZ_VERSION_2,
        width,
        height,
        pixels,
        PaletteSection::Custom(palette),
    )
}

/// Version 2 file that references a standard palette when one is within
/// `threshold` of the sprite's palette and embeds the colors otherwise.
pub fn encode_v2_auto(
    sprite: &Sprite,
    library: &StandardPaletteLibrary,
    threshold: u32,
) -> Result<(Vec<u8>, PaletteSource), SprtzError> {
    let Sprite {
        width,
        height,
        pixels,
        palette,
    } = sprite;

    match library.find_closest_palette_with_threshold(palette, threshold) {
        Some(found) => Ok((
            encode_v2_standard(*width, *height, pixels, found.id)?,
            PaletteSource::Standard(found.id),
        )),
        None => Ok((
            encode_v2_custom(*width, *height, pixels, palette)?,
            PaletteSource::Custom,
        )),
    }
}
