use byte_writer::ByteWriter;

use crate::{
    color::{palette_to_rgba, Palette},
    parser::{
        BINARY_COLOR_BLOCK_LENGTH, BINARY_HEADER_LENGTH, BINARY_MAGIC, BINARY_VERSION_METADATA,
    },
    types::{StandardPalette, StandardPaletteInfo},
};

trait WriteToWriter {
    fn write_to_bytes(&self, writer: &mut ByteWriter);
}

impl WriteToWriter for Palette {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        writer.append_u8_slice(&palette_to_rgba(self));
    }
}

impl WriteToWriter for StandardPaletteInfo {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let Self {
            id: _,
            name,
            description,
            category,
        } = self;

        writer.append_u8(category.to_byte());
        writer.append_short_string(name);
        writer.append_long_string(description);
    }
}

/// Writes a version 2 `.pal`, metadata included.
pub fn write_binary(palettes: &[StandardPalette]) -> Vec<u8> {
    let mut writer = ByteWriter::with_capacity(BINARY_HEADER_LENGTH + BINARY_COLOR_BLOCK_LENGTH);

    writer.append_u8_slice(BINARY_MAGIC);
    writer.append_u16(BINARY_VERSION_METADATA);
    writer.append_u16(palettes.len() as u16);
    writer.append_u8_slice(&[0u8; 8]);

    palettes
        .iter()
        .for_each(|palette| palette.colors.write_to_bytes(&mut writer));

    palettes
        .iter()
        .for_each(|palette| palette.info.write_to_bytes(&mut writer));

    writer.into_bytes()
}
