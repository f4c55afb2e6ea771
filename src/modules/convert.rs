use std::path::Path;

use eyre::eyre;
use log::{debug, info};
use palette::{StandardPaletteLibrary, PALETTE_INDEX_FIRST_COLOR, STANDARD_PALETTE_COUNT};
use sprtz::{encode_v1, encode_v2_auto, encode_v2_standard, load_sprtz_v2, PaletteSource, Sprite};

/// Largest sprite the editor works with.
pub const MAX_IMPORT_SIZE: u32 = 40;

pub fn sprtz_to_png(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    library: &StandardPaletteLibrary,
) -> eyre::Result<PaletteSource> {
    let decoded = load_sprtz_v2(input, library)?;

    decoded.sprite.to_rgba8().save(output)?;

    Ok(decoded.palette_source)
}

/// Remaps `sprite` onto the first standard palette that holds every color it
/// uses.
pub fn fit_standard_palette(
    sprite: &Sprite,
    library: &StandardPaletteLibrary,
) -> Option<(u8, Sprite)> {
    (0..STANDARD_PALETTE_COUNT as u8).find_map(|id| {
        let standard = library.palette(id)?;
        let mut remap = [0u8; 16];

        for (slot, target) in remap.iter_mut().enumerate() {
            if slot < PALETTE_INDEX_FIRST_COLOR {
                *target = slot as u8;
                continue;
            }

            if !sprite.pixels.contains(&(slot as u8)) {
                continue;
            }

            let color = sprite.palette[slot];
            let found = standard[PALETTE_INDEX_FIRST_COLOR..]
                .iter()
                .position(|c| (c.r, c.g, c.b) == (color.r, color.g, color.b))?;

            *target = (PALETTE_INDEX_FIRST_COLOR + found) as u8;
        }

        let remapped = Sprite {
            width: sprite.width,
            height: sprite.height,
            pixels: sprite
                .pixels
                .iter()
                .map(|&p| remap[(p & 0x0F) as usize])
                .collect(),
            palette: *standard,
        };

        Some((id, remapped))
    })
}

/// Imports a PNG. Version 2 output references a standard palette when the
/// image colors fit one exactly or are within `threshold` of one.
pub fn png_to_sprtz(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    library: &StandardPaletteLibrary,
    threshold: u32,
    v1: bool,
) -> eyre::Result<PaletteSource> {
    let image = image::open(input.as_ref())?.to_rgba8();
    let (width, height) = image.dimensions();

    if width > MAX_IMPORT_SIZE || height > MAX_IMPORT_SIZE {
        return Err(eyre!(
            "{} is {}x{}, sprites are at most {}x{}",
            input.as_ref().display(),
            width,
            height,
            MAX_IMPORT_SIZE,
            MAX_IMPORT_SIZE
        ));
    }

    let sprite = Sprite::from_rgba8(&image)?;

    let (bytes, source) = if v1 {
        (
            encode_v1(sprite.width, sprite.height, &sprite.pixels, &sprite.palette)?,
            PaletteSource::Custom,
        )
    } else if let Some((id, remapped)) = fit_standard_palette(&sprite, library) {
        debug!("Image colors fit standard palette {}", id);

        (
            encode_v2_standard(remapped.width, remapped.height, &remapped.pixels, id)?,
            PaletteSource::Standard(id),
        )
    } else {
        encode_v2_auto(&sprite, library, threshold)?
    };

    std::fs::write(output.as_ref(), bytes)?;

    info!(
        "Wrote {} with {:?} palette",
        output.as_ref().display(),
        source
    );

    Ok(source)
}

#[cfg(test)]
mod test {
    use palette::{PaletteColor, MATCH_THRESHOLD};

    use super::*;
    use crate::modules::test_utils::stripes;

    #[test]
    fn standard_sprite_survives_png() {
        let dir = tempfile::tempdir().unwrap();
        let library = StandardPaletteLibrary::builtin().unwrap();
        let sprite = stripes(16);

        let original = dir.path().join("original.sprtz");
        let png = dir.path().join("exported.png");
        let imported = dir.path().join("imported.sprtz");

        sprtz::save_sprtz_v2_standard(&original, 16, 16, &sprite.pixels, 20).unwrap();

        assert_eq!(
            sprtz_to_png(&original, &png, &library).unwrap(),
            PaletteSource::Standard(20)
        );
        assert_eq!(
            png_to_sprtz(&png, &imported, &library, MATCH_THRESHOLD, false).unwrap(),
            PaletteSource::Standard(20)
        );

        let decoded = load_sprtz_v2(&imported, &library).unwrap();
        let before = load_sprtz_v2(&original, &library).unwrap();

        assert_eq!(decoded.sprite.to_rgba8(), before.sprite.to_rgba8());
    }

    #[test]
    fn custom_sprite_stays_custom() {
        let dir = tempfile::tempdir().unwrap();
        let library = StandardPaletteLibrary::builtin().unwrap();
        let sprite = stripes(8);

        let original = dir.path().join("original.sprtz");
        let png = dir.path().join("exported.png");
        let imported = dir.path().join("imported.sprtz");

        sprtz::save_sprtz(&original, 8, 8, &sprite.pixels, &sprite.palette).unwrap();

        sprtz_to_png(&original, &png, &library).unwrap();

        assert_eq!(
            png_to_sprtz(&png, &imported, &library, MATCH_THRESHOLD, false).unwrap(),
            PaletteSource::Custom
        );
        assert_eq!(sprtz::file_version(&imported), 2);

        png_to_sprtz(&png, &imported, &library, MATCH_THRESHOLD, true).unwrap();
        assert_eq!(sprtz::file_version(&imported), 1);
        assert_eq!(
            sprtz::load_sprtz(&imported).unwrap().to_rgba8(),
            sprite.to_rgba8()
        );
    }

    #[test]
    fn rejects_large_images() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("big.png");

        image::RgbaImage::new(41, 8).save(&png).unwrap();

        assert!(png_to_sprtz(
            &png,
            dir.path().join("big.sprtz"),
            &StandardPaletteLibrary::builtin().unwrap(),
            MATCH_THRESHOLD,
            false
        )
        .is_err());
    }

    #[test]
    fn fit_remaps_slots() {
        let library = StandardPaletteLibrary::builtin().unwrap();
        let forest = library.copy_palette(8).unwrap();

        // forest colors 5 and 3 land in slots 2 and 3 on import
        let mut palette = palette::empty_palette();
        palette[2] = forest[5];
        palette[3] = forest[3];

        let sprite = Sprite {
            width: 4,
            height: 1,
            pixels: vec![0, 1, 2, 3],
            palette,
        };

        let (id, remapped) = fit_standard_palette(&sprite, &library).unwrap();

        assert_eq!(id, 8);
        assert_eq!(remapped.pixels, [0, 1, 5, 3]);
        assert_eq!(remapped.palette, forest);

        let sprite = Sprite {
            palette: {
                let mut palette = palette;
                palette[2] = PaletteColor::rgb(1, 2, 3);
                palette
            },
            ..sprite
        };
        assert!(fit_standard_palette(&sprite, &library).is_none());
    }
}
