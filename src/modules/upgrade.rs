use std::path::{Path, PathBuf};

use eyre::eyre;
use log::info;
use palette::StandardPaletteLibrary;
use rayon::prelude::*;
use sprtz::{encode_v2_custom, encode_v2_standard, file_version, load_sprtz, PaletteSource};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    AlreadyCurrent,
    Upgraded(PaletteSource),
}

/// `path` itself when it is a file, otherwise every `.sprtz` below it.
pub fn find_sprtz_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|x| x == "sprtz"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Rewrites a version 1 file in place as version 2.
///
/// A standard palette is referenced only when it is identical to the embedded
/// one, so the decoded colors never change.
pub fn upgrade_file(path: &Path, library: &StandardPaletteLibrary) -> eyre::Result<UpgradeOutcome> {
    match file_version(path) {
        1 => (),
        2 => return Ok(UpgradeOutcome::AlreadyCurrent),
        _ => return Err(eyre!("{} is not a SPRTZ file", path.display())),
    }

    let sprite = load_sprtz(path)?;
    let exact = library
        .find_closest_palette_with_threshold(&sprite.palette, 0)
        .filter(|found| library.palette(found.id) == Some(&sprite.palette));

    let (bytes, source) = match exact {
        Some(found) => (
            encode_v2_standard(sprite.width, sprite.height, &sprite.pixels, found.id)?,
            PaletteSource::Standard(found.id),
        ),
        None => (
            encode_v2_custom(sprite.width, sprite.height, &sprite.pixels, &sprite.palette)?,
            PaletteSource::Custom,
        ),
    };

    std::fs::write(path, bytes)?;

    info!("Upgraded {} ({:?} palette)", path.display(), source);

    Ok(UpgradeOutcome::Upgraded(source))
}

pub fn upgrade(
    path: &Path,
    library: &StandardPaletteLibrary,
) -> Vec<(PathBuf, eyre::Result<UpgradeOutcome>)> {
    find_sprtz_files(path)
        .into_par_iter()
        .map(|path| {
            let res = upgrade_file(&path, library);
            (path, res)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::test_utils::stripes;

    #[test]
    fn upgrade_folder() {
        let dir = tempfile::tempdir().unwrap();
        let library = StandardPaletteLibrary::builtin().unwrap();
        let sprite = stripes(8);
        let nested = dir.path().join("tiles/grass");

        std::fs::create_dir_all(&nested).unwrap();

        let custom = dir.path().join("custom.sprtz");
        let standard = nested.join("standard.sprtz");
        let current = nested.join("current.sprtz");
        let unrelated = nested.join("readme.txt");

        sprtz::save_sprtz(&custom, 8, 8, &sprite.pixels, &sprite.palette).unwrap();
        sprtz::save_sprtz(
            &standard,
            8,
            8,
            &sprite.pixels,
            library.palette(12).unwrap(),
        )
        .unwrap();
        sprtz::save_sprtz_v2_standard(&current, 8, 8, &sprite.pixels, 3).unwrap();
        std::fs::write(&unrelated, "not a sprite").unwrap();

        let mut res = upgrade(dir.path(), &library);
        res.sort_by(|a, b| a.0.cmp(&b.0));

        let outcomes: Vec<_> = res
            .into_iter()
            .map(|(path, res)| (path, res.unwrap()))
            .collect();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.contains(&(custom.clone(), UpgradeOutcome::Upgraded(PaletteSource::Custom))));
        assert!(outcomes.contains(&(
            standard.clone(),
            UpgradeOutcome::Upgraded(PaletteSource::Standard(12))
        )));
        assert!(outcomes.contains(&(current, UpgradeOutcome::AlreadyCurrent)));

        assert_eq!(sprtz::file_version(&custom), 2);
        assert_eq!(
            sprtz::load_sprtz_v2(&standard, &library).unwrap().sprite.pixels,
            sprite.pixels
        );
    }

    #[test]
    fn rejects_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.sprtz");
        std::fs::write(&path, "not a sprite").unwrap();

        assert!(upgrade_file(&path, &StandardPaletteLibrary::new()).is_err());
        assert_eq!(find_sprtz_files(&path), [path]);
    }

    #[test]
    fn near_standard_palette_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let library = StandardPaletteLibrary::builtin().unwrap();
        let sprite = stripes(8);
        let path = dir.path().join("forest.sprtz");

        let mut palette = library.copy_palette(palette::STANDARD_PALETTE_FOREST).unwrap();
        palette[2..]
            .iter_mut()
            .for_each(|color| color.r = color.r.saturating_add(5));

        // close enough for a lossy match
        assert_eq!(
            library.find_closest_palette(&palette).unwrap().id,
            palette::STANDARD_PALETTE_FOREST
        );

        sprtz::save_sprtz(&path, 8, 8, &sprite.pixels, &palette).unwrap();
        let before = sprtz::load_sprtz(&path).unwrap();

        assert_eq!(
            upgrade_file(&path, &library).unwrap(),
            UpgradeOutcome::Upgraded(PaletteSource::Custom)
        );

        let after = sprtz::load_sprtz_v2(&path, &library).unwrap().sprite;

        assert_eq!(sprtz::file_version(&path), 2);
        assert_eq!(after.palette, before.palette);
        assert_eq!(after.pixels, before.pixels);
    }
}
