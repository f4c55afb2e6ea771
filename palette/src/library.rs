use std::{
    ffi::OsStr,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::{debug, info};

use crate::{
    color::{palette_distance, palette_to_rgba, Palette},
    constants::{MATCH_THRESHOLD, PALETTE_MODE_CUSTOM, STANDARD_PALETTE_COLORS, STANDARD_PALETTE_COUNT},
    error::PaletteError,
    json::{parse_json, parse_json_bytes, write_json},
    parser::parse_binary,
    types::{Category, PaletteMatch, StandardPalette, StandardPaletteInfo},
    writer::write_binary,
};

static BUILTIN_JSON: &str = include_str!("../assets/standard_palettes.json");

/// The 32 standard palettes.
///
/// A handle starts uninitialized. Every query on an uninitialized handle
/// returns `None` or an empty result. One of the `initialize*` calls loads
/// the table; [`StandardPaletteLibrary::shutdown`] drops it again.
///
/// Loading and shutdown take `&mut self`, queries take `&self`, so an
/// initialized handle can be shared across threads for lookups.
#[derive(Debug, Default)]
pub struct StandardPaletteLibrary {
    /// Indexed by palette id. Always exactly 32 entries when present.
    palettes: Option<Vec<StandardPalette>>,
    last_error: Mutex<Option<String>>,
}

impl StandardPaletteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library loaded from the table shipped with this crate.
    pub fn builtin() -> Result<Self, PaletteError> {
        let mut res = Self::new();
        res.initialize_from_json_str(BUILTIN_JSON)?;
        Ok(res)
    }

    /// Loads `.json` or `.pal` by extension. Other paths are tried as JSON
    /// first, then as binary.
    pub fn initialize(&mut self, path: impl AsRef<Path>) -> Result<(), PaletteError> {
        let path = path.as_ref();

        match path.extension().and_then(OsStr::to_str) {
            Some("json") => self.initialize_from_json(path),
            Some("pal") => self.initialize_from_binary(path),
            _ => self
                .initialize_from_json(path)
                .or_else(|_| self.initialize_from_binary(path)),
        }
    }

    pub fn initialize_from_json(&mut self, path: impl AsRef<Path>) -> Result<(), PaletteError> {
        let res = read_file(path.as_ref()).and_then(|bytes| parse_json_bytes(&bytes));

        self.install(res, path.as_ref())
    }

    pub fn initialize_from_json_str(&mut self, s: &str) -> Result<(), PaletteError> {
        self.install(parse_json(s), Path::new("<json>"))
    }

    pub fn initialize_from_binary(&mut self, path: impl AsRef<Path>) -> Result<(), PaletteError> {
        let res = read_file(path.as_ref()).and_then(|bytes| parse_binary(&bytes));

        self.install(res, path.as_ref())
    }

    pub fn initialize_from_binary_bytes(&mut self, bytes: &[u8]) -> Result<(), PaletteError> {
        self.install(parse_binary(bytes), Path::new("<binary>"))
    }

    /// Swaps in a freshly parsed table and clears the last error. On failure
    /// the previous table, if any, stays loaded and the error is remembered.
    fn install(
        &mut self,
        res: Result<Vec<StandardPalette>, PaletteError>,
        source: &Path,
    ) -> Result<(), PaletteError> {
        match res {
            Ok(palettes) => {
                info!(
                    "Loaded {} standard palettes from {}",
                    palettes.len(),
                    source.display()
                );

                self.palettes = Some(palettes);
                self.clear_error();
                Ok(())
            }
            Err(err) => {
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.palettes.is_some()
    }

    /// Drops the loaded table and any remembered error.
    pub fn shutdown(&mut self) {
        self.palettes = None;
        self.clear_error();
    }

    fn entry(&self, id: u8) -> Option<&StandardPalette> {
        self.palettes.as_ref()?.get(id as usize)
    }

    pub fn palette(&self, id: u8) -> Option<&Palette> {
        self.entry(id).map(|palette| &palette.colors)
    }

    pub fn palette_info(&self, id: u8) -> Option<&StandardPaletteInfo> {
        self.entry(id).map(|palette| &palette.info)
    }

    pub fn palette_name(&self, id: u8) -> Option<&str> {
        self.palette_info(id).map(|info| info.name.as_str())
    }

    pub fn palette_description(&self, id: u8) -> Option<&str> {
        self.palette_info(id).map(|info| info.description.as_str())
    }

    pub fn palette_category(&self, id: u8) -> Option<Category> {
        self.palette_info(id).map(|info| info.category)
    }

    pub fn copy_palette(&self, id: u8) -> Option<Palette> {
        self.palette(id).copied()
    }

    /// 64 bytes, RGBA per color.
    pub fn copy_palette_rgba(&self, id: u8) -> Option<[u8; STANDARD_PALETTE_COLORS * 4]> {
        self.palette(id).map(palette_to_rgba)
    }

    pub fn is_valid_palette_id(id: u8) -> bool {
        (id as usize) < STANDARD_PALETTE_COUNT
    }

    /// Whether a SPRTZ v2 palette descriptor byte refers to a standard palette.
    pub fn is_standard_palette_mode(mode: u8) -> bool {
        Self::is_valid_palette_id(mode)
    }

    pub const fn palette_count() -> usize {
        STANDARD_PALETTE_COUNT
    }

    /// Metadata of every palette in ascending id order.
    pub fn enumerate_palettes(&self) -> impl Iterator<Item = &StandardPaletteInfo> {
        self.palettes
            .iter()
            .flatten()
            .map(|palette| &palette.info)
    }

    /// Ids in `category`, ascending.
    pub fn palettes_by_category(&self, category: Category) -> Vec<u8> {
        self.enumerate_palettes()
            .filter(|info| info.category == category)
            .map(|info| info.id)
            .collect()
    }

    /// Same as [`StandardPaletteLibrary::palettes_by_category`] but takes the
    /// category name. An unknown name is remembered as the last error.
    pub fn palettes_by_category_name(&self, name: &str) -> Result<Vec<u8>, PaletteError> {
        match name.parse::<Category>() {
            Ok(category) => Ok(self.palettes_by_category(category)),
            Err(err) => {
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Nearest standard palette regardless of how far it is.
    ///
    /// Distance is summed over all 16 slots; ties go to the lower id.
    pub fn closest_palette(&self, custom: &Palette) -> Option<PaletteMatch> {
        let palettes = self.palettes.as_ref()?;

        let mut best: Option<PaletteMatch> = None;

        for palette in palettes {
            let distance = palette_distance(custom, &palette.colors);

            if best.map_or(true, |best| distance < best.distance) {
                best = Some(PaletteMatch {
                    id: palette.info.id,
                    distance,
                });
            }
        }

        best
    }

    /// Nearest standard palette within [`MATCH_THRESHOLD`].
    pub fn find_closest_palette(&self, custom: &Palette) -> Option<PaletteMatch> {
        self.find_closest_palette_with_threshold(custom, MATCH_THRESHOLD)
    }

    pub fn find_closest_palette_with_threshold(
        &self,
        custom: &Palette,
        threshold: u32,
    ) -> Option<PaletteMatch> {
        let res = self.closest_palette(custom)?;

        debug!(
            "Closest standard palette is {} at distance {} (threshold {})",
            res.id, res.distance, threshold
        );

        (res.distance <= threshold).then_some(res)
    }

    /// SPRTZ v2 descriptor byte for `custom`: a standard id or [`PALETTE_MODE_CUSTOM`].
    pub fn palette_mode_for(&self, custom: &Palette) -> u8 {
        self.find_closest_palette(custom)
            .map(|res| res.id)
            .unwrap_or(PALETTE_MODE_CUSTOM)
    }

    pub fn to_json_string(&self) -> Result<String, PaletteError> {
        write_json(self.palettes.as_ref().ok_or(PaletteError::NotInitialized)?)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, PaletteError> {
        Ok(write_binary(
            self.palettes.as_ref().ok_or(PaletteError::NotInitialized)?,
        ))
    }

    /// Writes `.pal` as binary, anything else as JSON.
    pub fn write_to_file(&self, path: impl AsRef<Path> + Into<PathBuf>) -> Result<(), PaletteError> {
        let bytes = match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("pal") => self.to_binary()?,
            _ => self.to_json_string()?.into_bytes(),
        };

        let path: PathBuf = path.into();
        let io_err = |source| PaletteError::IOError {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(io_err)?;

        file.write_all(&bytes).map_err(io_err)?;
        file.flush().map_err(io_err)?;

        Ok(())
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear_error(&self) {
        *self
            .last_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    fn set_error(&self, error: String) {
        *self
            .last_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(error);
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, PaletteError> {
    std::fs::read(path).map_err(|source| PaletteError::IOError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        color::{enforce_convention, PaletteColor},
        constants::*,
    };

    fn library() -> StandardPaletteLibrary {
        StandardPaletteLibrary::builtin().unwrap()
    }

    #[test]
    fn builtin_table() {
        let library = library();

        assert!(library.is_initialized());
        assert_eq!(library.palette_name(STANDARD_PALETTE_C64), Some("C64"));
        assert_eq!(library.palette_name(STANDARD_PALETTE_NIGHT_MODE), Some("Night Mode"));
        assert_eq!(
            library.palette_category(STANDARD_PALETTE_FOREST),
            Some(Category::Biome)
        );
        assert!(library.palette_description(STANDARD_PALETTE_GRAYSCALE).is_some());

        // every builtin palette follows the index 0/1 convention
        for id in 0..32 {
            assert!(crate::follows_convention(library.palette(id).unwrap()));
        }
    }

    #[test]
    fn uninitialized_queries_fail() {
        let library = StandardPaletteLibrary::new();

        assert!(!library.is_initialized());
        assert!(library.palette(0).is_none());
        assert!(library.palette_name(0).is_none());
        assert!(library.copy_palette_rgba(0).is_none());
        assert!(library.closest_palette(&crate::empty_palette()).is_none());
        assert_eq!(library.enumerate_palettes().count(), 0);
        assert!(library.palettes_by_category(Category::Retro).is_empty());
        assert!(matches!(
            library.to_binary(),
            Err(PaletteError::NotInitialized)
        ));
    }

    #[test]
    fn out_of_range_ids() {
        let library = library();

        assert!(library.palette(32).is_none());
        assert!(library.palette_name(255).is_none());
        assert!(StandardPaletteLibrary::is_valid_palette_id(31));
        assert!(!StandardPaletteLibrary::is_valid_palette_id(32));
        assert!(StandardPaletteLibrary::is_standard_palette_mode(0));
        assert!(!StandardPaletteLibrary::is_standard_palette_mode(PALETTE_MODE_CUSTOM));
    }

    #[test]
    fn enumerate_in_order() {
        let library = library();
        let ids = library
            .enumerate_palettes()
            .map(|info| info.id)
            .collect::<Vec<u8>>();

        assert_eq!(ids, (0..32).collect::<Vec<u8>>());
        assert!(ids
            .iter()
            .all(|id| StandardPaletteLibrary::is_valid_palette_id(*id)));
    }

    #[test]
    fn by_category() {
        let library = library();

        assert_eq!(
            library.palettes_by_category(Category::Retro),
            (0..8).collect::<Vec<u8>>()
        );
        assert_eq!(
            library.palettes_by_category_name("utility").unwrap(),
            (24..32).collect::<Vec<u8>>()
        );
        assert!(library.palettes_by_category(Category::Unknown).is_empty());
        assert!(matches!(
            library.palettes_by_category_name("unknown"),
            Err(PaletteError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn unknown_category_sets_error() {
        let library = library();

        assert!(library.last_error().is_none());
        assert!(library.palettes_by_category_name("space").is_err());
        assert!(library.last_error().unwrap().contains("space"));

        library.clear_error();
        assert!(library.last_error().is_none());
    }

    #[test]
    fn exact_match_has_zero_distance() {
        let library = library();

        for id in 0..32u8 {
            let custom = library.copy_palette(id).unwrap();
            let res = library.find_closest_palette(&custom).unwrap();

            assert_eq!(res, PaletteMatch { id, distance: 0 });
            assert_eq!(library.palette_mode_for(&custom), id);
        }
    }

    #[test]
    fn near_match_within_threshold() {
        let library = library();
        let mut custom = library.copy_palette(STANDARD_PALETTE_FOREST).unwrap();

        custom[2..].iter_mut().for_each(|color| {
            color.r = color.r.saturating_add(3);
            color.b = color.b.saturating_sub(2);
        });

        let res = library.find_closest_palette(&custom).unwrap();

        assert_eq!(res.id, STANDARD_PALETTE_FOREST);
        assert!(res.distance > 0 && res.distance <= MATCH_THRESHOLD);
    }

    #[test]
    fn far_palette_is_custom() {
        let library = library();
        let mut custom = [PaletteColor::rgb(250, 5, 250); STANDARD_PALETTE_COLORS];
        enforce_convention(&mut custom);

        assert!(library.find_closest_palette(&custom).is_none());
        assert_eq!(library.palette_mode_for(&custom), PALETTE_MODE_CUSTOM);
        // still reports the nearest one when asked without a threshold
        assert!(library.closest_palette(&custom).unwrap().distance > MATCH_THRESHOLD);
        assert!(library
            .find_closest_palette_with_threshold(&custom, u32::MAX)
            .is_some());
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let mut palettes = library().palettes.unwrap();
        let duplicate = palettes[20].colors;
        palettes[5].colors = duplicate;

        let mut library = StandardPaletteLibrary::new();
        library
            .initialize_from_binary_bytes(&write_binary(&palettes))
            .unwrap();

        assert_eq!(library.find_closest_palette(&duplicate).unwrap().id, 5);
    }

    #[test]
    fn failed_reinitialize_keeps_previous_table() {
        let mut library = library();

        assert!(library.initialize_from_json_str("{}").is_err());
        assert!(library.is_initialized());
        assert_eq!(library.palette_name(0), Some("C64"));
        assert!(library.last_error().is_some());

        library.shutdown();
        assert!(!library.is_initialized());
        assert!(library.last_error().is_none());
    }

    #[test]
    fn failed_initialize_stays_uninitialized() {
        let mut library = StandardPaletteLibrary::new();

        assert!(library.initialize_from_binary_bytes(b"STPL").is_err());
        assert!(!library.is_initialized());
        assert!(library.last_error().unwrap().contains("too small"));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = library();

        for name in ["palettes.json", "palettes.pal"] {
            let path = dir.path().join(name);
            source.write_to_file(path.as_path()).unwrap();

            let mut loaded = StandardPaletteLibrary::new();
            loaded.initialize(&path).unwrap();

            assert_eq!(loaded.palettes, source.palettes);
        }
    }

    #[test]
    fn initialize_sniffs_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palettes.bin");

        std::fs::write(&path, library().to_binary().unwrap()).unwrap();

        let mut loaded = StandardPaletteLibrary::new();
        loaded.initialize(&path).unwrap();

        assert_eq!(loaded.palette_name(17), Some("Neon"));
        // the failed JSON attempt is not left behind
        assert!(loaded.last_error().is_none());
    }

    #[test]
    fn successful_initialize_clears_error() {
        let mut library = StandardPaletteLibrary::new();

        assert!(library.initialize_from_binary_bytes(b"STPL").is_err());
        assert!(library.last_error().is_some());

        library.initialize_from_json_str(BUILTIN_JSON).unwrap();
        assert!(library.is_initialized());
        assert!(library.last_error().is_none());
    }

    #[test]
    fn invalid_utf8_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palettes.json");

        let mut bytes = library().to_json_string().unwrap().into_bytes();
        let at = bytes
            .windows(5)
            .position(|window| window == b"\"C64\"")
            .unwrap();
        bytes[at + 1] = 0xFF;
        std::fs::write(&path, bytes).unwrap();

        let mut loaded = StandardPaletteLibrary::new();

        assert!(matches!(
            loaded.initialize(&path),
            Err(PaletteError::JsonError { .. })
        ));
        assert!(!loaded.is_initialized());
        assert!(loaded.last_error().is_some());
    }

    #[test]
    fn rgba_copy_layout() {
        let library = library();
        let rgba = library.copy_palette_rgba(STANDARD_PALETTE_FOREST).unwrap();

        assert_eq!(rgba.len(), 64);
        // index 0 transparent, index 1 opaque black
        assert_eq!(rgba[0..4], [0, 0, 0, 0]);
        assert_eq!(rgba[4..8], [0, 0, 0, 255]);

        let forest = library.palette(STANDARD_PALETTE_FOREST).unwrap();
        for (slot, color) in forest.iter().enumerate().skip(2) {
            assert_eq!(rgba[slot * 4..slot * 4 + 4], color.to_array());
        }

        assert_eq!(rgba, palette_to_rgba(forest));
        assert!(library.copy_palette_rgba(32).is_none());
    }

    #[test]
    fn missing_file() {
        let mut library = StandardPaletteLibrary::new();

        assert!(matches!(
            library.initialize("does/not/exist.json"),
            Err(PaletteError::IOError { .. })
        ));
        assert!(library.last_error().unwrap().contains("does/not/exist.json"));
    }

    #[test]
    fn write_failure_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("palettes.json");

        let err = library().write_to_file(path.as_path()).unwrap_err();

        assert!(matches!(err, PaletteError::IOError { .. }));
        assert!(err.to_string().starts_with("I/O error on"));
        assert!(err.to_string().contains("palettes.json"));
    }
}
