//! Parses config file
use std::{
    fs::OpenOptions,
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};

use std::env;

use log::{debug, info};
use palette::{StandardPaletteLibrary, MATCH_THRESHOLD};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `.json` or `.pal` standard palette source. Built-in table when absent.
    pub palette_library: Option<PathBuf>,
    /// Overrides [`MATCH_THRESHOLD`].
    pub match_threshold: Option<u32>,
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

/// Parse `config.toml` in the same folder as the binary
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    parse_config_from_file(path.as_path())
}

/// A missing file gives the default config.
pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = match OpenOptions::new().read(true).open(path.as_os_str()) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(err) => return Err(err.into()),
    };

    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let config: Config = toml::from_str(&buffer)?;

    // library path is relative to the config file
    let palette_library = match (config.palette_library, path.parent()) {
        (Some(library), Some(root)) if library.is_relative() => Some(root.join(library)),
        (library, _) => library,
    };

    Ok(Config {
        palette_library,
        match_threshold: config.match_threshold,
    })
}

impl Config {
    pub fn match_threshold(&self) -> u32 {
        self.match_threshold.unwrap_or(MATCH_THRESHOLD)
    }

    pub fn load_library(&self) -> eyre::Result<StandardPaletteLibrary> {
        let Some(path) = &self.palette_library else {
            return Ok(StandardPaletteLibrary::builtin()?);
        };

        let mut library = StandardPaletteLibrary::new();
        library.initialize(path)?;

        info!("Using standard palettes from {}", path.display());

        Ok(library)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = parse_config_from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.match_threshold(), MATCH_THRESHOLD);
        assert!(config.load_library().unwrap().is_initialized());
    }

    #[test]
    fn relative_library_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(
            &path,
            "palette_library = \"palettes/standard.pal\"\nmatch_threshold = 100\n",
        )
        .unwrap();

        let config = parse_config_from_file(&path).unwrap();

        assert_eq!(
            config.palette_library,
            Some(dir.path().join("palettes/standard.pal"))
        );
        assert_eq!(config.match_threshold(), 100);
        // file does not exist
        assert!(config.load_library().is_err());
    }

    #[test]
    fn library_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        StandardPaletteLibrary::builtin()
            .unwrap()
            .write_to_file(dir.path().join("standard.pal"))
            .unwrap();
        std::fs::write(&path, "palette_library = \"standard.pal\"\n").unwrap();

        let library = parse_config_from_file(&path)
            .unwrap()
            .load_library()
            .unwrap();

        assert_eq!(library.palette_name(8), Some("Forest"));
    }

    #[test]
    fn malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "match_threshold = \"a lot\"\n").unwrap();

        assert!(parse_config_from_file(&path).is_err());
    }
}
