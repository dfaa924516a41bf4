use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use braille_engine::{
    LineEnding,
    image_import::{ContrastMode, SampleParams},
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "braille_draw";

/// Lazily initialized project directories (computed once on first access)
pub(crate) static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Image to braille conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Grey level below which a pixel counts as part of the drawing.
    pub threshold: u8,
    pub contrast_mode: ContrastMode,
    /// Contrast factor around mid grey, unused when equalizing.
    pub contrast_intensity: f64,
    pub dot_radius: f64,
    pub threshold_dot: f64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        let sample = SampleParams::default();
        Self {
            threshold: 128,
            contrast_mode: ContrastMode::Contrast,
            contrast_intensity: 1.0,
            dot_radius: sample.dot_radius,
            threshold_dot: sample.threshold_dot,
        }
    }
}

impl ImageSettings {
    pub fn sample_params(&self) -> SampleParams {
        SampleParams {
            dot_radius: self.dot_radius,
            threshold_dot: self.threshold_dot,
        }
    }
}

/// Persisted defaults, stored in `settings.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page width in cells.
    pub grid_width: i32,
    /// Page height in cells.
    pub grid_height: i32,
    pub stroke_width: i32,
    pub max_dist_px: f64,
    pub line_ending: LineEnding,
    /// Byte written for letters the one byte encoding cannot hold.
    pub fallback_byte: u8,
    pub image: ImageSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: 34,
            grid_height: 28,
            stroke_width: 1,
            max_dist_px: 7.0,
            line_ending: LineEnding::CrLf,
            fallback_byte: b'?',
            image: ImageSettings::default(),
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "settings.toml";

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }

    /// Settings from the per user config file, defaults if there is none.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let txt = fs::read_to_string(path).with_context(|| format!("reading settings {}", path.display()))?;
        Self::from_toml(&txt).with_context(|| format!("parsing settings {}", path.display()))
    }

    pub fn from_toml(txt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    /// Writes the settings to the per user config file (temp file, then rename).
    pub fn store(&self) -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir().context("cannot determine config directory")?;
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).with_context(|| format!("creating {}", config_dir.display()))?;
        }
        let file_path = config_dir.join(Self::FILE_NAME);
        let temp_path = config_dir.join(format!(".{}.tmp", Self::FILE_NAME));

        let text = toml::to_string_pretty(self)?;
        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();
        if let Err(err) = write_result {
            let _ = fs::remove_file(&temp_path);
            return Err(err).with_context(|| format!("writing {}", temp_path.display()));
        }
        fs::rename(&temp_path, &file_path).with_context(|| format!("renaming settings to {}", file_path.display()))?;
        log::info!("stored settings in {}", file_path.display());
        Ok(file_path)
    }
}
