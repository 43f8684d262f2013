//! Persistent settings.
//!
//! Stored as JSON at `<config dir>/orchardmap/settings.json`. A missing or
//! unreadable file yields defaults; the map then waits for a credential.

use crate::constants::{
    ACCESS_TOKEN_ENV, DEFAULT_STYLE_URL, DEFAULT_TERRAIN_EXAGGERATION, INITIAL_LAT, INITIAL_LNG,
    INITIAL_ZOOM, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::{MapError, MapResult};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the camera starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialView {
    pub lng: f64,
    pub lat: f64,
    pub zoom: f64,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            lng: INITIAL_LNG,
            lat: INITIAL_LAT,
            zoom: INITIAL_ZOOM,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Engine access credential. Absent or empty keeps the map uninitialized.
    pub access_token: Option<String>,
    pub style_url: String,
    pub initial_view: InitialView,
    /// Terrain exaggeration; `0` disables 3D terrain
    pub terrain_exaggeration: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            access_token: None,
            style_url: DEFAULT_STYLE_URL.to_string(),
            initial_view: InitialView::default(),
            terrain_exaggeration: DEFAULT_TERRAIN_EXAGGERATION,
        }
    }
}

/// Default location of the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default path, then apply the environment override.
    pub fn load() -> Self {
        let mut settings = match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("No configuration directory, using default settings");
                Self::default()
            }
        };
        settings.apply_env_overrides(|key| std::env::var(key).ok());
        settings
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => settings,
            Err(MapError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), "Failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn read(path: &Path) -> MapResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Override fields from the environment. `lookup` is `std::env::var` in
    /// production.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup(ACCESS_TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            debug!("Access token taken from {}", ACCESS_TOKEN_ENV);
            self.access_token = Some(token);
        }
    }

    /// The credential if one is usable.
    pub fn credential(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Save to the default path.
    pub fn save(&self) -> MapResult<()> {
        let path = default_settings_path().ok_or(MapError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Write atomically: a temp file in the same directory is renamed over
    /// the target.
    pub fn save_to(&self, path: &Path) -> MapResult<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(path)?;
        Ok(())
    }
}
