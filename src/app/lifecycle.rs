//! Application lifecycle - deferred initialization and settings reload.

use super::{Lifecycle, MapApp, ViewState};
use crate::engine::{MapEngine, MapOptions};
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::style::StyleDocument;
use crate::types::{CameraState, Padding, Viewport};
use tracing::{debug, error, info, warn};

impl<E: MapEngine> MapApp<E> {
    /// Initialize the map once a credential and a container both exist.
    ///
    /// `create` runs at most once over the lifetime of the app. Returns
    /// whether the map is ready afterwards.
    pub fn observe<F>(&mut self, container: Option<Viewport>, create: F) -> bool
    where
        F: FnOnce(&MapOptions) -> E,
    {
        if self.lifecycle.is_ready() {
            return true;
        }

        let Some(token) = self.settings.credential() else {
            debug!("No access token yet, map initialization deferred");
            return false;
        };
        let Some(viewport) = container else {
            debug!("No map container yet, map initialization deferred");
            return false;
        };

        let options = MapOptions {
            access_token: token.to_string(),
            style_url: self.style.style.clone(),
            camera: CameraState {
                center: self.style.center,
                zoom: self.style.zoom,
                padding: Padding::ZERO,
            },
            viewport,
        };

        info!(style = %options.style_url, "Initializing map");
        self.lifecycle = Lifecycle::Ready(create(&options));
        true
    }

    /// Replace settings. Before initialization the style document and the
    /// readout are rebuilt and used by the next `observe`; a map that is
    /// already ready keeps running with the engine and style it has.
    pub fn update_settings(&mut self, settings: Settings) {
        if self.lifecycle.is_ready() {
            if settings.credential() != self.settings.credential() {
                debug!("Access token changed after initialization, keeping current map");
            }
        } else {
            self.style = StyleDocument::from_settings(&settings);
            self.view = ViewState::new(self.style.center, self.style.zoom);
        }
        self.settings = settings;
    }

    /// Apply pending settings file events. Returns true if settings were
    /// reloaded.
    pub fn check_settings_reload(&mut self, watcher: &mut SettingsWatcher) -> bool {
        let mut reloaded = false;
        while let Some(event) = watcher.poll() {
            match event {
                SettingsEvent::Modified | SettingsEvent::Created => {
                    info!("Settings file changed, reloading...");
                    let mut settings = Settings::load_from(watcher.path());
                    settings.apply_env_overrides(|key| std::env::var(key).ok());
                    self.update_settings(settings);
                    reloaded = true;
                }
                SettingsEvent::Deleted => {
                    warn!("Settings file deleted");
                }
                SettingsEvent::Error(e) => {
                    error!("Settings watch error: {}", e);
                }
            }
        }
        reloaded
    }
}
