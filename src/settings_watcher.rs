//! Settings file watcher.
//!
//! Watches the directory holding the settings file so a credential written
//! after start-up can finish a deferred map initialization.

use crate::error::MapResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

pub use crate::settings::default_settings_path;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops delivery
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> MapResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next event touching the settings file, without blocking.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !self.concerns_settings(&event) {
                        continue;
                    }
                    match event.kind {
                        EventKind::Create(_) => return Some(SettingsEvent::Created),
                        EventKind::Modify(_) => return Some(SettingsEvent::Modified),
                        EventKind::Remove(_) => return Some(SettingsEvent::Deleted),
                        _ => continue,
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return None,
            }
        }
    }

    // Compare by file name: some platforms report canonicalized paths
    fn concerns_settings(&self, event: &Event) -> bool {
        event
            .paths
            .iter()
            .any(|p| p == &self.path || p.file_name() == self.path.file_name())
    }
}
