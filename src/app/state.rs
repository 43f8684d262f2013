//! Application state - the MapApp struct and its sub-structs.

use super::ViewState;
use crate::engine::MapEngine;
use crate::input::{HoverTracker, SelectionController};
use crate::settings::Settings;
use crate::style::StyleDocument;
use crate::types::Feature;

/// Map lifecycle. Entered `Ready` exactly once, never reset.
pub enum Lifecycle<E> {
    /// Waiting for both a credential and a container
    Uninitialized,
    /// Engine created
    Ready(E),
}

impl<E> Lifecycle<E> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Pointer interaction state
pub struct InteractionState {
    /// Hovered feature, mirrored into engine feature state
    pub hover: HoverTracker,
    /// Click-to-focus controller
    pub selection: SelectionController,
    /// Whether the last pointer position hit the plantings layer
    pub over_layer: bool,
    /// Feature shown in the detail panel
    pub selected: Option<Feature>,
}

/// The map view: lifecycle, style, interaction and readout.
pub struct MapApp<E: MapEngine> {
    pub(crate) lifecycle: Lifecycle<E>,
    pub(crate) settings: Settings,
    pub(crate) style: StyleDocument,
    /// Sources and layers registered with the engine
    pub(crate) style_loaded: bool,
    pub(crate) interaction: InteractionState,
    pub(crate) view: ViewState,
}

impl<E: MapEngine> MapApp<E> {
    pub fn new(settings: Settings) -> Self {
        let style = StyleDocument::from_settings(&settings);
        let view = ViewState::new(style.center, style.zoom);
        Self {
            lifecycle: Lifecycle::Uninitialized,
            settings,
            style,
            style_loaded: false,
            interaction: InteractionState {
                hover: HoverTracker::new(),
                selection: SelectionController::default(),
                over_layer: false,
                selected: None,
            },
            view,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    pub fn is_style_loaded(&self) -> bool {
        self.style_loaded
    }

    pub fn engine(&self) -> Option<&E> {
        match &self.lifecycle {
            Lifecycle::Ready(engine) => Some(engine),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        match &mut self.lifecycle {
            Lifecycle::Ready(engine) => Some(engine),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn style(&self) -> &StyleDocument {
        &self.style
    }

    pub fn hover(&self) -> &HoverTracker {
        &self.interaction.hover
    }

    /// Feature shown in the detail panel.
    pub fn selected(&self) -> Option<&Feature> {
        self.interaction.selected.as_ref()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}
