//! Engine event dispatch - style load, pointer and camera events.

use super::{Lifecycle, MapApp};
use crate::engine::MapEngine;
use crate::input::ClickOutcome;
use crate::style::StyleDocument;
use crate::types::ScreenPoint;
use tracing::{info, trace};

/// Events delivered by the engine on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// Basemap style finished loading
    Load,
    /// Pointer moved over the canvas
    PointerMove(ScreenPoint),
    /// Pointer left the canvas
    PointerLeave,
    Click(ScreenPoint),
    /// Camera moved (any transition frame)
    Move,
}

impl<E: MapEngine> MapApp<E> {
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::Load => self.handle_load(),
            MapEvent::PointerMove(point) => self.handle_pointer_move(point),
            MapEvent::PointerLeave => self.handle_pointer_leave(),
            MapEvent::Click(point) => {
                self.handle_click(point);
            }
            MapEvent::Move => self.handle_move(),
        }
    }

    /// Register sources, layers and terrain. Runs once.
    pub fn handle_load(&mut self) {
        let Lifecycle::Ready(engine) = &mut self.lifecycle else {
            trace!("load before initialization ignored");
            return;
        };
        if self.style_loaded {
            return;
        }

        for source in &self.style.sources {
            engine.add_source(&source.id, &source.spec);
        }
        for layer in &self.style.layers {
            engine.add_layer(layer);
        }
        if let Some(terrain) = &self.style.terrain {
            engine.set_terrain(Some(terrain));
        }

        self.style_loaded = true;
        info!(
            sources = self.style.sources.len(),
            layers = self.style.layers.len(),
            "Plantings layers registered"
        );
    }

    /// Resolve the feature under the pointer and drive enter/move/leave.
    pub fn handle_pointer_move(&mut self, point: ScreenPoint) {
        let Lifecycle::Ready(engine) = &mut self.lifecycle else {
            return;
        };
        if !self.style_loaded {
            return;
        }

        let hits = engine.query_rendered_features(point, StyleDocument::interactive_layers());
        let interaction = &mut self.interaction;

        let Some(hit) = hits.first() else {
            if interaction.over_layer {
                interaction.over_layer = false;
                interaction.hover.on_pointer_leave(engine);
            }
            return;
        };

        if !interaction.over_layer {
            interaction.over_layer = true;
            interaction.hover.on_pointer_enter(engine);
        }

        match hit.reference() {
            Some(feature) => interaction.hover.on_pointer_move(engine, feature),
            None => {
                trace!("feature without id under pointer");
                interaction.hover.clear(engine);
            }
        }
    }

    /// Pointer left the canvas entirely.
    pub fn handle_pointer_leave(&mut self) {
        let Lifecycle::Ready(engine) = &mut self.lifecycle else {
            return;
        };
        let interaction = &mut self.interaction;
        if interaction.over_layer {
            interaction.over_layer = false;
            interaction.hover.on_pointer_leave(engine);
        }
    }

    /// Focus the clicked planting, or deselect on empty map.
    pub fn handle_click(&mut self, point: ScreenPoint) -> Option<ClickOutcome> {
        let Lifecycle::Ready(engine) = &mut self.lifecycle else {
            return None;
        };
        if !self.style_loaded {
            return None;
        }

        let hits = engine.query_rendered_features(point, StyleDocument::interactive_layers());
        let hit = hits.into_iter().next();
        let interaction = &mut self.interaction;
        let outcome = interaction.selection.on_click(engine, hit.as_ref());

        interaction.selected = match outcome {
            ClickOutcome::Focused(_) | ClickOutcome::NoCentroid => hit,
            ClickOutcome::Deselected => None,
        };
        Some(outcome)
    }

    /// Refresh the coordinate readout from the engine camera.
    pub fn handle_move(&mut self) {
        if let Lifecycle::Ready(engine) = &self.lifecycle {
            self.view.update(&engine.camera());
        }
    }
}
