//! Controller: Drag-Zustandsmaschine und Intent-Verarbeitung.

use super::{Curve, CurveIntent};
use crate::core::PointId;
use crate::render::{draw_curve, RenderBackend};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Zwei-Zustands-Maschine für das Verschieben eines Punkts.
///
/// `Idle → Dragging(id)` bei Pointer-Down auf einen existierenden Punkt,
/// zurück zu `Idle` bei Pointer-Up oder wenn der Punkt nicht mehr existiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(PointId),
}

/// Verarbeitet Intents, treibt die Kurven-Mutationen und stößt das
/// Neuzeichnen über das Render-Backend an.
#[derive(Debug, Default)]
pub struct CurveController {
    drag: DragState,
    options: EditorOptions,
}

impl CurveController {
    /// Erstellt einen Controller mit Standard-Optionen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller mit gegebenen Darstellungs-Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            drag: DragState::Idle,
            options,
        }
    }

    /// Aktuell gezogener Punkt, falls ein Drag aktiv ist.
    pub fn dragged_point(&self) -> Option<PointId> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Verarbeitet einen Intent und zeichnet bei jeder Mutation neu.
    ///
    /// Kein Intent ist ein Fehler: Kapazitätsüberlauf, Drags auf entfernte
    /// Punkte und Export ohne Segmente werden still verworfen.
    pub fn handle_intent(
        &mut self,
        curve: &mut Curve,
        intent: CurveIntent,
        backend: &mut dyn RenderBackend,
    ) {
        match intent {
            CurveIntent::PointerDown { position, hit } => {
                self.on_pointer_down(curve, position, hit, backend);
            }
            CurveIntent::PointerMoved { position } => {
                self.on_pointer_moved(curve, position, backend);
            }
            CurveIntent::PointerUp => {
                self.drag = DragState::Idle;
            }
            CurveIntent::ConfigChanged { config } => {
                curve.set_config(config);
                draw_curve(curve, &self.options, backend);
            }
            CurveIntent::ClearRequested => {
                let removed = curve.clear();
                for id in removed {
                    backend.destroy_point_handle(id);
                }
                // Drag auf einen soeben entfernten Punkt wäre verwaist
                self.drag = DragState::Idle;
                draw_curve(curve, &self.options, backend);
            }
            CurveIntent::ExportRequested => {
                if let Some(svg) = curve.export_svg() {
                    log::info!(target: "export", "{}", svg);
                }
            }
        }
    }

    fn on_pointer_down(
        &mut self,
        curve: &mut Curve,
        position: Vec2,
        hit: Option<PointId>,
        backend: &mut dyn RenderBackend,
    ) {
        match hit {
            Some(id) if curve.points().contains(id) => {
                self.drag = DragState::Dragging(id);
            }
            Some(_) => {
                // Hit auf einen inzwischen entfernten Punkt → Event verwerfen
            }
            None => {
                if let Some(id) = curve.add_point(position) {
                    backend.create_point_handle(id, position);
                    draw_curve(curve, &self.options, backend);
                }
            }
        }
    }

    fn on_pointer_moved(
        &mut self,
        curve: &mut Curve,
        position: Vec2,
        backend: &mut dyn RenderBackend,
    ) {
        let DragState::Dragging(id) = self.drag else {
            return;
        };
        if curve.move_point(id, position) {
            backend.move_point_handle(id, position);
            draw_curve(curve, &self.options, backend);
        } else {
            // Punkt existiert nicht mehr → zurück zu Idle, Event fallen lassen
            self.drag = DragState::Idle;
        }
    }
}
