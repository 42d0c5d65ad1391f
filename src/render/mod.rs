//! Schnittstelle zum Rendering-Backend.
//!
//! Die Engine besitzt keine Zeichenfläche — sie beschreibt nur, was
//! gezeichnet werden soll. Punkt-*Daten* leben in der Engine, die
//! Punkt-*Visual-Handles* gehören dem Backend und werden über die stabile
//! [`PointId`] korreliert.

use crate::app::Curve;
use crate::core::PointId;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Vom Renderer-Kollaborateur konsumierte Zeichenoperationen.
pub trait RenderBackend {
    /// Löscht die Zeichenfläche vor einem Neuzeichnen.
    fn clear_canvas(&mut self);

    /// Zeichnet einen verbundenen Linienzug.
    fn draw_polyline(&mut self, points: &[Vec2], stroke_width: f32, color: [f32; 4]);

    /// Zeichnet eine einzelne Linie.
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke_width: f32, color: [f32; 4]);

    /// Zeichnet einen gefüllten Kreis-Marker.
    fn draw_marker(&mut self, position: Vec2, radius: f32, color: [f32; 4]);

    /// Erzeugt ein interaktives Visual-Handle für einen neuen Punkt.
    fn create_point_handle(&mut self, id: PointId, position: Vec2);

    /// Verschiebt das Visual-Handle eines Punkts.
    fn move_point_handle(&mut self, id: PointId, position: Vec2);

    /// Gibt das Visual-Handle eines entfernten Punkts frei.
    fn destroy_point_handle(&mut self, id: PointId);
}

/// Zeichnet den aktuellen Kurvenzustand komplett neu.
///
/// Reihenfolge wie in der Vorlage: Zeichenfläche löschen, optional die
/// Rohpunkt-Verbindungslinien, die gesampelten Segmente, zuoberst ein
/// Marker pro Rohpunkt. Bei weniger als 2 gefilterten Punkten bleiben nur
/// die Marker — kein Fehler.
pub fn draw_curve(curve: &Curve, options: &EditorOptions, backend: &mut dyn RenderBackend) {
    backend.clear_canvas();

    let config = curve.config();
    let raw = curve.points().positions();

    if config.draw_lines && raw.len() >= 2 {
        backend.draw_polyline(&raw, options.line_stroke_width, options.line_color);
        if config.closed && raw.len() > 2 {
            backend.draw_line(
                raw[raw.len() - 1],
                raw[0],
                options.line_stroke_width,
                options.line_color,
            );
        }
    }

    for segment in curve.segments() {
        backend.draw_polyline(
            &segment.polyline(),
            options.curve_stroke_width,
            options.curve_color,
        );
    }

    for point in &raw {
        backend.draw_marker(*point, options.marker_radius, options.marker_color);
    }
}
