//! Integrationstests: kompletter Intent-Fluss durch Controller, Kurve und
//! ein aufzeichnendes Render-Backend.

use catmullrom_editor::{
    Curve, CurveConfig, CurveController, CurveIntent, PointId, RenderBackend,
};
use glam::Vec2;

/// Zeichnet alle Backend-Aufrufe auf, statt wirklich zu rendern.
#[derive(Debug, Default)]
struct RecordingBackend {
    clears: usize,
    polylines: Vec<Vec<Vec2>>,
    lines: Vec<(Vec2, Vec2)>,
    markers: Vec<Vec2>,
    live_handles: Vec<PointId>,
}

impl RecordingBackend {
    fn reset_draw_log(&mut self) {
        self.clears = 0;
        self.polylines.clear();
        self.lines.clear();
        self.markers.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn clear_canvas(&mut self) {
        self.clears += 1;
        self.polylines.clear();
        self.lines.clear();
        self.markers.clear();
    }

    fn draw_polyline(&mut self, points: &[Vec2], _stroke_width: f32, _color: [f32; 4]) {
        self.polylines.push(points.to_vec());
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, _stroke_width: f32, _color: [f32; 4]) {
        self.lines.push((from, to));
    }

    fn draw_marker(&mut self, position: Vec2, _radius: f32, _color: [f32; 4]) {
        self.markers.push(position);
    }

    fn create_point_handle(&mut self, id: PointId, _position: Vec2) {
        self.live_handles.push(id);
    }

    fn move_point_handle(&mut self, _id: PointId, _position: Vec2) {}

    fn destroy_point_handle(&mut self, id: PointId) {
        self.live_handles.retain(|&h| h != id);
    }
}

fn pointer_down_empty(pos: Vec2) -> CurveIntent {
    CurveIntent::PointerDown {
        position: pos,
        hit: None,
    }
}

// ── Szenario: offenes Quadrat ────────────────────────────────────────

#[test]
fn test_open_square_produces_three_segments() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(0.0, 100.0),
    ];
    for corner in corners {
        controller.handle_intent(&mut curve, pointer_down_empty(corner), &mut backend);
    }

    // alpha = 0.5, tension = 0, offen — Standard-Konfiguration
    assert_eq!(curve.config(), CurveConfig::default());
    assert_eq!(curve.segments().len(), 3);

    for (i, segment) in curve.segments().iter().enumerate() {
        assert!(
            (segment.start - corners[i]).length() < 1e-3,
            "Segment {} startet bei {:?}, erwartet {:?}",
            i,
            segment.start,
            corners[i]
        );
        assert!((segment.end() - corners[i + 1]).length() < 1e-3);
        assert!(segment.samples.len() >= 10);
    }
}

// ── Szenario: Duplikat-Paar ──────────────────────────────────────────

#[test]
fn test_near_duplicate_pair_renders_nothing() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    controller.handle_intent(&mut curve, pointer_down_empty(Vec2::new(5.0, 5.0)), &mut backend);
    controller.handle_intent(&mut curve, pointer_down_empty(Vec2::new(5.0, 5.5)), &mut backend);

    // Rohbestand behält beide, die View nur einen
    assert_eq!(curve.points().len(), 2);
    assert_eq!(curve.filtered_points().len(), 1);
    assert!(curve.segments().is_empty());

    // Letztes Neuzeichnen: Fläche gelöscht, keine Kurven-Polyline
    assert!(backend.polylines.is_empty());
}

// ── Szenario: geschlossenes Quadrat ──────────────────────────────────

#[test]
fn test_closed_square_wraps_back_to_first_point() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ];
    for corner in corners {
        controller.handle_intent(&mut curve, pointer_down_empty(corner), &mut backend);
    }

    let mut config = curve.config();
    config.closed = true;
    controller.handle_intent(&mut curve, CurveIntent::ConfigChanged { config }, &mut backend);

    // Geschlossen: 4 Segmente inklusive Schluss-Segment D → A
    assert_eq!(curve.segments().len(), 4);
    let wrap = curve.segments().last().unwrap();
    assert!((wrap.start - corners[3]).length() < 1e-3);
    assert!((wrap.end() - corners[0]).length() < 1e-3);
}

// ── Szenario: clear() ────────────────────────────────────────────────

#[test]
fn test_clear_releases_handles_and_renders_nothing() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    for i in 0..50 {
        let pos = Vec2::new(i as f32 * 20.0, (i % 7) as f32 * 15.0);
        controller.handle_intent(&mut curve, pointer_down_empty(pos), &mut backend);
    }
    assert_eq!(curve.points().len(), 50);
    assert_eq!(backend.live_handles.len(), 50);

    controller.handle_intent(&mut curve, CurveIntent::ClearRequested, &mut backend);

    assert_eq!(curve.points().len(), 0);
    assert!(curve.segments().is_empty());
    assert!(backend.live_handles.is_empty());
    assert!(backend.polylines.is_empty());
    assert!(backend.clears > 0);
}

// ── Kapazität ────────────────────────────────────────────────────────

#[test]
fn test_capacity_caps_at_hundred_points() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    for i in 0..130 {
        let pos = Vec2::new(i as f32 * 10.0, 0.0);
        controller.handle_intent(&mut curve, pointer_down_empty(pos), &mut backend);
    }

    assert_eq!(curve.points().len(), 100);
    assert_eq!(backend.live_handles.len(), 100);
}

// ── Drag-Fluss ───────────────────────────────────────────────────────

#[test]
fn test_drag_moves_point_and_recomputes() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    controller.handle_intent(&mut curve, pointer_down_empty(Vec2::new(0.0, 0.0)), &mut backend);
    controller.handle_intent(&mut curve, pointer_down_empty(Vec2::new(50.0, 0.0)), &mut backend);
    let dragged = *backend.live_handles.last().unwrap();

    // Down auf den Punkt (Hit-Test-Ergebnis der Eingabequelle)
    controller.handle_intent(
        &mut curve,
        CurveIntent::PointerDown {
            position: Vec2::new(50.0, 0.0),
            hit: Some(dragged),
        },
        &mut backend,
    );
    assert_eq!(controller.dragged_point(), Some(dragged));

    // Jedes Move-Event rechnet synchron neu
    controller.handle_intent(
        &mut curve,
        CurveIntent::PointerMoved {
            position: Vec2::new(50.0, 80.0),
        },
        &mut backend,
    );
    assert_eq!(curve.points().position_of(dragged), Some(Vec2::new(50.0, 80.0)));
    assert!((curve.segments()[0].end() - Vec2::new(50.0, 80.0)).length() < 1e-3);

    controller.handle_intent(&mut curve, CurveIntent::PointerUp, &mut backend);
    assert_eq!(controller.dragged_point(), None);

    // Move nach Up bewegt nichts mehr
    controller.handle_intent(
        &mut curve,
        CurveIntent::PointerMoved {
            position: Vec2::new(0.0, 99.0),
        },
        &mut backend,
    );
    assert_eq!(curve.points().position_of(dragged), Some(Vec2::new(50.0, 80.0)));
}

#[test]
fn test_drag_on_removed_point_falls_back_to_idle() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    controller.handle_intent(&mut curve, pointer_down_empty(Vec2::new(0.0, 0.0)), &mut backend);
    controller.handle_intent(&mut curve, pointer_down_empty(Vec2::new(50.0, 0.0)), &mut backend);
    let dragged = *backend.live_handles.last().unwrap();

    controller.handle_intent(
        &mut curve,
        CurveIntent::PointerDown {
            position: Vec2::new(50.0, 0.0),
            hit: Some(dragged),
        },
        &mut backend,
    );
    assert_eq!(controller.dragged_point(), Some(dragged));

    // Punkte verschwinden während des Drags (Clear setzt auf Idle zurück)
    controller.handle_intent(&mut curve, CurveIntent::ClearRequested, &mut backend);
    assert_eq!(controller.dragged_point(), None);

    // Down mit veraltetem Hit auf entfernten Punkt wird still verworfen
    controller.handle_intent(
        &mut curve,
        CurveIntent::PointerDown {
            position: Vec2::new(50.0, 0.0),
            hit: Some(dragged),
        },
        &mut backend,
    );
    assert_eq!(controller.dragged_point(), None);
    assert!(curve.points().is_empty());
}

// ── draw_lines ───────────────────────────────────────────────────────

#[test]
fn test_draw_lines_emits_raw_polygon() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    for pos in [
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(50.0, 50.0),
    ] {
        controller.handle_intent(&mut curve, pointer_down_empty(pos), &mut backend);
    }

    let mut config = curve.config();
    config.draw_lines = true;
    config.closed = true;
    controller.handle_intent(&mut curve, CurveIntent::ConfigChanged { config }, &mut backend);

    // Rohpunkt-Polygon + 3 Kurven-Segmente
    assert_eq!(backend.polylines.len(), 1 + 3);
    assert_eq!(backend.polylines[0].len(), 3);
    // Schlusslinie des Polygons zurück zum ersten Punkt
    assert_eq!(backend.lines.len(), 1);
    assert_eq!(backend.lines[0], (Vec2::new(50.0, 50.0), Vec2::new(0.0, 0.0)));
}

#[test]
fn test_redraw_emits_marker_per_raw_point() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    let positions = [
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(50.0, 50.0),
    ];
    for pos in positions {
        controller.handle_intent(&mut curve, pointer_down_empty(pos), &mut backend);
    }

    // Letztes Neuzeichnen: ein Marker pro Rohpunkt, auch für spätere Duplikate
    assert_eq!(backend.markers, positions.to_vec());

    controller.handle_intent(
        &mut curve,
        pointer_down_empty(Vec2::new(50.0, 50.3)),
        &mut backend,
    );
    assert_eq!(backend.markers.len(), 4);
    assert_eq!(curve.filtered_points().len(), 3);
}

// ── Export ───────────────────────────────────────────────────────────

#[test]
fn test_export_structure_matches_state() {
    let mut curve = Curve::new();
    let mut controller = CurveController::new();
    let mut backend = RecordingBackend::default();

    for pos in [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
    ] {
        controller.handle_intent(&mut curve, pointer_down_empty(pos), &mut backend);
    }

    let svg = curve.export_svg().expect("SVG erwartet");
    assert!(svg.starts_with("<svg height=\"120\" width=\"120\">"));
    assert_eq!(svg.matches("<polyline").count(), curve.segments().len());
    assert_eq!(svg.matches("<circle").count(), curve.points().len());

    // ExportRequested läuft ohne Panik durch (Ausgabe geht an den Log-Sink)
    controller.handle_intent(&mut curve, CurveIntent::ExportRequested, &mut backend);
    backend.reset_draw_log();
}

#[test]
fn test_export_with_too_few_points_yields_nothing() {
    let mut curve = Curve::new();
    curve.add_point(Vec2::new(5.0, 5.0));
    assert!(curve.export_svg().is_none());
}
