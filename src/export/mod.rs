//! SVG-Export der gesampelten Kurve.
//!
//! Erzeugt eine in sich geschlossene Vektorbeschreibung: Bounding-Box über
//! die Rohpunkte plus fester Rand, ein `<polyline>` pro Segment und ein
//! gefüllter `<circle>` pro Rohpunkt. Ein Text-Blob, kein Streaming.

use crate::spline::SampledSegment;
use glam::Vec2;
use std::fmt::Write;

/// Rand um die Bounding-Box (Einheiten pro Seite).
pub const EXPORT_MARGIN: f32 = 10.0;

/// Radius der Punkt-Marker im Export.
pub const EXPORT_MARKER_RADIUS: f32 = 5.0;

/// Serialisiert Rohpunkte und Segmente als SVG-Text.
///
/// Die Bounding-Box wird über die *ungefilterten* Rohpunkte berechnet;
/// Koordinaten werden in das lokale Box-Koordinatensystem verschoben und
/// mit einer Nachkommastelle ausgegeben.
pub fn export_svg(raw_points: &[Vec2], segments: &[SampledSegment]) -> String {
    let (min, max) = bounding_box(raw_points);
    let offset = -min + Vec2::splat(EXPORT_MARGIN);
    let size = max - min + Vec2::splat(2.0 * EXPORT_MARGIN);

    let mut svg = String::new();
    let _ = write!(svg, "<svg height=\"{}\" width=\"{}\">", size.y, size.x);

    for segment in segments {
        let _ = write!(
            svg,
            "<polyline points=\"{:.1},{:.1}",
            offset.x + segment.start.x,
            offset.y + segment.start.y
        );
        for sample in &segment.samples {
            let _ = write!(svg, " {:.1},{:.1}", offset.x + sample.x, offset.y + sample.y);
        }
        svg.push_str("\" class=\"svg-text\" style=\"fill:none;stroke-width:2\" />");
    }

    for point in raw_points {
        let _ = write!(
            svg,
            "<circle class=\"svg-brand\" style=\"stroke:none\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"{}\" />",
            offset.x + point.x,
            offset.y + point.y,
            EXPORT_MARKER_RADIUS
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Achsenparallele Bounding-Box über alle Punkte.
fn bounding_box(points: &[Vec2]) -> (Vec2, Vec2) {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for p in points {
        min = min.min(*p);
        max = max.max(*p);
    }
    (min, max)
}
