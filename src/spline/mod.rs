//! Reine Geometrie-Funktionen: Tangenten, Hermite-Auswertung, adaptives Sampling.
//!
//! Layer-neutral: kennt weder Punkt-IDs noch Konfiguration oder Rendering —
//! arbeitet ausschließlich auf Positions-Slices aus der gefilterten View.

pub mod segment;
pub mod tangent;

pub use segment::{sample_steps, HermiteSegment, SampledSegment, SegmentSamples, MIN_SAMPLE_STEPS};
pub use tangent::{hermite_tangents, reflect_phantom, segment_windows, PointQuad};

/// Führt die komplette Sampling-Pipeline für eine gefilterte Punktfolge aus.
///
/// Pro Segment: Tangenten lösen → Hermite-Koeffizienten bauen → adaptiv
/// sampeln. Segmente entstehen in Kontrollpunkt-Reihenfolge; weniger als
/// 2 Punkte ergeben eine leere Liste.
pub fn sample_curve(points: &[glam::Vec2], alpha: f32, tension: f32, closed: bool) -> Vec<SampledSegment> {
    segment_windows(points, closed)
        .into_iter()
        .map(|quad| {
            let (m1, m2) = hermite_tangents(&quad, alpha, tension);
            let hermite = HermiteSegment::new(quad.p1, quad.p2, m1, m2);
            let steps = sample_steps(quad.p0, quad.p1);
            SampledSegment {
                start: quad.p1,
                samples: SegmentSamples::new(hermite, steps).collect(),
            }
        })
        .collect()
}
