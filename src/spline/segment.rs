//! Kubische Hermite-Auswertung und adaptives Sampling pro Segment.

use glam::Vec2;

/// Mindestanzahl Auswertungsschritte pro Segment.
pub const MIN_SAMPLE_STEPS: usize = 10;

/// Ziel-Abstand (Einheiten) pro Auswertungsschritt.
const UNITS_PER_STEP: f32 = 10.0;

/// Kubisches Hermite-Polynom in Koeffizientenform (pro Achse).
///
/// `position(0) = p1` und `position(1) = p2` — die Kurve interpoliert jeden
/// gefilterten Kontrollpunkt exakt an den Segmentgrenzen, unabhängig von
/// Alpha und Tension.
#[derive(Debug, Clone, Copy)]
pub struct HermiteSegment {
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
}

impl HermiteSegment {
    /// Baut die Koeffizienten aus Endpunkten und Tangenten.
    pub fn new(p1: Vec2, p2: Vec2, m1: Vec2, m2: Vec2) -> Self {
        Self {
            a: 2.0 * p1 - 2.0 * p2 + m1 + m2,
            b: -3.0 * p1 + 3.0 * p2 - 2.0 * m1 - m2,
            c: m1,
            d: p1,
        }
    }

    /// Wertet die Position bei `t ∈ [0, 1]` aus.
    pub fn position(&self, t: f32) -> Vec2 {
        ((self.a * t + self.b) * t + self.c) * t + self.d
    }
}

/// Anzahl Auswertungsschritte für ein Segment.
///
/// Bewusst beibehaltene Eigenheit der Vorlage: maßgeblich ist der Abstand
/// des *vorangehenden* Punktpaars `(p0, p1)`, nicht des tatsächlich
/// interpolierten Paars — die Sample-Dichte hinkt der Geometrie ein Segment
/// hinterher. Benachbarte Segmentlängen ähneln sich in der Praxis, das
/// Ergebnis bleibt visuell glatt.
pub fn sample_steps(p0: Vec2, p1: Vec2) -> usize {
    let by_distance = (p0.distance(p1) / UNITS_PER_STEP).ceil() as usize;
    by_distance.max(MIN_SAMPLE_STEPS)
}

/// Lazy-Iterator über die Samples eines Segments.
///
/// Liefert `position(j / steps)` für `j = 1..=steps` in aufsteigender
/// Reihenfolge — endlich, vorwärts, nicht neustartbar. Der Segment-Start
/// (`t = 0`) gehört dem Vorgänger-Segment bzw. dem Polyline-Anfang.
#[derive(Debug, Clone)]
pub struct SegmentSamples {
    segment: HermiteSegment,
    steps: usize,
    next: usize,
}

impl SegmentSamples {
    pub fn new(segment: HermiteSegment, steps: usize) -> Self {
        Self {
            segment,
            steps,
            next: 1,
        }
    }
}

impl Iterator for SegmentSamples {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next > self.steps {
            return None;
        }
        let t = self.next as f32 / self.steps as f32;
        self.next += 1;
        Some(self.segment.position(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps + 1 - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentSamples {}

/// Gesampeltes Segment: Startpunkt plus Stützpunkte in Parameterrichtung.
///
/// Ephemer — wird bei jedem Recompute neu aufgebaut und nie persistiert.
#[derive(Debug, Clone)]
pub struct SampledSegment {
    /// Segment-Start (`t = 0`, der erste interpolierte Endpunkt)
    pub start: Vec2,
    /// Samples für `t = 1/steps .. 1`, das letzte ist der Segment-Endpunkt
    pub samples: Vec<Vec2>,
}

impl SampledSegment {
    /// Endpunkt des Segments (`t = 1`).
    pub fn end(&self) -> Vec2 {
        self.samples.last().copied().unwrap_or(self.start)
    }

    /// Vollständige Polyline des Segments inklusive Startpunkt.
    pub fn polyline(&self) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.samples.len() + 1);
        points.push(self.start);
        points.extend_from_slice(&self.samples);
        points
    }
}
