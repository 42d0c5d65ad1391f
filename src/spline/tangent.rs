//! Tangentenberechnung für generalisierte Catmull-Rom-Segmente.
//!
//! Die Knot-Parametrisierung folgt dem Alpha-Exponenten:
//! `alpha = 0` uniform, `0.5` zentripetal, `1` chordal. Zentripetal
//! reduziert Schleifen und Spitzen bei stark ungleichmäßigen Abständen.

use glam::Vec2;

/// Vier aufeinanderfolgende Kontrollpunkte; das Segment interpoliert p1 → p2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointQuad {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl PointQuad {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

/// Kumulative Knot-Werte `t0..t3` aus Chord-Längen hoch `alpha`.
fn knot_values(quad: &PointQuad, alpha: f32) -> [f32; 4] {
    let t0 = 0.0;
    let t1 = t0 + quad.p0.distance(quad.p1).powf(alpha);
    let t2 = t1 + quad.p1.distance(quad.p2).powf(alpha);
    let t3 = t2 + quad.p2.distance(quad.p3).powf(alpha);
    [t0, t1, t2, t3]
}

/// Berechnet die beiden inneren Hermite-Tangenten `(m1, m2)`.
///
/// Komponentenweise identische Formel für x und y, skaliert mit
/// `(1 - tension)`: bei `tension = 0` die Standard-Catmull-Rom-Magnitude,
/// gegen `1` flacht die Kurve zu Geradenstücken zwischen den Punkten ab.
///
/// Voraussetzung: die Knot-Werte sind strikt monoton — durch die Dedup-View
/// sind benachbarte Abstände mindestens 1.0, damit sind alle Nenner ungleich 0.
pub fn hermite_tangents(quad: &PointQuad, alpha: f32, tension: f32) -> (Vec2, Vec2) {
    let [t0, t1, t2, t3] = knot_values(quad, alpha);
    let PointQuad { p0, p1, p2, p3 } = *quad;
    let scale = (1.0 - tension) * (t2 - t1);

    let m1 = scale * ((p0 - p1) / (t0 - t1) - (p0 - p2) / (t0 - t2) + (p1 - p2) / (t1 - t2));
    let m2 = scale * ((p1 - p2) / (t1 - t2) - (p1 - p3) / (t1 - t3) + (p2 - p3) / (t2 - t3));

    (m1, m2)
}

/// Phantom-Punkt durch lineare Spiegelung: `2*anchor - neighbor`.
///
/// Gibt den Rand-Segmenten offener Kurven eine definierte Tangente, ohne ein
/// zusätzliches sichtbares Segment einzuführen.
pub fn reflect_phantom(anchor: Vec2, neighbor: Vec2) -> Vec2 {
    2.0 * anchor - neighbor
}

/// Baut die Quadrupel-Folge für alle Segmente einer Kurve.
///
/// Offen: die Punktfolge wird vorn und hinten um gespiegelte Phantom-Punkte
/// ergänzt → `n - 1` Segmente. Geschlossen: keine Phantome, stattdessen
/// Wrap-Erweiterung `[letzter, p0..p_{n-1}, p0, p1]` → `n` Segmente
/// einschließlich des Schluss-Segments zurück zum ersten Punkt.
///
/// Weniger als 2 Punkte ergeben keine Segmente.
pub fn segment_windows(points: &[Vec2], closed: bool) -> Vec<PointQuad> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut extended = Vec::with_capacity(n + 3);
    if closed {
        extended.push(points[n - 1]);
        extended.extend_from_slice(points);
        extended.push(points[0]);
        extended.push(points[1]);
    } else {
        extended.push(reflect_phantom(points[0], points[1]));
        extended.extend_from_slice(points);
        extended.push(reflect_phantom(points[n - 1], points[n - 2]));
    }

    extended
        .windows(4)
        .map(|w| PointQuad::new(w[0], w[1], w[2], w[3]))
        .collect()
}
