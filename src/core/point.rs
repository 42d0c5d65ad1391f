//! Kontrollpunkt mit stabiler Identität.

use glam::Vec2;

/// Stabile Identität eines Kontrollpunkts.
///
/// Während eines Drags können Punkte transient auf exakt derselben Position
/// liegen; die ID unterscheidet sie unabhängig von den Koordinaten und
/// korreliert Punkt-Daten mit den Visual-Handles des Render-Backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

/// Ein vom Benutzer gesetzter Kontrollpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Stabile Identität
    pub id: PointId,
    /// Aktuelle Weltposition
    pub position: Vec2,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    pub fn new(id: PointId, position: Vec2) -> Self {
        Self { id, position }
    }
}
