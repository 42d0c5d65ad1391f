//! Intent-Events aus Eingabequelle und Control-Panel.

use super::CurveConfig;
use crate::core::PointId;
use glam::Vec2;

/// Eingaben ohne direkte Mutationslogik; der Controller entscheidet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveIntent {
    /// Pointer-Down. `hit` ist das Hit-Test-Ergebnis der Eingabequelle:
    /// `Some` startet einen Drag auf dem Punkt, `None` heißt
    /// "neuen Punkt an dieser Position hinzufügen".
    PointerDown { position: Vec2, hit: Option<PointId> },
    /// Pointer-Move; relevant nur während eines aktiven Drags.
    PointerMoved { position: Vec2 },
    /// Pointer-Up beendet jeden aktiven Drag.
    PointerUp,
    /// Control-Panel hat Konfigurationsfelder geschrieben.
    ConfigChanged { config: CurveConfig },
    /// Alle Punkte entfernen (Null-Argument-Aktion des Panels).
    ClearRequested,
    /// SVG-Export anstoßen (Null-Argument-Aktion des Panels).
    ExportRequested,
}
