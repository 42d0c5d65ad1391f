//! Die Kurve: Kontrollpunkte, Konfiguration und Recompute-Pipeline.

use crate::core::{ControlPointSequence, PointId};
use crate::export::export_svg;
use crate::spline::{sample_curve, SampledSegment};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Konfiguration der Kurve.
///
/// Jede Änderung läuft über [`Curve::set_config`], das die Pipeline sichtbar
/// neu ausführt — keine impliziten Seiteneffekte pro Feld.
///
/// `alpha` und `tension` werden nicht geklemmt: die Mathematik ist nur für
/// `[0, 1]` definiert, Werte außerhalb reicht der Kern unverändert durch.
/// Das Eingrenzen der Eingabe ist Sache des Control-Panel-Kollaborateurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Knot-Parametrisierungs-Exponent: 0 = uniform, 0.5 = zentripetal, 1 = chordal
    pub alpha: f32,
    /// Tangenten-Abflachung: 0 = Standard-Catmull-Rom, gegen 1 = Geradenstücke
    pub tension: f32,
    /// Verbindungslinien durch die Rohpunkte mitzeichnen
    pub draw_lines: bool,
    /// Geschlossene Kurve (Schluss-Segment zurück zum ersten Punkt)
    pub closed: bool,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            tension: 0.0,
            draw_lines: false,
            closed: false,
        }
    }
}

/// Die Kurve mit Punktbestand, Konfiguration und zuletzt gesampelten Segmenten.
///
/// Jede Mutation (Punkt hinzufügen/verschieben/löschen, Konfiguration setzen)
/// führt die komplette Pipeline synchron aus, bevor sie zurückkehrt:
/// gefilterte View → Tangenten → Hermite → adaptives Sampling. Die Arbeit ist
/// durch das Punkt-Limit beschränkt und verträgt hochfrequente Drag-Events.
#[derive(Debug, Clone, Default)]
pub struct Curve {
    points: ControlPointSequence,
    config: CurveConfig,
    segments: Vec<SampledSegment>,
}

impl Curve {
    /// Erstellt eine leere Kurve mit Standard-Konfiguration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine leere Kurve mit gegebener Konfiguration.
    pub fn with_config(config: CurveConfig) -> Self {
        Self {
            points: ControlPointSequence::new(),
            config,
            segments: Vec::new(),
        }
    }

    /// Aktuelle Konfiguration.
    pub fn config(&self) -> CurveConfig {
        self.config
    }

    /// Setzt die Konfiguration und führt die Pipeline neu aus.
    pub fn set_config(&mut self, config: CurveConfig) {
        self.config = config;
        self.recompute();
    }

    /// Read-only Zugriff auf den Punktbestand.
    pub fn points(&self) -> &ControlPointSequence {
        &self.points
    }

    /// Zuletzt gesampelte Segmente (leer bei < 2 gefilterten Punkten).
    pub fn segments(&self) -> &[SampledSegment] {
        &self.segments
    }

    /// Gefilterte View mit der aktuellen `closed`-Einstellung.
    pub fn filtered_points(&self) -> Vec<Vec2> {
        self.points.filtered_view(self.config.closed)
    }

    /// Fügt einen Punkt hinzu und rechnet neu.
    ///
    /// `None` bei erreichter Kapazität — stilles No-Op wie in der Vorlage.
    pub fn add_point(&mut self, position: Vec2) -> Option<PointId> {
        let id = self.points.add(position);
        if id.is_some() {
            self.recompute();
        }
        id
    }

    /// Verschiebt einen Punkt und rechnet neu.
    pub fn move_point(&mut self, id: PointId, position: Vec2) -> bool {
        let moved = self.points.move_point(id, position);
        if moved {
            self.recompute();
        }
        moved
    }

    /// Entfernt alle Punkte, rechnet neu und gibt die IDs der entfernten
    /// Punkte zurück (für die Freigabe der Render-Handles).
    pub fn clear(&mut self) -> Vec<PointId> {
        let removed = self.points.clear();
        self.recompute();
        removed
    }

    /// Serialisiert den aktuellen Zustand als SVG.
    ///
    /// `None` wenn keine Segmente existieren — die Vorlage gibt bei weniger
    /// als 2 gefilterten Punkten nichts aus.
    pub fn export_svg(&self) -> Option<String> {
        if self.segments.is_empty() {
            return None;
        }
        Some(export_svg(&self.points.positions(), &self.segments))
    }

    /// Führt die komplette Pipeline aus.
    fn recompute(&mut self) {
        let filtered = self.points.filtered_view(self.config.closed);
        self.segments = if filtered.len() < 2 {
            Vec::new()
        } else {
            sample_curve(
                &filtered,
                self.config.alpha,
                self.config.tension,
                self.config.closed,
            )
        };
    }
}
