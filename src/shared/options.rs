//! Zentrale Konfiguration für den Kurveneditor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven-Rendering ───────────────────────────────────────────────

/// Linienstärke der gesampelten Kurve.
pub const CURVE_STROKE_WIDTH: f32 = 3.0;
/// Farbe der Kurve (RGBA: Dunkelgrau).
pub const CURVE_COLOR: [f32; 4] = [0.25, 0.25, 0.25, 1.0];

// ── Rohpunkt-Verbindungslinien ─────────────────────────────────────

/// Linienstärke der optionalen Verbindungslinien durch die Rohpunkte.
pub const LINE_STROKE_WIDTH: f32 = 2.0;
/// Farbe der Verbindungslinien (RGBA: Hellgrau).
pub const LINE_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];

// ── Punkt-Marker ───────────────────────────────────────────────────

/// Radius der interaktiven Punkt-Marker.
pub const MARKER_RADIUS: f32 = 10.0;
/// Füllfarbe der Punkt-Marker (RGBA: Brand-Blau).
pub const MARKER_COLOR: [f32; 4] = [0.2, 0.45, 0.9, 1.0];

// ── Eingabe ────────────────────────────────────────────────────────

/// Hit-Test-Radius für Pointer-Down auf einen Punkt.
pub const HIT_RADIUS: f32 = 10.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `catmullrom_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Linienstärke der Kurve
    pub curve_stroke_width: f32,
    /// Farbe der Kurve (RGBA)
    pub curve_color: [f32; 4],
    /// Linienstärke der Rohpunkt-Verbindungslinien
    pub line_stroke_width: f32,
    /// Farbe der Verbindungslinien (RGBA)
    pub line_color: [f32; 4],
    /// Radius der Punkt-Marker
    pub marker_radius: f32,
    /// Füllfarbe der Punkt-Marker (RGBA)
    pub marker_color: [f32; 4],
    /// Hit-Test-Radius für Pointer-Down. Wird von der Eingabequelle
    /// konsumiert, die damit `ControlPointSequence::hit_test` aufruft und
    /// das Ergebnis als `PointerDown::hit` einspeist.
    #[serde(default = "default_hit_radius")]
    pub hit_radius: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_stroke_width: CURVE_STROKE_WIDTH,
            curve_color: CURVE_COLOR,
            line_stroke_width: LINE_STROKE_WIDTH,
            line_color: LINE_COLOR,
            marker_radius: MARKER_RADIUS,
            marker_color: MARKER_COLOR,
            hit_radius: HIT_RADIUS,
        }
    }
}

/// Serde-Default für `hit_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_hit_radius() -> f32 {
    HIT_RADIUS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("catmullrom_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("catmullrom_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.curve_stroke_width = 5.0;
        opts.marker_color = [1.0, 0.0, 0.0, 1.0];

        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&toml_str).expect("Parsen erwartet");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_options_missing_hit_radius_defaults() {
        // Alte Dateien ohne hit_radius bleiben ladbar
        let toml_str = r#"
            curve_stroke_width = 3.0
            curve_color = [0.25, 0.25, 0.25, 1.0]
            line_stroke_width = 2.0
            line_color = [0.7, 0.7, 0.7, 1.0]
            marker_radius = 10.0
            marker_color = [0.2, 0.45, 0.9, 1.0]
        "#;
        let parsed: EditorOptions = toml::from_str(toml_str).expect("Parsen erwartet");
        assert_eq!(parsed.hit_radius, HIT_RADIUS);
    }
}
