//! Catmull-Rom-Kurveneditor (Headless-Demo).
//!
//! Baut eine Kurve aus Kommandozeilen-Punkten (oder einer Demo-Figur) und
//! schreibt den SVG-Export nach stdout. Rendering, Pointer-Eingabe und
//! Control-Panel sind externe Kollaborateure und nicht Teil dieser Binary.

use anyhow::{bail, Context};
use catmullrom_editor::{Curve, CurveConfig, EditorOptions};
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Catmull-Rom-Kurveneditor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte); hier nur fürs Logging
    // relevant, die Darstellungswerte konsumiert das Render-Backend.
    let _options = EditorOptions::load_from_file(&EditorOptions::config_path());

    let (config, points) = parse_args(std::env::args().skip(1))?;

    let mut curve = Curve::with_config(config);
    for p in &points {
        curve.add_point(*p);
    }

    log::info!(
        "{} Rohpunkte, {} gefiltert, {} Segmente",
        curve.points().len(),
        curve.filtered_points().len(),
        curve.segments().len()
    );

    match curve.export_svg() {
        Some(svg) => println!("{svg}"),
        None => log::warn!("Zu wenige Punkte für eine Kurve — kein Export"),
    }

    Ok(())
}

/// Parst `--alpha=`, `--tension=`, `--closed`, `--lines` und `x,y`-Paare.
/// Ohne Punkt-Argumente wird eine Demo-Figur verwendet.
fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<(CurveConfig, Vec<Vec2>)> {
    let mut config = CurveConfig::default();
    let mut points = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--alpha=") {
            config.alpha = value
                .parse()
                .with_context(|| format!("Ungültiger Alpha-Wert: {value}"))?;
        } else if let Some(value) = arg.strip_prefix("--tension=") {
            config.tension = value
                .parse()
                .with_context(|| format!("Ungültiger Tension-Wert: {value}"))?;
        } else if arg == "--closed" {
            config.closed = true;
        } else if arg == "--lines" {
            config.draw_lines = true;
        } else if let Some((x, y)) = arg.split_once(',') {
            let x: f32 = x
                .parse()
                .with_context(|| format!("Ungültige x-Koordinate: {arg}"))?;
            let y: f32 = y
                .parse()
                .with_context(|| format!("Ungültige y-Koordinate: {arg}"))?;
            points.push(Vec2::new(x, y));
        } else {
            bail!("Unbekanntes Argument: {arg} (erwartet: x,y oder --alpha=/--tension=/--closed/--lines)");
        }
    }

    if points.is_empty() {
        // Demo-Figur: geschwungene S-Kurve
        points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 40.0),
            Vec2::new(200.0, -40.0),
            Vec2::new(300.0, 0.0),
        ];
    }

    Ok((config, points))
}
