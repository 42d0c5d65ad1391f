//! Die geordnete Kontrollpunkt-Sequenz mit Kapazitätsgrenze und Dedup-View.

use super::{ControlPoint, PointId};
use glam::Vec2;

/// Maximale Anzahl Kontrollpunkte; weitere `add`-Aufrufe sind stille No-Ops.
pub const MAX_POINTS: usize = 100;

/// Punkte näher als dieser Abstand zum Vorgänger gelten als Duplikate.
///
/// Das Filtern passiert ausschließlich in der Lese-View für die
/// Kurvenberechnung — der Rohbestand wird nie bereinigt.
pub const DEDUP_DISTANCE: f32 = 1.0;

/// Geordnete, mutierbare Sequenz der Rohpunkte (Einfügereihenfolge = Zeichenreihenfolge).
#[derive(Debug, Clone, Default)]
pub struct ControlPointSequence {
    points: Vec<ControlPoint>,
    next_id: u64,
}

impl ControlPointSequence {
    /// Erstellt eine leere Sequenz.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen neuen Punkt an, sofern die Kapazität es zulässt.
    ///
    /// Gibt `None` zurück wenn das Limit von [`MAX_POINTS`] erreicht ist —
    /// das ist kein Fehler, der Aufruf wird schlicht ignoriert.
    pub fn add(&mut self, position: Vec2) -> Option<PointId> {
        if self.points.len() >= MAX_POINTS {
            log::debug!("Punkt-Limit ({}) erreicht, add ignoriert", MAX_POINTS);
            return None;
        }
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.push(ControlPoint::new(id, position));
        Some(id)
    }

    /// Verschiebt den identifizierten Punkt in-place.
    ///
    /// Gibt `false` zurück wenn der Punkt nicht (mehr) existiert.
    pub fn move_point(&mut self, id: PointId, position: Vec2) -> bool {
        match self.points.iter_mut().find(|p| p.id == id) {
            Some(point) => {
                point.position = position;
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Punkte und gibt deren IDs zurück, damit der Aufrufer
    /// zugehörige Render-Handles freigeben kann.
    pub fn clear(&mut self) -> Vec<PointId> {
        self.points.drain(..).map(|p| p.id).collect()
    }

    /// Anzahl der Rohpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Prüft ob die Sequenz leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Prüft ob ein Punkt mit dieser ID existiert.
    pub fn contains(&self, id: PointId) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    /// Position eines Punkts, falls er existiert.
    pub fn position_of(&self, id: PointId) -> Option<Vec2> {
        self.points.iter().find(|p| p.id == id).map(|p| p.position)
    }

    /// Iterator über alle Rohpunkte (read-only).
    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    /// Positionen aller Rohpunkte in Einfügereihenfolge.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Findet den nächstgelegenen Punkt innerhalb `radius` (Hit-Test).
    pub fn hit_test(&self, query: Vec2, radius: f32) -> Option<PointId> {
        self.points
            .iter()
            .map(|p| (p.id, p.position.distance(query)))
            .filter(|(_, dist)| *dist <= radius)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }

    /// Gefilterte Lese-View für die Kurvenberechnung.
    ///
    /// Rückwärts-Scan: jeder Punkt, dessen Abstand zum Vorgänger unter
    /// [`DEDUP_DISTANCE`] liegt, wird verworfen. Der Rückwärts-Lauf vermeidet
    /// Index-Verschiebungen bei mehreren aufeinanderfolgenden Duplikaten.
    /// Bei `closed` wird zusätzlich der letzte überlebende Punkt entfernt,
    /// wenn er näher als [`DEDUP_DISTANCE`] am ersten liegt.
    ///
    /// Die View wird bei jedem Aufruf frisch berechnet und mutiert den
    /// Rohbestand nie.
    pub fn filtered_view(&self, closed: bool) -> Vec<Vec2> {
        let mut view = self.positions();

        for i in (1..view.len()).rev() {
            if view[i].distance(view[i - 1]) < DEDUP_DISTANCE {
                view.remove(i);
            }
        }

        if closed && !view.is_empty() {
            let first = view[0];
            let last = view[view.len() - 1];
            if first.distance(last) < DEDUP_DISTANCE {
                view.pop();
            }
        }

        view
    }
}
