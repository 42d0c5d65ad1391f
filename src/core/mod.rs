//! Core-Domänentypen: Kontrollpunkte und die geordnete Punkt-Sequenz.

pub mod point;
pub mod sequence;

pub use point::{ControlPoint, PointId};
pub use sequence::{ControlPointSequence, DEDUP_DISTANCE, MAX_POINTS};
