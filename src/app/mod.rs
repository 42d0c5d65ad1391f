//! Application-Layer: Kurve, Konfiguration, Controller und Events.

pub mod controller;
pub mod curve;
pub mod events;

pub use controller::CurveController;
pub use curve::{Curve, CurveConfig};
pub use events::CurveIntent;
