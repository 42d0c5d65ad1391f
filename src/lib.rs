//! Catmull-Rom-Kurveneditor.
//! Engine-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod render;
pub mod shared;
pub mod spline;

pub use app::{Curve, CurveConfig, CurveController, CurveIntent};
pub use self::core::{ControlPoint, ControlPointSequence, PointId, DEDUP_DISTANCE, MAX_POINTS};
pub use export::export_svg;
pub use render::{draw_curve, RenderBackend};
pub use shared::EditorOptions;
pub use spline::{sample_curve, HermiteSegment, PointQuad, SampledSegment};
