//! Interaktiver Bézier-Kurven-Editor.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DisplayMode, DragState, EditorSession,
};
pub use core::{
    evaluate, sample, sample_segments, AxisOrientation, ControlPointSet, CurveError, HitShape,
};
pub use shared::{CanvasViewport, DrawSurface, EditorOptions, RenderBackend, Rgba};
