//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod canvas;
mod color;
mod draw_surface;
pub mod options;

pub use canvas::CanvasViewport;
pub use color::Rgba;
pub use draw_surface::{DrawCall, DrawSurface, RecordingSurface};
pub use options::{EditorOptions, RenderBackend};
