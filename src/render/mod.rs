//! Zeichen-Backends: egui-Painter (CPU) und Distanzfeld-Shader (wgpu).

mod callback;
mod curve_renderer;
mod painter_surface;
mod types;

pub use callback::CurveRenderCallback;
pub use curve_renderer::CurveRenderer;
pub use painter_surface::{to_color32, PainterSurface};
pub use types::CurveUniforms;
