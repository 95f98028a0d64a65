//! GPU-Datentypen für das Kurven-Distanzfeld.

use crate::core::AxisOrientation;
use crate::shared::options::MAX_GPU_CONTROL_POINTS;
use crate::shared::Rgba;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex für ein Quad (2D-Rechteck)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in Clip-Koordinaten
    pub position: [f32; 2],
}

impl Vertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Vollflächiges Quad aus zwei Dreiecken.
pub const FULLSCREEN_QUAD: [Vertex; 6] = [
    Vertex {
        position: [-1.0, -1.0],
    },
    Vertex {
        position: [1.0, -1.0],
    },
    Vertex {
        position: [1.0, 1.0],
    },
    Vertex {
        position: [-1.0, -1.0],
    },
    Vertex {
        position: [1.0, 1.0],
    },
    Vertex {
        position: [-1.0, 1.0],
    },
];

/// Uniform-Block des Kurven-Shaders (Layout wie `CurveUniforms` in `shaders.wgsl`).
///
/// Punkte liegen als `vec4` vor (Array-Stride 16 Byte in Uniform-Buffern), nur `xy` wird genutzt.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveUniforms {
    /// Kontrollpunkte in Backend-Koordinaten
    pub points: [[f32; 4]; MAX_GPU_CONTROL_POINTS],
    /// Kurvenfarbe
    pub curve_color: [f32; 4],
    /// Farbe der Kontrollpunkt-Kreise
    pub control_color: [f32; 4],
    /// Logische Canvas-Größe
    pub canvas_size: [f32; 2],
    /// Anzahl gültiger Einträge in `points`
    pub point_count: u32,
    /// 1 = Y-Achse zeigt nach oben
    pub flip_y: u32,
    /// Halbbreite des Kurvenbands
    pub threshold: f32,
    /// Radius der Kontrollpunkt-Kreise
    pub marker_size: f32,
    pub _padding: [f32; 2],
}

impl CurveUniforms {
    /// Baut den Uniform-Block; Punkte jenseits der Array-Länge werden abgeschnitten.
    pub fn new(
        points: &[Vec2],
        threshold: f32,
        marker_size: f32,
        canvas_size: Vec2,
        orientation: AxisOrientation,
        curve_color: Rgba,
        control_color: Rgba,
    ) -> Self {
        let mut uniforms = Self::zeroed();
        let count = points.len().min(MAX_GPU_CONTROL_POINTS);
        for (slot, p) in uniforms.points.iter_mut().zip(&points[..count]) {
            *slot = [p.x, p.y, 0.0, 0.0];
        }
        uniforms.point_count = count as u32;
        uniforms.curve_color = curve_color.to_f32_array();
        uniforms.control_color = control_color.to_f32_array();
        uniforms.canvas_size = canvas_size.to_array();
        uniforms.flip_y = match orientation {
            AxisOrientation::TopLeft => 0,
            AxisOrientation::BottomLeft => 1,
        };
        uniforms.threshold = threshold;
        uniforms.marker_size = marker_size;
        uniforms
    }
}
