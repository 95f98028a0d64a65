//! wgpu Custom Render Callback für egui-Integration.

use super::{CurveRenderer, CurveUniforms};
use std::sync::{Arc, Mutex};

/// Custom wgpu Render Callback: lädt die Uniforms in `prepare` und zeichnet in `paint`.
pub struct CurveRenderCallback {
    /// Geteilter Renderer-Zustand (thread-safe)
    pub renderer: Arc<Mutex<CurveRenderer>>,
    /// Uniform-Block für diesen Frame
    pub uniforms: CurveUniforms,
}

impl eframe::egui_wgpu::CallbackTrait for CurveRenderCallback {
    fn prepare(
        &self,
        _device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        _screen_descriptor: &eframe::egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut eframe::egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        match self.renderer.lock() {
            Ok(renderer) => renderer.upload(queue, &self.uniforms),
            Err(_) => log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)"),
        }
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &'b eframe::egui_wgpu::CallbackResources,
    ) {
        if let Ok(renderer) = self.renderer.lock() {
            log::trace!("Kurve mit {} Punkten gezeichnet", self.uniforms.point_count);
            renderer.render(render_pass);
        } else {
            log::error!("Failed to lock renderer");
        }
    }
}
