//! Bézier-Kurven-Editor.
//!
//! Kontrollpunkte per Linksklick setzen und ziehen, Mausrad verstellt die
//! Abtastung, F1 wechselt zwischen Markern und Linienzug.

use bezier_curve_editor::{render, ui, AppController, AppState, EditorOptions, RenderBackend};
use eframe::egui;
use eframe::egui_wgpu;
use glam::Vec2;
use std::sync::{Arc, Mutex};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bézier-Kurven-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!(
                    "Standard-Optionen konnten nicht geschrieben werden: {:#}",
                    e
                );
            }
        }
        log::info!(
            "Backend: {:?}, Canvas {}×{}",
            editor_options.backend,
            editor_options.canvas_width,
            editor_options.canvas_height
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([
                    editor_options.canvas_width,
                    editor_options.canvas_height + 28.0,
                ])
                .with_title("Bezier Curves"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Curves",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state, editor_options)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    /// Nur beim GPU-Backend vorhanden
    renderer: Option<Arc<Mutex<render::CurveRenderer>>>,
    input: ui::InputState,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState, editor_options: EditorOptions) -> Self {
        let renderer = match editor_options.backend {
            RenderBackend::Gpu => Some(Arc::new(Mutex::new(render::CurveRenderer::new(
                render_state,
            )))),
            RenderBackend::Cpu => None,
        };

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer,
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state, self.input.pointer_canvas_pos());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let viewport = bezier_curve_editor::CanvasViewport::fit(
                    Vec2::new(rect.min.x, rect.min.y),
                    Vec2::new(rect.width(), rect.height()),
                    self.state.options.canvas_size(),
                );

                let intents = self.input.collect_canvas_intents(ui, &viewport);
                self.controller.handle_intents(&mut self.state, intents);

                self.paint_canvas(ui.painter(), &viewport);
            });

        ctx.request_repaint_after(self.state.options.frame_interval());
    }
}

impl EditorApp {
    fn paint_canvas(
        &self,
        painter: &egui::Painter,
        viewport: &bezier_curve_editor::CanvasViewport,
    ) {
        let (min, size) = viewport.screen_rect();
        let canvas_rect =
            egui::Rect::from_min_size(egui::pos2(min.x, min.y), egui::vec2(size.x, size.y));
        let painter = painter.with_clip_rect(canvas_rect);

        painter.rect_filled(
            canvas_rect,
            0.0,
            render::to_color32(self.state.options.background_color),
        );
        // Platzhalter: Shader-Kurve liegt unter den Kontrollpunkten
        let curve_slot = painter.add(egui::Shape::Noop);

        let mut surface =
            render::PainterSurface::new(&painter, *viewport, self.state.options.axis_orientation);
        if self.renderer.is_some() {
            surface = surface.with_shader(
                self.state.options.curve_color,
                self.state.options.control_color,
            );
        }

        if let Err(e) = self.controller.render_frame(&self.state, &mut surface) {
            log::error!("Frame konnte nicht gezeichnet werden: {:#}", e);
        }

        if let (Some(renderer), Some(uniforms)) = (&self.renderer, surface.take_uniforms()) {
            let callback = egui_wgpu::Callback::new_paint_callback(
                canvas_rect,
                render::CurveRenderCallback {
                    renderer: renderer.clone(),
                    uniforms,
                },
            );
            painter.set(curve_slot, callback);
        }
    }
}
