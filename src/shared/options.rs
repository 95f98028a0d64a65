//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::Rgba;
use crate::core::{AxisOrientation, HitShape};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Canvas ──────────────────────────────────────────────────────────

/// Logische Canvas-Breite (wird ins Fenster eingepasst).
pub const CANVAS_WIDTH: f32 = 800.0;
/// Logische Canvas-Höhe.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Ziel-Bildrate der Frame-Schleife.
pub const TARGET_FPS: f32 = 60.0;
/// Zulässiger Bereich der Ziel-Bildrate.
pub const TARGET_FPS_RANGE: (f32, f32) = (1.0, 1000.0);

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Kantenlänge der Marker-Quadrate (zugleich Trefferzone).
pub const MARKER_SIZE: f32 = 15.0;
/// Maximale Anzahl an Kontrollpunkten.
pub const CONTROL_POINT_CAPACITY: usize = crate::core::control_points::DEFAULT_CAPACITY;

// ── Abtastung ───────────────────────────────────────────────────────

/// Start-Schrittweite der Kurvenabtastung.
pub const SAMPLE_STEP_DEFAULT: f32 = 0.05;
/// Kleinste per Mausrad erreichbare Schrittweite.
pub const SAMPLE_STEP_MIN: f32 = 0.001;
/// Größte per Mausrad erreichbare Schrittweite.
pub const SAMPLE_STEP_MAX: f32 = 0.999;
/// Änderung der Schrittweite pro Mausrad-Raste.
pub const SAMPLE_STEP_INCREMENT: f32 = 0.001;

// ── GPU-Distanzfeld ─────────────────────────────────────────────────

/// Start-Halbbreite des Kurvenbands im Shader (Canvas-Einheiten).
pub const CURVE_THRESHOLD_DEFAULT: f32 = 10.0;
/// Änderung der Halbbreite pro Mausrad-Raste.
pub const CURVE_THRESHOLD_INCREMENT: f32 = 5.0;
/// Obergrenze der Halbbreite.
pub const CURVE_THRESHOLD_MAX: f32 = 500.0;
/// Länge des Punkt-Arrays im Uniform-Block des Shaders.
pub const MAX_GPU_CONTROL_POINTS: usize = 16;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrundfarbe (Dunkelgrau).
pub const BACKGROUND_COLOR: Rgba = Rgba(0x353535FF);
/// Kontrollpunkte und Kontrollpolygon (Rot).
pub const CONTROL_COLOR: Rgba = Rgba(0xDA2C38FF);
/// Abgetastete Kurve (Grün).
pub const CURVE_COLOR: Rgba = Rgba(0x87C38FFF);
/// Gerade gezogener Kontrollpunkt (Blau).
pub const HIGHLIGHT_COLOR: Rgba = Rgba(0x748CABFF);

/// Zeichen-Backend für die Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderBackend {
    /// Abtastung auf der CPU, Zeichnen über den egui-Painter
    #[default]
    Cpu,
    /// Distanzfeld im Fragment-Shader (wgpu), Kurve wird nicht auf der CPU abgetastet
    Gpu,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Logische Canvas-Breite
    pub canvas_width: f32,
    /// Logische Canvas-Höhe
    pub canvas_height: f32,
    /// Ziel-Bildrate
    pub target_fps: f32,
    /// Zeichen-Backend
    pub backend: RenderBackend,
    /// Y-Achsen-Orientierung des Backends (Eingaben werden an der Grenze umgerechnet)
    pub axis_orientation: AxisOrientation,

    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Marker-Kantenlänge bzw. Treffer-Radius
    pub marker_size: f32,
    /// Maximale Anzahl an Kontrollpunkten
    pub control_point_capacity: usize,
    /// Form der Trefferzone
    pub hit_shape: HitShape,
    /// Kontrollpunkte beim Start (z.B. feste Drei-Punkt-Variante)
    pub initial_control_points: Vec<Vec2>,

    // ── Abtastung ───────────────────────────────────────────────
    /// Start-Schrittweite
    pub sample_step_default: f32,
    /// Untergrenze der Schrittweite
    pub sample_step_min: f32,
    /// Obergrenze der Schrittweite
    pub sample_step_max: f32,
    /// Schrittweiten-Änderung pro Mausrad-Raste
    pub sample_step_increment: f32,

    // ── GPU ─────────────────────────────────────────────────────
    /// Start-Halbbreite des Kurvenbands
    pub curve_threshold_default: f32,
    /// Halbbreiten-Änderung pro Mausrad-Raste
    pub curve_threshold_increment: f32,
    /// Obergrenze der Halbbreite
    pub curve_threshold_max: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrund
    pub background_color: Rgba,
    /// Kontrollpunkte und Kontrollpolygon
    pub control_color: Rgba,
    /// Kurve
    pub curve_color: Rgba,
    /// Gezogener Kontrollpunkt
    pub highlight_color: Rgba,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            target_fps: TARGET_FPS,
            backend: RenderBackend::Cpu,
            axis_orientation: AxisOrientation::TopLeft,

            marker_size: MARKER_SIZE,
            control_point_capacity: CONTROL_POINT_CAPACITY,
            hit_shape: HitShape::Square,
            initial_control_points: Vec::new(),

            sample_step_default: SAMPLE_STEP_DEFAULT,
            sample_step_min: SAMPLE_STEP_MIN,
            sample_step_max: SAMPLE_STEP_MAX,
            sample_step_increment: SAMPLE_STEP_INCREMENT,

            curve_threshold_default: CURVE_THRESHOLD_DEFAULT,
            curve_threshold_increment: CURVE_THRESHOLD_INCREMENT,
            curve_threshold_max: CURVE_THRESHOLD_MAX,

            background_color: BACKGROUND_COLOR,
            control_color: CONTROL_COLOR,
            curve_color: CURVE_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Logische Canvas-Größe.
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    /// Zeit zwischen zwei Frames bei `target_fps`.
    pub fn frame_interval(&self) -> Duration {
        let (lo, hi) = TARGET_FPS_RANGE;
        Duration::from_secs_f32(1.0 / finite_or(self.target_fps, TARGET_FPS).clamp(lo, hi))
    }

    /// Korrigiert widersprüchliche Werte aus handgeschriebenen Dateien.
    ///
    /// Nicht-endliche Zahlen werden durch Standardwerte ersetzt. Schrittweiten-Grenzen
    /// liegen in (0, 1], min ≤ max; die Start-Schrittweite liegt in [min, max].
    /// Das GPU-Backend ist auf die Uniform-Array-Länge begrenzt.
    fn sanitized(mut self) -> Self {
        let min = finite_or(self.sample_step_min, SAMPLE_STEP_MIN).clamp(f32::EPSILON, 1.0);
        let max = finite_or(self.sample_step_max, SAMPLE_STEP_MAX).clamp(min, 1.0);
        if (min, max) != (self.sample_step_min, self.sample_step_max) {
            log::warn!(
                "Schrittweiten-Grenzen [{}, {}] ungültig, verwende [{}, {}]",
                self.sample_step_min,
                self.sample_step_max,
                min,
                max
            );
        }
        self.sample_step_min = min;
        self.sample_step_max = max;
        self.sample_step_default =
            finite_or(self.sample_step_default, SAMPLE_STEP_DEFAULT).clamp(min, max);
        self.sample_step_increment =
            positive_or(self.sample_step_increment, SAMPLE_STEP_INCREMENT);

        self.curve_threshold_max =
            finite_or(self.curve_threshold_max, CURVE_THRESHOLD_MAX).max(0.0);
        self.curve_threshold_default =
            finite_or(self.curve_threshold_default, CURVE_THRESHOLD_DEFAULT)
                .clamp(0.0, self.curve_threshold_max);
        self.curve_threshold_increment =
            positive_or(self.curve_threshold_increment, CURVE_THRESHOLD_INCREMENT);

        let (fps_lo, fps_hi) = TARGET_FPS_RANGE;
        let fps = finite_or(self.target_fps, TARGET_FPS).clamp(fps_lo, fps_hi);
        if fps != self.target_fps {
            log::warn!(
                "Ziel-Bildrate {} ungültig, verwende {}",
                self.target_fps,
                fps
            );
            self.target_fps = fps;
        }
        self.marker_size = positive_or(self.marker_size, MARKER_SIZE);
        self.canvas_width = positive_or(self.canvas_width, CANVAS_WIDTH);
        self.canvas_height = positive_or(self.canvas_height, CANVAS_HEIGHT);

        if self.backend == RenderBackend::Gpu
            && self.control_point_capacity > MAX_GPU_CONTROL_POINTS
        {
            log::info!(
                "GPU-Backend: Kapazität von {} auf {} Kontrollpunkte begrenzt",
                self.control_point_capacity,
                MAX_GPU_CONTROL_POINTS
            );
            self.control_point_capacity = MAX_GPU_CONTROL_POINTS;
        }
        self
    }
}

/// `value`, falls endlich, sonst `fallback`.
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// `value`, falls endlich und > 0, sonst `fallback`.
fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests;
