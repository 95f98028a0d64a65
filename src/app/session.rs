//! Interaktive Editor-Sitzung: Kontrollpunkte, Drag-Zustand und Frame-Ausgabe.
//!
//! Die Sitzung ist die einzige Stelle, die Kontrollpunkte verändert. Sie kennt
//! keine Eingabegeräte: Positionen kommen bereits in Canvas-Koordinaten an.

use super::events::WheelDirection;
use crate::core::{marker_rect, sample, sample_segments, ControlPointSet, CurveError, HitShape};
use crate::shared::{DrawSurface, EditorOptions, RenderBackend, Rgba};
use glam::Vec2;

/// Auswahlzustand der Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Punkt gegriffen
    #[default]
    Idle,
    /// Punkt mit diesem Index folgt dem Zeiger
    Dragging(usize),
}

/// Darstellung der abgetasteten Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Ein Marker pro Abtastpunkt
    #[default]
    Markers,
    /// Linienzug zwischen aufeinanderfolgenden Abtastpunkten
    Polyline,
}

impl DisplayMode {
    /// Der jeweils andere Modus.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Markers => DisplayMode::Polyline,
            DisplayMode::Polyline => DisplayMode::Markers,
        }
    }

    /// Anzeigename für die Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Markers => "Marker",
            DisplayMode::Polyline => "Linienzug",
        }
    }
}

/// Ergebnis eines Klicks auf die Canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Vorhandener Punkt getroffen, Drag beginnt
    Selected(usize),
    /// Neuer Punkt am Ende angehängt (kein Drag)
    Appended(usize),
    /// Kein Treffer und Kapazität erschöpft
    Ignored,
}

/// Per Mausrad verstellbarer Wert mit festen Grenzen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustRange {
    /// Startwert
    pub initial: f32,
    /// Untergrenze
    pub min: f32,
    /// Obergrenze
    pub max: f32,
    /// Änderung pro Raste
    pub increment: f32,
}

impl AdjustRange {
    /// Wert nach einer Raste in `direction`, auf [min, max] begrenzt.
    pub fn adjust(&self, value: f32, direction: WheelDirection) -> f32 {
        (value + direction.sign() * self.increment).clamp(self.min, self.max)
    }
}

/// Parameter einer Sitzung, abgeleitet aus den `EditorOptions`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Maximale Anzahl an Kontrollpunkten
    pub capacity: usize,
    /// Marker-Kantenlänge bzw. Treffer-Radius
    pub marker_size: f32,
    /// Form der Trefferzone
    pub hit_shape: HitShape,
    /// Zeichen-Backend der Kurve
    pub backend: RenderBackend,
    /// Abtast-Schrittweite
    pub sample_step: AdjustRange,
    /// Kurven-Halbbreite des Shaders
    pub curve_threshold: AdjustRange,
    /// Kontrollpunkte beim Start
    pub initial_points: Vec<Vec2>,
}

impl SessionConfig {
    /// Übernimmt alle sitzungsrelevanten Werte aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            capacity: options.control_point_capacity,
            marker_size: options.marker_size,
            hit_shape: options.hit_shape,
            backend: options.backend,
            sample_step: AdjustRange {
                initial: options.sample_step_default,
                min: options.sample_step_min,
                max: options.sample_step_max,
                increment: options.sample_step_increment,
            },
            curve_threshold: AdjustRange {
                initial: options.curve_threshold_default,
                min: 0.0,
                max: options.curve_threshold_max,
                increment: options.curve_threshold_increment,
            },
            initial_points: options.initial_control_points.clone(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Farben eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurvePalette {
    /// Kontrollpunkte und Kontrollpolygon
    pub control: Rgba,
    /// Abgetastete Kurve
    pub curve: Rgba,
    /// Gezogener Kontrollpunkt
    pub highlight: Rgba,
}

impl CurvePalette {
    /// Farben aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            control: options.control_color,
            curve: options.curve_color,
            highlight: options.highlight_color,
        }
    }
}

impl Default for CurvePalette {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Zustand einer laufenden Editor-Sitzung.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: SessionConfig,
    points: ControlPointSet,
    drag: DragState,
    sample_step: f32,
    curve_threshold: f32,
    display_mode: DisplayMode,
}

impl EditorSession {
    /// Startet eine Sitzung; Startpunkte jenseits der Kapazität werden verworfen.
    pub fn new(config: SessionConfig) -> Self {
        let mut points = ControlPointSet::with_capacity(config.capacity);
        for &p in &config.initial_points {
            if !points.push(p) {
                log::warn!(
                    "Startpunkt {:?} verworfen: Kapazität {} erreicht",
                    p,
                    config.capacity
                );
            }
        }

        Self {
            sample_step: config.sample_step.initial,
            curve_threshold: config.curve_threshold.initial,
            config,
            points,
            drag: DragState::Idle,
            display_mode: DisplayMode::Markers,
        }
    }

    /// Sitzungsparameter.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Kontrollpunkte in Einfügereihenfolge.
    pub fn points(&self) -> &[Vec2] {
        self.points.as_slice()
    }

    /// Maximale Anzahl an Kontrollpunkten.
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Aktueller Auswahlzustand.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Gibt `true` zurück, solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Aktuelle Abtast-Schrittweite.
    pub fn sample_step(&self) -> f32 {
        self.sample_step
    }

    /// Aktuelle Kurven-Halbbreite des Shaders.
    pub fn curve_threshold(&self) -> f32 {
        self.curve_threshold
    }

    /// Aktueller Darstellungsmodus.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Primärtaste gedrückt bei `pos`.
    ///
    /// Treffer (erster in Einfügereihenfolge) startet einen Drag, auch wenn
    /// bereits gezogen wird. Ohne Treffer endet ein laufender Drag und `pos`
    /// wird angehängt, sofern Kapazität frei ist.
    pub fn press(&mut self, pos: Vec2) -> PressOutcome {
        let hit = self.points.hit_test(pos, self.config.marker_size, self.config.hit_shape);
        if let Some(index) = hit {
            self.drag = DragState::Dragging(index);
            return PressOutcome::Selected(index);
        }

        self.drag = DragState::Idle;
        if self.points.push(pos) {
            PressOutcome::Appended(self.points.len() - 1)
        } else {
            PressOutcome::Ignored
        }
    }

    /// Zeiger bewegt nach `pos`. Verschiebt nur den gezogenen Punkt.
    pub fn drag_to(&mut self, pos: Vec2) -> bool {
        match self.drag {
            DragState::Dragging(index) => {
                self.points.set(index, pos);
                true
            }
            DragState::Idle => false,
        }
    }

    /// Primärtaste losgelassen.
    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Schrittweite um eine Raste verstellen; gibt den neuen Wert zurück.
    pub fn adjust_sample_step(&mut self, direction: WheelDirection) -> f32 {
        self.sample_step = self.config.sample_step.adjust(self.sample_step, direction);
        self.sample_step
    }

    /// Kurven-Halbbreite um eine Raste verstellen; gibt den neuen Wert zurück.
    pub fn adjust_curve_threshold(&mut self, direction: WheelDirection) -> f32 {
        self.curve_threshold = self
            .config
            .curve_threshold
            .adjust(self.curve_threshold, direction);
        self.curve_threshold
    }

    /// Zwischen Marker- und Linienzug-Darstellung wechseln.
    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    /// Zeichnet den aktuellen Frame (ohne Hintergrund) auf `surface`.
    ///
    /// Reihenfolge: Kurve, danach Kontrollpunkte und Kontrollpolygon darüber.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        palette: &CurvePalette,
    ) -> Result<(), CurveError> {
        let points = self.points.as_slice();
        if !points.is_empty() {
            let on_gpu = self.config.backend == RenderBackend::Gpu
                && surface.upload_curve_uniforms(
                    points,
                    self.curve_threshold,
                    self.config.marker_size,
                );
            if !on_gpu {
                self.render_sampled_curve(surface, palette.curve)?;
            }
        }

        self.render_control_points(surface, palette);
        Ok(())
    }

    fn render_sampled_curve(
        &self,
        surface: &mut dyn DrawSurface,
        color: Rgba,
    ) -> Result<(), CurveError> {
        let points = self.points.as_slice();
        match self.display_mode {
            DisplayMode::Markers => {
                for point in sample(points, self.sample_step)? {
                    let (origin, size) = marker_rect(point, self.config.marker_size);
                    surface.draw_filled_rect(origin, size, color);
                }
            }
            DisplayMode::Polyline => {
                for (begin, end) in sample_segments(points, self.sample_step)? {
                    surface.draw_line(begin, end, color);
                }
            }
        }
        Ok(())
    }

    fn render_control_points(&self, surface: &mut dyn DrawSurface, palette: &CurvePalette) {
        let points = self.points.as_slice();
        for (i, &p) in points.iter().enumerate() {
            let color = if self.drag == DragState::Dragging(i) {
                palette.highlight
            } else {
                palette.control
            };
            let (origin, size) = marker_rect(p, self.config.marker_size);
            surface.draw_filled_rect(origin, size, color);
        }
        for pair in points.windows(2) {
            surface.draw_line(pair[0], pair[1], palette.control);
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
