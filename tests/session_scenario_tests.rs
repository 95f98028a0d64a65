use approx::assert_abs_diff_eq;
use bezier_curve_editor::app::{PointerButton, WheelDirection};
use bezier_curve_editor::shared::{DrawCall, RecordingSurface};
use bezier_curve_editor::{AppController, AppIntent, AppState, EditorOptions, RenderBackend};
use glam::Vec2;

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller.handle_intents(
        state,
        [
            AppIntent::PointerDown {
                pos: Vec2::new(x, y),
                button: PointerButton::Primary,
            },
            AppIntent::PointerUp {
                button: PointerButton::Primary,
            },
        ],
    );
}

fn marker_center(origin: Vec2, size: Vec2) -> Vec2 {
    origin + size * 0.5
}

#[test]
fn test_three_clicks_produce_quadratic_curve_frame() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)] {
        click(&mut controller, &mut state, x, y);
    }

    let mut surface = RecordingSurface::new();
    controller
        .render_frame(&state, &mut surface)
        .expect("Frame sollte gezeichnet werden");

    let palette = state.palette();
    let samples = surface.rects_with(palette.curve);
    assert_eq!(samples.len(), 21);

    let first = marker_center(samples[0].0, samples[0].1);
    assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(first.y, 0.0, epsilon = 1e-4);

    let (origin, size) = *samples.last().expect("Abtastpunkte vorhanden");
    let last = marker_center(origin, size);
    assert_abs_diff_eq!(last.x, 50.0, epsilon = 0.5);
    assert_abs_diff_eq!(last.y, 100.0, epsilon = 0.5);

    assert_eq!(surface.rects_with(palette.control).len(), 3);
    assert_eq!(surface.lines_with(palette.control).len(), 2);
}

#[test]
fn test_finer_step_yields_more_samples() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 400.0, 300.0);

    let count = |state: &AppState, controller: &AppController| {
        let mut surface = RecordingSurface::new();
        controller
            .render_frame(state, &mut surface)
            .expect("Frame sollte gezeichnet werden");
        surface.rects_with(state.palette().curve).len()
    };

    let coarse = count(&state, &controller);
    controller.handle_intents(
        &mut state,
        (0..40).map(|_| AppIntent::Wheel {
            direction: WheelDirection::Down,
        }),
    );
    let fine = count(&state, &controller);

    assert_abs_diff_eq!(state.session.sample_step(), 0.01, epsilon = 1e-4);
    assert!(fine > coarse * 4, "fein {fine}, grob {coarse}");
}

#[test]
fn test_gpu_surface_receives_uniforms_in_backend_space() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(EditorOptions {
        backend: RenderBackend::Gpu,
        initial_control_points: vec![Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0)],
        ..EditorOptions::default()
    });
    click(&mut controller, &mut state, 500.0, 100.0);

    let mut surface = RecordingSurface::with_shader();
    controller
        .render_frame(&state, &mut surface)
        .expect("Frame sollte gezeichnet werden");

    match &surface.calls[0] {
        DrawCall::Uniforms {
            points, threshold, ..
        } => {
            assert_eq!(points.len(), 3);
            assert_eq!(points[2], Vec2::new(500.0, 100.0));
            assert_eq!(*threshold, 10.0);
        }
        other => panic!("Erwartet Uniform-Upload, war {other:?}"),
    }
    assert!(surface.rects_with(state.palette().curve).is_empty());
}
