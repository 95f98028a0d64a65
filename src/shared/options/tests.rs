use super::*;

#[test]
fn defaults_match_constants() {
    let opts = EditorOptions::default();
    assert_eq!(opts.canvas_size(), Vec2::new(800.0, 600.0));
    assert_eq!(opts.marker_size, 15.0);
    assert_eq!(opts.control_point_capacity, 256);
    assert_eq!(opts.sample_step_default, 0.05);
    assert_eq!(opts.backend, RenderBackend::Cpu);
    assert_eq!(opts.hit_shape, HitShape::Square);
    assert_eq!(opts.background_color, Rgba(0x353535FF));
}

#[test]
fn toml_round_trip_keeps_all_fields() {
    let opts = EditorOptions {
        backend: RenderBackend::Gpu,
        axis_orientation: AxisOrientation::BottomLeft,
        hit_shape: HitShape::Radius,
        control_point_capacity: 3,
        initial_control_points: vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 200.0),
            Vec2::new(300.0, 300.0),
        ],
        ..EditorOptions::default()
    };

    let text = toml::to_string_pretty(&opts).expect("Serialisierung sollte gelingen");
    let parsed = EditorOptions::from_toml_str(&text).expect("Parsen sollte gelingen");
    assert_eq!(parsed, opts);
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let parsed = EditorOptions::from_toml_str("marker_size = 20.0\nbackend = \"gpu\"\n")
        .expect("Teil-Datei sollte geparst werden");
    assert_eq!(parsed.marker_size, 20.0);
    assert_eq!(parsed.backend, RenderBackend::Gpu);
    assert_eq!(parsed.sample_step_default, SAMPLE_STEP_DEFAULT);
}

#[test]
fn gpu_backend_caps_capacity_to_uniform_array() {
    let parsed = EditorOptions::from_toml_str("backend = \"gpu\"\ncontrol_point_capacity = 100\n")
        .expect("Parsen sollte gelingen");
    assert_eq!(parsed.control_point_capacity, MAX_GPU_CONTROL_POINTS);
}

#[test]
fn inconsistent_step_bounds_are_repaired() {
    let parsed = EditorOptions::from_toml_str(
        "sample_step_min = -1.0\nsample_step_max = 3.0\nsample_step_default = 2.0\n",
    )
    .expect("Parsen sollte gelingen");
    assert!(parsed.sample_step_min > 0.0);
    assert_eq!(parsed.sample_step_max, 1.0);
    assert_eq!(parsed.sample_step_default, 1.0);
}

#[test]
fn invalid_toml_is_an_error() {
    let parsed = EditorOptions::from_toml_str("marker_size = \"gross\"");
    assert!(parsed.is_err());
}

#[test]
fn load_from_missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("bezier_curve_editor_missing_options.toml");
    let _ = std::fs::remove_file(&path);
    let loaded = EditorOptions::load_from_file(&path);
    assert_eq!(loaded, EditorOptions::default());
}

#[test]
fn save_then_load_from_file() {
    let path = std::env::temp_dir().join(format!(
        "bezier_curve_editor_options_{}.toml",
        std::process::id()
    ));
    let opts = EditorOptions {
        target_fps: 30.0,
        curve_color: Rgba(0x00FF00FF),
        ..EditorOptions::default()
    };
    opts.save_to_file(&path).expect("Speichern sollte gelingen");
    let loaded = EditorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, opts);
    assert_eq!(
        loaded.frame_interval(),
        std::time::Duration::from_secs_f32(1.0 / 30.0)
    );
}

#[test]
fn nan_step_bounds_fall_back_to_defaults() {
    let parsed = EditorOptions::from_toml_str(
        "sample_step_min = nan\nsample_step_max = nan\nsample_step_default = nan\n",
    )
    .expect("Parsen sollte gelingen");
    assert_eq!(parsed.sample_step_min, SAMPLE_STEP_MIN);
    assert_eq!(parsed.sample_step_max, SAMPLE_STEP_MAX);
    assert_eq!(parsed.sample_step_default, SAMPLE_STEP_DEFAULT);
}

#[test]
fn infinite_step_max_falls_back_to_default() {
    let parsed =
        EditorOptions::from_toml_str("sample_step_max = inf\n").expect("Parsen sollte gelingen");
    assert_eq!(parsed.sample_step_max, SAMPLE_STEP_MAX);
}

#[test]
fn invalid_increments_fall_back_to_defaults() {
    let parsed = EditorOptions::from_toml_str(
        "sample_step_increment = -0.01\ncurve_threshold_increment = nan\n",
    )
    .expect("Parsen sollte gelingen");
    assert_eq!(parsed.sample_step_increment, SAMPLE_STEP_INCREMENT);
    assert_eq!(parsed.curve_threshold_increment, CURVE_THRESHOLD_INCREMENT);
}

#[test]
fn non_finite_threshold_values_fall_back_to_defaults() {
    let parsed = EditorOptions::from_toml_str(
        "curve_threshold_max = nan\ncurve_threshold_default = -inf\n",
    )
    .expect("Parsen sollte gelingen");
    assert_eq!(parsed.curve_threshold_max, CURVE_THRESHOLD_MAX);
    assert_eq!(parsed.curve_threshold_default, CURVE_THRESHOLD_DEFAULT);
}

#[test]
fn tiny_target_fps_is_clamped_and_frame_interval_stays_finite() {
    let parsed =
        EditorOptions::from_toml_str("target_fps = 1e-30\n").expect("Parsen sollte gelingen");
    assert_eq!(parsed.target_fps, TARGET_FPS_RANGE.0);
    assert_eq!(parsed.frame_interval(), std::time::Duration::from_secs(1));
}

#[test]
fn huge_or_nan_target_fps_is_repaired() {
    let huge =
        EditorOptions::from_toml_str("target_fps = 1e9\n").expect("Parsen sollte gelingen");
    assert_eq!(huge.target_fps, TARGET_FPS_RANGE.1);

    let nan = EditorOptions::from_toml_str("target_fps = nan\n").expect("Parsen sollte gelingen");
    assert_eq!(nan.target_fps, TARGET_FPS);
}

#[test]
fn frame_interval_of_unsanitized_options_does_not_panic() {
    let opts = EditorOptions {
        target_fps: 1e-30,
        ..EditorOptions::default()
    };
    assert_eq!(opts.frame_interval(), std::time::Duration::from_secs(1));
}

#[test]
fn non_positive_canvas_size_falls_back_to_defaults() {
    let parsed = EditorOptions::from_toml_str("canvas_width = 0.0\ncanvas_height = nan\n")
        .expect("Parsen sollte gelingen");
    assert_eq!(parsed.canvas_size(), Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT));
}
