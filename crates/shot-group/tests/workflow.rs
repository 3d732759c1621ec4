use approx::assert_relative_eq;
use nalgebra::Point2;

use shot_group::replay::{replay, CaptureScript, ScriptCalibration};
use shot_group::{assemble, builtin_preset, CaptureMode, CaptureSession, PresetCatalog};

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

/// The full interactive flow: select → calibrate on the B-8 bull → aim →
/// two mirrored shots → review → assemble. Numbers chosen so every
/// intermediate value is exact.
#[test]
fn preset_capture_end_to_end() {
    let mut session = CaptureSession::new();
    assert!(session.begin_capture(800, 800));

    let preset = builtin_preset("nra-b8").expect("builtin preset");
    assert_eq!(session.apply_preset_calibration(&preset, 330.0), Ok(true));
    assert_relative_eq!(session.calibration().unwrap().pixels_per_inch(), 60.0);

    assert!(session.set_distance_yards(25.0));
    assert!(session.set_poa(p(400.0, 400.0)));
    assert!(session.add_shot(p(430.0, 370.0)));
    assert!(session.add_shot(p(370.0, 430.0)));
    assert!(session.confirm_shots());
    assert_eq!(session.mode(), CaptureMode::Review);

    let target = assemble(&session).expect("assemble");
    session.cancel();

    assert_eq!(target.target_type, "nra-b8");
    assert_eq!(target.shots.len(), 2);
    assert_relative_eq!(target.shots[0].x_in, 0.5);
    assert_relative_eq!(target.shots[0].y_in, 0.5);
    assert_relative_eq!(target.shots[1].x_in, -0.5);
    assert_relative_eq!(target.shots[1].y_in, -0.5);

    let m = &target.metrics;
    assert_relative_eq!(m.center_x_in, 0.0);
    assert_relative_eq!(m.center_y_in, 0.0);
    assert_relative_eq!(m.extreme_spread_in, 2.0f64.sqrt(), max_relative = 1e-12);
    assert_relative_eq!(m.mean_radius_in, 2.0f64.sqrt() / 2.0, max_relative = 1e-12);
    assert_relative_eq!(m.group_size_moa, 5.4029, max_relative = 1e-4);

    assert_eq!(session.mode(), CaptureMode::Idle);
    assert!(session.shots().is_empty());
}

#[test]
fn custom_capture_end_to_end() {
    let mut session = CaptureSession::new();
    session.begin_capture(1200, 900);

    // 100 px reference line stated as 2 in -> 50 px/in.
    assert!(session.set_reference_point(p(100.0, 500.0)));
    assert!(session.set_reference_point(p(200.0, 500.0)));
    assert_eq!(session.apply_custom_calibration(2.0), Ok(true));

    session.set_distance_yards(50.0);
    session.set_poa(p(600.0, 450.0));
    session.add_shot(p(650.0, 450.0));
    session.add_shot(p(600.0, 400.0));
    session.add_shot(p(550.0, 450.0));
    session.confirm_shots();

    let target = assemble(&session).expect("assemble");
    assert_eq!(target.target_type, "custom");
    assert_eq!(target.custom_ref_inches, Some(2.0));

    // Shots at (1,0), (0,1), (-1,0): farthest pair spans 2 in.
    assert_relative_eq!(target.metrics.extreme_spread_in, 2.0, max_relative = 1e-12);
    assert_relative_eq!(target.metrics.center_x_in, 0.0, epsilon = 1e-12);
    assert_relative_eq!(
        target.metrics.center_y_in,
        1.0 / 3.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        target.metrics.group_size_moa,
        2.0 * 100.0 / (50.0 * 1.047),
        max_relative = 1e-12
    );
}

/// Editing shots mid-capture must keep sequence numbers contiguous and the
/// derived metrics in sync.
#[test]
fn shot_editing_keeps_session_consistent() {
    let mut session = CaptureSession::new();
    session.begin_capture(800, 800);
    let preset = builtin_preset("nra-b8").expect("builtin preset");
    session.apply_preset_calibration(&preset, 330.0).unwrap();
    session.set_poa(p(400.0, 400.0));

    session.add_shot(p(410.0, 390.0));
    session.add_shot(p(420.0, 380.0));
    session.add_shot(p(430.0, 370.0));

    assert!(session.remove_shot(1));
    let seqs: Vec<u32> = session.shots().iter().map(|s| s.sequence).collect();
    assert_eq!(seqs, vec![1, 2]);

    assert!(session.undo_last_shot());
    assert_eq!(session.shots().len(), 1);

    let m = session.preview_metrics().expect("metrics");
    assert_eq!(m.shot_count, 1);
    assert_eq!(m.extreme_spread_in, 0.0);
}

#[test]
fn replay_matches_interactive_flow() {
    let script = CaptureScript {
        image_width: 800,
        image_height: 800,
        distance_yards: 25.0,
        calibration: ScriptCalibration::Preset {
            preset_id: "nra-b8".into(),
            rendered_px: 330.0,
        },
        poa: [400.0, 400.0],
        shots: vec![[430.0, 370.0], [370.0, 430.0]],
        firearm_id: Some("g34".into()),
        ammo_id: None,
        notes: None,
    };

    let replayed = replay(&script, &PresetCatalog::builtin()).expect("replay");

    let mut session = CaptureSession::new();
    session.begin_capture(800, 800);
    let preset = builtin_preset("nra-b8").unwrap();
    session.apply_preset_calibration(&preset, 330.0).unwrap();
    session.set_distance_yards(25.0);
    session.set_poa(p(400.0, 400.0));
    session.add_shot(p(430.0, 370.0));
    session.add_shot(p(370.0, 430.0));
    session.confirm_shots();
    session.set_firearm_id(Some("g34".into()));
    let interactive = assemble(&session).expect("assemble");

    assert_eq!(replayed.shots, interactive.shots);
    assert_eq!(replayed.metrics, interactive.metrics);
    assert_eq!(replayed.firearm_id, interactive.firearm_id);
    assert_ne!(replayed.id, interactive.id);
}

/// A driver firing events out of order must never corrupt the session.
#[test]
fn out_of_order_events_are_inert() {
    let mut session = CaptureSession::new();

    assert!(!session.set_poa(p(1.0, 1.0)));
    assert!(!session.add_shot(p(1.0, 1.0)));
    assert!(!session.confirm_shots());
    assert!(assemble(&session).is_none());

    session.begin_capture(800, 800);
    assert!(!session.add_shot(p(1.0, 1.0)));
    assert!(!session.set_poa(p(1.0, 1.0)));
    assert_eq!(session.mode(), CaptureMode::Calibrating);
    assert!(session.shots().is_empty());
    assert!(session.poa_pixel().is_none());
}
