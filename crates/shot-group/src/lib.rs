//! High-level facade crate for the `shot-group-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying engine crates
//! - a replay helper that drives a whole capture session from a declarative
//!   tap script, for test rigs and the bundled CLI
//!
//! ## Quickstart
//!
//! ```
//! use nalgebra::Point2;
//! use shot_group::session::{assemble, CaptureSession};
//! use shot_group::core::builtin_preset;
//!
//! let mut session = CaptureSession::new();
//! session.begin_capture(800, 800);
//!
//! let preset = builtin_preset("nra-b8").unwrap();
//! session.apply_preset_calibration(&preset, 330.0).unwrap();
//!
//! session.set_poa(Point2::new(400.0, 400.0));
//! session.add_shot(Point2::new(430.0, 370.0));
//! session.add_shot(Point2::new(370.0, 430.0));
//! session.confirm_shots();
//!
//! let target = assemble(&session).unwrap();
//! println!("extreme spread: {:.2} in", target.metrics.extreme_spread_in);
//! session.cancel();
//! ```
//!
//! ## API map
//! - [`core`]: presets, calibration math, pixel→inch transform, group
//!   statistics.
//! - [`session`]: the capture workflow state machine and target assembly.
//! - [`replay`]: run a serialized [`replay::CaptureScript`] end to end.

pub use shot_group_core as core;
pub use shot_group_session as session;

pub use shot_group_core::{
    builtin_preset, builtin_presets, CalibrationError, GroupMetrics, InchShot, PixelShot,
    PresetCatalog, TargetPreset,
};
pub use shot_group_session::{
    assemble, Calibration, CalibrationKind, CaptureMode, CaptureSession, CapturedTarget,
};

pub mod replay;
