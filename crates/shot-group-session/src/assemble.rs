use std::sync::atomic::{AtomicU64, Ordering};

use log::info;
use serde::{Deserialize, Serialize};

use shot_group_core::{compute_group_metrics, convert_shots, GroupMetrics, InchShot};

use crate::session::{Calibration, CaptureSession};

/// Which calibration path produced the scale.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationKind {
    Preset,
    Custom,
}

/// Finished capture, ready for the persistence layer.
///
/// Immutable once assembled. Carries the converted shots and computed
/// metrics — never the photo. `id` is a process-local handle; durable
/// identifiers are assigned by whoever stores this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedTarget {
    pub id: u64,
    /// Preset id, or `"custom"` for a reference-line calibration.
    pub target_type: String,
    pub distance_yards: f64,
    pub calibration: CalibrationKind,
    /// Stated reference length, present only for custom calibrations.
    pub custom_ref_inches: Option<f64>,
    /// Shots in tap order, POA-relative inches.
    pub shots: Vec<InchShot>,
    pub metrics: GroupMetrics,
    pub firearm_id: Option<String>,
    pub ammo_id: Option<String>,
    pub notes: Option<String>,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_capture_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Package a session's accumulated state into a [`CapturedTarget`].
///
/// Returns `None` unless the session holds a positive scale, a POA, and at
/// least one shot. Never mutates the session; the caller resets it after a
/// successful handoff.
pub fn assemble(session: &CaptureSession) -> Option<CapturedTarget> {
    let calibration = session.calibration()?;
    let scale = calibration.pixels_per_inch();
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }
    let poa = session.poa_pixel()?;
    if session.shots().is_empty() {
        return None;
    }

    let shots = convert_shots(session.shots(), poa, scale).ok()?;
    let metrics = compute_group_metrics(&shots, session.distance_yards());

    let (target_type, kind, custom_ref_inches) = match calibration {
        Calibration::Preset { preset_id, .. } => {
            (preset_id.clone(), CalibrationKind::Preset, None)
        }
        Calibration::Custom { ref_inches, .. } => {
            ("custom".to_string(), CalibrationKind::Custom, Some(*ref_inches))
        }
    };

    let target = CapturedTarget {
        id: next_capture_id(),
        target_type,
        distance_yards: session.distance_yards(),
        calibration: kind,
        custom_ref_inches,
        shots,
        metrics,
        firearm_id: session.firearm_id().map(str::to_string),
        ammo_id: session.ammo_id().map(str::to_string),
        notes: session.notes().map(str::to_string),
    };
    info!(
        "assembled capture {}: {} shots, ES {:.3} in ({:.2} MOA) at {} yd",
        target.id,
        target.metrics.shot_count,
        target.metrics.extreme_spread_in,
        target.metrics.group_size_moa,
        target.distance_yards
    );
    Some(target)
}
