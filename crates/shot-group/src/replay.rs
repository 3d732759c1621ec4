//! Drive a whole capture session from a declarative tap script.
//!
//! A [`CaptureScript`] records what the UI driver would have done: image
//! dimensions, one calibration, a distance, the POA tap, and the shot taps.
//! [`replay`] feeds it through a fresh [`CaptureSession`] and returns the
//! assembled [`CapturedTarget`], exactly as the interactive flow would.

use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use shot_group_core::{CalibrationError, PresetCatalog};
use shot_group_session::{assemble, CaptureSession, CapturedTarget};

/// Calibration choice in a script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ScriptCalibration {
    /// Catalog preset and the pixel size the user confirmed for it.
    Preset { preset_id: String, rendered_px: f64 },
    /// Two reference taps and the stated physical distance between them.
    Custom {
        point1: [f64; 2],
        point2: [f64; 2],
        ref_inches: f64,
    },
}

/// One complete capture, as the UI driver would perform it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureScript {
    pub image_width: u32,
    pub image_height: u32,
    pub distance_yards: f64,
    pub calibration: ScriptCalibration,
    /// Point-of-aim tap, pixels.
    pub poa: [f64; 2],
    /// Shot taps in order, pixels.
    pub shots: Vec<[f64; 2]>,
    #[serde(default)]
    pub firearm_id: Option<String>,
    #[serde(default)]
    pub ammo_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Errors produced when replaying a script.
#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    #[error("malformed capture script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("invalid image dimensions ({width}x{height})")]
    InvalidImageDimensions { width: u32, height: u32 },

    #[error("unknown target preset `{0}`")]
    UnknownPreset(String),

    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    #[error("invalid distance ({0} yd)")]
    InvalidDistance(f64),

    #[error("script contains no shots")]
    NoShots,
}

/// Parse a script from JSON.
pub fn parse_script(json: &str) -> Result<CaptureScript, ReplayError> {
    Ok(serde_json::from_str(json)?)
}

fn point(xy: [f64; 2]) -> Point2<f64> {
    Point2::new(xy[0], xy[1])
}

/// Replay `script` through a fresh session and assemble the result.
///
/// Preset ids are resolved against `catalog`. The session-level defensive
/// no-ops cannot fire here (the script is applied in stage order), so every
/// rejection surfaces as a typed [`ReplayError`].
pub fn replay(
    script: &CaptureScript,
    catalog: &PresetCatalog,
) -> Result<CapturedTarget, ReplayError> {
    let mut session = CaptureSession::new();
    if !session.begin_capture(script.image_width, script.image_height) {
        return Err(ReplayError::InvalidImageDimensions {
            width: script.image_width,
            height: script.image_height,
        });
    }

    match &script.calibration {
        ScriptCalibration::Preset {
            preset_id,
            rendered_px,
        } => {
            let preset = catalog
                .get(preset_id)
                .ok_or_else(|| ReplayError::UnknownPreset(preset_id.clone()))?;
            session.apply_preset_calibration(preset, *rendered_px)?;
        }
        ScriptCalibration::Custom {
            point1,
            point2,
            ref_inches,
        } => {
            session.set_reference_point(point(*point1));
            session.set_reference_point(point(*point2));
            session.apply_custom_calibration(*ref_inches)?;
        }
    }

    if !session.set_distance_yards(script.distance_yards) {
        return Err(ReplayError::InvalidDistance(script.distance_yards));
    }

    session.set_poa(point(script.poa));
    for shot in &script.shots {
        session.add_shot(point(*shot));
    }
    if !session.confirm_shots() {
        return Err(ReplayError::NoShots);
    }

    session.set_firearm_id(script.firearm_id.clone());
    session.set_ammo_id(script.ammo_id.clone());
    session.set_notes(script.notes.clone());

    debug!(
        "replayed script: {} shots at {} yd",
        script.shots.len(),
        script.distance_yards
    );

    // Guards above ensure scale, POA, and shots all exist.
    assemble(&session).ok_or(ReplayError::NoShots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_shot_script() -> CaptureScript {
        CaptureScript {
            image_width: 800,
            image_height: 800,
            distance_yards: 25.0,
            calibration: ScriptCalibration::Preset {
                preset_id: "nra-b8".into(),
                rendered_px: 330.0,
            },
            poa: [400.0, 400.0],
            shots: vec![[430.0, 370.0], [370.0, 430.0]],
            firearm_id: None,
            ammo_id: None,
            notes: Some("replayed".into()),
        }
    }

    #[test]
    fn replays_preset_script() {
        let target = replay(&two_shot_script(), &PresetCatalog::builtin()).expect("replay");
        assert_eq!(target.target_type, "nra-b8");
        assert_eq!(target.metrics.shot_count, 2);
        assert_relative_eq!(
            target.metrics.extreme_spread_in,
            2.0f64.sqrt(),
            max_relative = 1e-12
        );
        assert_eq!(target.notes.as_deref(), Some("replayed"));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let mut script = two_shot_script();
        script.calibration = ScriptCalibration::Preset {
            preset_id: "no-such-target".into(),
            rendered_px: 330.0,
        };
        let err = replay(&script, &PresetCatalog::builtin()).unwrap_err();
        assert!(matches!(err, ReplayError::UnknownPreset(id) if id == "no-such-target"));
    }

    #[test]
    fn empty_shot_list_is_an_error() {
        let mut script = two_shot_script();
        script.shots.clear();
        assert!(matches!(
            replay(&script, &PresetCatalog::builtin()),
            Err(ReplayError::NoShots)
        ));
    }

    #[test]
    fn bad_calibration_input_surfaces() {
        let mut script = two_shot_script();
        script.calibration = ScriptCalibration::Preset {
            preset_id: "nra-b8".into(),
            rendered_px: -1.0,
        };
        assert!(matches!(
            replay(&script, &PresetCatalog::builtin()),
            Err(ReplayError::Calibration(_))
        ));
    }

    #[test]
    fn script_round_trips_through_json() {
        let script = two_shot_script();
        let json = serde_json::to_string(&script).expect("serialize");
        let back = parse_script(&json).expect("parse");
        assert_eq!(back, script);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_script("{\"image_width\": 800}"),
            Err(ReplayError::Script(_))
        ));
    }
}
