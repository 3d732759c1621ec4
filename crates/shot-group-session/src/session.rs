use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use shot_group_core::{
    compute_group_metrics, convert_shots, pixel_distance, scale_from_custom, scale_from_preset,
    CalibrationError, GroupMetrics, InchShot, PixelShot, TargetPreset,
};

use crate::mode::CaptureMode;

/// Distance assumed when a capture begins, until the user sets one.
pub const DEFAULT_DISTANCE_YARDS: f64 = 25.0;

/// How the pixels-per-inch scale was established.
///
/// A sum type rather than a flat record: each variant carries only the
/// fields that exist for that calibration path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Calibration {
    /// Catalog template scaled over the photo.
    Preset { preset_id: String, pixels_per_inch: f64 },
    /// Two tapped reference points a stated physical distance apart.
    Custom {
        point1: Point2<f64>,
        point2: Point2<f64>,
        ref_inches: f64,
        pixels_per_inch: f64,
    },
}

impl Calibration {
    pub fn pixels_per_inch(&self) -> f64 {
        match self {
            Calibration::Preset { pixels_per_inch, .. } => *pixels_per_inch,
            Calibration::Custom { pixels_per_inch, .. } => *pixels_per_inch,
        }
    }
}

/// One in-flight capture: the working data behind the calibrate → POA →
/// mark-shots → review workflow.
///
/// Exactly one session is live per user context. Transition methods check
/// their stage preconditions first; a call made in the wrong stage is a
/// logged no-op (`false` / `Ok(false)`) and never corrupts held state.
/// Starting a new capture with [`begin_capture`](Self::begin_capture)
/// discards whatever an unconfirmed previous capture had accumulated.
#[derive(Clone, Debug, Default)]
pub struct CaptureSession {
    mode: CaptureMode,
    image_width: u32,
    image_height: u32,
    distance_yards: f64,
    calibration: Option<Calibration>,
    /// Working reference taps for custom calibration, only meaningful while
    /// `Calibrating`.
    ref_point1: Option<Point2<f64>>,
    ref_point2: Option<Point2<f64>>,
    poa_pixel: Option<Point2<f64>>,
    shots: Vec<PixelShot>,
    firearm_id: Option<String>,
    ammo_id: Option<String>,
    notes: Option<String>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a capture for a freshly selected image of the given decoded
    /// pixel dimensions. Any prior unconfirmed capture is discarded.
    ///
    /// Returns `false` (and stays `Idle`) for degenerate dimensions.
    pub fn begin_capture(&mut self, image_width: u32, image_height: u32) -> bool {
        if image_width == 0 || image_height == 0 {
            debug!("begin_capture ignored: degenerate image {image_width}x{image_height}");
            return false;
        }
        *self = Self {
            mode: CaptureMode::Calibrating,
            image_width,
            image_height,
            distance_yards: DEFAULT_DISTANCE_YARDS,
            ..Self::default()
        };
        true
    }

    /// Calibrate from a catalog preset rendered at `rendered_px` pixels.
    ///
    /// `Ok(true)` stores the scale and advances to `SettingPoa`; `Ok(false)`
    /// means the session was not in `Calibrating` and nothing changed; `Err`
    /// reports invalid input, leaving the session in `Calibrating`.
    pub fn apply_preset_calibration(
        &mut self,
        preset: &TargetPreset,
        rendered_px: f64,
    ) -> Result<bool, CalibrationError> {
        if self.mode != CaptureMode::Calibrating {
            debug!("preset calibration ignored in mode {:?}", self.mode);
            return Ok(false);
        }
        let pixels_per_inch = scale_from_preset(preset, rendered_px)?;
        self.calibration = Some(Calibration::Preset {
            preset_id: preset.id.clone(),
            pixels_per_inch,
        });
        self.ref_point1 = None;
        self.ref_point2 = None;
        self.mode = CaptureMode::SettingPoa;
        Ok(true)
    }

    /// Record one end of the custom reference line.
    ///
    /// The first tap sets point 1, the second point 2; a third tap starts
    /// the line over. Only meaningful while `Calibrating`.
    pub fn set_reference_point(&mut self, point: Point2<f64>) -> bool {
        if self.mode != CaptureMode::Calibrating {
            debug!("reference tap ignored in mode {:?}", self.mode);
            return false;
        }
        match (self.ref_point1, self.ref_point2) {
            (None, _) => self.ref_point1 = Some(point),
            (Some(_), None) => self.ref_point2 = Some(point),
            (Some(_), Some(_)) => {
                self.ref_point1 = Some(point);
                self.ref_point2 = None;
            }
        }
        true
    }

    /// Current custom-reference taps, if any.
    pub fn reference_points(&self) -> (Option<Point2<f64>>, Option<Point2<f64>>) {
        (self.ref_point1, self.ref_point2)
    }

    /// Calibrate from the two tapped reference points and their stated
    /// physical length.
    ///
    /// `Ok(false)` when not `Calibrating` or fewer than two reference taps
    /// exist. Coincident taps surface as an invalid pixel measurement.
    pub fn apply_custom_calibration(
        &mut self,
        ref_inches: f64,
    ) -> Result<bool, CalibrationError> {
        if self.mode != CaptureMode::Calibrating {
            debug!("custom calibration ignored in mode {:?}", self.mode);
            return Ok(false);
        }
        let (Some(p1), Some(p2)) = (self.ref_point1, self.ref_point2) else {
            debug!("custom calibration ignored: reference line incomplete");
            return Ok(false);
        };
        let measured_px = pixel_distance(p1, p2);
        let pixels_per_inch = scale_from_custom(measured_px, ref_inches)?;
        self.calibration = Some(Calibration::Custom {
            point1: p1,
            point2: p2,
            ref_inches,
            pixels_per_inch,
        });
        self.mode = CaptureMode::SettingPoa;
        Ok(true)
    }

    /// Set the firing distance. Accepted in any active stage; rejected when
    /// `Idle` or non-positive.
    pub fn set_distance_yards(&mut self, distance_yards: f64) -> bool {
        if self.mode == CaptureMode::Idle {
            debug!("distance ignored: no capture in progress");
            return false;
        }
        if !distance_yards.is_finite() || distance_yards <= 0.0 {
            debug!("distance ignored: non-positive ({distance_yards})");
            return false;
        }
        self.distance_yards = distance_yards;
        true
    }

    /// Tap the point of aim. Advances `SettingPoa` → `MarkingShots`; this is
    /// the only way `poa_pixel` becomes set.
    pub fn set_poa(&mut self, point: Point2<f64>) -> bool {
        if self.mode != CaptureMode::SettingPoa {
            debug!("POA tap ignored in mode {:?}", self.mode);
            return false;
        }
        self.poa_pixel = Some(point);
        self.mode = CaptureMode::MarkingShots;
        true
    }

    /// Tap a bullet hole. Appends a shot with the next sequence number;
    /// ignored outside `MarkingShots`.
    pub fn add_shot(&mut self, point: Point2<f64>) -> bool {
        if self.mode != CaptureMode::MarkingShots {
            debug!("shot tap ignored in mode {:?}", self.mode);
            return false;
        }
        let sequence = self.shots.len() as u32 + 1;
        self.shots.push(PixelShot::new(point.x, point.y, sequence));
        true
    }

    /// Remove the shot at `index` and renumber the survivors so sequence
    /// numbers stay the contiguous range `1..=count` in list order.
    pub fn remove_shot(&mut self, index: usize) -> bool {
        if self.mode != CaptureMode::MarkingShots {
            debug!("shot removal ignored in mode {:?}", self.mode);
            return false;
        }
        if index >= self.shots.len() {
            debug!("shot removal ignored: index {index} out of range");
            return false;
        }
        self.shots.remove(index);
        for (i, shot) in self.shots.iter_mut().enumerate() {
            shot.sequence = i as u32 + 1;
        }
        true
    }

    /// Remove the most recently tapped shot, if any.
    pub fn undo_last_shot(&mut self) -> bool {
        if self.mode != CaptureMode::MarkingShots || self.shots.is_empty() {
            return false;
        }
        self.remove_shot(self.shots.len() - 1)
    }

    /// Step back one stage.
    ///
    /// - `Review` → `MarkingShots`, unfreezing the working set.
    /// - `MarkingShots` with shots present → `SettingPoa`; shots are kept
    ///   and a new POA tap overwrites the old one, which changes every
    ///   later inch conversion.
    /// - Anything else active → discard the session entirely (`Idle`).
    pub fn go_back(&mut self) -> bool {
        match self.mode {
            CaptureMode::Idle => false,
            CaptureMode::Review => {
                self.mode = CaptureMode::MarkingShots;
                true
            }
            CaptureMode::MarkingShots if !self.shots.is_empty() => {
                self.mode = CaptureMode::SettingPoa;
                true
            }
            _ => {
                self.cancel();
                true
            }
        }
    }

    /// Freeze the working set for review. Requires at least one shot.
    pub fn confirm_shots(&mut self) -> bool {
        if self.mode != CaptureMode::MarkingShots || self.shots.is_empty() {
            debug!("confirm ignored: mode {:?}, {} shots", self.mode, self.shots.len());
            return false;
        }
        self.mode = CaptureMode::Review;
        true
    }

    /// Discard everything and return to `Idle`. Total and immediate; nothing
    /// was persisted at any point.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn set_firearm_id(&mut self, firearm_id: Option<String>) {
        self.firearm_id = firearm_id;
    }

    pub fn set_ammo_id(&mut self, ammo_id: Option<String>) {
        self.ammo_id = ammo_id;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    #[inline]
    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Decoded pixel dimensions of the selected image, `None` when `Idle`.
    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        (self.mode != CaptureMode::Idle).then_some((self.image_width, self.image_height))
    }

    #[inline]
    pub fn distance_yards(&self) -> f64 {
        self.distance_yards
    }

    #[inline]
    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    #[inline]
    pub fn poa_pixel(&self) -> Option<Point2<f64>> {
        self.poa_pixel
    }

    #[inline]
    pub fn shots(&self) -> &[PixelShot] {
        &self.shots
    }

    #[inline]
    pub fn firearm_id(&self) -> Option<&str> {
        self.firearm_id.as_deref()
    }

    #[inline]
    pub fn ammo_id(&self) -> Option<&str> {
        self.ammo_id.as_deref()
    }

    #[inline]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Current shots converted to POA-relative inches, or `None` until both
    /// calibration and POA exist. Always derived from the live tap list, so
    /// a re-tapped POA is reflected on the next call.
    pub fn inch_shots(&self) -> Option<Vec<InchShot>> {
        let scale = self.calibration.as_ref()?.pixels_per_inch();
        let poa = self.poa_pixel?;
        convert_shots(&self.shots, poa, scale).ok()
    }

    /// Metrics over the current working set, recomputed on demand.
    pub fn preview_metrics(&self) -> Option<GroupMetrics> {
        let shots = self.inch_shots()?;
        Some(compute_group_metrics(&shots, self.distance_yards))
    }
}
