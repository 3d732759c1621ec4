//! Pixels-per-inch calibration from a known real-world reference.
//!
//! Two paths produce a scale:
//! - **preset**: the user scales a catalog template over the photo until it
//!   matches the printed target; the final rendered pixel size of the
//!   template's known feature divided by that feature's physical size gives
//!   pixels per inch.
//! - **custom**: the user taps two points a known physical distance apart;
//!   the pixel distance between them divided by the stated length gives the
//!   same ratio.

use nalgebra::Point2;

use crate::preset::TargetPreset;

/// Errors returned by the calibration engine.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum CalibrationError {
    #[error("non-positive pixel measurement ({0})")]
    NonPositivePixels(f64),
    #[error("non-positive real-world reference length ({0} in)")]
    NonPositiveReference(f64),
    #[error("non-positive pixels-per-inch scale ({0})")]
    NonPositiveScale(f64),
}

/// Advisory lower bound for a plausible scale. Below this the template is
/// almost certainly mis-fitted (a 5 px/in photo of a pistol target would be
/// a thumbnail).
pub const MIN_REASONABLE_PPI: f64 = 5.0;

/// Advisory upper bound for a plausible scale.
pub const MAX_REASONABLE_PPI: f64 = 500.0;

/// Default fraction of the image's shorter dimension a preset template is
/// assumed to fill when first shown, before the user adjusts it.
pub const DEFAULT_PRESET_FILL_FRAC: f64 = 0.60;

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Derive pixels-per-inch from a preset's known dimension and the pixel size
/// it was rendered at after user adjustment.
pub fn scale_from_preset(
    preset: &TargetPreset,
    rendered_px: f64,
) -> Result<f64, CalibrationError> {
    if !positive(preset.known_dimension_inches) {
        return Err(CalibrationError::NonPositiveReference(
            preset.known_dimension_inches,
        ));
    }
    scale_from_custom(rendered_px, preset.known_dimension_inches)
}

/// Derive pixels-per-inch from a measured pixel span and its stated physical
/// length.
pub fn scale_from_custom(measured_px: f64, known_inches: f64) -> Result<f64, CalibrationError> {
    if !positive(measured_px) {
        return Err(CalibrationError::NonPositivePixels(measured_px));
    }
    if !positive(known_inches) {
        return Err(CalibrationError::NonPositiveReference(known_inches));
    }
    Ok(measured_px / known_inches)
}

/// Euclidean distance between two pixel positions. Zero for coincident
/// points; never fails.
pub fn pixel_distance(a: Point2<f64>, b: Point2<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Whether a scale falls inside the plausible band
/// [`MIN_REASONABLE_PPI`]..=[`MAX_REASONABLE_PPI`].
///
/// Advisory only: the caller may warn the user but must not silently reject
/// a confirmed calibration on this basis.
pub fn is_reasonable_scale(pixels_per_inch: f64) -> bool {
    pixels_per_inch.is_finite()
        && (MIN_REASONABLE_PPI..=MAX_REASONABLE_PPI).contains(&pixels_per_inch)
}

/// Suggested initial rendered size, in pixels, for a preset template shown
/// over an image of the given dimensions.
///
/// `fill_frac` is the fraction of the shorter image dimension the template
/// should occupy; pass [`DEFAULT_PRESET_FILL_FRAC`] for the stock behavior.
pub fn suggested_render_px(image_width: u32, image_height: u32, fill_frac: f64) -> f64 {
    f64::from(image_width.min(image_height)) * fill_frac
}
