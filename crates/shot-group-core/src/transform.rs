//! Pixel space to inch space, the single place where the two meet.
//!
//! Pixel coordinates follow screen conventions (origin top-left, y grows
//! downward). Inch coordinates are POA-relative ballistic coordinates
//! (positive x right of the point of aim, positive y above it), so the
//! vertical axis flips during conversion.

use nalgebra::Point2;

use crate::calibration::CalibrationError;
use crate::shot::{InchShot, PixelShot};

/// Convert one pixel position into POA-relative inches.
pub fn pixel_to_inch(
    pixel: Point2<f64>,
    poa_pixel: Point2<f64>,
    pixels_per_inch: f64,
) -> Result<(f64, f64), CalibrationError> {
    if !pixels_per_inch.is_finite() || pixels_per_inch <= 0.0 {
        return Err(CalibrationError::NonPositiveScale(pixels_per_inch));
    }
    let x_in = (pixel.x - poa_pixel.x) / pixels_per_inch;
    // Screen y grows downward; ballistic y grows upward.
    let y_in = (poa_pixel.y - pixel.y) / pixels_per_inch;
    Ok((x_in, y_in))
}

/// Convert every shot in tap order, carrying sequence numbers through.
pub fn convert_shots(
    shots: &[PixelShot],
    poa_pixel: Point2<f64>,
    pixels_per_inch: f64,
) -> Result<Vec<InchShot>, CalibrationError> {
    shots
        .iter()
        .map(|shot| {
            let (x_in, y_in) = pixel_to_inch(shot.pixel, poa_pixel, pixels_per_inch)?;
            Ok(InchShot::new(x_in, y_in, shot.sequence))
        })
        .collect()
}
