use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A bullet hole tapped on the photo, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelShot {
    /// Tap position in image pixels (origin top-left, y grows downward).
    pub pixel: Point2<f64>,
    /// 1-based tap order. Always the contiguous range `1..=count` in list
    /// order; removals renumber the survivors.
    pub sequence: u32,
}

impl PixelShot {
    pub fn new(x: f64, y: f64, sequence: u32) -> Self {
        Self {
            pixel: Point2::new(x, y),
            sequence,
        }
    }
}

/// A shot expressed in inches relative to the point of aim.
///
/// Positive `x_in` is right of the POA, positive `y_in` is above it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InchShot {
    pub x_in: f64,
    pub y_in: f64,
    /// Tap order carried over from the source [`PixelShot`].
    pub sequence: u32,
}

impl InchShot {
    pub fn new(x_in: f64, y_in: f64, sequence: u32) -> Self {
        Self { x_in, y_in, sequence }
    }

    /// Euclidean distance to another inch-space point.
    pub fn distance_to(&self, x_in: f64, y_in: f64) -> f64 {
        let dx = self.x_in - x_in;
        let dy = self.y_in - y_in;
        (dx * dx + dy * dy).sqrt()
    }
}
