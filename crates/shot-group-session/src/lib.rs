//! Ordered capture workflow for measuring a shot group from a photo.
//!
//! [`CaptureSession`] walks the UI driver through calibrate → set point of
//! aim → mark shots → review, holding the working data and refusing
//! operations whose prerequisites have not been met. Once the user confirms,
//! [`assemble`] folds the accumulated state into an immutable
//! [`CapturedTarget`] for the persistence layer; the photo itself never
//! enters this crate.

mod assemble;
mod mode;
mod session;

pub use assemble::{assemble, CalibrationKind, CapturedTarget};
pub use mode::CaptureMode;
pub use session::{Calibration, CaptureSession, DEFAULT_DISTANCE_YARDS};
