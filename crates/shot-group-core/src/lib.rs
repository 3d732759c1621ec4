//! Core math for measuring shot groups on photographed paper targets.
//!
//! This crate is intentionally small and purely computational. It does *not*
//! decode images, touch storage, or drive any UI: callers hand it pixel
//! coordinates tapped on a photo plus a real-world calibration reference, and
//! it produces inch-space shot positions and group statistics.

mod calibration;
mod logger;
mod metrics;
mod preset;
mod shot;
mod transform;

pub use calibration::{
    is_reasonable_scale, pixel_distance, scale_from_custom, scale_from_preset,
    suggested_render_px, CalibrationError, DEFAULT_PRESET_FILL_FRAC, MAX_REASONABLE_PPI,
    MIN_REASONABLE_PPI,
};
pub use metrics::{
    compute_group_metrics, extreme_spread, group_center, inches_to_moa, mean_radius,
    moa_to_inches, GroupMetrics, MOA_INCHES_PER_100YD,
};
pub use preset::{builtin_preset, builtin_presets, PresetCatalog, TargetPreset};
pub use shot::{InchShot, PixelShot};
pub use transform::{convert_shots, pixel_to_inch};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
