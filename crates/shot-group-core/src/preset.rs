//! Catalog of paper-target presets with documented real-world dimensions.
//!
//! A preset contributes exactly one number to the pipeline: the known
//! physical size of some printed feature (bull diameter, scoring-zone
//! width, sheet width). The UI renders the template over the photo, the
//! user scales it to match, and the final rendered pixel size together
//! with `known_dimension_inches` yields the pixels-per-inch scale.

use serde::{Deserialize, Serialize};

/// One catalog target template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetPreset {
    /// Stable catalog identifier, e.g. `"nra-b8"`.
    pub id: String,
    /// Human-readable name for pickers.
    pub name: String,
    /// Real-world size of the calibration reference feature, in inches.
    pub known_dimension_inches: f64,
    /// Which printed feature `known_dimension_inches` measures.
    pub description: String,
}

impl TargetPreset {
    pub fn new(id: &str, name: &str, known_dimension_inches: f64, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            known_dimension_inches,
            description: description.to_string(),
        }
    }
}

/// A read-only set of presets, looked up by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PresetCatalog {
    presets: Vec<TargetPreset>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<TargetPreset>) -> Self {
        Self { presets }
    }

    /// Catalog of the builtin presets.
    pub fn builtin() -> Self {
        Self::new(builtin_presets())
    }

    pub fn get(&self, id: &str) -> Option<&TargetPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetPreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Builtin target templates shipped with the crate.
pub fn builtin_presets() -> Vec<TargetPreset> {
    vec![
        TargetPreset::new(
            "nra-b8",
            "NRA B-8 (25 yd)",
            5.5,
            "Black bull diameter of the 25-yard timed/rapid-fire pistol target",
        ),
        TargetPreset::new(
            "uspsa-metric",
            "USPSA Metric",
            5.906,
            "A-zone width of the standard USPSA cardboard target",
        ),
        TargetPreset::new(
            "splatter-8",
            "8\" Splatter Bull",
            8.0,
            "Outer diameter of a common 8-inch adhesive splatter bull",
        ),
        TargetPreset::new(
            "letter-sheet",
            "Letter Sheet",
            8.5,
            "Short edge of a US-letter printer sheet used as an improvised target",
        ),
    ]
}

/// Look up a builtin preset by id.
pub fn builtin_preset(id: &str) -> Option<TargetPreset> {
    builtin_presets().into_iter().find(|p| p.id == id)
}
