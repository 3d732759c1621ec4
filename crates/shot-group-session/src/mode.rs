use serde::{Deserialize, Serialize};

/// Stage of the capture workflow.
///
/// Stages are strictly ordered; each is reachable only after the previous
/// one has produced its data. There is no dedicated terminal state: after a
/// confirmed `Review` is assembled, or on cancel from anywhere, the caller
/// resets the session back to `Idle`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// No capture in progress.
    #[default]
    Idle,
    /// Image selected; waiting for a pixels-per-inch calibration.
    Calibrating,
    /// Calibrated; waiting for the point-of-aim tap.
    SettingPoa,
    /// POA set; shot taps are being collected and edited.
    MarkingShots,
    /// Working set frozen for display; shot edits are refused.
    Review,
}
