/// Tuning for the tap/pan race.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Distance the pointer must travel from its down point before a pan activates.
    pub pan_min_distance: f32,
    /// Longest press that still counts as a tap.
    pub tap_max_duration_ms: u64,
}

impl GestureConfig {
    pub const DEFAULT_PAN_MIN_DISTANCE: f32 = 4.0;
    pub const DEFAULT_TAP_MAX_DURATION_MS: u64 = 500;

    pub fn new() -> Self {
        Self {
            pan_min_distance: Self::DEFAULT_PAN_MIN_DISTANCE,
            tap_max_duration_ms: Self::DEFAULT_TAP_MAX_DURATION_MS,
        }
    }

    pub fn with_pan_min_distance(mut self, distance: f32) -> Self {
        self.pan_min_distance = distance;
        self
    }

    pub fn with_tap_max_duration_ms(mut self, duration_ms: u64) -> Self {
        self.tap_max_duration_ms = duration_ms;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new()
    }
}
