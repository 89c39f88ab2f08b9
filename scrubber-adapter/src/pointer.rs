#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer sample reported by the host UI.
///
/// `x`/`y` are relative to the scrubber container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub now_ms: u64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32, now_ms: u64) -> Self {
        Self {
            phase,
            x,
            y,
            now_ms,
        }
    }

    pub fn down(x: f32, y: f32, now_ms: u64) -> Self {
        Self::new(PointerPhase::Down, x, y, now_ms)
    }

    pub fn moved(x: f32, y: f32, now_ms: u64) -> Self {
        Self::new(PointerPhase::Move, x, y, now_ms)
    }

    pub fn up(x: f32, y: f32, now_ms: u64) -> Self {
        Self::new(PointerPhase::Up, x, y, now_ms)
    }

    /// A cancellation carries no meaningful position.
    pub fn cancel(now_ms: u64) -> Self {
        Self::new(PointerPhase::Cancel, 0.0, 0.0, now_ms)
    }
}

/// Lifecycle of a single recognizer within one pointer sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecognizerState {
    /// Not tracking a pointer.
    #[default]
    Idle,
    /// Tracking a pointer, not yet recognized.
    Began,
    /// Recognized; owns the pointer sequence.
    Active,
    /// Gave up on the current sequence; ignores events until the next `Down`.
    Failed,
}

impl RecognizerState {
    /// `true` once the recognizer has started tracking the current sequence (and has not been
    /// reset).
    pub fn has_begun(self) -> bool {
        !matches!(self, Self::Idle)
    }
}
