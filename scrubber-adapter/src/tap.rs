use scrubber::{HitSlop, Layout};

use crate::{PointerEvent, PointerPhase, RecognizerState};

/// A discrete tap recognizer: fires once on release.
///
/// A tap is possible when the pointer goes down inside the container extended by the hit
/// slop. It fails when the pointer leaves that region, when the press outlasts
/// `max_duration_ms`, or when another recognizer wins the sequence (`cancel`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tap {
    state: RecognizerState,
    down_ms: u64,
}

impl Tap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    /// Feeds a pointer sample. Returns the release `y` when the tap fires.
    pub fn on_event(
        &mut self,
        event: &PointerEvent,
        layout: Layout,
        hit_slop: HitSlop,
        max_duration_ms: u64,
    ) -> Option<f32> {
        let inside = hit_slop.contains(layout, event.x, event.y);
        let expired = event.now_ms.saturating_sub(self.down_ms) > max_duration_ms;

        match event.phase {
            PointerPhase::Down => {
                self.down_ms = event.now_ms;
                self.state = if inside {
                    RecognizerState::Began
                } else {
                    RecognizerState::Idle
                };
                None
            }
            PointerPhase::Move => {
                if self.state == RecognizerState::Began && (!inside || expired) {
                    atrace!(inside, expired, "Tap: failed on move");
                    self.state = RecognizerState::Failed;
                }
                None
            }
            PointerPhase::Up => {
                let fires = self.state == RecognizerState::Began && inside && !expired;
                self.state = RecognizerState::Idle;
                fires.then_some(event.y)
            }
            PointerPhase::Cancel => {
                self.state = RecognizerState::Idle;
                None
            }
        }
    }

    /// Drops out of the current sequence (e.g. a pan won the race).
    pub fn cancel(&mut self) {
        if self.state.has_begun() {
            self.state = RecognizerState::Failed;
        }
    }

    pub fn reset(&mut self) {
        self.state = RecognizerState::Idle;
    }
}
