use scrubber::Layout;

use crate::{PointerEvent, PointerPhase, RecognizerState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanOutcome {
    /// Nothing to report for this sample.
    Ignored,
    /// The pan is active and the pointer is at `y`.
    Change { y: f32 },
    /// The sequence ended (release or cancel) after the pan began.
    Finalize,
}

/// A continuous drag recognizer.
///
/// A pan begins when the pointer goes down inside the container bounds (no slop), and
/// activates once the pointer has travelled `min_distance` from its down point. From then on
/// every movement sample reports a `Change`, including the activating one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pan {
    state: RecognizerState,
    start_x: f32,
    start_y: f32,
}

impl Pan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == RecognizerState::Active
    }

    pub fn on_event(
        &mut self,
        event: &PointerEvent,
        layout: Layout,
        min_distance: f32,
    ) -> PanOutcome {
        match event.phase {
            PointerPhase::Down => {
                self.start_x = event.x;
                self.start_y = event.y;
                self.state = if layout.contains(event.x, event.y) {
                    RecognizerState::Began
                } else {
                    RecognizerState::Idle
                };
                PanOutcome::Ignored
            }
            PointerPhase::Move => match self.state {
                RecognizerState::Active => PanOutcome::Change { y: event.y },
                RecognizerState::Began => {
                    let dx = event.x - self.start_x;
                    let dy = event.y - self.start_y;
                    // Compare squared distances; `sqrt` is not available without std.
                    if dx * dx + dy * dy >= min_distance * min_distance {
                        atrace!(y = event.y, "Pan: activated");
                        self.state = RecognizerState::Active;
                        PanOutcome::Change { y: event.y }
                    } else {
                        PanOutcome::Ignored
                    }
                }
                RecognizerState::Idle | RecognizerState::Failed => PanOutcome::Ignored,
            },
            PointerPhase::Up | PointerPhase::Cancel => {
                let began = self.state.has_begun();
                self.state = RecognizerState::Idle;
                if began {
                    PanOutcome::Finalize
                } else {
                    PanOutcome::Ignored
                }
            }
        }
    }

    /// Drops out of the current sequence without activating. The pan still finalizes when the
    /// sequence ends.
    pub fn cancel(&mut self) {
        if self.state == RecognizerState::Began {
            self.state = RecognizerState::Failed;
        }
    }

    pub fn reset(&mut self) {
        self.state = RecognizerState::Idle;
    }
}
