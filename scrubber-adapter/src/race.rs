use scrubber::{HitSlop, Layout};

use crate::{GestureConfig, Pan, PanOutcome, PointerEvent, PointerPhase, Tap};

/// What the race reports to the scrubber.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureEvent {
    /// A tap was released at `y`.
    Tap { y: f32 },
    /// An active pan moved to `y`.
    PanChange { y: f32 },
    /// The pointer sequence ended (release or cancel). Emitted once per sequence in which
    /// either recognizer began, after any `Tap`.
    Finalize,
}

/// Runs a [`Tap`] and a [`Pan`] against the same pointer stream; the first to activate wins.
///
/// A pan activation cancels the pending tap. A tap can only fire on release, and only if no
/// pan activated during the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureRace {
    config: GestureConfig,
    tap: Tap,
    pan: Pan,
}

impl GestureRace {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            tap: Tap::new(),
            pan: Pan::new(),
        }
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Takes effect from the next pointer sample.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    pub fn tap(&self) -> &Tap {
        &self.tap
    }

    pub fn pan(&self) -> &Pan {
        &self.pan
    }

    /// `true` while a pointer sequence is in progress for either recognizer.
    pub fn is_tracking(&self) -> bool {
        self.tap.state().has_begun() || self.pan.state().has_begun()
    }

    /// Feeds one pointer sample and emits the resulting gesture events, in order.
    pub fn on_pointer(
        &mut self,
        event: PointerEvent,
        layout: Layout,
        hit_slop: HitSlop,
        emit: &mut dyn FnMut(GestureEvent),
    ) {
        match event.phase {
            PointerPhase::Down => {
                if self.is_tracking() {
                    // A new sequence started before the previous one ended.
                    awarn!("GestureRace: pointer down while tracking; finalizing previous");
                    self.reset();
                    emit(GestureEvent::Finalize);
                }
                self.tap
                    .on_event(&event, layout, hit_slop, self.config.tap_max_duration_ms);
                self.pan
                    .on_event(&event, layout, self.config.pan_min_distance);
                atrace!(
                    x = event.x,
                    y = event.y,
                    tap = ?self.tap.state(),
                    pan = ?self.pan.state(),
                    "GestureRace: down"
                );
            }
            PointerPhase::Move => {
                match self
                    .pan
                    .on_event(&event, layout, self.config.pan_min_distance)
                {
                    PanOutcome::Change { y } => {
                        self.tap.cancel();
                        emit(GestureEvent::PanChange { y });
                    }
                    PanOutcome::Ignored | PanOutcome::Finalize => {
                        self.tap.on_event(
                            &event,
                            layout,
                            hit_slop,
                            self.config.tap_max_duration_ms,
                        );
                    }
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                let tracking = self.is_tracking();
                let tapped = self.tap.on_event(
                    &event,
                    layout,
                    hit_slop,
                    self.config.tap_max_duration_ms,
                );
                self.pan
                    .on_event(&event, layout, self.config.pan_min_distance);

                if let Some(y) = tapped {
                    adebug!(y, "GestureRace: tap");
                    emit(GestureEvent::Tap { y });
                }
                if tracking {
                    emit(GestureEvent::Finalize);
                }
            }
        }
    }

    /// Cancels the current sequence, if any (e.g. the host stole the pointer).
    pub fn cancel(&mut self, now_ms: u64, layout: Layout, emit: &mut dyn FnMut(GestureEvent)) {
        self.on_pointer(
            PointerEvent::cancel(now_ms),
            layout,
            HitSlop::default(),
            emit,
        );
    }

    pub fn reset(&mut self) {
        self.tap.reset();
        self.pan.reset();
    }
}
