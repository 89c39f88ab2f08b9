use scrubber::{Layout, Scrubber, ScrubberOptions};

use crate::{GestureConfig, GestureEvent, GestureRace, PointerEvent};

/// A framework-neutral controller that wraps a `scrubber::Scrubber` and drives it from a raw
/// pointer stream.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` whenever the container is laid out
/// - `on_pointer` for every pointer sample over the container
///
/// Taps and pan movements are mapped through the scrubber (firing `on_char_select` on
/// change); every finished pointer sequence ends the scrubber's gesture, so tapping the same
/// letter twice fires twice.
#[derive(Clone, Debug)]
pub struct Controller<S = ()> {
    scrubber: Scrubber<S>,
    race: GestureRace,
}

impl<S> Controller<S> {
    pub fn new(options: ScrubberOptions<S>) -> Self {
        Self::with_config(options, GestureConfig::default())
    }

    pub fn with_config(options: ScrubberOptions<S>, config: GestureConfig) -> Self {
        Self {
            scrubber: Scrubber::new(options),
            race: GestureRace::new(config),
        }
    }

    pub fn from_scrubber(scrubber: Scrubber<S>) -> Self {
        Self {
            scrubber,
            race: GestureRace::default(),
        }
    }

    pub fn scrubber(&self) -> &Scrubber<S> {
        &self.scrubber
    }

    pub fn scrubber_mut(&mut self) -> &mut Scrubber<S> {
        &mut self.scrubber
    }

    pub fn into_scrubber(self) -> Scrubber<S> {
        self.scrubber
    }

    pub fn race(&self) -> &GestureRace {
        &self.race
    }

    pub fn config(&self) -> GestureConfig {
        self.race.config()
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.race.set_config(config);
    }

    pub fn is_tracking(&self) -> bool {
        self.race.is_tracking()
    }

    pub fn on_layout(&mut self, layout: Layout) {
        self.scrubber.on_layout(layout);
    }

    /// Feeds one pointer sample.
    ///
    /// Returns the index most recently selected while handling this sample (i.e. the last
    /// `on_char_select` firing), or `None` if the selection did not change.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Option<usize> {
        let layout = self.scrubber.layout();
        let hit_slop = self.scrubber.hit_slop();
        let scrubber = &mut self.scrubber;
        let mut fired = None;

        self.race
            .on_pointer(event, layout, hit_slop, &mut |gesture| match gesture {
                GestureEvent::Tap { y } | GestureEvent::PanChange { y } => {
                    if let Some(index) = scrubber.handle(y) {
                        fired = Some(index);
                    }
                }
                GestureEvent::Finalize => scrubber.end_gesture(),
            });

        fired
    }

    /// Cancels the current pointer sequence, if any.
    pub fn cancel(&mut self, now_ms: u64) {
        let layout = self.scrubber.layout();
        let scrubber = &mut self.scrubber;
        self.race.cancel(now_ms, layout, &mut |gesture| {
            if gesture == GestureEvent::Finalize {
                scrubber.end_gesture();
            }
        });
    }
}
