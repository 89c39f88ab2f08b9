use alloc::string::String;
use alloc::sync::Arc;

use crate::mapper::{SelectionTracker, index_for_offset};
use crate::options::collect_labels;
use crate::{CharCell, HitSlop, Layout, ScrubberOptions};

/// Container height assumed until the host reports its first layout.
pub const DEFAULT_CONTAINER_HEIGHT: f32 = 1.0;

/// A headless alphabet scrubber.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by reporting layout (`on_layout`) and pointer offsets (`handle`).
/// - Rendering is exposed via `for_each_cell`, which yields each label's slot.
///
/// For tap/pan recognition, see the `scrubber-adapter` crate.
#[derive(Clone, Debug)]
pub struct Scrubber<S = ()> {
    options: ScrubberOptions<S>,
    layout: Layout,
    tracker: SelectionTracker,
}

impl<S> Scrubber<S> {
    pub fn new(options: ScrubberOptions<S>) -> Self {
        sdebug!(
            count = options.labels().len(),
            hit_slop = ?options.hit_slop,
            "Scrubber::new"
        );
        Self {
            options,
            layout: Layout::new(0.0, DEFAULT_CONTAINER_HEIGHT),
            tracker: SelectionTracker::new(),
        }
    }

    pub fn options(&self) -> &ScrubberOptions<S> {
        &self.options
    }

    /// Replaces the options.
    ///
    /// When the label list changes identity (a different `Arc`, or presence toggled), the last
    /// reported index is dropped: it referred to the previous list.
    pub fn set_options(&mut self, options: ScrubberOptions<S>) {
        let data_unchanged = match (&self.options.data, &options.data) {
            (Some(prev), Some(next)) => Arc::ptr_eq(prev, next),
            (None, None) => true,
            _ => false,
        };
        self.options = options;
        strace!(
            count = self.options.labels().len(),
            data_unchanged,
            "Scrubber::set_options"
        );
        if !data_unchanged {
            self.tracker.reset();
        }
    }

    pub fn set_data<I, T>(&mut self, labels: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options.data = Some(collect_labels(labels));
        self.tracker.reset();
    }

    pub fn clear_data(&mut self) {
        self.options.data = None;
        self.tracker.reset();
    }

    pub fn set_on_char_select(
        &mut self,
        on_char_select: Option<impl Fn(&str) + Send + Sync + 'static>,
    ) {
        self.options.on_char_select = on_char_select.map(|f| Arc::new(f) as _);
    }

    pub fn set_hit_slop(&mut self, hit_slop: Option<HitSlop>) {
        self.options.hit_slop = hit_slop;
    }

    pub fn data(&self) -> &[String] {
        self.options.labels()
    }

    pub fn len(&self) -> usize {
        self.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.data().get(index).map(String::as_str)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn container_height(&self) -> f32 {
        self.layout.height
    }

    /// Records the container layout from your UI layer. Call this on every layout pass
    /// (resize, rotation).
    pub fn on_layout(&mut self, layout: Layout) {
        if !(layout.height.is_finite() && layout.height >= 0.0) {
            swarn!(
                height = layout.height,
                "Scrubber::on_layout: degenerate container height"
            );
        }
        if self.layout == layout {
            return;
        }
        sdebug!(
            width = layout.width,
            height = layout.height,
            "Scrubber::on_layout"
        );
        self.layout = layout;
    }

    pub fn set_container_height(&mut self, height: f32) {
        let layout = Layout::new(self.layout.width, height);
        self.on_layout(layout);
    }

    /// The configured tap slop, or an empty slop when none is set.
    pub fn hit_slop(&self) -> HitSlop {
        self.options.hit_slop.unwrap_or_default()
    }

    /// Returns `true` if a touch at `(x, y)` lands within the container extended by the
    /// configured hit slop.
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.hit_slop().contains(self.layout, x, y)
    }

    /// Maps `local_y` against the current layout and labels, without side effects.
    pub fn index_for_offset(&self, local_y: f32) -> Option<usize> {
        index_for_offset(local_y, self.layout.height, self.len())
    }

    /// Feeds a pointer offset from an active gesture.
    ///
    /// Fires `on_char_select` and returns the new index when the offset maps to a different
    /// label than the last one reported in this gesture. Returns `None` when the selection is
    /// unchanged or there are no labels.
    pub fn handle(&mut self, local_y: f32) -> Option<usize> {
        let Some(index) = self.index_for_offset(local_y) else {
            strace!(local_y, "Scrubber::handle: no labels");
            return None;
        };
        if !self.tracker.update(index) {
            return None;
        }

        strace!(local_y, index, "Scrubber::handle: selection changed");
        if let (Some(cb), Some(label)) = (&self.options.on_char_select, self.label(index)) {
            cb(label);
        }
        Some(index)
    }

    /// Ends the current gesture: the next offset fires again even if it maps to the same
    /// label.
    pub fn end_gesture(&mut self) {
        strace!(last = ?self.tracker.last(), "Scrubber::end_gesture");
        self.tracker.reset();
    }

    /// The last index reported in the current gesture.
    pub fn selected_index(&self) -> Option<usize> {
        self.tracker.last().filter(|&i| i < self.len())
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_index().and_then(|i| self.label(i))
    }

    /// Height of one label slot, or `None` when there are no labels.
    pub fn item_height(&self) -> Option<f32> {
        let count = self.len();
        if count == 0 {
            return None;
        }
        let height = self.layout.height;
        if !(height.is_finite() && height > 0.0) {
            return Some(0.0);
        }
        Some(height / count as f32)
    }

    pub fn cell(&self, index: usize) -> Option<CharCell> {
        if index >= self.len() {
            return None;
        }
        let size = self.item_height()?;
        Some(CharCell {
            index,
            start: size * index as f32,
            size,
        })
    }

    /// Iterates label slots top to bottom, for rendering the static letter column.
    pub fn for_each_cell(&self, mut f: impl FnMut(CharCell, &str)) {
        let Some(size) = self.item_height() else {
            return;
        };
        for (index, label) in self.data().iter().enumerate() {
            let cell = CharCell {
                index,
                start: size * index as f32,
                size,
            };
            f(cell, label);
        }
    }
}

impl<S: Clone> Scrubber<S> {
    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrubberOptions<S>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }
}
