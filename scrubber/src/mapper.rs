/// Maps a vertical pointer offset onto an index into a strip of `count` equal-height slots.
///
/// `local_y` is relative to the container's top edge and may fall outside
/// `[0, container_height]` (gesture slop); it is clamped first. The raw slot index is clamped
/// again into `[0, count - 1]`, so `local_y == container_height` selects the last slot.
///
/// Returns `None` only when `count == 0`.
///
/// Degenerate geometry never panics:
/// - a non-finite `local_y` is treated as `0`
/// - a zero, negative or non-finite `container_height` maps every offset to index `0`
pub fn index_for_offset(local_y: f32, container_height: f32, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if !(container_height.is_finite() && container_height > 0.0) {
        return Some(0);
    }

    let y = if local_y.is_finite() { local_y } else { 0.0 };
    let y = y.max(0.0).min(container_height);
    let item_height = container_height / count as f32;

    // `y / item_height` is non-negative here, so truncation is floor.
    let raw = (y / item_height) as usize;
    Some(raw.min(count - 1))
}

/// Remembers the last reported index so a continuous sweep reports each index once.
///
/// The tracker starts (and resets to) "none": the first index after a reset is always
/// reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    last: Option<usize>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }

    /// Records `index` and returns `true` if it differs from the last reported index.
    pub fn update(&mut self, index: usize) -> bool {
        if self.last == Some(index) {
            return false;
        }
        self.last = Some(index);
        true
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
