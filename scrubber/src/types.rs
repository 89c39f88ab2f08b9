/// The measured size of the scrubber's container, as reported by the host layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        HitSlop::default().contains(*self, x, y)
    }
}

/// Extra touch tolerance around the container, applied to taps only.
///
/// Each edge extends the container outward by the given amount. Negative values shrink it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitSlop {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl HitSlop {
    pub fn uniform(slop: f32) -> Self {
        Self {
            top: slop,
            bottom: slop,
            left: slop,
            right: slop,
        }
    }

    pub fn vertical(slop: f32) -> Self {
        Self {
            top: slop,
            bottom: slop,
            ..Self::default()
        }
    }

    pub fn horizontal(slop: f32) -> Self {
        Self {
            left: slop,
            right: slop,
            ..Self::default()
        }
    }

    /// Tests a point (relative to the container's top-left corner) against the container
    /// bounds extended by this slop. Edges are inclusive.
    pub fn contains(&self, layout: Layout, x: f32, y: f32) -> bool {
        x >= -self.left
            && x <= layout.width + self.right
            && y >= -self.top
            && y <= layout.height + self.bottom
    }
}

/// The vertical slot occupied by one label in the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharCell {
    pub index: usize,
    /// Offset of the slot's top edge from the container's top edge.
    pub start: f32,
    pub size: f32,
}

impl CharCell {
    pub fn end(&self) -> f32 {
        self.start + self.size
    }
}
