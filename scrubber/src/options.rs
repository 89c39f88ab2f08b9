use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::HitSlop;

/// A callback fired with the newly selected label.
pub type OnCharSelectCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Configuration (props) for [`crate::Scrubber`].
///
/// `S` is an opaque style type owned by the host UI layer. The scrubber never inspects
/// styles; it only hands them back to the renderer.
///
/// This type is designed to be cheap to clone: labels and the callback are stored in `Arc`s so
/// adapters can update a few fields and call `Scrubber::set_options` without reallocating.
pub struct ScrubberOptions<S = ()> {
    /// Labels to render and index into. `None` and an empty list both make the widget inert.
    pub data: Option<Arc<[String]>>,

    /// Style applied to the outer container.
    pub container_style: Option<S>,
    /// Style applied to each label's wrapper.
    pub char_container_style: Option<S>,
    /// Style applied to each label's text.
    pub char_style: Option<S>,

    /// Fired with `data[index]` whenever the selected index changes within a gesture.
    pub on_char_select: Option<OnCharSelectCallback>,

    /// Touch tolerance margin for taps.
    pub hit_slop: Option<HitSlop>,
}

impl<S> ScrubberOptions<S> {
    pub fn new() -> Self {
        Self {
            data: None,
            container_style: None,
            char_container_style: None,
            char_style: None,
            on_char_select: None,
            hit_slop: None,
        }
    }

    /// Creates options for the given labels.
    pub fn with_labels<I, T>(labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new().with_data(labels)
    }

    pub fn with_data<I, T>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.data = Some(collect_labels(data));
        self
    }

    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }

    pub fn with_container_style(mut self, style: Option<S>) -> Self {
        self.container_style = style;
        self
    }

    pub fn with_char_container_style(mut self, style: Option<S>) -> Self {
        self.char_container_style = style;
        self
    }

    pub fn with_char_style(mut self, style: Option<S>) -> Self {
        self.char_style = style;
        self
    }

    pub fn with_on_char_select(
        mut self,
        on_char_select: Option<impl Fn(&str) + Send + Sync + 'static>,
    ) -> Self {
        self.on_char_select = on_char_select.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_hit_slop(mut self, hit_slop: Option<HitSlop>) -> Self {
        self.hit_slop = hit_slop;
        self
    }

    /// The label list, or an empty slice when `data` is absent.
    pub fn labels(&self) -> &[String] {
        self.data.as_deref().unwrap_or(&[])
    }
}

pub(crate) fn collect_labels<I, T>(labels: I) -> Arc<[String]>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    labels.into_iter().map(Into::into).collect::<Vec<_>>().into()
}

impl<S> Default for ScrubberOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Clone for ScrubberOptions<S> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            container_style: self.container_style.clone(),
            char_container_style: self.char_container_style.clone(),
            char_style: self.char_style.clone(),
            on_char_select: self.on_char_select.clone(),
            hit_slop: self.hit_slop,
        }
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for ScrubberOptions<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrubberOptions")
            .field("data", &self.data)
            .field("container_style", &self.container_style)
            .field("char_container_style", &self.char_container_style)
            .field("char_style", &self.char_style)
            .field("on_char_select", &self.on_char_select.as_ref().map(|_| ".."))
            .field("hit_slop", &self.hit_slop)
            .finish()
    }
}
