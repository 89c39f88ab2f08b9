//! A headless alphabet scrubber, the letter strip found at the edge of contact lists.
//!
//! For gesture dispatch (tap/pan recognizers and a controller), see the `scrubber-adapter`
//! crate.
//!
//! This crate owns the only part of the widget with real logic: turning a pointer's vertical
//! offset into an index into a small label list, and firing a selection callback only when
//! that index changes.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container layout (at least its height), on every layout pass
//! - pointer offsets relative to the container's top edge
//! - gesture boundaries (so de-duplication can be reset between sweeps)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod mapper;
mod options;
mod scrubber;
mod types;


pub use mapper::{SelectionTracker, index_for_offset};
pub use options::{OnCharSelectCallback, ScrubberOptions};
pub use scrubber::{DEFAULT_CONTAINER_HEIGHT, Scrubber};
pub use types::{CharCell, HitSlop, Layout};
