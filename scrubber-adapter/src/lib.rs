//! Gesture dispatch for the `scrubber` crate.
//!
//! The `scrubber` crate is UI-agnostic and only maps offsets onto labels. This crate turns a
//! raw pointer stream into the two gestures a scrubber listens to:
//!
//! - a discrete tap, fired on release, honoring the scrubber's hit slop
//! - a continuous pan, fired on every movement sample once past a small movement threshold
//!
//! Both recognizers race: whichever activates first wins the pointer sequence. [`Controller`]
//! wires the race into a [`scrubber::Scrubber`].
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod controller;
mod pan;
mod pointer;
mod race;
mod tap;

#[cfg(test)]
mod tests;

pub use config::GestureConfig;
pub use controller::Controller;
pub use pan::{Pan, PanOutcome};
pub use pointer::{PointerEvent, PointerPhase, RecognizerState};
pub use race::{GestureEvent, GestureRace};
pub use tap::Tap;
