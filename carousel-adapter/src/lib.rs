//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and holds only the window/lightbox state machines. This
//! crate provides the small, framework-neutral pieces an adapter needs on top:
//!
//! - [`Surface`]: the presentation-layer capability the controller draws into
//! - [`Input`] / [`Key`]: the command vocabulary and default key bindings
//! - [`Tween`]: frame-driven step animation for surfaces without native transitions
//! - [`Controller`]: wires a `Gallery` to a `Surface` under an external clock
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod input;
mod surface;
mod tween;

#[cfg(test)]
mod tests;

pub use carousel::Easing;
pub use controller::{AnimationMode, Controller};
pub use input::{Input, Key};
pub use surface::Surface;
pub use tween::Tween;
