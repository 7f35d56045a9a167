//! A headless windowed (virtualized) image carousel with a lightbox viewer.
//!
//! For presentation-layer glue (surfaces, input mapping, tweens), see the `carousel-adapter`
//! crate.
//!
//! This crate holds the state machines only. It keeps the number of materialized slides bounded
//! by `visible_count + 2 * buffer` regardless of how many images the list holds, and drives
//! single-slide animated paging through an explicit animation lock with a timeout fallback.
//!
//! It is UI-agnostic. A presentation layer is expected to provide:
//! - the viewport width (and resize notifications)
//! - a clock (`now_ms`) for debouncing and step timeouts
//! - step completion signals for animations it runs
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod breakpoints;
mod carousel;
mod debounce;
mod gallery;
mod geometry;
mod images;
mod lightbox;
mod options;
mod state;
mod types;


pub use breakpoints::Breakpoints;
pub use carousel::WindowedCarousel;
pub use debounce::Debouncer;
pub use gallery::{Gallery, TickOutcome};
pub use geometry::{ViewportGeometry, clamp_index, max_start_index};
pub use images::ImageList;
pub use lightbox::LightboxViewer;
pub use options::CarouselOptions;
pub use state::{CarouselState, GalleryState, LightboxState};
pub use types::{
    Direction, Easing, NavAvailability, RenderRange, RenderedWindow, Slide, StepAnimation,
};
