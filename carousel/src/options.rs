use crate::{Breakpoints, Easing};

/// Configuration for [`crate::WindowedCarousel`] and [`crate::Gallery`].
///
/// All durations are in milliseconds of the caller's clock; the crate never reads time itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Off-screen slides kept materialized on each side of the visible window.
    pub buffer: usize,

    /// Viewport width → visible slide count.
    pub breakpoints: Breakpoints,

    /// Duration of one animated window step.
    pub transition_duration_ms: u64,
    pub transition_easing: Easing,

    /// How long to wait for a step's completion signal before force-clearing the animation lock.
    ///
    /// Should be somewhat longer than `transition_duration_ms`.
    pub transition_timeout_ms: u64,

    /// Quiet period used to coalesce bursts of resize notifications.
    pub resize_debounce_ms: u64,

    /// First visible index on construction (clamped into the valid range).
    pub initial_start_index: usize,
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            buffer: 2,
            breakpoints: Breakpoints::default(),
            transition_duration_ms: 320,
            transition_easing: Easing::Ease,
            transition_timeout_ms: 400,
            resize_debounce_ms: 120,
            initial_start_index: 0,
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Sets the step duration and moves the timeout along with it (duration + 25%, at least
    /// 50ms of slack).
    pub fn with_transition(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.transition_duration_ms = duration_ms;
        self.transition_easing = easing;
        self.transition_timeout_ms = duration_ms.saturating_add((duration_ms / 4).max(50));
        self
    }

    pub fn with_transition_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.transition_timeout_ms = timeout_ms;
        self
    }

    pub fn with_resize_debounce_ms(mut self, quiet_ms: u64) -> Self {
        self.resize_debounce_ms = quiet_ms;
        self
    }

    pub fn with_initial_start_index(mut self, index: usize) -> Self {
        self.initial_start_index = index;
        self
    }

    /// The timeout actually applied: never shorter than the transition itself.
    pub(crate) fn effective_timeout_ms(&self) -> u64 {
        self.transition_timeout_ms.max(self.transition_duration_ms)
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}
