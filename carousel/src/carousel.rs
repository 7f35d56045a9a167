use alloc::vec::Vec;
use core::cmp;

use crate::geometry::{clamp_index, max_start_index};
use crate::{
    CarouselOptions, CarouselState, Direction, ImageList, NavAvailability, RenderRange,
    RenderedWindow, Slide, StepAnimation, ViewportGeometry,
};

/// The windowed (virtualized) carousel state machine.
///
/// Only `[render_start, render_end)` is ever materialized, where
/// `render_start = start_index - buffer` and `render_end = start_index + visible_count + buffer`
/// (both clamped to the list). The type holds indexes only; the image list is passed in by the
/// owner on every call that needs its length or contents.
///
/// Navigation is one slide per step. A step is started by [`Self::advance`]/[`Self::retreat`],
/// which return a [`StepAnimation`] for the presentation layer and take the animation lock.
/// While the lock is held further steps are dropped (not queued). The lock is released by
/// [`Self::finish_step`] (normal completion) or by [`Self::expire_step`] once the step deadline
/// has passed without a completion signal.
#[derive(Clone, Debug)]
pub struct WindowedCarousel {
    options: CarouselOptions,
    geometry: ViewportGeometry,
    start_index: usize,
    pending: Option<StepAnimation>,
    next_step_id: u64,
}

impl WindowedCarousel {
    pub fn new(options: CarouselOptions, viewport_width: u32, len: usize) -> Self {
        let visible_count = options.breakpoints.visible_count_for(viewport_width);
        let geometry = ViewportGeometry::new(viewport_width, visible_count);
        let start_index = clamp_index(
            options.initial_start_index,
            0,
            max_start_index(len, geometry.visible_count),
        );
        cdebug!(
            len,
            viewport_width,
            visible_count = geometry.visible_count,
            buffer = options.buffer,
            start_index,
            "WindowedCarousel::new"
        );
        Self {
            options,
            geometry,
            start_index,
            pending: None,
            next_step_id: 0,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn visible_count(&self) -> usize {
        self.geometry.visible_count
    }

    pub fn buffer(&self) -> usize {
        self.options.buffer
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    pub fn viewport_width(&self) -> u32 {
        self.geometry.width
    }

    pub fn slide_width(&self) -> u32 {
        self.geometry.slide_width()
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// The step currently holding the animation lock, if any.
    pub fn pending_step(&self) -> Option<&StepAnimation> {
        self.pending.as_ref()
    }

    pub fn max_start_index(&self, len: usize) -> usize {
        max_start_index(len, self.geometry.visible_count)
    }

    pub fn can_retreat(&self) -> bool {
        self.start_index > 0
    }

    pub fn can_advance(&self, len: usize) -> bool {
        self.start_index < self.max_start_index(len)
    }

    pub fn nav(&self, len: usize) -> NavAvailability {
        NavAvailability {
            can_retreat: self.can_retreat(),
            can_advance: self.can_advance(len),
        }
    }

    /// Fully visible indexes (no buffer).
    pub fn visible_range(&self, len: usize) -> RenderRange {
        let end_index = cmp::min(len, self.start_index.saturating_add(self.visible_count()));
        RenderRange {
            start_index: cmp::min(self.start_index, end_index),
            end_index,
        }
    }

    /// Materialized indexes: the visible range widened by `buffer` on each side.
    pub fn render_range(&self, len: usize) -> RenderRange {
        let buffer = self.options.buffer;
        let end_index = cmp::min(
            len,
            self.start_index
                .saturating_add(self.visible_count())
                .saturating_add(buffer),
        );
        let start_index = cmp::min(self.start_index.saturating_sub(buffer), end_index);
        RenderRange {
            start_index,
            end_index,
        }
    }

    /// Track translation that aligns `start_index` with the viewport's left edge.
    pub fn rest_offset(&self, len: usize) -> i64 {
        let leading = self
            .start_index
            .saturating_sub(self.render_range(len).start_index);
        -(leading as i64) * self.slide_width() as i64
    }

    /// Iterates the materialized slides without allocating.
    pub fn for_each_slide<'a, R>(
        &self,
        images: &'a ImageList<R>,
        mut f: impl FnMut(Slide<'a, R>),
    ) {
        let range = self.render_range(images.len());
        if range.is_empty() {
            return;
        }
        let width = self.slide_width();
        let window = &images.as_slice()[range.start_index..range.end_index];
        for (i, image) in window.iter().enumerate() {
            f(Slide {
                index: range.start_index + i,
                image,
                width,
            });
        }
    }

    /// Builds the complete render output for the current state.
    ///
    /// This is pure and idempotent; call it after every change to `start_index`,
    /// `visible_count` or the list length and hand the result to the presentation layer as a
    /// single batch.
    pub fn render<'a, R>(&self, images: &'a ImageList<R>) -> RenderedWindow<'a, R> {
        let len = images.len();
        let range = self.render_range(len);
        let mut slides = Vec::with_capacity(range.len());
        self.for_each_slide(images, |slide| slides.push(slide));
        debug_assert_eq!(slides.len(), range.len());
        RenderedWindow {
            range,
            slides,
            slide_width: self.slide_width(),
            offset: self.rest_offset(len),
            nav: self.nav(len),
        }
    }

    pub fn advance(&mut self, len: usize, now_ms: u64) -> Option<StepAnimation> {
        self.step(Direction::Forward, len, now_ms)
    }

    pub fn retreat(&mut self, len: usize, now_ms: u64) -> Option<StepAnimation> {
        self.step(Direction::Backward, len, now_ms)
    }

    /// Starts a one-slide step in `direction`.
    ///
    /// Returns `None` (and changes nothing) while another step is in flight or when the window is
    /// already at the boundary in that direction.
    pub fn step(
        &mut self,
        direction: Direction,
        len: usize,
        now_ms: u64,
    ) -> Option<StepAnimation> {
        if self.pending.is_some() {
            ctrace!(?direction, "step dropped: animation in flight");
            return None;
        }
        let allowed = match direction {
            Direction::Forward => self.can_advance(len),
            Direction::Backward => self.can_retreat(),
        };
        if !allowed {
            ctrace!(
                ?direction,
                start_index = self.start_index,
                len,
                "step dropped: at boundary"
            );
            return None;
        }

        let from = self.rest_offset(len);
        let width = self.slide_width() as i64;
        let to = match direction {
            Direction::Forward => from - width,
            Direction::Backward => from + width,
        };
        let id = self.next_step_id;
        self.next_step_id = self.next_step_id.wrapping_add(1);

        let step = StepAnimation {
            id,
            direction,
            from,
            to,
            started_ms: now_ms,
            duration_ms: self.options.transition_duration_ms,
            easing: self.options.transition_easing,
            deadline_ms: now_ms.saturating_add(self.options.effective_timeout_ms()),
        };
        cdebug!(
            id,
            ?direction,
            from,
            to,
            start_index = self.start_index,
            "step started"
        );
        self.pending = Some(step);
        Some(step)
    }

    /// Commits the in-flight step identified by `id`.
    ///
    /// Moves `start_index` by exactly one (clamped) and releases the animation lock. Unknown or
    /// already-settled ids are ignored and return `false`. The caller must re-render afterwards.
    pub fn finish_step(&mut self, id: u64, len: usize) -> bool {
        let direction = match &self.pending {
            Some(step) if step.id == id => step.direction,
            _ => {
                ctrace!(id, "finish_step ignored: no matching step");
                return false;
            }
        };
        self.pending = None;

        let max = self.max_start_index(len);
        self.start_index = match direction {
            Direction::Forward => cmp::min(max, self.start_index.saturating_add(1)),
            Direction::Backward => self.start_index.saturating_sub(1),
        };
        cdebug!(id, ?direction, start_index = self.start_index, "step committed");
        true
    }

    /// Force-clears a step whose completion signal is overdue.
    ///
    /// `start_index` is left unchanged. Returns `true` when a step was cleared, in which case the
    /// caller must re-render to snap the track back to the logical position.
    pub fn expire_step(&mut self, now_ms: u64) -> bool {
        let Some(step) = self.pending else {
            return false;
        };
        if !step.is_expired(now_ms) {
            return false;
        }
        cwarn!(
            id = step.id,
            deadline_ms = step.deadline_ms,
            now_ms,
            "step completion overdue; releasing animation lock"
        );
        self.pending = None;
        true
    }

    /// Applies a new viewport width.
    ///
    /// Recomputes `visible_count` from the breakpoint table. When it changes, `start_index` is
    /// clamped into the new valid range. Returns whether `visible_count` changed.
    pub fn set_viewport_width(&mut self, width: u32, len: usize) -> bool {
        let visible_count = self.options.breakpoints.visible_count_for(width);
        let changed = visible_count != self.geometry.visible_count;
        self.geometry = ViewportGeometry::new(width, visible_count);
        if changed {
            self.start_index = clamp_index(self.start_index, 0, self.max_start_index(len));
            cdebug!(
                width,
                visible_count,
                start_index = self.start_index,
                "visible count changed"
            );
        }
        changed
    }

    pub fn set_buffer(&mut self, buffer: usize) {
        self.options.buffer = buffer;
    }

    /// Jumps to `index` without animation. Returns the applied (clamped) index.
    ///
    /// Ignored while a step is in flight.
    pub fn set_start_index_clamped(&mut self, index: usize, len: usize) -> usize {
        if self.pending.is_none() {
            self.start_index = clamp_index(index, 0, self.max_start_index(len));
        }
        self.start_index
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            start_index: self.start_index,
            visible_count: self.geometry.visible_count,
            viewport_width: self.geometry.width,
        }
    }

    /// Restores a snapshot, clamping it against a list of `len` images.
    ///
    /// `visible_count` is re-derived from the breakpoint table for the snapshot's width; the
    /// stored count is only a hint. Any in-flight step is dropped.
    pub fn restore_state(&mut self, state: CarouselState, len: usize) {
        self.pending = None;
        let visible_count = self.options.breakpoints.visible_count_for(state.viewport_width);
        if visible_count != state.visible_count {
            cdebug!(
                stored = state.visible_count,
                visible_count,
                "snapshot visible count out of date"
            );
        }
        self.geometry = ViewportGeometry::new(state.viewport_width, visible_count);
        self.start_index = clamp_index(state.start_index, 0, self.max_start_index(len));
    }
}
