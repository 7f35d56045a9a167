use core::ops::Range;

use crate::{
    CarouselOptions, Debouncer, Direction, GalleryState, ImageList, LightboxViewer,
    NavAvailability, RenderedWindow, StepAnimation, WindowedCarousel,
};

/// What a [`Gallery::tick`] changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A debounced resize was applied (`Some(visible_count_changed)`).
    pub resized: Option<bool>,
    /// An overdue step was force-cleared.
    pub step_expired: bool,
}

impl TickOutcome {
    /// Whether the presentation layer must re-render.
    pub fn needs_render(&self) -> bool {
        self.resized.is_some() || self.step_expired
    }
}

/// The image list plus the two state machines that index into it.
///
/// The list is the single source of truth. The carousel and the lightbox hold plain indexes,
/// so an append is visible to both immediately.
///
/// All time-dependent behaviour (resize debouncing, the step timeout) is driven by explicit
/// `now_ms` arguments; hosts call [`Self::tick`] from their timer or frame loop.
#[derive(Clone, Debug)]
pub struct Gallery<R> {
    images: ImageList<R>,
    carousel: WindowedCarousel,
    lightbox: LightboxViewer,
    resize: Debouncer<u32>,
}

impl<R> Gallery<R> {
    pub fn new(images: ImageList<R>, options: CarouselOptions, viewport_width: u32) -> Self {
        let resize = Debouncer::new(options.resize_debounce_ms);
        let carousel = WindowedCarousel::new(options, viewport_width, images.len());
        Self {
            images,
            carousel,
            lightbox: LightboxViewer::new(),
            resize,
        }
    }

    pub fn images(&self) -> &ImageList<R> {
        &self.images
    }

    pub fn carousel(&self) -> &WindowedCarousel {
        &self.carousel
    }

    pub fn lightbox(&self) -> &LightboxViewer {
        &self.lightbox
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn render(&self) -> RenderedWindow<'_, R> {
        self.carousel.render(&self.images)
    }

    pub fn nav(&self) -> NavAvailability {
        self.carousel.nav(self.images.len())
    }

    pub fn can_advance(&self) -> bool {
        self.carousel.can_advance(self.images.len())
    }

    pub fn can_retreat(&self) -> bool {
        self.carousel.can_retreat()
    }

    /// Extends the list. The window position and animation state are untouched; only the
    /// upper bound moves. Re-render afterwards.
    pub fn append_images(&mut self, refs: impl IntoIterator<Item = R>) -> Range<usize> {
        let added = self.images.append(refs);
        cdebug!(
            added = added.len(),
            len = self.images.len(),
            "append_images"
        );
        added
    }

    pub fn advance(&mut self, now_ms: u64) -> Option<StepAnimation> {
        self.carousel.advance(self.images.len(), now_ms)
    }

    pub fn retreat(&mut self, now_ms: u64) -> Option<StepAnimation> {
        self.carousel.retreat(self.images.len(), now_ms)
    }

    pub fn step(&mut self, direction: Direction, now_ms: u64) -> Option<StepAnimation> {
        self.carousel.step(direction, self.images.len(), now_ms)
    }

    /// Reports completion of the step `id`. Returns `true` when it was committed; re-render then.
    pub fn finish_step(&mut self, id: u64) -> bool {
        self.carousel.finish_step(id, self.images.len())
    }

    /// Records a raw resize notification; it is applied by a later [`Self::tick`] once no
    /// further notifications arrived for `resize_debounce_ms`.
    pub fn notify_resize(&mut self, viewport_width: u32, now_ms: u64) {
        ctrace!(viewport_width, now_ms, "notify_resize");
        self.resize.call(viewport_width, now_ms);
    }

    /// Applies a viewport width immediately, bypassing the debouncer.
    ///
    /// Returns whether `visible_count` changed. Re-render afterwards in either case, since the
    /// slide width may have changed.
    pub fn apply_resize(&mut self, viewport_width: u32) -> bool {
        self.resize.cancel();
        self.carousel
            .set_viewport_width(viewport_width, self.images.len())
    }

    /// Processes timers: the debounced resize and the step timeout.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let resized = self
            .resize
            .poll(now_ms)
            .map(|width| self.carousel.set_viewport_width(width, self.images.len()));
        let step_expired = self.carousel.expire_step(now_ms);
        TickOutcome {
            resized,
            step_expired,
        }
    }

    /// The earliest time at which [`Self::tick`] has work to do.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        let step = self.carousel.pending_step().map(|s| s.deadline_ms);
        match (self.resize.deadline_ms(), step) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Opens the viewer for an activated slide. `index` is the slide's logical index.
    pub fn open_viewer(&mut self, index: usize) -> bool {
        self.lightbox.open(index, self.images.len())
    }

    pub fn close_viewer(&mut self) -> bool {
        self.lightbox.close()
    }

    pub fn viewer_step_prev(&mut self) -> Option<usize> {
        self.lightbox.step_prev(self.images.len())
    }

    pub fn viewer_step_next(&mut self) -> Option<usize> {
        self.lightbox.step_next(self.images.len())
    }

    pub fn viewer_step(&mut self, direction: Direction) -> Option<usize> {
        self.lightbox.step(direction, self.images.len())
    }

    pub fn viewer_is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    /// The viewer's index and image, while open.
    pub fn viewer_image(&self) -> Option<(usize, &R)> {
        self.lightbox.displayed(&self.images)
    }

    pub fn state(&self) -> GalleryState {
        GalleryState {
            carousel: self.carousel.state(),
            lightbox: self.lightbox.state(),
        }
    }

    /// Restores a snapshot against the current list. Pending resizes and steps are dropped.
    pub fn restore_state(&mut self, state: GalleryState) {
        let len = self.images.len();
        self.resize.cancel();
        self.carousel.restore_state(state.carousel, len);
        self.lightbox.restore_state(state.lightbox, len);
    }
}
