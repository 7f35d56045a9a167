use carousel::{Direction, Gallery, ImageList, StepAnimation, TickOutcome};

use crate::{Input, Key, Surface, Tween};

/// Who runs the step animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationMode {
    /// The surface animates the track itself (e.g. a CSS transition) and the host reports
    /// completion through [`Controller::on_transition_end`].
    #[default]
    Native,
    /// The controller samples a [`Tween`] on every [`Controller::tick`] and writes instant offsets,
    /// completing the step itself once the tween is done.
    Tweened,
}

/// A framework-neutral controller that wires a [`Gallery`] to a [`Surface`].
///
/// This type does not read a clock. Adapters drive it by calling:
/// - `handle(input, now_ms)` for user commands and resize notifications
/// - `tick(now_ms)` from a timer or frame loop (debounced resize, step timeout, tween frames)
/// - `on_transition_end(step_id)` when a native transition finishes
///
/// Every state change that affects the window is followed by a full render into the surface.
#[derive(Debug)]
pub struct Controller<R, S> {
    gallery: Gallery<R>,
    surface: S,
    mode: AnimationMode,
    tween: Option<(u64, Tween)>,
}

impl<R, S: Surface<R>> Controller<R, S> {
    /// Creates the controller and performs the initial render.
    pub fn new(gallery: Gallery<R>, surface: S, mode: AnimationMode) -> Self {
        let mut c = Self {
            gallery,
            surface,
            mode,
            tween: None,
        };
        c.render();
        c
    }

    pub fn gallery(&self) -> &Gallery<R> {
        &self.gallery
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn into_parts(self) -> (Gallery<R>, S) {
        (self.gallery, self.surface)
    }

    pub fn images(&self) -> &ImageList<R> {
        self.gallery.images()
    }

    pub fn is_animating(&self) -> bool {
        self.gallery.carousel().is_animating()
    }

    /// Redraws the window: slides, instant offset and nav availability.
    ///
    /// The track snaps to the logical position. A frame-driven tween for the step still in flight
    /// is re-based onto the new geometry and keeps running; any other tween is dropped.
    pub fn render(&mut self) {
        let window = self.gallery.render();
        atrace!(
            start = window.range.start_index,
            end = window.range.end_index,
            offset = window.offset,
            "render"
        );
        self.surface.replace_slides(&window.slides);
        self.surface.set_track_offset(window.offset);
        self.surface.set_nav(window.nav);
        self.rebase_tween();
    }

    /// Points the tween at the current rest offset and slide width, keeping its timing.
    fn rebase_tween(&mut self) {
        let Some((id, tween)) = self.tween else {
            return;
        };
        let carousel = self.gallery.carousel();
        let Some(step) = carousel.pending_step().filter(|s| s.id == id) else {
            self.tween = None;
            return;
        };
        let from = carousel.rest_offset(self.gallery.len());
        let width = carousel.slide_width() as i64;
        let to = match step.direction {
            Direction::Forward => from - width,
            Direction::Backward => from + width,
        };
        atrace!(id, from, to, "tween re-based");
        self.tween = Some((id, Tween { from, to, ..tween }));
    }

    /// Dispatches a command. Returns `false` when it was dropped or had no effect.
    pub fn handle(&mut self, input: Input, now_ms: u64) -> bool {
        atrace!(?input, now_ms, "handle");
        match input {
            Input::Advance => self.step(Direction::Forward, now_ms),
            Input::Retreat => self.step(Direction::Backward, now_ms),
            Input::Resized { width } => {
                self.gallery.notify_resize(width, now_ms);
                true
            }
            Input::SlideActivated { index } => self.open_viewer(index),
            Input::ViewerClose | Input::ViewerBackdrop | Input::Escape => self.close_viewer(),
            Input::ViewerStep(direction) => self.viewer_step(direction),
        }
    }

    /// Maps `key` with the default bindings and dispatches it.
    pub fn handle_key(&mut self, key: Key, now_ms: u64) -> bool {
        match key.to_input(self.gallery.viewer_is_open()) {
            Some(input) => self.handle(input, now_ms),
            None => false,
        }
    }

    pub fn advance(&mut self, now_ms: u64) -> bool {
        self.step(Direction::Forward, now_ms)
    }

    pub fn retreat(&mut self, now_ms: u64) -> bool {
        self.step(Direction::Backward, now_ms)
    }

    fn step(&mut self, direction: Direction, now_ms: u64) -> bool {
        let Some(step) = self.gallery.step(direction, now_ms) else {
            return false;
        };
        self.start_animation(&step);
        true
    }

    fn start_animation(&mut self, step: &StepAnimation) {
        match self.mode {
            AnimationMode::Native => self.surface.animate_track(step),
            AnimationMode::Tweened => {
                self.surface.set_track_offset(step.from);
                self.tween = Some((step.id, Tween::from_step(step)));
            }
        }
    }

    /// Reports that the native transition for `step_id` finished.
    ///
    /// Late or duplicate reports are ignored. Returns whether the step was committed.
    pub fn on_transition_end(&mut self, step_id: u64) -> bool {
        if !self.gallery.finish_step(step_id) {
            adebug!(step_id, "transition end ignored");
            return false;
        }
        self.render();
        true
    }

    /// Advances timers and tween frames.
    ///
    /// Returns the track offset written this tick while a tween is active.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let mut frame = None;
        if let Some((id, tween)) = self.tween {
            let offset = tween.sample(now_ms);
            self.surface.set_track_offset(offset);
            frame = Some(offset);
            if tween.is_done(now_ms) {
                self.tween = None;
                if self.gallery.finish_step(id) {
                    self.render();
                }
            }
        }

        let outcome: TickOutcome = self.gallery.tick(now_ms);
        if outcome.needs_render() {
            if outcome.step_expired {
                adebug!(now_ms, "step expired; resynchronizing track");
            }
            self.render();
            // A resize mid-step moves the tween; resume it from where it is now.
            if let Some((_, tween)) = self.tween {
                let offset = tween.sample(now_ms);
                self.surface.set_track_offset(offset);
                frame = Some(offset);
            }
        }
        frame
    }

    /// The earliest time at which [`Self::tick`] has timer work to do.
    ///
    /// While a tween runs, tick every frame instead.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.gallery.next_deadline_ms()
    }

    /// Appends images and redraws (re-enabling advance when the list grew past the window).
    pub fn append_images(
        &mut self,
        refs: impl IntoIterator<Item = R>,
    ) -> core::ops::Range<usize> {
        let added = self.gallery.append_images(refs);
        if self.is_animating() {
            // Rendering now would snap the in-flight step; refresh nav availability only and let
            // the commit render pick up the new slides.
            self.surface.set_nav(self.gallery.nav());
        } else {
            self.render();
        }
        added
    }

    pub fn open_viewer(&mut self, index: usize) -> bool {
        if !self.gallery.open_viewer(index) {
            return false;
        }
        self.show_viewer();
        true
    }

    pub fn close_viewer(&mut self) -> bool {
        if !self.gallery.close_viewer() {
            return false;
        }
        self.surface.hide_viewer();
        true
    }

    pub fn viewer_step(&mut self, direction: Direction) -> bool {
        if self.gallery.viewer_step(direction).is_none() {
            return false;
        }
        self.show_viewer();
        true
    }

    fn show_viewer(&mut self) {
        if let Some((index, image)) = self.gallery.viewer_image() {
            self.surface.show_viewer(index, image);
        }
    }
}
