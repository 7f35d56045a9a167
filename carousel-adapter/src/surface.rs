use carousel::{NavAvailability, Slide, StepAnimation};

/// The presentation layer a [`crate::Controller`] draws into.
///
/// Implementations own the actual UI objects (DOM nodes, widgets, terminal cells). The controller
/// only ever talks to them through this trait.
pub trait Surface<R> {
    /// Replaces every materialized slide with `slides`, as one batch.
    ///
    /// Honor [`Slide::lazy_load`] when creating image elements.
    fn replace_slides(&mut self, slides: &[Slide<'_, R>]);

    /// Moves the slide track to `offset` pixels with no transition.
    fn set_track_offset(&mut self, offset: i64);

    /// Starts an animated track transition from `step.from` to `step.to`.
    ///
    /// Only called in [`crate::AnimationMode::Native`]. When the transition ends, report it with
    /// [`crate::Controller::on_transition_end`] passing `step.id`.
    fn animate_track(&mut self, step: &StepAnimation);

    fn set_nav(&mut self, nav: NavAvailability);

    /// Shows the viewer with `image`, the image at logical `index`.
    fn show_viewer(&mut self, index: usize, image: &R);

    fn hide_viewer(&mut self);
}
