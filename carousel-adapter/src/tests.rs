use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use carousel::{
    Breakpoints, CarouselOptions, Direction, Gallery, ImageList, NavAvailability, Slide,
    StepAnimation,
};

#[derive(Debug, Default)]
struct Recorder {
    slides: Vec<(usize, String, u32)>,
    offset: i64,
    offsets: Vec<i64>,
    animations: Vec<StepAnimation>,
    nav: NavAvailability,
    viewer: Option<(usize, String)>,
    renders: usize,
}

impl Recorder {
    fn slide_indexes(&self) -> Vec<usize> {
        self.slides.iter().map(|(i, _, _)| *i).collect()
    }
}

impl Surface<String> for Recorder {
    fn replace_slides(&mut self, slides: &[Slide<'_, String>]) {
        self.renders += 1;
        self.slides = slides
            .iter()
            .map(|s| (s.index, s.image.clone(), s.width))
            .collect();
    }

    fn set_track_offset(&mut self, offset: i64) {
        self.offset = offset;
        self.offsets.push(offset);
    }

    fn animate_track(&mut self, step: &StepAnimation) {
        self.animations.push(*step);
    }

    fn set_nav(&mut self, nav: NavAvailability) {
        self.nav = nav;
    }

    fn show_viewer(&mut self, index: usize, image: &String) {
        self.viewer = Some((index, image.clone()));
    }

    fn hide_viewer(&mut self) {
        self.viewer = None;
    }
}

fn pics(n: usize) -> ImageList<String> {
    (1..=n).map(|i| format!("images/pic{i}.jpg")).collect()
}

fn controller(len: usize, mode: AnimationMode) -> Controller<String, Recorder> {
    let gallery = Gallery::new(pics(len), CarouselOptions::new(), 1000);
    Controller::new(gallery, Recorder::default(), mode)
}

#[test]
fn initial_render_fills_the_surface() {
    let c = controller(20, AnimationMode::Native);
    let s = c.surface();
    assert_eq!(s.renders, 1);
    // 1000px wide => 3 visible, plus a buffer of 2 after.
    assert_eq!(s.slide_indexes(), (0..5).collect::<Vec<_>>());
    assert_eq!(s.slides[0], (0, String::from("images/pic1.jpg"), 333));
    assert_eq!(s.offset, 0);
    assert_eq!(
        s.nav,
        NavAvailability {
            can_retreat: false,
            can_advance: true
        }
    );
}

#[test]
fn native_step_commits_on_transition_end() {
    let mut c = controller(20, AnimationMode::Native);

    assert!(c.handle(Input::Advance, 0));
    assert!(!c.handle(Input::Advance, 10));
    assert_eq!(c.surface().animations.len(), 1);
    let step = c.surface().animations[0];
    assert_eq!((step.from, step.to), (0, -333));
    assert_eq!(c.surface().renders, 1);

    assert!(c.on_transition_end(step.id));
    assert!(!c.on_transition_end(step.id));
    assert_eq!(c.gallery().carousel().start_index(), 1);
    assert_eq!(c.surface().renders, 2);
    assert_eq!(c.surface().slide_indexes(), (0..6).collect::<Vec<_>>());
    assert_eq!(c.surface().offset, -333);
    assert!(c.surface().nav.can_retreat);
}

#[test]
fn lost_transition_end_is_recovered_by_tick() {
    let mut c = controller(20, AnimationMode::Native);
    assert!(c.advance(1_000));
    let step = c.surface().animations[0];
    assert_eq!(c.next_deadline_ms(), Some(step.deadline_ms));

    assert_eq!(c.tick(1_200), None);
    assert!(c.is_animating());

    c.tick(step.deadline_ms);
    assert!(!c.is_animating());
    assert_eq!(c.gallery().carousel().start_index(), 0);
    assert_eq!(c.surface().renders, 2);
    assert_eq!(c.surface().offset, 0);

    assert!(!c.on_transition_end(step.id));
    assert!(c.advance(2_000));
}

#[test]
fn tweened_step_writes_frames_then_commits() {
    let mut c = controller(20, AnimationMode::Tweened);
    assert!(c.handle(Input::Advance, 0));
    assert!(c.surface().animations.is_empty());

    let mut last = 0i64;
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            assert!(off <= last);
            assert!(off >= -333);
            last = off;
        }
        assert!(now_ms <= 400, "tween never finished");
    }
    assert_eq!(last, -333);
    assert_eq!(c.gallery().carousel().start_index(), 1);
    // After the commit render the track rests at the new logical position.
    assert_eq!(c.surface().offset, -333);
    assert_eq!(c.tick(now_ms + 16), None);
}

#[test]
fn retreat_at_start_is_dropped() {
    let mut c = controller(20, AnimationMode::Native);
    assert!(!c.handle(Input::Retreat, 0));
    assert!(!c.handle_key(Key::ArrowLeft, 0));
    assert!(c.surface().animations.is_empty());
}

#[test]
fn keys_follow_default_bindings() {
    assert_eq!(Key::ArrowRight.to_input(false), Some(Input::Advance));
    assert_eq!(Key::ArrowLeft.to_input(true), Some(Input::Retreat));
    assert_eq!(Key::Escape.to_input(false), Some(Input::Escape));
    assert_eq!(Key::ArrowUp.to_input(false), None);
    assert_eq!(Key::ArrowDown.to_input(false), None);
    assert_eq!(
        Key::ArrowUp.to_input(true),
        Some(Input::ViewerStep(Direction::Backward))
    );
    assert_eq!(
        Key::ArrowDown.to_input(true),
        Some(Input::ViewerStep(Direction::Forward))
    );
}

#[test]
fn slide_activation_drives_the_viewer_independently() {
    let mut c = controller(20, AnimationMode::Native);
    assert!(c.advance(0));

    assert!(c.handle(Input::SlideActivated { index: 19 }, 5));
    assert_eq!(
        c.surface().viewer,
        Some((19, String::from("images/pic20.jpg")))
    );
    assert!(c.handle_key(Key::ArrowDown, 6));
    assert_eq!(c.surface().viewer.as_ref().map(|v| v.0), Some(0));
    assert!(c.handle(Input::ViewerStep(Direction::Backward), 7));
    assert_eq!(c.surface().viewer.as_ref().map(|v| v.0), Some(19));

    assert!(c.handle_key(Key::Escape, 8));
    assert_eq!(c.surface().viewer, None);
    assert!(!c.handle(Input::ViewerBackdrop, 9));
    assert!(!c.handle(Input::ViewerStep(Direction::Forward), 9));

    assert!(c.is_animating());
    assert_eq!(c.gallery().carousel().start_index(), 0);
}

#[test]
fn out_of_range_activation_is_ignored() {
    let mut c = controller(3, AnimationMode::Native);
    assert!(!c.handle(Input::SlideActivated { index: 3 }, 0));
    assert_eq!(c.surface().viewer, None);
    assert!(!c.gallery().viewer_is_open());
}

#[test]
fn resize_renders_once_after_quiet_period() {
    let mut c = controller(20, AnimationMode::Native);
    c.handle(Input::Resized { width: 1300 }, 0);
    c.handle(Input::Resized { width: 1250 }, 50);
    c.tick(100);
    assert_eq!(c.surface().renders, 1);

    c.tick(170);
    assert_eq!(c.surface().renders, 2);
    assert_eq!(c.gallery().carousel().visible_count(), 5);
    assert_eq!(c.surface().slides[0].2, 250);
    assert_eq!(c.surface().slide_indexes(), (0..7).collect::<Vec<_>>());
}

#[test]
fn append_re_enables_advance() {
    let gallery = Gallery::new(
        pics(5),
        CarouselOptions::new().with_breakpoints(Breakpoints::fixed(5)),
        1000,
    );
    let mut c = Controller::new(gallery, Recorder::default(), AnimationMode::Native);
    assert!(!c.surface().nav.can_advance);

    let added = c.append_images([String::from("images/pic6.jpg")]);
    assert_eq!(added, 5..6);
    assert!(c.surface().nav.can_advance);
    assert_eq!(c.surface().slide_indexes(), (0..6).collect::<Vec<_>>());
}

#[test]
fn append_during_animation_defers_the_render() {
    let mut c = controller(5, AnimationMode::Native);
    assert!(c.advance(0));
    let renders = c.surface().renders;

    c.append_images((6..=8).map(|i| format!("images/pic{i}.jpg")));
    assert_eq!(c.surface().renders, renders);
    assert!(c.is_animating());

    let step = c.surface().animations[0];
    assert!(c.on_transition_end(step.id));
    assert_eq!(c.surface().slide_indexes(), (0..6).collect::<Vec<_>>());
    assert!(c.surface().nav.can_advance);
}

#[test]
fn tween_samples_between_endpoints() {
    let t = Tween::new(0, -300, 100, 300, Easing::Linear);
    assert_eq!(t.sample(0), 0);
    assert_eq!(t.sample(100), 0);
    assert_eq!(t.sample(250), -150);
    assert_eq!(t.sample(400), -300);
    assert!(t.is_done(400));
    assert!(!t.is_done(399));

    let zero = Tween::new(10, 20, 0, 0, Easing::Ease);
    assert_eq!(zero.duration_ms, 1);
    assert_eq!(zero.sample(1), 20);
}

#[test]
fn resize_during_tweened_step_still_commits() {
    let mut c = controller(20, AnimationMode::Tweened);
    assert!(c.advance(0));
    c.handle(Input::Resized { width: 1010 }, 5);

    // The debounced resize lands mid-step and re-renders at the new slide width.
    let frame = c.tick(130).unwrap();
    assert_eq!(c.surface().renders, 2);
    assert_eq!(c.surface().slides[0].2, 336);
    assert!(c.is_animating());
    assert!((-336..0).contains(&frame));
    assert_eq!(c.surface().offset, frame);

    assert_eq!(c.tick(320), Some(-336));
    assert!(!c.is_animating());
    assert_eq!(c.gallery().carousel().start_index(), 1);
    assert_eq!(c.surface().offset, -336);
    assert!(c.advance(330));
}
