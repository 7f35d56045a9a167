use carousel::{CarouselOptions, Gallery, ImageList, NavAvailability, Slide, StepAnimation};
use carousel_adapter::{AnimationMode, Controller, Key, Surface};

#[derive(Default)]
struct CssLikeSurface {
    last_step: Option<StepAnimation>,
}

impl Surface<&'static str> for CssLikeSurface {
    fn replace_slides(&mut self, slides: &[Slide<'_, &'static str>]) {
        let names: Vec<&str> = slides.iter().map(|s| *s.image).collect();
        println!("slides={names:?}");
    }

    fn set_track_offset(&mut self, offset: i64) {
        println!("transition: none; translateX({offset}px)");
    }

    fn animate_track(&mut self, step: &StepAnimation) {
        println!(
            "transition: transform {}ms; translateX({}px)",
            step.duration_ms, step.to
        );
        self.last_step = Some(*step);
    }

    fn set_nav(&mut self, nav: NavAvailability) {
        println!("prev.disabled={} next.disabled={}", !nav.can_retreat, !nav.can_advance);
    }

    fn show_viewer(&mut self, _index: usize, image: &&'static str) {
        println!("lightbox src={image}");
    }

    fn hide_viewer(&mut self) {}
}

fn main() {
    // Example: native transitions where the completion event can get lost.
    let images: ImageList<&'static str> = ["a.jpg", "b.jpg", "c.jpg", "d.jpg"].into_iter().collect();
    let gallery = Gallery::new(images, CarouselOptions::new(), 500);
    let mut c = Controller::new(gallery, CssLikeSurface::default(), AnimationMode::Native);

    // First step completes normally.
    c.handle_key(Key::ArrowRight, 0);
    if let Some(step) = c.surface().last_step {
        c.on_transition_end(step.id);
    }

    // Second step never reports completion; the timeout resynchronizes the track.
    c.handle_key(Key::ArrowRight, 1_000);
    println!("dropped while animating: {}", !c.handle_key(Key::ArrowRight, 1_010));
    if let Some(due) = c.next_deadline_ms() {
        c.tick(due);
    }
    println!(
        "animating={} start_index={}",
        c.is_animating(),
        c.gallery().carousel().start_index()
    );
}
