use carousel::{CarouselOptions, Gallery, ImageList, NavAvailability, Slide, StepAnimation};
use carousel_adapter::{AnimationMode, Controller, Input, Surface};

/// A surface that prints what a real UI layer would do.
struct PrintSurface;

impl Surface<String> for PrintSurface {
    fn replace_slides(&mut self, slides: &[Slide<'_, String>]) {
        let first = slides.first().map(|s| s.index);
        let last = slides.last().map(|s| s.index);
        println!("replace_slides: {} slides ({first:?}..={last:?})", slides.len());
    }

    fn set_track_offset(&mut self, offset: i64) {
        println!("  offset={offset}");
    }

    fn animate_track(&mut self, step: &StepAnimation) {
        println!("animate_track: {step:?}");
    }

    fn set_nav(&mut self, nav: NavAvailability) {
        println!("nav={nav:?}");
    }

    fn show_viewer(&mut self, index: usize, image: &String) {
        println!("viewer: [{index}] {image}");
    }

    fn hide_viewer(&mut self) {
        println!("viewer hidden");
    }
}

fn main() {
    // Example: a controller driving a frame-sampled step animation without holding UI objects.
    //
    // An adapter would:
    // - forward user input via handle(input, now_ms)
    // - call tick(now_ms) in a frame loop / timer
    // - let the surface apply slides, offsets and nav state
    let images: ImageList<String> = (1..=50).map(|i| format!("images/pic{i}.jpg")).collect();
    let gallery = Gallery::new(images, CarouselOptions::new(), 1280);
    let mut c = Controller::new(gallery, PrintSurface, AnimationMode::Tweened);

    c.handle(Input::Advance, 0);
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!("start_index={}", c.gallery().carousel().start_index());

    c.handle(Input::SlideActivated { index: 49 }, now_ms);
    c.handle(Input::ViewerStep(carousel::Direction::Forward), now_ms);
    c.handle(Input::Escape, now_ms);
}
