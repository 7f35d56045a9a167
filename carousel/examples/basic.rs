// Example: minimal render + one animated step driven by hand.
use carousel::{CarouselOptions, Gallery, ImageList};

fn main() {
    let images: ImageList<String> = (1..=1000).map(|i| format!("images/pic{i}.jpg")).collect();
    let mut g = Gallery::new(images, CarouselOptions::new(), 1280);

    let window = g.render();
    println!(
        "visible_count={} slide_width={} range={:?} offset={} nav={:?}",
        g.carousel().visible_count(),
        window.slide_width,
        window.range,
        window.offset,
        window.nav
    );

    // A presentation layer would animate the track from `from` to `to` and report back.
    let step = g.advance(0).expect("window can advance");
    println!("step: {step:?}");
    println!("second advance while animating: {:?}", g.advance(10));

    g.finish_step(step.id);
    let window = g.render();
    println!(
        "after step: start_index={} range={:?} offset={}",
        g.carousel().start_index(),
        window.range,
        window.offset
    );
    for slide in &window.slides {
        println!("  [{}] {} ({})", slide.index, slide.image, slide.label());
    }
}
