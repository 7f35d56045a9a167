// Example: debounced resize and appending images later (e.g. after fetching more).
use carousel::{Breakpoints, CarouselOptions, Gallery, ImageList};

fn main() {
    let images: ImageList<String> = (1..=20).map(|i| format!("images/pic{i}.jpg")).collect();
    let opts = CarouselOptions::new()
        .with_breakpoints(Breakpoints::new(1, [(600, 2), (900, 4)]))
        .with_initial_start_index(18);
    let mut g = Gallery::new(images, opts, 400);
    println!(
        "start_index={} visible_count={}",
        g.carousel().start_index(),
        g.carousel().visible_count()
    );

    // A burst of resize events: only the last one is applied, after the quiet period.
    for (i, width) in [700u32, 800, 950, 1000].into_iter().enumerate() {
        g.notify_resize(width, i as u64 * 30);
    }
    while let Some(now_ms) = g.next_deadline_ms() {
        let out = g.tick(now_ms);
        println!("t={now_ms} {out:?}");
    }
    println!(
        "start_index={} visible_count={} can_advance={}",
        g.carousel().start_index(),
        g.carousel().visible_count(),
        g.can_advance()
    );

    let added = g.append_images((21..=25).map(|i| format!("images/pic{i}.jpg")));
    println!(
        "appended {added:?}; can_advance={} range={:?}",
        g.can_advance(),
        g.render().range
    );
}
