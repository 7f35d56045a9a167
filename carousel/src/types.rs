use alloc::string::String;
use alloc::vec::Vec;

/// Which way a navigation step moves the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards higher indexes (`start_index + 1`).
    Forward,
    /// Towards lower indexes (`start_index - 1`).
    Backward,
}

/// Timing function for animated track transitions.
///
/// `Ease` and `EaseInOut` follow the CSS `cubic-bezier` definitions of the same name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseInOut,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `0.0..=1.0` to eased progress.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

// Control points are (x1, y1) and (x2, y2); endpoints are fixed at (0, 0) and (1, 1).
// x(s) is monotonic for x1, x2 in 0..=1, so bisection converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut s = x;
    for _ in 0..24 {
        let cur = bezier_axis(x1, x2, s);
        if cur < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_axis(y1, y2, s)
}

/// A half-open range of logical image indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl RenderRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Whether the retreat/advance controls should be enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavAvailability {
    pub can_retreat: bool,
    pub can_advance: bool,
}

/// One materialized slide.
///
/// `index` is always the logical index into the image list, never the slot position inside the
/// rendered window. Hand it back unchanged when the slide is activated.
#[derive(Debug)]
pub struct Slide<'a, R> {
    pub index: usize,
    pub image: &'a R,
    /// Fixed slide width in pixels.
    pub width: u32,
}

impl<R> Clone for Slide<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Slide<'_, R> {}

impl<R> Slide<'_, R> {
    /// 1-based position of the slide in the whole list.
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }

    /// Whether the surface should defer loading the image until it is near the viewport.
    ///
    /// Currently always `true`.
    pub fn lazy_load(&self) -> bool {
        true
    }

    /// Alternative text for the slide image (e.g. `"Image 3"`).
    pub fn label(&self) -> String {
        alloc::format!("Image {}", self.ordinal())
    }
}

/// The full output of a render pass.
///
/// `slides` replaces whatever the presentation layer showed before, as one batch.
#[derive(Clone, Debug)]
pub struct RenderedWindow<'a, R> {
    pub range: RenderRange,
    pub slides: Vec<Slide<'a, R>>,
    pub slide_width: u32,
    /// Instant (non-animated) track translation in pixels. Zero or negative.
    pub offset: i64,
    pub nav: NavAvailability,
}

impl<R> RenderedWindow<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// A single animated window step handed to the presentation layer.
///
/// The step is identified by `id`; completion must be reported with that id exactly once. If it
/// is not reported before `deadline_ms`, the carousel force-clears it on the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepAnimation {
    pub id: u64,
    pub direction: Direction,
    /// Track offset at the start of the transition.
    pub from: i64,
    /// Track offset at the end of the transition (one slide width away from `from`).
    pub to: i64,
    pub started_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
    pub deadline_ms: u64,
}

impl StepAnimation {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }
}
