/// Viewport width plus the number of fully visible slots it currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportGeometry {
    pub width: u32,
    pub visible_count: usize,
}

impl ViewportGeometry {
    pub fn new(width: u32, visible_count: usize) -> Self {
        Self {
            width,
            visible_count: visible_count.max(1),
        }
    }

    /// `floor(width / visible_count)`.
    ///
    /// A zero `visible_count` is treated as 1, and a zero width yields 0-wide slides.
    pub fn slide_width(&self) -> u32 {
        let slots = u32::try_from(self.visible_count.max(1)).unwrap_or(u32::MAX);
        self.width / slots
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// Clamps `v` into `lo..=hi`. When `hi < lo`, `lo` wins.
pub fn clamp_index(v: usize, lo: usize, hi: usize) -> usize {
    v.min(hi).max(lo)
}

/// Largest valid `start_index` for a list of `len` images showing `visible_count` at once.
pub fn max_start_index(len: usize, visible_count: usize) -> usize {
    len.saturating_sub(visible_count.max(1))
}
