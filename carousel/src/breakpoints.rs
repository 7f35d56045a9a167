use alloc::vec::Vec;

/// A step function from viewport width to the number of visible slides.
///
/// Rows are `(min_width, visible_count)`. The row with the largest `min_width` that does not
/// exceed the viewport width wins; below every row, `fallback` applies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    rows: Vec<(u32, usize)>, // sorted by min_width, ascending
    fallback: usize,
}

impl Breakpoints {
    /// A table that always yields `visible_count`.
    pub fn fixed(visible_count: usize) -> Self {
        Self {
            rows: Vec::new(),
            fallback: visible_count.max(1),
        }
    }

    pub fn new(fallback: usize, rows: impl IntoIterator<Item = (u32, usize)>) -> Self {
        let mut table = Self::fixed(fallback);
        for (min_width, visible_count) in rows {
            table.insert(min_width, visible_count);
        }
        table
    }

    /// Adds or replaces the row for `min_width`.
    pub fn insert(&mut self, min_width: u32, visible_count: usize) {
        let visible_count = visible_count.max(1);
        match self.rows.binary_search_by_key(&min_width, |&(w, _)| w) {
            Ok(i) => self.rows[i].1 = visible_count,
            Err(i) => self.rows.insert(i, (min_width, visible_count)),
        }
    }

    pub fn with_row(mut self, min_width: u32, visible_count: usize) -> Self {
        self.insert(min_width, visible_count);
        self
    }

    pub fn fallback(&self) -> usize {
        self.fallback
    }

    pub fn rows(&self) -> &[(u32, usize)] {
        &self.rows
    }

    pub fn visible_count_for(&self, viewport_width: u32) -> usize {
        self.rows
            .iter()
            .rev()
            .find(|&&(min_width, _)| viewport_width >= min_width)
            .map(|&(_, count)| count)
            .unwrap_or(self.fallback)
    }
}

impl Default for Breakpoints {
    /// `>= 1200 -> 5`, `>= 768 -> 3`, otherwise `1`.
    fn default() -> Self {
        Self::new(1, [(768, 3), (1200, 5)])
    }
}
