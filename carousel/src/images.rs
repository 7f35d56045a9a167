use alloc::vec::Vec;
use core::ops::Range;

/// The ordered, append-only list of image references.
///
/// Indexes are stable once assigned: images are never removed or reordered, so both the
/// carousel window and the lightbox hold plain indexes into this list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageList<R> {
    items: Vec<R>,
}

impl<R> ImageList<R> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[R] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Appends `refs` and returns the indexes they were assigned.
    pub fn append(&mut self, refs: impl IntoIterator<Item = R>) -> Range<usize> {
        let start = self.items.len();
        self.items.extend(refs);
        start..self.items.len()
    }

    pub fn push(&mut self, image: R) -> usize {
        self.items.push(image);
        self.items.len() - 1
    }
}

impl<R> Default for ImageList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> From<Vec<R>> for ImageList<R> {
    fn from(items: Vec<R>) -> Self {
        Self { items }
    }
}

impl<R> FromIterator<R> for ImageList<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, R> IntoIterator for &'a ImageList<R> {
    type Item = &'a R;
    type IntoIter = core::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
