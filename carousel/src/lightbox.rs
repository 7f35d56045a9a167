use crate::{Direction, ImageList, LightboxState};

/// Full-scale single-image viewer over the whole image list.
///
/// Independent of the carousel window: it cycles through every index, wrapping at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightboxViewer {
    open_index: Option<usize>,
}

impl LightboxViewer {
    pub fn new() -> Self {
        Self { open_index: None }
    }

    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    /// Opens the viewer at `index`.
    ///
    /// An index outside `0..len` is ignored (the viewer never shows an undefined image) and
    /// `false` is returned.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            cwarn!(index, len, "lightbox open ignored: index out of range");
            return false;
        }
        self.open_index = Some(index);
        ctrace!(index, "lightbox opened");
        true
    }

    /// Closes the viewer. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open_index.take().is_some();
        if was_open {
            ctrace!("lightbox closed");
        }
        was_open
    }

    pub fn step_prev(&mut self, len: usize) -> Option<usize> {
        self.step(Direction::Backward, len)
    }

    pub fn step_next(&mut self, len: usize) -> Option<usize> {
        self.step(Direction::Forward, len)
    }

    /// Moves the open index by one, modulo `len`.
    ///
    /// No-op (returns `None`) while closed or when the list is empty.
    pub fn step(&mut self, direction: Direction, len: usize) -> Option<usize> {
        let current = self.open_index?;
        if len == 0 {
            return None;
        }
        let current = current % len;
        let next = match direction {
            Direction::Forward => (current + 1) % len,
            Direction::Backward => (current + len - 1) % len,
        };
        self.open_index = Some(next);
        Some(next)
    }

    /// The open index and the image it shows.
    pub fn displayed<'a, R>(&self, images: &'a ImageList<R>) -> Option<(usize, &'a R)> {
        let index = self.open_index?;
        images.get(index).map(|image| (index, image))
    }

    pub fn state(&self) -> LightboxState {
        LightboxState {
            open_index: self.open_index,
        }
    }

    /// Restores a snapshot. An open index past the end of the list closes the viewer.
    pub fn restore_state(&mut self, state: LightboxState, len: usize) {
        self.open_index = state.open_index.filter(|&i| i < len);
    }
}
