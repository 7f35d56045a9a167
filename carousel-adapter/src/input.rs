use carousel::Direction;

/// Externally triggered commands understood by [`crate::Controller::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    Advance,
    Retreat,
    /// The viewport was resized to `width` pixels (debounced by the gallery).
    Resized { width: u32 },
    /// A materialized slide was activated; `index` is its logical index.
    SlideActivated { index: usize },
    ViewerClose,
    /// A click landed on the viewer backdrop, outside the image.
    ViewerBackdrop,
    ViewerStep(Direction),
    Escape,
}

/// Keys with a default binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
}

impl Key {
    /// Maps a key press to an input.
    ///
    /// Left/right page the carousel. Up/down step the viewer and are unbound while it is closed.
    pub fn to_input(self, viewer_open: bool) -> Option<Input> {
        match self {
            Self::ArrowRight => Some(Input::Advance),
            Self::ArrowLeft => Some(Input::Retreat),
            Self::Escape => Some(Input::Escape),
            Self::ArrowUp if viewer_open => Some(Input::ViewerStep(Direction::Backward)),
            Self::ArrowDown if viewer_open => Some(Input::ViewerStep(Direction::Forward)),
            Self::ArrowUp | Self::ArrowDown => None,
        }
    }
}
