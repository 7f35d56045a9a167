/// A lightweight, serializable snapshot of the carousel window.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. In-flight
/// animations are never part of a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub start_index: usize,
    pub visible_count: usize,
    pub viewport_width: u32,
}

/// A lightweight, serializable snapshot of the lightbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightboxState {
    pub open_index: Option<usize>,
}

/// A combined snapshot of carousel + lightbox state.
///
/// Useful for restoring a gallery across sessions without coupling to any UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryState {
    pub carousel: CarouselState,
    pub lightbox: LightboxState,
}
