use crate::{SlideId, Transform};

/// A snapshot of everything a renderer needs for one frame, minus the images themselves.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub first_id: SlideId,
    pub last_id: SlideId,
    pub position: f64,
    pub transform: Transform,
    pub transition_enabled: bool,
    /// Pass back to `Carousel::on_transition_end` when the animation toward `position`
    /// completes.
    pub transition_id: u64,
    pub dragging: bool,
    pub needs_frame: bool,
}
