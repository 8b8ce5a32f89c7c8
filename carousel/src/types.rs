/// A logical slide id: an unbounded position in the conceptual infinite sequence.
///
/// Ids are not image indexes; see [`crate::logical_image_index`].
pub type SlideId = i64;

/// A discrete one-slide movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Towards higher window slots (higher ids).
    Next,
    /// Towards lower window slots (lower ids).
    Previous,
}

impl Step {
    /// Maps a signed gesture delta to a step: negative moves to the next slide, positive to
    /// the previous one. Zero and NaN map to `None`.
    pub fn from_sign(sign: f64) -> Option<Self> {
        if sign < 0.0 {
            Some(Self::Next)
        } else if sign > 0.0 {
            Some(Self::Previous)
        } else {
            None
        }
    }

    pub fn delta(self) -> f64 {
        match self {
            Self::Next => 1.0,
            Self::Previous => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Next => Self::Previous,
            Self::Previous => Self::Next,
        }
    }
}

/// The window edge a settled position drifted past.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Low,
    High,
}

/// One materialized slide, ready to hand to a renderer.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderSlide<'a, T> {
    /// Stable render key; survives recycles, unlike the slot index.
    pub slot_key: SlideId,
    pub image_index: usize,
    pub image: &'a T,
}

impl<T> Clone for RenderSlide<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderSlide<'_, T> {}

/// Horizontal translation of the slide strip, in percent of the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub offset_percent: f64,
}

impl Transform {
    pub fn for_position(position: f64) -> Self {
        Self {
            offset_percent: -position * 100.0,
        }
    }
}
