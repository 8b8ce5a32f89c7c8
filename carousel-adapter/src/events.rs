//! Abstract input shapes. Adapters translate their toolkit's events into these.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelEvent {
    pub delta_y: f64,
}

/// A single-finger touch sample along the carousel axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    pub pointer_x: f64,
}

pub type TouchStartEvent = TouchEvent;
pub type TouchMoveEvent = TouchEvent;
pub type TouchEndEvent = TouchEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    pub fn is_arrow(self) -> bool {
        matches!(self, Self::ArrowLeft | Self::ArrowRight)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    pub key: Key,
}

/// The viewport changed size. The new width is read from the view when handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeEvent;

/// What the adapter should do with a key event after the carousel saw it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the host's default handling (e.g. page scroll on arrow keys).
    pub prevent_default: bool,
    /// The key moved the carousel.
    pub handled: bool,
}
