//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and owns the window/position state machine. This
//! crate provides small, framework-neutral helpers every adapter needs:
//!
//! - Rate limiting (`Throttle`, `Debounce`) on an adapter-supplied clock
//! - Gesture normalization: wheel, touch drag and keyboard into steps and drags
//! - Tween-based snap animation for renderers without native transitions
//! - A `Controller` wiring all of it to an injected view
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod events;
mod gesture;
mod limiter;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{CarouselView, Controller, FixedViewport, Wakeup};
pub use events::{
    Key, KeyEvent, KeyOutcome, ResizeEvent, TouchEndEvent, TouchEvent, TouchMoveEvent,
    TouchStartEvent, WheelEvent,
};
pub use gesture::{GestureOptions, GestureTracker, KeyboardMode};
pub use limiter::{Debounce, Debounced, Throttle, Throttled};
pub use tween::{AnimatorOptions, Easing, SnapAnimator, Tween};
