//! A headless infinite-loop slide carousel engine.
//!
//! A finite, ordered set of images is shown as an endless strip. Only a small window of
//! `2 * shift_count + 1` slides is ever materialized; when a snap animation settles near
//! either edge of that window, the window is re-indexed (recycled) so the same slide stays
//! centered without a visible jump.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - gestures, already normalized into steps and drags (see `carousel-adapter`)
//! - viewport width for drag math
//! - transition-end and render-frame notifications
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod error;
mod options;
mod position;
mod state;
mod types;
mod window;


pub use carousel::Carousel;
pub use error::{CarouselError, Result};
pub use options::{CarouselOptions, ContentOrigin, DEFAULT_SHIFT_COUNT, MAX_SHIFT_COUNT};
pub use position::{Commit, DragState, PositionController};
pub use state::Frame;
pub use types::{Edge, RenderSlide, SlideId, Step, Transform};
pub use window::{Recycled, SlideWindow, logical_image_index};
