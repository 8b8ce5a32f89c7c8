use alloc::vec::Vec;

use crate::{CarouselError, Result};

/// Shift count used when none is configured.
pub const DEFAULT_SHIFT_COUNT: usize = 9;

/// Largest accepted shift count. The window materializes `2 * shift_count + 1` slides.
pub const MAX_SHIFT_COUNT: usize = 1 << 16;

/// How slide ids map onto images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentOrigin {
    /// Ids are offset by `shift_count` before folding, so image `0` is centered at mount.
    #[default]
    CenteredOnFirst,
    /// Ids are folded as-is; image `shift_count % N` is centered at mount.
    Raw,
}

/// Configuration for [`crate::Carousel`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions<T = alloc::string::String> {
    /// Half-width of the materialized window.
    pub shift_count: usize,
    /// Display locators, in order. May be empty.
    pub images: Vec<T>,
    pub content_origin: ContentOrigin,
}

impl<T> CarouselOptions<T> {
    pub fn new(images: Vec<T>) -> Self {
        Self {
            shift_count: DEFAULT_SHIFT_COUNT,
            images,
            content_origin: ContentOrigin::default(),
        }
    }

    pub fn with_shift_count(mut self, shift_count: usize) -> Self {
        self.shift_count = shift_count;
        self
    }

    pub fn with_images(mut self, images: Vec<T>) -> Self {
        self.images = images;
        self
    }

    pub fn with_content_origin(mut self, content_origin: ContentOrigin) -> Self {
        self.content_origin = content_origin;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.shift_count == 0 {
            return Err(CarouselError::InvalidShiftCount);
        }
        if self.shift_count > MAX_SHIFT_COUNT {
            return Err(CarouselError::ShiftCountTooLarge {
                shift_count: self.shift_count,
                max: MAX_SHIFT_COUNT,
            });
        }
        Ok(())
    }
}

impl<T> Default for CarouselOptions<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
