/// Errors raised while constructing a [`crate::Carousel`].
///
/// Only misconfiguration is rejectable; every runtime operation on a constructed carousel is
/// total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("shift count must be at least 1")]
    InvalidShiftCount,
    #[error("shift count {shift_count} exceeds the maximum of {max}")]
    ShiftCountTooLarge { shift_count: usize, max: usize },
}

pub type Result<T, E = CarouselError> = core::result::Result<T, E>;
