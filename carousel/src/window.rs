use core::ops::RangeInclusive;

use num_traits::Float;

use crate::{Edge, SlideId};

/// Folds a logical slide id into an image index in `[0, image_count)`.
///
/// Total over every id, negative ones included. Returns `None` when there is nothing to
/// render (`image_count == 0`).
pub fn logical_image_index(id: SlideId, image_count: usize) -> Option<usize> {
    if image_count == 0 {
        return None;
    }
    let n = image_count as i128;
    Some((id as i128).rem_euclid(n) as usize)
}

/// True for finite whole numbers: the positions a settled strip can have.
pub(crate) fn is_integral(x: f64) -> bool {
    x.is_finite() && Float::floor(x) == x
}

/// The materialized run of `2 * shift_count + 1` consecutive slide ids.
///
/// Only the first id is stored, so the consecutiveness and length invariants hold by
/// construction. The window changes only through [`SlideWindow::recycle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideWindow {
    first: SlideId,
    shift_count: usize,
}

/// Result of a recycle: the shifted window and the position that shows the same slide.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recycled {
    pub edge: Edge,
    pub window: SlideWindow,
    pub position: f64,
}

impl SlideWindow {
    /// Creates the window `[0, 1, ..., 2 * shift_count]`.
    pub fn new(shift_count: usize) -> Self {
        Self {
            first: 0,
            shift_count,
        }
    }

    /// The settled position that centers the window.
    pub fn center(&self) -> usize {
        self.shift_count
    }

    pub fn shift_count(&self) -> usize {
        self.shift_count
    }

    pub fn len(&self) -> usize {
        self.shift_count.saturating_mul(2).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> SlideId {
        self.first
    }

    pub fn last(&self) -> SlideId {
        self.first.saturating_add(self.shift_count as SlideId * 2)
    }

    pub fn ids(&self) -> RangeInclusive<SlideId> {
        self.first..=self.last()
    }

    /// Returns the id materialized at `slot`, if the slot is inside the window.
    pub fn get(&self, slot: usize) -> Option<SlideId> {
        (slot < self.len()).then(|| self.first.saturating_add(slot as SlideId))
    }

    pub fn slot_of(&self, id: SlideId) -> Option<usize> {
        self.ids().contains(&id).then(|| (id - self.first) as usize)
    }

    /// The highest valid position.
    pub fn max_position(&self) -> f64 {
        (self.len() - 1) as f64
    }

    /// `1 <= position <= len - 2`: the slot on either side of the centered one is
    /// materialized.
    pub fn is_safe(&self, position: f64) -> bool {
        position >= 1.0 && position <= self.max_position() - 1.0
    }

    /// The edge a position has drifted past, if any.
    ///
    /// Slot `1` and slot `len - 2` are still safe; only the outermost slots recycle, so a
    /// recycled position always lands inside the safe zone, even for `shift_count == 1`.
    pub fn edge_for(&self, position: f64) -> Option<Edge> {
        if position < 1.0 {
            Some(Edge::Low)
        } else if position > self.max_position() - 1.0 {
            Some(Edge::High)
        } else {
            None
        }
    }

    /// Shifts the id range by `shift_count` away from the edge a settled `position` has
    /// reached and returns the position that centers the same slide in the new window.
    ///
    /// Returns `None` for safe or fractional positions: recycling is a pure re-indexing of a
    /// settled strip, never a content change.
    pub fn recycle(&self, position: f64) -> Option<Recycled> {
        if !is_integral(position) {
            return None;
        }
        let edge = self.edge_for(position)?;
        let k = self.shift_count as SlideId;
        let (first, position) = match edge {
            // Prepend `k` ids below the minimum, drop `k` from the top.
            Edge::Low => (
                self.first.saturating_sub(k),
                position + self.shift_count as f64,
            ),
            // Append `k` ids above the maximum, drop `k` from the bottom.
            Edge::High => (
                self.first.saturating_add(k),
                position - self.shift_count as f64,
            ),
        };
        Some(Recycled {
            edge,
            window: Self {
                first,
                shift_count: self.shift_count,
            },
            position,
        })
    }
}
