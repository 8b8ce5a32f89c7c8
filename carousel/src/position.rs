use num_traits::Float;

use crate::Step;
use crate::window::is_integral;

/// An open touch drag: where the finger went down and which position it grabbed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState {
    pub anchor_pointer: f64,
    pub anchor_position: f64,
}

/// How a drag commit left the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    /// The position changed with transitions enabled; a transition end will follow.
    Animating,
    /// The position was already at the snap target; nothing will animate.
    Settled,
}

/// Owns the continuous position of the strip and the transition flag.
///
/// The controller does not own an animation clock. It sets a target and enables
/// transitions; the renderer animates and reports back with the `transition_id` that was
/// current when the animation started.
///
/// Positions are window slots: integral when settled, fractional while a finger is down.
#[derive(Clone, Debug)]
pub struct PositionController {
    position: f64,
    max_position: f64,
    transition_enabled: bool,
    transition_id: u64,
    frame_pending: bool,
    drag: Option<DragState>,
}

impl PositionController {
    pub fn new(position: f64, max_position: f64) -> Self {
        let max_position = if max_position.is_finite() {
            max_position.max(0.0)
        } else {
            0.0
        };
        Self {
            position: position.clamp(0.0, max_position),
            max_position,
            transition_enabled: true,
            transition_id: 0,
            frame_pending: false,
            drag: None,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn max_position(&self) -> f64 {
        self.max_position
    }

    pub fn is_settled(&self) -> bool {
        self.drag.is_none() && is_integral(self.position)
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Generation of the latest animated target.
    pub fn transition_id(&self) -> u64 {
        self.transition_id
    }

    /// True while transitions stay disabled until the next render frame.
    pub fn needs_frame(&self) -> bool {
        self.frame_pending
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Applies a discrete one-slide step.
    ///
    /// A fractional position (a drag interrupted by a wheel or key) is first rounded in the
    /// direction of travel, and that rounding is the whole step. An open drag is closed.
    pub fn step(&mut self, step: Step) -> bool {
        if let Some(_drag) = self.drag.take() {
            cdebug!(?_drag, "step closes open drag");
        }
        let target = if is_integral(self.position) {
            self.position + step.delta()
        } else {
            match step {
                Step::Next => Float::ceil(self.position),
                Step::Previous => Float::floor(self.position),
            }
        };
        ctrace!(from = self.position, to = target, ?step, "PositionController::step");
        self.animate_to(target)
    }

    /// Opens a drag anchored at the current position. Transitions are disabled until the
    /// drag is committed.
    pub fn begin_drag(&mut self, pointer: f64) {
        if !pointer.is_finite() {
            cwarn!(pointer, "begin_drag: non-finite pointer ignored");
            return;
        }
        let drag = DragState {
            anchor_pointer: pointer,
            anchor_position: self.position,
        };
        ctrace!(?drag, "PositionController::begin_drag");
        self.drag = Some(drag);
        self.transition_enabled = false;
        // Whatever was animating is abandoned; its completion must not settle anything.
        self.transition_id = self.transition_id.wrapping_add(1);
    }

    /// Moves to the absolute continuous position implied by the pointer.
    ///
    /// Returns `false` when no drag is open or the viewport has no usable width.
    pub fn drag_to(&mut self, pointer: f64, viewport_width: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let Some(offset) = offset_fraction(drag.anchor_pointer, pointer, viewport_width) else {
            return false;
        };
        self.position = (drag.anchor_position - offset).clamp(0.0, self.max_position);
        true
    }

    /// Closes the drag and snaps.
    ///
    /// More than half a viewport of travel snaps to the slide the strip has crossed into;
    /// anything less reverts to the anchor. Returns `None` when no drag was open.
    pub fn commit_drag(&mut self, pointer: f64, viewport_width: f64) -> Option<Commit> {
        let drag = self.drag.take()?;
        let anchor = Float::round(drag.anchor_position);
        let displacement = pointer - drag.anchor_pointer;
        let target = match offset_fraction(drag.anchor_pointer, pointer, viewport_width) {
            Some(offset) if Float::abs(displacement) > viewport_width / 2.0 => {
                Float::round(drag.anchor_position - offset)
            }
            _ => anchor,
        };
        ctrace!(
            displacement,
            viewport_width,
            from = self.position,
            to = target,
            "PositionController::commit_drag"
        );
        Some(if self.animate_to(target) {
            Commit::Animating
        } else {
            Commit::Settled
        })
    }

    /// Closes the drag and animates back to its anchor.
    pub fn cancel_drag(&mut self) -> Option<Commit> {
        let drag = self.drag.take()?;
        let anchor = Float::round(drag.anchor_position);
        Some(if self.animate_to(anchor) {
            Commit::Animating
        } else {
            Commit::Settled
        })
    }

    /// Places the strip at `position` without animating.
    ///
    /// Transitions stay disabled until [`Self::on_frame`], so the jump is painted once
    /// before anything can interpolate from it.
    pub fn jump_to(&mut self, position: f64) {
        self.position = position.clamp(0.0, self.max_position);
        self.transition_enabled = false;
        self.frame_pending = true;
        self.transition_id = self.transition_id.wrapping_add(1);
    }

    /// Render-frame boundary. Re-enables transitions after a jump.
    ///
    /// Returns `true` if a pending re-enable was applied.
    pub fn on_frame(&mut self) -> bool {
        if !self.frame_pending {
            return false;
        }
        self.frame_pending = false;
        if self.drag.is_none() {
            self.transition_enabled = true;
        }
        true
    }

    fn animate_to(&mut self, target: f64) -> bool {
        let target = target.clamp(0.0, self.max_position);
        if self.drag.is_none() && !self.frame_pending {
            self.transition_enabled = true;
        }
        if target == self.position {
            return false;
        }
        self.position = target;
        if self.transition_enabled {
            self.transition_id = self.transition_id.wrapping_add(1);
            true
        } else {
            // Not animated, so no transition end will report it.
            false
        }
    }
}

fn offset_fraction(anchor: f64, pointer: f64, viewport_width: f64) -> Option<f64> {
    if !pointer.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
        return None;
    }
    Some((pointer - anchor) / viewport_width)
}
