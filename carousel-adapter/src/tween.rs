use carousel::Frame;

/// A small tween over carousel positions, for renderers without native transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t) as f64;
        if eased >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * eased
    }

    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatorOptions {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimatorOptions {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: Easing::SmoothStep,
        }
    }
}

/// Plays the carousel's snap transitions on an adapter clock.
///
/// Feed it every [`Frame`] after the carousel changes (`sync`) and call `tick` once per
/// render frame. When an animation reaches its target, `tick` returns the transition id that
/// was current when the animation started, ready for `Carousel::on_transition_end`.
#[derive(Clone, Debug)]
pub struct SnapAnimator {
    options: AnimatorOptions,
    displayed: f64,
    active: Option<(Tween, u64)>,
}

impl SnapAnimator {
    pub fn new(options: AnimatorOptions, position: f64) -> Self {
        Self {
            options,
            displayed: position,
            active: None,
        }
    }

    pub fn options(&self) -> &AnimatorOptions {
        &self.options
    }

    /// The position to paint this frame.
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn stop(&mut self) {
        self.active = None;
    }

    pub fn sync(&mut self, frame: &Frame, now_ms: u64) {
        if !frame.transition_enabled {
            // Drags and recycle jumps are painted as-is.
            self.displayed = frame.position;
            self.active = None;
            return;
        }
        if let Some((tween, id)) = &mut self.active {
            if *id != frame.transition_id || tween.to != frame.position {
                tween.retarget(now_ms, frame.position, self.options.duration_ms);
                *id = frame.transition_id;
            }
            return;
        }
        if self.displayed != frame.position {
            let tween = Tween::new(
                self.displayed,
                frame.position,
                now_ms,
                self.options.duration_ms,
                self.options.easing,
            );
            self.active = Some((tween, frame.transition_id));
        }
    }

    /// Advances the animation. Returns the finished transition's id on completion.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let (tween, id) = self.active?;
        self.displayed = tween.sample(now_ms);
        if !tween.is_done(now_ms) {
            return None;
        }
        self.displayed = tween.to;
        self.active = None;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(position: f64, transition_id: u64, transition_enabled: bool) -> Frame {
        Frame {
            position,
            transition_id,
            transition_enabled,
            ..Frame::default()
        }
    }

    #[test]
    fn tween_reaches_target_exactly() {
        let t = Tween::new(2.0, 3.0, 100, 300, Easing::EaseInOutCubic);
        assert_eq!(t.sample(100), 2.0);
        assert!(t.sample(250) > 2.0 && t.sample(250) < 3.0);
        assert_eq!(t.sample(400), 3.0);
        assert!(t.is_done(400));
    }

    #[test]
    fn animator_reports_id_captured_at_start() {
        let mut a = SnapAnimator::new(AnimatorOptions::default(), 2.0);
        a.sync(&frame(3.0, 7, true), 0);
        assert!(a.is_animating());
        assert_eq!(a.tick(150), None);
        assert!(a.displayed() > 2.0 && a.displayed() < 3.0);
        assert_eq!(a.tick(300), Some(7));
        assert_eq!(a.displayed(), 3.0);
        assert!(!a.is_animating());
    }

    #[test]
    fn animator_retargets_from_current_sample() {
        let mut a = SnapAnimator::new(AnimatorOptions::default(), 2.0);
        a.sync(&frame(3.0, 1, true), 0);
        a.tick(150);
        let mid = a.displayed();
        a.sync(&frame(4.0, 2, true), 150);
        assert_eq!(a.tick(150), None);
        assert_eq!(a.displayed(), mid);
        assert_eq!(a.tick(450), Some(2));
        assert_eq!(a.displayed(), 4.0);
    }

    #[test]
    fn disabled_transition_paints_immediately() {
        let mut a = SnapAnimator::new(AnimatorOptions::default(), 2.0);
        a.sync(&frame(3.0, 1, true), 0);
        a.sync(&frame(1.0, 2, false), 50);
        assert!(!a.is_animating());
        assert_eq!(a.displayed(), 1.0);
        assert_eq!(a.tick(500), None);
    }
}
