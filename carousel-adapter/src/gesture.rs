use carousel::{Carousel, Step};

use crate::{Debounce, Key, KeyEvent, KeyOutcome, ResizeEvent, Throttle, TouchEvent, WheelEvent};

/// Whether arrow keys navigate or are only kept from scrolling the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardMode {
    /// Arrow keys are suppressed and do nothing else.
    #[default]
    Inert,
    /// `ArrowRight` steps to the next slide, `ArrowLeft` to the previous one.
    Navigate,
}

/// Per-channel rate limits and input mapping for [`GestureTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureOptions {
    pub wheel_throttle_ms: u64,
    pub touch_move_throttle_ms: u64,
    pub key_throttle_ms: u64,
    pub resize_debounce_ms: u64,
    pub keyboard: KeyboardMode,
    /// By default a positive `delta_y` steps to the previous slide. Set to flip that.
    pub invert_wheel: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            wheel_throttle_ms: 150,
            touch_move_throttle_ms: 150,
            key_throttle_ms: 150,
            resize_debounce_ms: 100,
            keyboard: KeyboardMode::Inert,
            invert_wheel: false,
        }
    }
}

impl GestureOptions {
    pub fn with_wheel_throttle_ms(mut self, ms: u64) -> Self {
        self.wheel_throttle_ms = ms;
        self
    }

    pub fn with_touch_move_throttle_ms(mut self, ms: u64) -> Self {
        self.touch_move_throttle_ms = ms;
        self
    }

    pub fn with_key_throttle_ms(mut self, ms: u64) -> Self {
        self.key_throttle_ms = ms;
        self
    }

    pub fn with_resize_debounce_ms(mut self, ms: u64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }

    pub fn with_keyboard(mut self, keyboard: KeyboardMode) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_invert_wheel(mut self, invert_wheel: bool) -> Self {
        self.invert_wheel = invert_wheel;
        self
    }
}

/// Normalizes wheel, touch and keyboard input into carousel steps and drags.
///
/// Each channel has its own limiter. Only the touch *move* stream is throttled; touch
/// start and end change drag state and always go through. The tracker never touches the
/// position itself, it only calls the carousel's entry points.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    options: GestureOptions,
    wheel: Throttle,
    touch_move: Throttle,
    keys: Throttle,
    resize: Debounce,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}

impl GestureTracker {
    pub fn new(options: GestureOptions) -> Self {
        Self {
            wheel: Throttle::new(options.wheel_throttle_ms),
            touch_move: Throttle::new(options.touch_move_throttle_ms),
            keys: Throttle::new(options.key_throttle_ms),
            resize: Debounce::new(options.resize_debounce_ms),
            options,
        }
    }

    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// One step per throttle window, in the direction of `delta_y`.
    pub fn on_wheel<T>(&mut self, c: &mut Carousel<T>, ev: WheelEvent, now_ms: u64) -> bool {
        let sign = if self.options.invert_wheel {
            -ev.delta_y
        } else {
            ev.delta_y
        };
        let Some(step) = Step::from_sign(sign) else {
            return false;
        };
        if !self.wheel.try_acquire(now_ms) {
            atrace!(now_ms, delta_y = ev.delta_y, "wheel dropped by throttle");
            return false;
        }
        c.step(step)
    }

    pub fn on_touch_start<T>(&mut self, c: &mut Carousel<T>, ev: TouchEvent) {
        // A new drag gets its first move immediately.
        self.touch_move.reset();
        c.begin_drag(ev.pointer_x);
    }

    pub fn on_touch_move<T>(
        &mut self,
        c: &mut Carousel<T>,
        ev: TouchEvent,
        viewport_width: f64,
        now_ms: u64,
    ) -> bool {
        if !c.is_dragging() {
            return false;
        }
        if !self.touch_move.try_acquire(now_ms) {
            atrace!(now_ms, pointer_x = ev.pointer_x, "touch move dropped by throttle");
            return false;
        }
        c.drag_to(ev.pointer_x, viewport_width)
    }

    pub fn on_touch_end<T>(
        &mut self,
        c: &mut Carousel<T>,
        ev: TouchEvent,
        viewport_width: f64,
    ) -> bool {
        c.end_drag(ev.pointer_x, viewport_width)
    }

    pub fn on_touch_cancel<T>(&mut self, c: &mut Carousel<T>) -> bool {
        c.cancel_drag()
    }

    /// Arrow keys are always suppressed; they step only in [`KeyboardMode::Navigate`].
    pub fn on_key<T>(&mut self, c: &mut Carousel<T>, ev: KeyEvent, now_ms: u64) -> KeyOutcome {
        if !ev.key.is_arrow() {
            return KeyOutcome::default();
        }
        let mut outcome = KeyOutcome {
            prevent_default: true,
            handled: false,
        };
        if self.options.keyboard == KeyboardMode::Inert {
            return outcome;
        }
        if !self.keys.try_acquire(now_ms) {
            atrace!(now_ms, key = ?ev.key, "key dropped by throttle");
            return outcome;
        }
        let step = match ev.key {
            Key::ArrowRight => Step::Next,
            _ => Step::Previous,
        };
        outcome.handled = c.step(step);
        outcome
    }

    /// Restarts the resize quiet period. The carousel is re-placed by [`Self::poll_resize`].
    pub fn on_resize(&mut self, _ev: ResizeEvent, now_ms: u64) {
        self.resize.call(now_ms, ());
    }

    /// Applies a debounced resize once input has been quiet long enough.
    pub fn poll_resize<T>(&mut self, c: &mut Carousel<T>, now_ms: u64) -> bool {
        if self.resize.poll(now_ms).is_none() {
            return false;
        }
        adebug!(now_ms, "debounced resize fired");
        c.resize();
        true
    }

    /// The next time `poll_resize` has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        self.resize.deadline()
    }

    /// Drops all limiter state and any pending resize.
    pub fn reset(&mut self) {
        self.wheel.reset();
        self.touch_move.reset();
        self.keys.reset();
        self.resize.cancel();
    }
}
