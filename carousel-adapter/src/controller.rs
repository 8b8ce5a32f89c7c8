use carousel::{Carousel, CarouselOptions, Frame, Recycled};

use crate::{
    AnimatorOptions, GestureOptions, GestureTracker, KeyEvent, KeyOutcome, ResizeEvent,
    SnapAnimator, TouchEvent, WheelEvent,
};

/// The one capability the controller needs from the view: its current width along the
/// carousel axis. Read at handling time, never cached.
pub trait CarouselView {
    fn viewport_width(&self) -> f64;
}

/// A view with a width the adapter updates by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedViewport(pub f64);

impl CarouselView for FixedViewport {
    fn viewport_width(&self) -> f64 {
        self.0
    }
}

impl<V: CarouselView + ?Sized> CarouselView for &V {
    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }
}

/// When the adapter should call [`Controller::tick`] next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wakeup {
    /// On the next render frame.
    Frame,
    /// At an absolute time, in the adapter's clock.
    At(u64),
}

/// A framework-neutral controller that wires a [`Carousel`], a [`GestureTracker`] and an
/// optional [`SnapAnimator`] to an injected view.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_*` when input events occur
/// - `on_transition_end` / `on_frame` when the renderer animates natively
/// - `tick(now_ms)` each frame/timer tick (for debounced resize and tween snapping)
///
/// Nothing here outlives the controller: `shutdown` (or dropping it) releases every pending
/// timer and frame request, since they are plain state the adapter polls.
#[derive(Clone, Debug)]
pub struct Controller<T, V> {
    carousel: Carousel<T>,
    gestures: GestureTracker,
    animator: Option<SnapAnimator>,
    view: V,
}

impl<T, V: CarouselView> Controller<T, V> {
    pub fn new(options: CarouselOptions<T>, view: V) -> carousel::Result<Self> {
        Ok(Self::from_carousel(Carousel::new(options)?, view))
    }

    pub fn from_carousel(carousel: Carousel<T>, view: V) -> Self {
        Self {
            carousel,
            gestures: GestureTracker::default(),
            animator: None,
            view,
        }
    }

    pub fn with_gestures(mut self, options: GestureOptions) -> Self {
        self.gestures = GestureTracker::new(options);
        self
    }

    /// Plays snap transitions with a tween instead of relying on the renderer.
    pub fn with_animator(mut self, options: AnimatorOptions) -> Self {
        self.animator = Some(SnapAnimator::new(options, self.carousel.position()));
        self
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel<T> {
        self.carousel
    }

    pub fn gestures(&self) -> &GestureTracker {
        &self.gestures
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn frame(&self) -> Frame {
        self.carousel.frame()
    }

    /// The position to paint: the tween sample when animating, the carousel's otherwise.
    pub fn displayed_position(&self) -> f64 {
        match &self.animator {
            Some(a) => a.displayed(),
            None => self.carousel.position(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.as_ref().is_some_and(SnapAnimator::is_animating)
    }

    pub fn on_wheel(&mut self, ev: WheelEvent, now_ms: u64) -> bool {
        let moved = self.gestures.on_wheel(&mut self.carousel, ev, now_ms);
        self.sync(now_ms);
        moved
    }

    pub fn on_touch_start(&mut self, ev: TouchEvent, now_ms: u64) {
        self.gestures.on_touch_start(&mut self.carousel, ev);
        self.sync(now_ms);
    }

    pub fn on_touch_move(&mut self, ev: TouchEvent, now_ms: u64) -> bool {
        let width = self.viewport_width();
        let moved = self
            .gestures
            .on_touch_move(&mut self.carousel, ev, width, now_ms);
        self.sync(now_ms);
        moved
    }

    pub fn on_touch_end(&mut self, ev: TouchEvent, now_ms: u64) -> bool {
        let width = self.viewport_width();
        let ended = self.gestures.on_touch_end(&mut self.carousel, ev, width);
        self.sync(now_ms);
        ended
    }

    pub fn on_touch_cancel(&mut self, now_ms: u64) -> bool {
        let cancelled = self.gestures.on_touch_cancel(&mut self.carousel);
        self.sync(now_ms);
        cancelled
    }

    pub fn on_key(&mut self, ev: KeyEvent, now_ms: u64) -> KeyOutcome {
        let outcome = self.gestures.on_key(&mut self.carousel, ev, now_ms);
        self.sync(now_ms);
        outcome
    }

    pub fn on_resize(&mut self, ev: ResizeEvent, now_ms: u64) {
        self.gestures.on_resize(ev, now_ms);
    }

    /// Native-transition renderers report completion here.
    pub fn on_transition_end(&mut self, transition_id: u64, now_ms: u64) -> Option<Recycled> {
        let recycled = self.carousel.on_transition_end(transition_id);
        self.sync(now_ms);
        recycled
    }

    /// Call at each render-frame boundary while [`Self::next_wakeup`] asks for frames.
    pub fn on_frame(&mut self, now_ms: u64) -> Option<Recycled> {
        let recycled = self.carousel.on_frame();
        self.sync(now_ms);
        recycled
    }

    /// Advances timers and the tween.
    ///
    /// - Applies a debounced resize whose quiet period has elapsed.
    /// - If a tween is active, samples it; on completion the carousel settles with the
    ///   transition id captured when the tween started.
    ///
    /// Returns the displayed position while a tween is running, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if self.gestures.poll_resize(&mut self.carousel, now_ms) {
            self.sync(now_ms);
        }
        let animator = self.animator.as_mut()?;
        let was_animating = animator.is_animating();
        if let Some(id) = animator.tick(now_ms) {
            self.carousel.on_transition_end(id);
            self.sync(now_ms);
        }
        was_animating.then(|| self.displayed_position())
    }

    /// The earliest moment the controller has work, if any.
    pub fn next_wakeup(&self) -> Option<Wakeup> {
        if self.carousel.needs_frame() || self.is_animating() {
            return Some(Wakeup::Frame);
        }
        self.gestures.next_deadline().map(Wakeup::At)
    }

    /// Cancels pending timers, frame work and animation. The carousel keeps its state.
    pub fn shutdown(&mut self) {
        adebug!("Controller::shutdown");
        self.gestures.reset();
        if let Some(animator) = &mut self.animator {
            animator.stop();
        }
    }

    fn viewport_width(&self) -> f64 {
        let width = self.view.viewport_width();
        if !(width.is_finite() && width > 0.0) {
            awarn!(width, "unusable viewport width; drag input ignored");
        }
        width
    }

    fn sync(&mut self, now_ms: u64) {
        if let Some(animator) = &mut self.animator {
            animator.sync(&self.carousel.frame(), now_ms);
        }
    }
}
