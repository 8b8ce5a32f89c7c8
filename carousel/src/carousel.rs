use alloc::vec::Vec;

use num_traits::Float;

use crate::position::{Commit, DragState, PositionController};
use crate::window::{Recycled, SlideWindow, logical_image_index};
use crate::{CarouselOptions, ContentOrigin, Frame, RenderSlide, Result, SlideId, Step, Transform};

/// A headless infinite-loop carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or clocks.
/// - Your adapter forwards gestures (`step`, `begin_drag`, `drag_to`, `end_drag`) and
///   renderer notifications (`on_transition_end`, `on_frame`, `resize`).
/// - Rendering is exposed through `for_each_slide`/`collect_slides` plus `transform()`.
///
/// Every mutation goes through these entry points and is applied atomically, so there is no
/// partially updated state for a late callback to observe. For throttled input handling and
/// tween-driven snapping, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<T = alloc::string::String> {
    options: CarouselOptions<T>,
    window: SlideWindow,
    controller: PositionController,
}

impl<T> Carousel<T> {
    /// Creates a carousel centered in a fresh window.
    ///
    /// Fails only for an unusable `shift_count`.
    pub fn new(options: CarouselOptions<T>) -> Result<Self> {
        options.validate()?;
        let window = SlideWindow::new(options.shift_count);
        let controller = PositionController::new(window.center() as f64, window.max_position());
        cdebug!(
            shift_count = options.shift_count,
            images = options.images.len(),
            "Carousel::new"
        );
        Ok(Self {
            options,
            window,
            controller,
        })
    }

    pub fn options(&self) -> &CarouselOptions<T> {
        &self.options
    }

    pub fn images(&self) -> &[T] {
        &self.options.images
    }

    pub fn image_count(&self) -> usize {
        self.options.images.len()
    }

    /// Replaces the content. Window and position are kept; only the id folding changes.
    pub fn set_images(&mut self, images: Vec<T>) {
        cdebug!(images = images.len(), "Carousel::set_images");
        self.options.images = images;
    }

    pub fn window(&self) -> &SlideWindow {
        &self.window
    }

    pub fn position(&self) -> f64 {
        self.controller.position()
    }

    pub fn transition_enabled(&self) -> bool {
        self.controller.transition_enabled()
    }

    pub fn transition_id(&self) -> u64 {
        self.controller.transition_id()
    }

    pub fn needs_frame(&self) -> bool {
        self.controller.needs_frame()
    }

    pub fn drag(&self) -> Option<DragState> {
        self.controller.drag()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn step(&mut self, step: Step) -> bool {
        self.controller.step(step)
    }

    pub fn begin_drag(&mut self, pointer: f64) {
        self.controller.begin_drag(pointer);
    }

    pub fn drag_to(&mut self, pointer: f64, viewport_width: f64) -> bool {
        self.controller.drag_to(pointer, viewport_width)
    }

    /// Commits the open drag.
    ///
    /// When the snap target equals the current position no transition will run, so the
    /// settle check happens right away. Returns `false` if no drag was open.
    pub fn end_drag(&mut self, pointer: f64, viewport_width: f64) -> bool {
        match self.controller.commit_drag(pointer, viewport_width) {
            Some(Commit::Settled) => {
                self.settle();
                true
            }
            Some(Commit::Animating) => true,
            None => false,
        }
    }

    /// Abandons the open drag (e.g. touch cancel) and returns to its anchor.
    pub fn cancel_drag(&mut self) -> bool {
        match self.controller.cancel_drag() {
            Some(Commit::Settled) => {
                self.settle();
                true
            }
            Some(Commit::Animating) => true,
            None => false,
        }
    }

    /// The renderer finished animating toward the target issued as `transition_id`.
    ///
    /// Stale ids (a newer target was issued since) and completions arriving while a drag is
    /// open are ignored. Otherwise a settled position outside the safe zone recycles the
    /// window.
    pub fn on_transition_end(&mut self, transition_id: u64) -> Option<Recycled> {
        if transition_id != self.controller.transition_id() {
            cdebug!(
                transition_id,
                current = self.controller.transition_id(),
                "stale transition end ignored"
            );
            return None;
        }
        if self.controller.is_dragging() {
            cdebug!("recycle deferred: drag in progress");
            return None;
        }
        self.settle()
    }

    /// Render-frame boundary: re-enables transitions held back by a recycle or resize.
    ///
    /// A position that reached an edge while transitions were held never animated, so its
    /// settle check runs here.
    pub fn on_frame(&mut self) -> Option<Recycled> {
        if !self.controller.on_frame() {
            return None;
        }
        if self.controller.is_dragging() {
            return None;
        }
        self.settle()
    }

    /// The viewport changed size. Re-places an idle strip on its slot without animating.
    ///
    /// Never recycles. A resize during a drag is left alone; the next pointer move
    /// re-derives the position from the new width.
    pub fn resize(&mut self) {
        if self.controller.is_dragging() {
            cdebug!("resize during drag left uncorrected");
            return;
        }
        let placed = Float::round(self.controller.position());
        ctrace!(position = placed, "Carousel::resize");
        self.controller.jump_to(placed);
    }

    fn settle(&mut self) -> Option<Recycled> {
        let position = self.controller.position();
        let recycled = self.window.recycle(position)?;
        cdebug!(
            edge = ?recycled.edge,
            from_first = self.window.first(),
            to_first = recycled.window.first(),
            from_position = position,
            to_position = recycled.position,
            "recycle"
        );
        self.window = recycled.window;
        self.controller.jump_to(recycled.position);
        Some(recycled)
    }

    /// Maps a slide id to its image index under the configured content origin.
    pub fn image_index_for(&self, id: SlideId) -> Option<usize> {
        let id = match self.options.content_origin {
            ContentOrigin::CenteredOnFirst => id.saturating_sub(self.window.shift_count() as SlideId),
            ContentOrigin::Raw => id,
        };
        logical_image_index(id, self.image_count())
    }

    fn slide(&self, id: SlideId) -> Option<RenderSlide<'_, T>> {
        let image_index = self.image_index_for(id)?;
        let image = self.options.images.get(image_index)?;
        Some(RenderSlide {
            slot_key: id,
            image_index,
            image,
        })
    }

    /// Calls `f` for every materialized slide, in window order. Nothing is emitted when there
    /// are no images.
    pub fn for_each_slide(&self, mut f: impl FnMut(RenderSlide<'_, T>)) {
        for id in self.window.ids() {
            if let Some(slide) = self.slide(id) {
                f(slide);
            }
        }
    }

    pub fn collect_slides<'a>(&'a self, out: &mut Vec<RenderSlide<'a, T>>) {
        out.clear();
        out.reserve(self.window.len());
        out.extend(self.window.ids().filter_map(|id| self.slide(id)));
    }

    pub fn slides(&self) -> Vec<RenderSlide<'_, T>> {
        let mut out = Vec::new();
        self.collect_slides(&mut out);
        out
    }

    /// The slide nearest the viewport center.
    pub fn centered_slide(&self) -> Option<RenderSlide<'_, T>> {
        let slot = Float::round(self.controller.position()) as usize;
        self.slide(self.window.get(slot)?)
    }

    pub fn transform(&self) -> Transform {
        Transform::for_position(self.controller.position())
    }

    pub fn frame(&self) -> Frame {
        Frame {
            first_id: self.window.first(),
            last_id: self.window.last(),
            position: self.controller.position(),
            transform: self.transform(),
            transition_enabled: self.controller.transition_enabled(),
            transition_id: self.controller.transition_id(),
            dragging: self.controller.is_dragging(),
            needs_frame: self.controller.needs_frame(),
        }
    }
}
