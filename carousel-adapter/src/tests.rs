use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use carousel::{CarouselOptions, Edge, Step};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }
}

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("I{i}")).collect()
}

fn controller(shift_count: usize, n: usize) -> Controller<String, FixedViewport> {
    Controller::new(
        CarouselOptions::new(images(n)).with_shift_count(shift_count),
        FixedViewport(1000.0),
    )
    .unwrap()
}

fn centered(c: &Controller<String, FixedViewport>) -> String {
    c.carousel().centered_slide().unwrap().image.clone()
}

#[test]
fn wheel_is_throttled_to_one_step_per_window() {
    let mut c = controller(2, 5);
    assert!(c.on_wheel(WheelEvent { delta_y: 100.0 }, 0));
    assert_eq!(c.carousel().position(), 1.0);
    assert!(!c.on_wheel(WheelEvent { delta_y: 100.0 }, 50));
    assert_eq!(c.carousel().position(), 1.0);
    assert!(c.on_wheel(WheelEvent { delta_y: 100.0 }, 150));
    assert_eq!(c.carousel().position(), 0.0);
}

#[test]
fn negative_wheel_delta_moves_to_next_slide() {
    let mut c = controller(2, 5);
    assert!(c.on_wheel(WheelEvent { delta_y: -3.0 }, 0));
    assert_eq!(c.carousel().position(), 3.0);
    assert_eq!(c.carousel().transform().offset_percent, -300.0);
}

#[test]
fn zero_wheel_delta_does_not_consume_the_throttle() {
    let mut c = controller(2, 5);
    assert!(!c.on_wheel(WheelEvent { delta_y: 0.0 }, 0));
    assert!(c.on_wheel(WheelEvent { delta_y: -1.0 }, 1));
}

#[test]
fn inverted_wheel_flips_direction() {
    let mut c = controller(2, 5).with_gestures(GestureOptions::default().with_invert_wheel(true));
    c.on_wheel(WheelEvent { delta_y: 100.0 }, 0);
    assert_eq!(c.carousel().position(), 3.0);
}

#[test]
fn touch_drag_tracks_absolute_position_and_snaps() {
    let mut c = controller(2, 5);
    c.on_touch_start(TouchEvent { pointer_x: 0.0 }, 0);
    assert!(c.on_touch_move(TouchEvent { pointer_x: -250.0 }, 0));
    assert_eq!(c.carousel().position(), 2.25);
    assert!(!c.on_touch_move(TouchEvent { pointer_x: -450.0 }, 50));
    assert_eq!(c.carousel().position(), 2.25);
    assert!(c.on_touch_end(TouchEvent { pointer_x: -600.0 }, 60));
    assert_eq!(c.carousel().position(), 3.0);
    assert!(c.carousel().transition_enabled());
    assert!(!c.carousel().is_dragging());
}

#[test]
fn short_touch_drag_snaps_back() {
    let mut c = controller(2, 5);
    c.on_touch_start(TouchEvent { pointer_x: 100.0 }, 0);
    c.on_touch_move(TouchEvent { pointer_x: 500.0 }, 10);
    c.on_touch_end(TouchEvent { pointer_x: 500.0 }, 20);
    assert_eq!(c.carousel().position(), 2.0);
}

#[test]
fn new_touch_start_is_not_throttled() {
    let mut c = controller(2, 5);
    c.on_touch_start(TouchEvent { pointer_x: 0.0 }, 0);
    assert!(c.on_touch_move(TouchEvent { pointer_x: 100.0 }, 0));
    c.on_touch_end(TouchEvent { pointer_x: 100.0 }, 5);

    c.on_touch_start(TouchEvent { pointer_x: 0.0 }, 10);
    assert!(c.on_touch_move(TouchEvent { pointer_x: 250.0 }, 20));
    assert_eq!(c.carousel().position(), 1.75);
}

#[test]
fn touch_move_without_start_is_ignored() {
    let mut c = controller(2, 5);
    assert!(!c.on_touch_move(TouchEvent { pointer_x: 300.0 }, 0));
    assert!(!c.on_touch_end(TouchEvent { pointer_x: 300.0 }, 0));
    assert_eq!(c.carousel().position(), 2.0);
}

#[test]
fn touch_cancel_returns_to_anchor() {
    let mut c = controller(2, 5);
    c.on_touch_start(TouchEvent { pointer_x: 0.0 }, 0);
    c.on_touch_move(TouchEvent { pointer_x: -750.0 }, 0);
    assert!(c.on_touch_cancel(10));
    assert_eq!(c.carousel().position(), 2.0);
}

#[test]
fn wheel_during_drag_rounds_in_travel_direction() {
    let mut c = controller(2, 5);
    c.on_touch_start(TouchEvent { pointer_x: 0.0 }, 0);
    c.on_touch_move(TouchEvent { pointer_x: -250.0 }, 0);
    c.on_wheel(WheelEvent { delta_y: -1.0 }, 10);
    assert_eq!(c.carousel().position(), 3.0);
    assert!(!c.carousel().is_dragging());
    assert!(!c.on_touch_end(TouchEvent { pointer_x: -250.0 }, 20));
}

#[test]
fn arrow_keys_are_suppressed_but_inert_by_default() {
    let mut c = controller(1, 3);
    let outcome = c.on_key(KeyEvent { key: Key::ArrowRight }, 0);
    assert!(outcome.prevent_default);
    assert!(!outcome.handled);
    let outcome = c.on_key(KeyEvent { key: Key::from_name("ArrowLeft") }, 1);
    assert!(outcome.prevent_default);
    assert_eq!(c.carousel().position(), 1.0);

    let outcome = c.on_key(KeyEvent { key: Key::from_name("Enter") }, 2);
    assert_eq!(outcome, KeyOutcome::default());
}

#[test]
fn arrow_keys_navigate_when_enabled() {
    let mut c = controller(2, 5)
        .with_gestures(GestureOptions::default().with_keyboard(KeyboardMode::Navigate));
    let outcome = c.on_key(KeyEvent { key: Key::ArrowRight }, 0);
    assert!(outcome.prevent_default && outcome.handled);
    assert_eq!(c.carousel().position(), 3.0);

    // Throttled.
    assert!(!c.on_key(KeyEvent { key: Key::ArrowLeft }, 10).handled);
    assert!(c.on_key(KeyEvent { key: Key::ArrowLeft }, 150).handled);
    assert_eq!(c.carousel().position(), 2.0);
}

#[test]
fn resize_is_debounced_and_never_recycles() {
    let mut c = controller(1, 3);
    c.carousel_mut().step(Step::Next);
    c.on_resize(ResizeEvent, 0);
    c.on_resize(ResizeEvent, 50);
    assert_eq!(c.next_wakeup(), Some(Wakeup::At(150)));

    c.tick(100);
    assert!(!c.carousel().needs_frame());
    c.tick(150);
    assert!(c.carousel().needs_frame());
    assert!(!c.carousel().transition_enabled());
    assert_eq!(c.next_wakeup(), Some(Wakeup::Frame));
    assert_eq!(c.carousel().position(), 2.0);
    assert_eq!(c.carousel().window().first(), 0);
}

#[test]
fn native_transition_end_recycles_at_edge() {
    let mut c = controller(1, 3);
    c.on_wheel(WheelEvent { delta_y: -1.0 }, 0);
    let before = centered(&c);
    let id = c.frame().transition_id;

    let recycled = c.on_transition_end(id, 300).unwrap();
    assert_eq!(recycled.edge, Edge::High);
    assert_eq!(centered(&c), before);
    assert_eq!(c.next_wakeup(), Some(Wakeup::Frame));
    assert_eq!(c.on_frame(316), None);
    assert!(c.carousel().transition_enabled());
    assert_eq!(c.next_wakeup(), None);
}

#[test]
fn stale_native_transition_end_is_ignored() {
    let mut c = controller(1, 3);
    c.on_wheel(WheelEvent { delta_y: -1.0 }, 0);
    let stale = c.frame().transition_id;
    c.on_wheel(WheelEvent { delta_y: 1.0 }, 200);
    assert_eq!(c.on_transition_end(stale, 250), None);
    assert_eq!(c.carousel().position(), 1.0);
}

#[test]
fn tween_drives_snap_and_recycle() {
    let mut c = controller(1, 3).with_animator(AnimatorOptions::default());
    assert_eq!(centered(&c), "I0");
    c.on_wheel(WheelEvent { delta_y: -1.0 }, 0);
    assert_eq!(centered(&c), "I1");
    assert!(c.is_animating());

    let mut last = c.displayed_position();
    for now_ms in [16u64, 48, 96, 160, 240] {
        let displayed = c.tick(now_ms).unwrap();
        assert!(displayed >= last);
        last = displayed;
    }
    assert_eq!(c.tick(300), Some(1.0));
    assert!(!c.is_animating());
    assert_eq!(c.carousel().window().ids().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(c.carousel().position(), 1.0);
    assert_eq!(centered(&c), "I1");

    assert_eq!(c.next_wakeup(), Some(Wakeup::Frame));
    c.on_frame(316);
    assert_eq!(c.next_wakeup(), None);
    assert_eq!(c.tick(332), None);
}

#[test]
fn shutdown_releases_pending_timers() {
    let mut c = controller(2, 5).with_animator(AnimatorOptions::default());
    c.on_wheel(WheelEvent { delta_y: -1.0 }, 0);
    c.on_resize(ResizeEvent, 0);
    c.shutdown();
    assert_eq!(c.next_wakeup(), None);
    assert!(!c.is_animating());
    assert_eq!(c.tick(1000), None);
    assert_eq!(c.carousel().position(), 3.0);
}

#[test]
fn empty_carousel_accepts_all_input() {
    let mut c = controller(2, 0);
    c.on_wheel(WheelEvent { delta_y: 1.0 }, 0);
    c.on_touch_start(TouchEvent { pointer_x: 0.0 }, 10);
    c.on_touch_move(TouchEvent { pointer_x: 800.0 }, 20);
    c.on_touch_end(TouchEvent { pointer_x: 800.0 }, 30);
    c.on_key(KeyEvent { key: Key::ArrowLeft }, 40);
    assert!(c.carousel().slides().is_empty());
    assert!(c.carousel().centered_slide().is_none());
}

#[test]
fn throttle_never_fires_twice_within_its_interval() {
    let mut rng = Lcg::new(42);
    for delay in [1u64, 16, 150, 500] {
        let mut t = Throttle::new(delay);
        let mut now = 0u64;
        let mut fired = Vec::new();
        for _ in 0..2000 {
            now += rng.gen_range_u64(0, delay * 2 + 1);
            if t.try_acquire(now) {
                fired.push(now);
            }
        }
        assert!(!fired.is_empty());
        for pair in fired.windows(2) {
            assert!(pair[1] - pair[0] >= delay);
        }
    }
}
