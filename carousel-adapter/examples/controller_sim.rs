use carousel::CarouselOptions;
use carousel_adapter::{AnimatorOptions, Controller, FixedViewport, TouchEvent, Wakeup, WheelEvent};

fn main() -> carousel::Result<()> {
    // Example: a frame loop driving the controller with tween snapping, no UI objects involved.
    //
    // An adapter would:
    // - forward input events with the current clock
    // - ask next_wakeup() when to run again (next frame or a timer deadline)
    // - call on_frame() at frame boundaries and tick(now_ms) on every wakeup
    // - paint displayed_position() and the slides
    let images = (0..5).map(|i| format!("img-{i}")).collect();
    let mut c = Controller::new(
        CarouselOptions::new(images).with_shift_count(2),
        FixedViewport(360.0),
    )?
    .with_animator(AnimatorOptions::default());

    let mut now_ms = 0u64;
    c.on_wheel(WheelEvent { delta_y: -1.0 }, now_ms);
    run_until_idle(&mut c, &mut now_ms);

    c.on_touch_start(TouchEvent { pointer_x: 300.0 }, now_ms);
    c.on_touch_move(TouchEvent { pointer_x: 180.0 }, now_ms + 16);
    c.on_touch_end(TouchEvent { pointer_x: 60.0 }, now_ms + 32);
    now_ms += 32;
    run_until_idle(&mut c, &mut now_ms);

    println!(
        "done: window={:?} position={} centered={:?}",
        c.carousel().window().ids(),
        c.carousel().position(),
        c.carousel().centered_slide().map(|s| s.image.clone())
    );
    Ok(())
}

fn run_until_idle(c: &mut Controller<String, FixedViewport>, now_ms: &mut u64) {
    while let Some(wakeup) = c.next_wakeup() {
        *now_ms = match wakeup {
            Wakeup::Frame => *now_ms + 16,
            Wakeup::At(deadline) => deadline,
        };
        if let Some(r) = c.on_frame(*now_ms) {
            println!("t={now_ms} recycled at {:?} edge", r.edge);
        }
        if let Some(displayed) = c.tick(*now_ms) {
            if *now_ms % 64 == 0 {
                println!("t={now_ms} displayed={displayed:.3}");
            }
        }
    }
    println!(
        "t={now_ms} idle at position={} window={:?}",
        c.carousel().position(),
        c.carousel().window().ids()
    );
}
