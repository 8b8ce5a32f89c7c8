// Example: step through a small loop and watch the window recycle at its edges.
use carousel::{Carousel, CarouselOptions, Step};

fn main() -> carousel::Result<()> {
    let images = ["sunrise", "harbor", "forest"].map(String::from).to_vec();
    let mut c = Carousel::new(CarouselOptions::new(images).with_shift_count(2))?;

    for _ in 0..4 {
        c.step(Step::Next);
        // A native renderer reports the end of its transition with the id it was started with.
        if let Some(r) = c.on_transition_end(c.transition_id()) {
            println!("recycled at {:?} edge, window={:?}", r.edge, c.window().ids());
            // The jump is painted before transitions come back.
            c.on_frame();
        }
        let centered = c.centered_slide().map(|s| s.image.as_str());
        println!(
            "position={} offset={}% centered={centered:?}",
            c.position(),
            c.transform().offset_percent
        );
    }

    let keys: Vec<_> = c.slides().iter().map(|s| s.slot_key).collect();
    println!("slot keys={keys:?}");
    Ok(())
}
