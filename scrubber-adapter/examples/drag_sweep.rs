use scrubber::{HitSlop, Layout, ScrubberOptions};
use scrubber_adapter::{Controller, PointerEvent};

fn main() {
    // Example: feed a raw pointer stream (as a host UI would) into the controller.
    //
    // An adapter would:
    // - call on_layout after every layout pass
    // - forward pointer down/move/up/cancel samples, local to the strip
    // - react to on_char_select (e.g. scroll a contact list to that section)
    let mut c = Controller::new(
        ScrubberOptions::<()>::with_labels(['#', 'A', 'B', 'C', 'D', 'E'].map(String::from))
            .with_hit_slop(Some(HitSlop::horizontal(12.0)))
            .with_on_char_select(Some(|label: &str| println!("jump to section {label}"))),
    );
    c.on_layout(Layout::new(20.0, 120.0));

    // A tap just left of the strip, inside the hit slop.
    c.on_pointer(PointerEvent::down(-6.0, 30.0, 0));
    c.on_pointer(PointerEvent::up(-6.0, 30.0, 40));

    // A drag down the strip.
    let mut now_ms = 100u64;
    c.on_pointer(PointerEvent::down(10.0, 2.0, now_ms));
    for step in 0..30 {
        now_ms += 16;
        let y = 2.0 + step as f32 * 4.0;
        if let Some(index) = c.on_pointer(PointerEvent::moved(10.0, y, now_ms)) {
            println!("t={now_ms} y={y} index={index}");
        }
    }
    c.on_pointer(PointerEvent::up(10.0, 118.0, now_ms + 16));
}
