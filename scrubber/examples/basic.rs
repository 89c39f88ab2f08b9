// Example: map offsets onto a letter strip and render its cells.
use scrubber::{Layout, Scrubber, ScrubberOptions};

fn main() {
    let letters: Vec<String> = ('A'..='Z').map(String::from).collect();
    let mut s = Scrubber::<()>::new(
        ScrubberOptions::with_labels(letters)
            .with_on_char_select(Some(|label: &str| println!("selected {label}"))),
    );
    s.on_layout(Layout::new(24.0, 520.0));

    s.for_each_cell(|cell, label| {
        if cell.index < 3 {
            println!("{label}: {:.1}..{:.1}", cell.start, cell.end());
        }
    });

    // A drag from the top to past the bottom edge, sampled every 7 units.
    let mut y = -10.0;
    while y <= 540.0 {
        s.handle(y);
        y += 7.0;
    }
    s.end_gesture();

    println!("offset 520 (bottom edge) -> {:?}", s.index_for_offset(520.0));
}
