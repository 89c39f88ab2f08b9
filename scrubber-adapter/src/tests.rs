use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use scrubber::{HitSlop, Layout, ScrubberOptions};

const LAYOUT: Layout = Layout {
    width: 20.0,
    height: 90.0,
};

fn controller(options: ScrubberOptions) -> (Controller, Arc<Mutex<Vec<String>>>) {
    let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let options = options.with_on_char_select(Some({
        let log = Arc::clone(&log);
        move |label: &str| log.lock().unwrap().push(label.to_string())
    }));
    let mut c = Controller::new(options);
    c.on_layout(LAYOUT);
    (c, log)
}

fn abc() -> ScrubberOptions {
    ScrubberOptions::with_labels(["A", "B", "C"])
}

fn logged(log: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    log.lock().unwrap().clone()
}

fn race_events(
    race: &mut GestureRace,
    hit_slop: HitSlop,
    event: PointerEvent,
) -> Vec<GestureEvent> {
    let mut out = Vec::new();
    race.on_pointer(event, LAYOUT, hit_slop, &mut |g| out.push(g));
    out
}

#[test]
fn tap_fires_on_release() {
    let (mut c, log) = controller(abc());
    assert_eq!(c.on_pointer(PointerEvent::down(10.0, 45.0, 0)), None);
    assert!(c.is_tracking());
    assert_eq!(c.on_pointer(PointerEvent::up(10.0, 45.0, 50)), Some(1));
    assert!(!c.is_tracking());
    assert_eq!(logged(&log), ["B"]);
}

#[test]
fn tapping_the_same_letter_twice_fires_twice() {
    let (mut c, log) = controller(abc());
    for t in [0u64, 100] {
        c.on_pointer(PointerEvent::down(10.0, 10.0, t));
        c.on_pointer(PointerEvent::up(10.0, 10.0, t + 30));
    }
    assert_eq!(logged(&log), ["A", "A"]);
}

#[test]
fn drag_sweep_fires_once_per_letter() {
    let (mut c, log) = controller(abc());
    c.on_pointer(PointerEvent::down(10.0, 5.0, 0));
    let mut fired = Vec::new();
    for y in 6..=85u32 {
        if let Some(i) = c.on_pointer(PointerEvent::moved(10.0, y as f32, y as u64)) {
            fired.push((y, i));
        }
    }
    c.on_pointer(PointerEvent::up(10.0, 85.0, 100));

    // Activation happens at 4 units of travel; letters change at 30 and 60.
    assert_eq!(fired, [(9, 0), (30, 1), (60, 2)]);
    assert_eq!(logged(&log), ["A", "B", "C"]);
}

#[test]
fn drag_back_over_a_letter_fires_again() {
    let (mut c, log) = controller(abc());
    c.on_pointer(PointerEvent::down(10.0, 40.0, 0));
    for y in [50.0, 70.0, 40.0, 45.0] {
        c.on_pointer(PointerEvent::moved(10.0, y, 10));
    }
    c.on_pointer(PointerEvent::up(10.0, 45.0, 20));
    assert_eq!(logged(&log), ["B", "C", "B"]);
}

#[test]
fn drag_beyond_bounds_is_clamped() {
    let (mut c, log) = controller(abc());
    c.on_pointer(PointerEvent::down(10.0, 80.0, 0));
    c.on_pointer(PointerEvent::moved(10.0, 200.0, 10));
    c.on_pointer(PointerEvent::moved(10.0, -50.0, 20));
    c.on_pointer(PointerEvent::up(10.0, -50.0, 30));
    assert_eq!(logged(&log), ["C", "A"]);
}

#[test]
fn small_wobble_still_counts_as_tap() {
    let mut race = GestureRace::default();
    let slop = HitSlop::default();
    assert!(race_events(&mut race, slop, PointerEvent::down(10.0, 45.0, 0)).is_empty());
    assert!(race_events(&mut race, slop, PointerEvent::moved(11.0, 47.0, 10)).is_empty());
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::up(11.0, 47.0, 20)),
        [GestureEvent::Tap { y: 47.0 }, GestureEvent::Finalize]
    );
}

#[test]
fn pan_activation_cancels_tap() {
    let mut race = GestureRace::default();
    let slop = HitSlop::default();
    race_events(&mut race, slop, PointerEvent::down(10.0, 45.0, 0));
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::moved(10.0, 50.0, 10)),
        [GestureEvent::PanChange { y: 50.0 }]
    );
    assert_eq!(race.tap().state(), RecognizerState::Failed);
    assert!(race.pan().is_active());
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::up(10.0, 50.0, 20)),
        [GestureEvent::Finalize]
    );
    assert!(!race.is_tracking());
}

#[test]
fn long_press_is_not_a_tap() {
    let mut race = GestureRace::default();
    let slop = HitSlop::default();
    race_events(&mut race, slop, PointerEvent::down(10.0, 45.0, 0));
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::up(10.0, 45.0, 501)),
        [GestureEvent::Finalize]
    );

    race_events(&mut race, slop, PointerEvent::down(10.0, 45.0, 1000));
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::up(10.0, 45.0, 1500)),
        [GestureEvent::Tap { y: 45.0 }, GestureEvent::Finalize]
    );
}

#[test]
fn tap_fails_when_pointer_leaves_region() {
    let mut race = GestureRace::default();
    let slop = HitSlop::default();
    race_events(&mut race, slop, PointerEvent::down(19.0, 45.0, 0));
    // Two units of travel: too little for a pan, but outside the container.
    race_events(&mut race, slop, PointerEvent::moved(21.0, 45.0, 10));
    assert_eq!(race.tap().state(), RecognizerState::Failed);
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::up(19.0, 45.0, 20)),
        [GestureEvent::Finalize]
    );
}

#[test]
fn hit_slop_extends_taps_but_not_pans() {
    let slop = HitSlop::horizontal(10.0);

    let mut race = GestureRace::default();
    race_events(&mut race, slop, PointerEvent::down(-8.0, 5.0, 0));
    assert_eq!(race.tap().state(), RecognizerState::Began);
    assert_eq!(race.pan().state(), RecognizerState::Idle);
    assert!(race_events(&mut race, slop, PointerEvent::moved(-8.0, 50.0, 10)).is_empty());
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::up(-8.0, 50.0, 20)),
        [GestureEvent::Tap { y: 50.0 }, GestureEvent::Finalize]
    );

    // Without slop the same touch never begins.
    let mut race = GestureRace::default();
    let none = HitSlop::default();
    assert!(race_events(&mut race, none, PointerEvent::down(-8.0, 45.0, 0)).is_empty());
    assert!(!race.is_tracking());
    assert!(race_events(&mut race, none, PointerEvent::up(-8.0, 45.0, 10)).is_empty());
}

#[test]
fn controller_uses_scrubber_hit_slop() {
    let (mut c, log) = controller(abc().with_hit_slop(Some(HitSlop::uniform(10.0))));
    c.on_pointer(PointerEvent::down(25.0, 95.0, 0));
    assert_eq!(c.on_pointer(PointerEvent::up(25.0, 95.0, 10)), Some(2));

    c.scrubber_mut().set_hit_slop(None);
    c.on_pointer(PointerEvent::down(25.0, 95.0, 100));
    assert_eq!(c.on_pointer(PointerEvent::up(25.0, 95.0, 110)), None);

    assert_eq!(logged(&log), ["C"]);
}

#[test]
fn cancel_resets_selection_for_next_gesture() {
    let (mut c, log) = controller(abc());
    c.on_pointer(PointerEvent::down(10.0, 5.0, 0));
    assert_eq!(c.on_pointer(PointerEvent::moved(10.0, 50.0, 10)), Some(1));
    c.cancel(20);
    assert!(!c.is_tracking());
    assert_eq!(c.scrubber().selected_index(), None);

    c.on_pointer(PointerEvent::down(10.0, 50.0, 30));
    assert_eq!(c.on_pointer(PointerEvent::moved(10.0, 55.0, 40)), Some(1));
    assert_eq!(logged(&log), ["B", "B"]);
}

#[test]
fn pointer_cancel_event_finalizes() {
    let mut race = GestureRace::default();
    let slop = HitSlop::default();
    race_events(&mut race, slop, PointerEvent::down(10.0, 45.0, 0));
    race_events(&mut race, slop, PointerEvent::moved(10.0, 60.0, 10));
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::cancel(20)),
        [GestureEvent::Finalize]
    );
    // Nothing left to cancel.
    assert!(race_events(&mut race, slop, PointerEvent::cancel(30)).is_empty());
}

#[test]
fn down_while_tracking_finalizes_previous_sequence() {
    let mut race = GestureRace::default();
    let slop = HitSlop::default();
    race_events(&mut race, slop, PointerEvent::down(10.0, 45.0, 0));
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::down(10.0, 60.0, 10)),
        [GestureEvent::Finalize]
    );
    assert!(race.is_tracking());
}

#[test]
fn empty_labels_never_fire() {
    let (mut c, log) = controller(ScrubberOptions::with_labels(Vec::<String>::new()));
    c.on_pointer(PointerEvent::down(10.0, 45.0, 0));
    c.on_pointer(PointerEvent::up(10.0, 45.0, 10));
    c.on_pointer(PointerEvent::down(10.0, 5.0, 20));
    for y in [20.0, 40.0, 80.0] {
        assert_eq!(c.on_pointer(PointerEvent::moved(10.0, y, 30)), None);
    }
    c.on_pointer(PointerEvent::up(10.0, 80.0, 40));
    assert!(logged(&log).is_empty());
}

#[test]
fn custom_pan_threshold() {
    let config = GestureConfig::new().with_pan_min_distance(20.0);
    let mut race = GestureRace::new(config);
    let slop = HitSlop::default();
    race_events(&mut race, slop, PointerEvent::down(10.0, 10.0, 0));
    assert!(race_events(&mut race, slop, PointerEvent::moved(10.0, 29.0, 10)).is_empty());
    assert_eq!(
        race_events(&mut race, slop, PointerEvent::moved(10.0, 30.0, 20)),
        [GestureEvent::PanChange { y: 30.0 }]
    );
}

#[test]
fn pan_threshold_uses_euclidean_distance() {
    let mut pan = Pan::new();
    pan.on_event(&PointerEvent::down(10.0, 10.0, 0), LAYOUT, 4.0);
    assert_eq!(
        pan.on_event(&PointerEvent::moved(12.0, 12.0, 1), LAYOUT, 4.0),
        PanOutcome::Ignored
    );
    // 3-4-5 triangle.
    assert_eq!(
        pan.on_event(&PointerEvent::moved(13.0, 14.0, 2), LAYOUT, 4.0),
        PanOutcome::Change { y: 14.0 }
    );
    assert_eq!(
        pan.on_event(&PointerEvent::moved(13.0, 14.5, 3), LAYOUT, 4.0),
        PanOutcome::Change { y: 14.5 }
    );
    assert_eq!(
        pan.on_event(&PointerEvent::up(13.0, 14.5, 4), LAYOUT, 4.0),
        PanOutcome::Finalize
    );
    assert_eq!(pan.state(), RecognizerState::Idle);
}

#[test]
fn pan_outside_bounds_never_begins() {
    let mut pan = Pan::new();
    pan.on_event(&PointerEvent::down(-1.0, 10.0, 0), LAYOUT, 4.0);
    assert_eq!(pan.state(), RecognizerState::Idle);
    assert_eq!(
        pan.on_event(&PointerEvent::moved(10.0, 60.0, 1), LAYOUT, 4.0),
        PanOutcome::Ignored
    );
    assert_eq!(
        pan.on_event(&PointerEvent::up(10.0, 60.0, 2), LAYOUT, 4.0),
        PanOutcome::Ignored
    );
}

#[test]
fn cancelled_pan_still_finalizes() {
    let mut pan = Pan::new();
    pan.on_event(&PointerEvent::down(10.0, 10.0, 0), LAYOUT, 4.0);
    pan.cancel();
    assert_eq!(pan.state(), RecognizerState::Failed);
    assert_eq!(
        pan.on_event(&PointerEvent::moved(10.0, 60.0, 1), LAYOUT, 4.0),
        PanOutcome::Ignored
    );
    assert_eq!(
        pan.on_event(&PointerEvent::up(10.0, 60.0, 2), LAYOUT, 4.0),
        PanOutcome::Finalize
    );
}

#[test]
fn tap_recognizer_standalone() {
    let mut tap = Tap::new();
    let slop = HitSlop::default();
    assert_eq!(
        tap.on_event(&PointerEvent::down(30.0, 10.0, 0), LAYOUT, slop, 500),
        None
    );
    assert_eq!(tap.state(), RecognizerState::Idle);
    assert_eq!(
        tap.on_event(&PointerEvent::up(10.0, 10.0, 5), LAYOUT, slop, 500),
        None
    );

    tap.on_event(&PointerEvent::down(10.0, 10.0, 10), LAYOUT, slop, 500);
    assert_eq!(
        tap.on_event(&PointerEvent::up(10.0, 12.0, 20), LAYOUT, slop, 500),
        Some(12.0)
    );
    assert_eq!(tap.state(), RecognizerState::Idle);
}

#[test]
fn set_config_applies_to_next_sample() {
    let (mut c, _log) = controller(abc());
    assert_eq!(c.config(), GestureConfig::default());
    c.set_config(GestureConfig::new().with_tap_max_duration_ms(50));
    c.on_pointer(PointerEvent::down(10.0, 45.0, 0));
    assert_eq!(c.on_pointer(PointerEvent::up(10.0, 45.0, 60)), None);
    assert_eq!(c.config().tap_max_duration_ms, 50);
}

#[test]
fn from_scrubber_keeps_layout_and_labels() {
    let mut s = scrubber::Scrubber::new(abc());
    s.on_layout(LAYOUT);
    let mut c = Controller::from_scrubber(s);
    c.on_pointer(PointerEvent::down(10.0, 70.0, 0));
    assert_eq!(c.on_pointer(PointerEvent::up(10.0, 70.0, 10)), Some(2));
    assert_eq!(c.into_scrubber().len(), 3);
}
