use super::*;

fn step(s: &Scheduler, tw: &mut Typewriter, dt: f64) -> Vec<TypewriterEvent> {
    let mut events = Vec::new();
    s.advance(dt, |w| events.extend(tw.on_wake(&w)));
    events
}

#[test]
fn reveals_one_character_per_interval() {
    let s = Scheduler::new();
    let mut tw = Typewriter::new(s.clone(), MotionPreference::fixed(false));
    assert_eq!(tw.reveal("Hi", 50.0, 0.0), None);

    assert!(step(&s, &mut tw, 0.0).is_empty());
    assert_eq!(tw.displayed(), "");
    assert!(tw.is_started());

    assert!(step(&s, &mut tw, 50.0).is_empty());
    assert_eq!(tw.displayed(), "H");

    assert_eq!(step(&s, &mut tw, 50.0), vec![TypewriterEvent::Completed]);
    assert_eq!(tw.displayed(), "Hi");
    assert!(tw.is_complete());

    assert!(step(&s, &mut tw, 500.0).is_empty());
    assert_eq!(s.pending_timers(), 0);
}

#[test]
fn start_delay_holds_back_the_first_character() {
    let s = Scheduler::new();
    let mut tw = Typewriter::new(s.clone(), MotionPreference::fixed(false));
    tw.reveal("abc", 10.0, 100.0);
    step(&s, &mut tw, 105.0);
    assert_eq!(tw.displayed(), "");
    step(&s, &mut tw, 5.0);
    assert_eq!(tw.displayed(), "a");
}

#[test]
fn one_large_advance_completes_exactly_once() {
    let s = Scheduler::new();
    let mut tw = Typewriter::new(s.clone(), MotionPreference::fixed(false));
    tw.reveal("Hello", 100.0, 500.0);
    let events = step(&s, &mut tw, 10_000.0);
    assert_eq!(events, vec![TypewriterEvent::Completed]);
    assert_eq!(tw.displayed(), "Hello");
}

#[test]
fn reduced_motion_shows_everything_without_timers() {
    let s = Scheduler::new();
    let mut tw = Typewriter::new(s.clone(), MotionPreference::fixed(true));
    assert_eq!(
        tw.reveal("Hello", 100.0, 500.0),
        Some(TypewriterEvent::Completed)
    );
    assert_eq!(tw.displayed(), "Hello");
    assert_eq!(s.pending_timers(), 0);
    assert!(step(&s, &mut tw, 1_000.0).is_empty());
}

#[test]
fn restart_resets_the_reveal_index() {
    let s = Scheduler::new();
    let mut tw = Typewriter::new(s.clone(), MotionPreference::fixed(false));
    tw.reveal("first", 10.0, 0.0);
    step(&s, &mut tw, 0.0);
    step(&s, &mut tw, 30.0);
    assert_eq!(tw.displayed(), "fir");

    tw.reveal("second", 10.0, 0.0);
    assert_eq!(tw.displayed(), "");
    assert_eq!(s.pending_timers(), 1);
    step(&s, &mut tw, 0.0);
    step(&s, &mut tw, 10.0);
    assert_eq!(tw.displayed(), "s");
}

#[test]
fn multibyte_characters_are_single_units() {
    let s = Scheduler::new();
    let mut tw = Typewriter::new(s.clone(), MotionPreference::fixed(false));
    tw.reveal("né✓", 10.0, 0.0);
    step(&s, &mut tw, 0.0);
    step(&s, &mut tw, 20.0);
    assert_eq!(tw.displayed(), "né");
    step(&s, &mut tw, 10.0);
    assert_eq!(tw.displayed(), "né✓");
    assert!(tw.is_complete());
}

#[test]
fn empty_text_completes_after_the_delay() {
    let s = Scheduler::new();
    let mut tw = Typewriter::new(s.clone(), MotionPreference::fixed(false));
    tw.reveal("", 10.0, 20.0);
    assert!(step(&s, &mut tw, 10.0).is_empty());
    assert_eq!(step(&s, &mut tw, 10.0), vec![TypewriterEvent::Completed]);
    assert_eq!(s.pending_timers(), 0);
}
