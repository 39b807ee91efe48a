use super::*;
use crate::scroll::document::PageDocument;

fn page() -> PageDocument {
    PageDocument::new(5000.0, 800.0)
        .unwrap()
        .with_element("hero", 0.0)
        .with_element("about", 1080.0)
        .with_element("contact", 3000.0)
}

fn pump(s: &Scheduler, scroller: &mut SmoothScroller, doc: &mut PageDocument, dt: f64) {
    s.advance(dt, |w| {
        scroller.on_wake(&w, doc);
    });
}

#[test]
fn job_interpolates_at_start_middle_and_end() {
    let job = ScrollJob {
        from: 100.0,
        to: 1100.0,
        start_ms: 50.0,
        duration_ms: 1000.0,
        ease: Ease::OutCubic,
    };
    assert_eq!(job.sample(50.0), (100.0, false));
    let (mid, done) = job.sample(550.0);
    assert!(!done);
    assert!((mid - (100.0 + 1000.0 * 0.875)).abs() < 1e-9);
    assert_eq!(job.sample(1050.0), (1100.0, true));
    assert_eq!(job.sample(9999.0), (1100.0, true));
    assert_eq!(job.sample(0.0), (100.0, false));
}

#[test]
fn zero_duration_completes_immediately() {
    let job = ScrollJob {
        from: 0.0,
        to: 500.0,
        start_ms: 10.0,
        duration_ms: 0.0,
        ease: Ease::Linear,
    };
    assert_eq!(job.sample(10.0), (500.0, true));
}

#[test]
fn scroll_to_element_lands_offset_above_the_target() {
    let s = Scheduler::new();
    let mut doc = page();
    let mut scroller = SmoothScroller::new(s.clone());
    let outcome = scroller.scroll_to_element(&doc, "about", ScrollOptions::default());
    assert_eq!(
        outcome,
        ScrollOutcome::Started {
            from: 0.0,
            to: 1000.0
        }
    );
    assert!(scroller.is_animating());

    pump(&s, &mut scroller, &mut doc, 500.0);
    assert!((doc.scroll_offset() - 875.0).abs() < 1e-9);
    pump(&s, &mut scroller, &mut doc, 500.0);
    assert_eq!(doc.scroll_offset(), 1000.0);
    assert!(!scroller.is_animating());
    assert_eq!(s.pending_frames(), 0);
}

#[test]
fn offset_never_goes_negative() {
    let s = Scheduler::new();
    let mut doc = page();
    doc.set_scroll_offset(400.0);
    let mut scroller = SmoothScroller::new(s.clone());
    let outcome = scroller.scroll_to_element(&doc, "hero", ScrollOptions::default());
    assert_eq!(
        outcome,
        ScrollOutcome::Started {
            from: 400.0,
            to: 0.0
        }
    );
}

#[test]
fn repeated_requests_are_idempotent() {
    let s = Scheduler::new();
    let mut doc = page();
    let mut scroller = SmoothScroller::new(s.clone());
    scroller.scroll_to_element(&doc, "contact", ScrollOptions::default());
    pump(&s, &mut scroller, &mut doc, 2000.0);
    assert_eq!(doc.scroll_offset(), 2920.0);

    let again = scroller.scroll_to_element(&doc, "contact", ScrollOptions::default());
    assert_eq!(again, ScrollOutcome::AlreadyThere);
    assert_eq!(s.pending_frames(), 0);
    assert!(!scroller.is_animating());

    doc.set_scroll_offset(2916.0);
    assert_eq!(
        scroller.scroll_to_element(&doc, "contact", ScrollOptions::default()),
        ScrollOutcome::AlreadyThere
    );
}

#[test]
fn missing_target_is_a_warning_only() {
    let s = Scheduler::new();
    let doc = page();
    let mut scroller = SmoothScroller::new(s.clone());
    assert_eq!(
        scroller.scroll_to_element(&doc, "nope", ScrollOptions::default()),
        ScrollOutcome::MissingTarget
    );
    assert_eq!(s.pending_frames(), 0);
    assert_eq!(doc.scroll_offset(), 0.0);
}

#[test]
fn new_request_supersedes_the_running_job() {
    let s = Scheduler::new();
    let mut doc = page();
    let mut scroller = SmoothScroller::new(s.clone());
    scroller.scroll_to_element(&doc, "contact", ScrollOptions::default());
    pump(&s, &mut scroller, &mut doc, 200.0);
    let mid = doc.scroll_offset();
    assert!(mid > 0.0 && mid < 2920.0);

    scroller.scroll_to_element(&doc, "about", ScrollOptions::default());
    assert_eq!(s.pending_frames(), 1);
    assert_eq!(scroller.job().map(|j| j.to), Some(1000.0));
    assert_eq!(scroller.job().map(|j| j.from), Some(mid));
    pump(&s, &mut scroller, &mut doc, 1000.0);
    assert_eq!(doc.scroll_offset(), 1000.0);
}

#[test]
fn scroll_to_top_uses_in_out_quart() {
    let s = Scheduler::new();
    let mut doc = page();
    doc.set_scroll_offset(1200.0);
    let mut scroller = SmoothScroller::new(s.clone());
    let opts = ScrollOptions::to_top();
    assert_eq!(opts.duration_ms, 600.0);
    assert_eq!(opts.ease, Ease::InOutQuart);

    scroller.scroll_to_top(&doc, opts);
    pump(&s, &mut scroller, &mut doc, 300.0);
    assert!((doc.scroll_offset() - 600.0).abs() < 1e-9);
    pump(&s, &mut scroller, &mut doc, 300.0);
    assert_eq!(doc.scroll_offset(), 0.0);

    assert_eq!(
        scroller.scroll_to_top(&doc, opts),
        ScrollOutcome::AlreadyThere
    );
}

#[test]
fn button_duration_override() {
    let opts = ScrollOptions::to_top().with_duration(SCROLL_TO_TOP_BUTTON_MS);
    assert_eq!(opts.duration_ms, 800.0);
    assert_eq!(opts.ease, Ease::InOutQuart);
}

#[test]
fn cancel_releases_the_frame() {
    let s = Scheduler::new();
    let mut doc = page();
    let mut scroller = SmoothScroller::new(s.clone());
    scroller.scroll_to_element(&doc, "about", ScrollOptions::default());
    scroller.cancel();
    assert_eq!(s.pending_frames(), 0);
    pump(&s, &mut scroller, &mut doc, 2000.0);
    assert_eq!(doc.scroll_offset(), 0.0);
}

#[test]
fn scroll_to_top_button_visibility() {
    assert!(!scroll_to_top_visible(0.0));
    assert!(!scroll_to_top_visible(300.0));
    assert!(scroll_to_top_visible(300.5));
}
