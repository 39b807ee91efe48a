use super::*;
use crate::schedule::motion::MotionSource;

fn pump(s: &Scheduler, lp: &mut AnimationLoop, frames: usize) {
    for _ in 0..frames {
        s.advance(16.0, |w| {
            if lp.accept(&w).is_some() {
                lp.schedule_next();
            }
        });
    }
}

#[test]
fn running_loop_keeps_exactly_one_frame_pending() {
    let s = Scheduler::new();
    let mut lp = AnimationLoop::new(s.clone(), MotionPreference::fixed(false));
    assert!(lp.start());
    pump(&s, &mut lp, 5);
    assert_eq!(lp.frames_run(), 5);
    assert_eq!(s.pending_frames(), 1);
}

#[test]
fn reduced_motion_never_schedules() {
    let s = Scheduler::new();
    let mut lp = AnimationLoop::new(s.clone(), MotionPreference::fixed(true));
    assert!(!lp.start());
    assert_eq!(s.pending_frames(), 0);
    pump(&s, &mut lp, 3);
    assert_eq!(lp.frames_run(), 0);
}

#[test]
fn stop_cancels_and_blocks_rescheduling() {
    let s = Scheduler::new();
    let mut lp = AnimationLoop::new(s.clone(), MotionPreference::fixed(false));
    lp.start();
    lp.stop();
    assert_eq!(s.pending_frames(), 0);
    lp.schedule_next();
    assert_eq!(s.pending_frames(), 0);
}

#[test]
fn dropping_the_loop_releases_its_frame() {
    let s = Scheduler::new();
    {
        let mut lp = AnimationLoop::new(s.clone(), MotionPreference::fixed(false));
        lp.start();
        assert_eq!(s.pending_frames(), 1);
    }
    assert_eq!(s.pending_frames(), 0);
}

#[test]
fn preference_is_read_at_start_only() {
    let s = Scheduler::new();
    let src = MotionSource::new(false);
    let mut lp = AnimationLoop::new(s.clone(), src.preference());
    lp.start();
    src.set_reduced(true);
    pump(&s, &mut lp, 2);
    assert_eq!(lp.frames_run(), 2);
    assert!(!lp.start());
    assert!(!lp.is_running());
    assert_eq!(s.pending_frames(), 0);
}
