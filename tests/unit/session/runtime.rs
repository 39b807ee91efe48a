use super::*;
use crate::effects::background::BackgroundVariant;
use crate::render::fingerprint::fingerprint;

fn scene(background: Option<BackgroundVariant>, particles: bool) -> SceneConfig {
    let mut cfg = SceneConfig::new(Canvas::new(160, 120));
    cfg.background = background;
    cfg.cursor_particles = particles;
    cfg.seed = 11;
    cfg.pointer = PointerPath::Fixed { x: 80.0, y: 60.0 };
    cfg
}

#[test]
fn layers_follow_the_config() {
    let rt = Runtime::recording(&scene(Some(BackgroundVariant::Waves), false)).unwrap();
    assert!(rt.background().is_some());
    assert!(rt.particles().is_none());
    assert_eq!(rt.population(), 0);

    let rt = Runtime::recording(&scene(None, true)).unwrap();
    assert!(rt.background().is_none());
    assert!(rt.particles().is_some());
}

#[test]
fn step_advances_one_frame_interval() {
    let mut rt = Runtime::recording(&scene(Some(BackgroundVariant::Neural), true)).unwrap();
    for _ in 0..3 {
        rt.step();
    }
    assert_eq!(rt.frames(), 3);
    assert!((rt.now_ms() - 3000.0 / 60.0).abs() < 1e-9);
    assert!(rt.is_animating());
}

#[test]
fn commands_come_background_first() {
    let mut rt = Runtime::recording(&scene(Some(BackgroundVariant::Waves), true)).unwrap();
    rt.step();
    let cmds = rt.take_commands();
    assert_eq!(cmds.iter().filter(|c| **c == DrawCmd::Clear).count(), 2);
    assert_eq!(cmds.first(), Some(&DrawCmd::Clear));
    assert!(rt.take_commands().is_empty());
}

#[test]
fn same_seed_same_stream() {
    let cfg = scene(Some(BackgroundVariant::Neural), true);
    let mut a = Runtime::recording(&cfg).unwrap();
    let mut b = Runtime::recording(&cfg).unwrap();
    for _ in 0..30 {
        a.step();
        b.step();
        assert_eq!(fingerprint(&a.take_commands()), fingerprint(&b.take_commands()));
    }
    assert_eq!(a.population(), b.population());
}

#[test]
fn reduced_motion_stops_every_layer() {
    let mut rt = Runtime::recording(&scene(Some(BackgroundVariant::Matrix), true)).unwrap();
    rt.step();
    rt.take_commands();
    rt.set_reduced_motion(true);
    assert!(!rt.is_animating());
    let still = rt.take_commands();
    assert!(!still.is_empty());

    rt.step();
    assert!(rt.take_commands().is_empty());

    rt.set_reduced_motion(false);
    assert!(rt.is_animating());
}

#[test]
fn resize_rebuilds_layers() {
    let mut rt = Runtime::recording(&scene(Some(BackgroundVariant::Particles), false)).unwrap();
    rt.step();
    rt.resize(Canvas::new(64, 48), |s, c| {
        s.resize(c);
        Ok(())
    })
    .unwrap();
    assert_eq!(rt.background().map(|b| b.tick_count()), Some(0));
    rt.step();
    rt.take_commands();
    assert!(rt.is_animating());
}

#[test]
fn raster_layers_compose_over_clear_colour() {
    let mut cfg = scene(Some(BackgroundVariant::Gradient), false);
    cfg.clear_rgba = Some([0, 0, 255, 255]);
    let mut rt = Runtime::raster(&cfg, None).unwrap();
    rt.step();
    rt.present().unwrap();
    let frame = rt.compose(cfg.clear_rgba).unwrap();
    assert_eq!((frame.width, frame.height), (160, 120));
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}
