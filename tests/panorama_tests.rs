// Host-side tests for the panorama intro/outro animator.

mod support;

use dive_core::*;
use std::cell::RefCell;
use std::f32::consts::{FRAC_PI_2, PI};
use std::rc::Rc;
use support::*;

fn mounted_viewer() -> (FakeViewer, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = FakeViewer::new(log.clone());
    let marker = Marker::new(1, "New York", 40.7, -74.0, "/vr_images/sphere.jpg");
    viewer.mount(&marker, &ViewParams::asteroid(), false);
    viewer.ready = true;
    log.borrow_mut().clear();
    (viewer, log)
}

fn run(anim: &mut PanoramaAnimator, viewer: &mut FakeViewer, secs: f32) -> Vec<Direction> {
    let frames = (secs / DT).ceil() as u32;
    (0..frames).filter_map(|_| anim.tick(DT, viewer)).collect()
}

#[test]
fn view_presets_match_the_asteroid_and_straight_views() {
    let a = ViewParams::asteroid();
    assert_eq!(a.pitch, -FRAC_PI_2);
    assert_eq!(a.yaw, FRAC_PI_2);
    assert_eq!(a.zoom, 0.0);
    assert_eq!(a.max_fov, 130.0);
    assert_eq!(a.fisheye, 2.0);
    let s = ViewParams::straight();
    assert_eq!((s.pitch, s.yaw, s.zoom, s.max_fov, s.fisheye), (0.0, 0.0, 50.0, 90.0, 0.0));
}

#[test]
fn intro_runs_asteroid_to_straight_then_hands_input_back() {
    let cfg = PanoramaConfig::default();
    let (mut viewer, log) = mounted_viewer();
    let mut anim = PanoramaAnimator::default();
    anim.start_intro(&mut viewer, &cfg);
    assert_eq!(anim.running(), Some(Direction::Intro));
    assert_eq!(anim.start_values(), Some(ViewParams::asteroid()));
    assert!(log.borrow().contains(&Call::Input(false)));

    let early = run(&mut anim, &mut viewer, 2.0);
    assert!(early.is_empty());
    assert!(!log.borrow().contains(&Call::StartAutoRotate));
    assert!(!log.borrow().contains(&Call::Input(true)));

    let done = run(&mut anim, &mut viewer, 1.0);
    assert_eq!(done, vec![Direction::Intro]);
    assert_eq!(viewer.params, Some(ViewParams::straight()));

    let calls = log.borrow();
    let tail: Vec<_> = calls.iter().rev().take(3).rev().cloned().collect();
    assert_eq!(
        tail,
        vec![Call::StartAutoRotate, Call::ShowControls, Call::Input(true)]
    );
}

#[test]
fn every_tick_writes_all_channels_to_the_viewer() {
    let cfg = PanoramaConfig::default();
    let (mut viewer, log) = mounted_viewer();
    let mut anim = PanoramaAnimator::default();
    anim.start_intro(&mut viewer, &cfg);
    log.borrow_mut().clear();
    for _ in 0..10 {
        anim.tick(DT, &mut viewer);
    }
    let writes: Vec<ViewParams> = log
        .borrow()
        .iter()
        .filter_map(|c| match c {
            Call::SetView(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(writes.len(), 10);
    // All five channels move off their start values together.
    let last = writes[9];
    let a = ViewParams::asteroid();
    assert!(last.pitch > a.pitch && last.yaw < a.yaw && last.zoom > a.zoom);
    assert!(last.max_fov < a.max_fov && last.fisheye < a.fisheye);
}

#[test]
fn outro_starts_from_the_live_view_not_the_intro_constants() {
    let cfg = PanoramaConfig::default();
    let (mut viewer, log) = mounted_viewer();
    let live = ViewParams {
        pitch: 0.3,
        yaw: 2.0,
        zoom: 42.0,
        max_fov: 90.0,
        fisheye: 0.0,
    };
    viewer.params = Some(live);
    let mut anim = PanoramaAnimator::default();
    assert!(anim.start_outro(&mut viewer, &cfg));
    assert_eq!(anim.running(), Some(Direction::Outro));
    assert_eq!(anim.start_values(), Some(live));
    assert_ne!(anim.start_values(), Some(ViewParams::asteroid()));
    assert_eq!(
        *log.borrow(),
        vec![Call::StopAutoRotate, Call::HideControls, Call::Input(false)]
    );

    let done = run(&mut anim, &mut viewer, 2.0);
    assert_eq!(done, vec![Direction::Outro]);
    let end = viewer.params.expect("params");
    let a = ViewParams::asteroid();
    assert_eq!((end.pitch, end.zoom, end.max_fov, end.fisheye), (a.pitch, a.zoom, a.max_fov, a.fisheye));
    assert!(approx(end.yaw, a.yaw, 1e-5));
    assert!(!log.borrow().contains(&Call::Input(true)), "outro never re-enables input");
}

#[test]
fn outro_turns_the_short_way_round() {
    let cfg = PanoramaConfig::default();
    let (mut viewer, _log) = mounted_viewer();
    let mut live = ViewParams::straight();
    live.yaw = 6.0;
    viewer.params = Some(live);
    let mut anim = PanoramaAnimator::default();
    assert!(anim.start_outro(&mut viewer, &cfg));
    run(&mut anim, &mut viewer, 2.0);
    let end = viewer.params.expect("params").yaw;
    assert!((end - 6.0).abs() <= PI, "yaw travelled {} rad", (end - 6.0).abs());
    let wrapped = end.rem_euclid(std::f32::consts::TAU);
    assert!(approx(wrapped, FRAC_PI_2, 1e-4));
}

#[test]
fn outro_is_skipped_when_the_viewer_is_not_ready() {
    let cfg = PanoramaConfig::default();
    let (mut viewer, log) = mounted_viewer();
    viewer.ready = false;
    let mut anim = PanoramaAnimator::default();
    assert!(!anim.start_outro(&mut viewer, &cfg));
    assert_eq!(anim.running(), None);
    assert!(log.borrow().is_empty());
}
