// Recording stand-ins for the globe, overlay and viewer, plus a small rig that
// steps the orchestrator at 60 Hz.

#![allow(dead_code)]

use dive_core::*;
use std::cell::RefCell;
use std::rc::Rc;

pub const DT: f32 = 1.0 / 60.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    GlobeActive(bool),
    Overlay(f32, f32),
    Mount(MarkerId, bool),
    SetView(ViewParams),
    StartAutoRotate,
    StopAutoRotate,
    ShowControls,
    HideControls,
    Input(bool),
    Unmount,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct FakeGlobe(pub CallLog);

impl GlobeSurface for FakeGlobe {
    fn set_active(&mut self, active: bool) {
        self.0.borrow_mut().push(Call::GlobeActive(active));
    }
}

pub struct FakeOverlay(pub CallLog);

impl OverlaySink for FakeOverlay {
    fn set_opacity(&mut self, opacity: f32, fade_secs: f32) {
        self.0.borrow_mut().push(Call::Overlay(opacity, fade_secs));
    }
}

pub struct FakeViewer {
    pub log: CallLog,
    pub mounted: bool,
    pub ready: bool,
    pub params: Option<ViewParams>,
}

impl FakeViewer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            mounted: false,
            ready: false,
            params: None,
        }
    }
}

impl PanoramaViewer for FakeViewer {
    fn mount(&mut self, marker: &Marker, initial: &ViewParams, input_enabled: bool) {
        self.mounted = true;
        self.ready = false;
        self.params = Some(*initial);
        self.log.borrow_mut().push(Call::Mount(marker.id, input_enabled));
    }
    fn set_view_params(&mut self, params: &ViewParams) {
        self.params = Some(*params);
        self.log.borrow_mut().push(Call::SetView(*params));
    }
    fn current_view_params(&self) -> Option<ViewParams> {
        if self.mounted && self.ready {
            self.params
        } else {
            None
        }
    }
    fn start_auto_rotate(&mut self) {
        self.log.borrow_mut().push(Call::StartAutoRotate);
    }
    fn stop_auto_rotate(&mut self) {
        self.log.borrow_mut().push(Call::StopAutoRotate);
    }
    fn show_controls(&mut self) {
        self.log.borrow_mut().push(Call::ShowControls);
    }
    fn hide_controls(&mut self) {
        self.log.borrow_mut().push(Call::HideControls);
    }
    fn set_input_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Call::Input(enabled));
    }
    fn unmount(&mut self) {
        self.mounted = false;
        self.ready = false;
        self.params = None;
        self.log.borrow_mut().push(Call::Unmount);
    }
}

pub struct Rig {
    pub orch: Orchestrator,
    pub globe: FakeGlobe,
    pub overlay: FakeOverlay,
    pub viewer: FakeViewer,
    pub log: CallLog,
}

impl Rig {
    pub fn new() -> Self {
        Self::with_config(TransitionConfig::default())
    }

    pub fn with_config(cfg: TransitionConfig) -> Self {
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        Self {
            orch: Orchestrator::new(cfg, MarkerCatalog::default()),
            globe: FakeGlobe(log.clone()),
            overlay: FakeOverlay(log.clone()),
            viewer: FakeViewer::new(log.clone()),
            log,
        }
    }

    pub fn send(&mut self, event: Event) -> Result<Notices, TransitionError> {
        if event == Event::ViewerReady && self.viewer.mounted {
            self.viewer.ready = true;
        }
        let mut s = Surfaces {
            globe: &mut self.globe,
            overlay: &mut self.overlay,
            viewer: &mut self.viewer,
        };
        self.orch.handle(event, &mut s)
    }

    pub fn tick(&mut self, dt: f32) -> Notices {
        let mut s = Surfaces {
            globe: &mut self.globe,
            overlay: &mut self.overlay,
            viewer: &mut self.viewer,
        };
        let notices = self.orch.tick(dt, &mut s);
        assert_eq!(
            self.orch.live_surfaces(),
            1,
            "exactly one input surface must be live (phase {:?})",
            self.orch.phase()
        );
        notices
    }

    /// Step for `secs` of frames, collecting every notice.
    pub fn run(&mut self, secs: f32) -> Vec<Notice> {
        let frames = (secs / DT).ceil() as u32;
        (0..frames).flat_map(|_| self.tick(DT)).collect()
    }

    /// Step until `done` holds; panics after `max_secs`.
    pub fn run_until(&mut self, max_secs: f32, done: impl Fn(&Orchestrator) -> bool) -> Vec<Notice> {
        let mut seen = Vec::new();
        let mut t = 0.0;
        while !done(&self.orch) {
            assert!(t < max_secs, "condition not reached within {max_secs}s");
            seen.extend(self.tick(DT));
            t += DT;
        }
        seen
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.log.borrow_mut().clear();
    }

    /// Click marker 1 and run until the viewer is mounted and ready with the
    /// intro finished.
    pub fn dive_in(&mut self) {
        self.send(Event::MarkerClicked(1)).expect("click accepted");
        self.run_until(3.0, |o| o.phase() == TransitionPhase::Handoff);
        self.send(Event::ViewerReady).expect("ready accepted");
        self.run_until(4.0, |o| o.panorama_animation().is_none());
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
