//! Scene transition state machine.
//!
//! Events (marker click, viewer ready, close) come in through [`Orchestrator::handle`];
//! time moves through [`Orchestrator::tick`]. Both return [`Notice`]s for the
//! host and drive the collaborators in [`Surfaces`] directly.
//!
//! Fly in:  click -> Flying -> (arrived) Handoff -> (ready | settle) ViewerActive
//! Fly out: close -> outro -> Returning -> (overlay opaque) Idle -> reset -> homed

use crate::camera::{CameraState, FlightController, FlightEvent};
use crate::config::TransitionConfig;
use crate::error::TransitionError;
use crate::geo::{Marker, MarkerCatalog, MarkerId};
use crate::overlay::Overlay;
use crate::panorama::{Direction, PanoramaAnimator, ViewParams};
use crate::surface::Surfaces;
use crate::tween::Delay;
use crate::world::{to_world, GlobeOrientation};
use glam::{Affine3A, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Flying,
    Handoff,
    ViewerActive,
    Returning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    MarkerClicked(MarkerId),
    ViewerReady,
    CloseRequested,
}

impl Event {
    fn name(&self) -> &'static str {
        match self {
            Event::MarkerClicked(_) => "marker click",
            Event::ViewerReady => "viewer ready",
            Event::CloseRequested => "close request",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    TransitionStarted(MarkerId),
    TransitionComplete(MarkerId),
    PhaseChanged(TransitionPhase),
    SelectionChanged(Option<MarkerId>),
}

pub type Notices = SmallVec<[Notice; 4]>;

pub struct Orchestrator {
    cfg: TransitionConfig,
    catalog: MarkerCatalog,
    phase: TransitionPhase,
    selection: Option<MarkerId>,
    orientation: GlobeOrientation,
    parent: Affine3A,
    flight: FlightController,
    overlay: Overlay,
    panorama: PanoramaAnimator,
    settle: Option<Delay>,
    viewer_mounted: bool,
    viewer_ready: bool,
    spin_suspended: bool,
}

impl Orchestrator {
    pub fn new(cfg: TransitionConfig, catalog: MarkerCatalog) -> Self {
        let flight = FlightController::new(cfg.flight.clone(), cfg.globe.radius);
        Self {
            cfg,
            catalog,
            phase: TransitionPhase::Idle,
            selection: None,
            orientation: GlobeOrientation::default(),
            parent: Affine3A::IDENTITY,
            flight,
            overlay: Overlay::default(),
            panorama: PanoramaAnimator::default(),
            settle: None,
            viewer_mounted: false,
            viewer_ready: false,
            spin_suspended: false,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn selection(&self) -> Option<&Marker> {
        self.selection.and_then(|id| self.catalog.get(id))
    }

    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.cfg
    }

    pub fn camera(&self) -> &CameraState {
        self.flight.camera()
    }

    pub fn orientation(&self) -> GlobeOrientation {
        self.orientation
    }

    pub fn overlay_opacity(&self) -> f32 {
        self.overlay.opacity()
    }

    pub fn panorama_animation(&self) -> Option<Direction> {
        self.panorama.running()
    }

    /// Start values of the running intro/outro.
    pub fn panorama_start(&self) -> Option<ViewParams> {
        self.panorama.start_values()
    }

    pub fn is_spinning(&self) -> bool {
        !self.spin_suspended
    }

    /// Number of input-consuming surfaces that are live: globe interaction,
    /// camera flight, mounted viewer. Always 1.
    pub fn live_surfaces(&self) -> usize {
        [
            self.flight.camera().interaction_enabled,
            self.flight.is_flying(),
            self.viewer_mounted,
        ]
        .iter()
        .filter(|live| **live)
        .count()
    }

    /// Transform of whatever the globe is parented under.
    pub fn set_parent_transform(&mut self, parent: Affine3A) {
        self.parent = parent;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.flight.set_aspect(aspect);
    }

    /// Marker position in world space under the current spin.
    pub fn marker_world_position(&self, marker: &Marker) -> Vec3 {
        let local = marker.local_position(self.cfg.globe.radius);
        to_world(local, &self.orientation.world_transform(&self.parent))
    }

    /// User orbit drag/zoom; only accepted while the globe owns input.
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32, zoom: f32) -> Result<(), TransitionError> {
        if self.phase != TransitionPhase::Idle {
            return Err(TransitionError::InteractionLocked);
        }
        self.flight.orbit(d_yaw, d_pitch, zoom)
    }

    pub fn handle(
        &mut self,
        event: Event,
        s: &mut Surfaces<'_>,
    ) -> Result<Notices, TransitionError> {
        let result = self.dispatch(event, s);
        if let Err(e) = &result {
            log::warn!("[transition] {e}");
        }
        result
    }

    fn dispatch(&mut self, event: Event, s: &mut Surfaces<'_>) -> Result<Notices, TransitionError> {
        let mut out = Notices::new();
        match (self.phase, event) {
            (TransitionPhase::Idle, Event::MarkerClicked(id)) => {
                if self.flight.is_flying() {
                    return Err(TransitionError::FlightInProgress);
                }
                let marker = self.catalog.get(id).ok_or(TransitionError::UnknownMarker(id))?;
                log::info!("[transition] marker {} ({}) clicked", marker.id, marker.name);
                let world = self.marker_world_position(marker);
                self.flight.fly_to(world, id)?;
                self.spin_suspended = true;
                s.globe.set_active(false);
                out.push(Notice::TransitionStarted(id));
                self.enter(TransitionPhase::Flying, &mut out);
            }
            (TransitionPhase::Handoff | TransitionPhase::ViewerActive, Event::ViewerReady)
                if self.viewer_mounted && !self.viewer_ready =>
            {
                self.viewer_ready = true;
                if self.phase == TransitionPhase::Handoff {
                    self.release_handoff(s, &mut out);
                }
                self.panorama.start_intro(s.viewer, &self.cfg.panorama);
            }
            (TransitionPhase::ViewerActive, Event::CloseRequested) => match self.panorama.running() {
                Some(Direction::Intro) => return Err(TransitionError::IntroRunning),
                Some(Direction::Outro) => {
                    return Err(TransitionError::Ignored {
                        event: event.name(),
                        phase: self.phase,
                    })
                }
                None => {
                    let animating =
                        self.viewer_ready && self.panorama.start_outro(s.viewer, &self.cfg.panorama);
                    if !animating {
                        log::info!("[transition] viewer not ready, closing without outro");
                        self.enter_returning(s, &mut out);
                    }
                }
            },
            (phase, event) => {
                return Err(TransitionError::Ignored {
                    event: event.name(),
                    phase,
                })
            }
        }
        Ok(out)
    }

    /// Advance every running animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32, s: &mut Surfaces<'_>) -> Notices {
        let mut out = Notices::new();

        // Overlay first: a fade driven later in this tick starts counting on
        // the next one, as the sink does.
        if self.overlay.tick(dt) && self.phase == TransitionPhase::Returning && self.overlay.is_opaque() {
            self.finish_return(s, &mut out);
        }

        if self.phase == TransitionPhase::Handoff {
            if let Some(settle) = self.settle.as_mut() {
                if settle.tick(dt) {
                    log::debug!("[transition] settle delay elapsed before viewer ready");
                    self.release_handoff(s, &mut out);
                }
            }
        }

        match self.flight.tick(dt) {
            Some(FlightEvent::Arrived(id)) if self.phase == TransitionPhase::Flying => {
                self.enter_handoff(id, s, &mut out);
            }
            Some(FlightEvent::Homed) => {
                log::info!("[transition] camera homed, globe spin resumes");
                self.spin_suspended = false;
                s.globe.set_active(true);
            }
            _ => {}
        }

        if let Some(done) = self.panorama.tick(dt, s.viewer) {
            log::debug!("[transition] panorama {done:?} finished");
            if done == Direction::Outro && self.phase == TransitionPhase::ViewerActive {
                self.enter_returning(s, &mut out);
            }
        }

        if !self.spin_suspended {
            self.orientation.advance(dt, &self.cfg.globe);
        }
        out
    }

    fn enter(&mut self, phase: TransitionPhase, out: &mut Notices) {
        log::info!("[transition] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        out.push(Notice::PhaseChanged(phase));
    }

    fn enter_handoff(&mut self, id: MarkerId, s: &mut Surfaces<'_>, out: &mut Notices) {
        // Opaque before the viewer mounts; no fade.
        self.overlay.drive(1.0, 0.0, s.overlay);
        self.selection = Some(id);
        out.push(Notice::SelectionChanged(Some(id)));
        out.push(Notice::TransitionComplete(id));
        let marker = self.catalog.get(id);
        debug_assert!(marker.is_some(), "arrived at unknown marker {id}");
        if let Some(marker) = marker {
            s.viewer.mount(marker, &self.cfg.panorama.asteroid, false);
        }
        self.viewer_mounted = true;
        self.viewer_ready = false;
        self.settle = Some(Delay::new(self.cfg.handoff.settle_secs));
        self.enter(TransitionPhase::Handoff, out);
    }

    fn release_handoff(&mut self, s: &mut Surfaces<'_>, out: &mut Notices) {
        self.settle = None;
        self.overlay.drive(0.0, self.cfg.handoff.fade_out_secs, s.overlay);
        self.enter(TransitionPhase::ViewerActive, out);
    }

    fn enter_returning(&mut self, s: &mut Surfaces<'_>, out: &mut Notices) {
        self.panorama.cancel();
        self.enter(TransitionPhase::Returning, out);
        let fade = self.cfg.handoff.close_fade_secs;
        self.overlay.drive(1.0, fade, s.overlay);
        if fade <= 0.0 {
            self.finish_return(s, out);
        }
    }

    fn finish_return(&mut self, s: &mut Surfaces<'_>, out: &mut Notices) {
        self.selection = None;
        out.push(Notice::SelectionChanged(None));
        s.viewer.unmount();
        self.viewer_mounted = false;
        self.viewer_ready = false;
        self.overlay.drive(0.0, self.cfg.handoff.fade_out_secs, s.overlay);
        self.enter(TransitionPhase::Idle, out);
        // The dive landed before Handoff, so no flight can be running here.
        let homing = self.flight.reset();
        debug_assert!(homing.is_ok(), "reset after close: {homing:?}");
        if let Err(e) = homing {
            log::warn!("[transition] reset after close failed: {e}");
        }
    }
}
