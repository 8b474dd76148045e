use std::path::PathBuf;

use anyhow::{bail, Context};
use dive_core::{
    Event, GlobeSurface, Marker, MarkerCatalog, Notice, Orchestrator, OverlaySink, PanoramaViewer,
    Surfaces, TransitionConfig, TransitionPhase, ViewParams,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 30;
// Frames the headless viewer takes to "load" before firing ready.
const VIEWER_LOAD_FRAMES: u32 = 12;
const DWELL_SECS: f32 = 2.0;
const AUTO_ROTATE_RATE: f32 = 0.2;

struct LogGlobe;

impl GlobeSurface for LogGlobe {
    fn set_active(&mut self, active: bool) {
        log::info!("[globe] active={active}");
    }
}

struct LogOverlay;

impl OverlaySink for LogOverlay {
    fn set_opacity(&mut self, opacity: f32, fade_secs: f32) {
        log::info!("[overlay] -> {opacity:.1} over {fade_secs:.2}s");
    }
}

#[derive(Default)]
struct HeadlessViewer {
    mounted: Option<String>,
    params: Option<ViewParams>,
    load_frames: u32,
    auto_rotate: bool,
}

impl HeadlessViewer {
    /// Advance the fake viewer's own clock; returns true once, on load.
    fn frame(&mut self) -> bool {
        if self.mounted.is_none() {
            return false;
        }
        if self.auto_rotate {
            if let Some(p) = self.params.as_mut() {
                p.yaw += AUTO_ROTATE_RATE * FRAME_DT;
            }
        }
        if self.load_frames > 0 {
            self.load_frames -= 1;
            return self.load_frames == 0;
        }
        false
    }

    fn ready(&self) -> bool {
        self.mounted.is_some() && self.load_frames == 0
    }
}

impl PanoramaViewer for HeadlessViewer {
    fn mount(&mut self, marker: &Marker, initial: &ViewParams, input_enabled: bool) {
        log::info!("[viewer] mount {} ({})", marker.pano, marker.name);
        self.mounted = Some(marker.pano.clone());
        self.params = Some(*initial);
        self.load_frames = VIEWER_LOAD_FRAMES;
        log::debug!("[viewer] input enabled={input_enabled}");
    }
    fn set_view_params(&mut self, params: &ViewParams) {
        self.params = Some(*params);
    }
    fn current_view_params(&self) -> Option<ViewParams> {
        if self.ready() {
            self.params
        } else {
            None
        }
    }
    fn start_auto_rotate(&mut self) {
        self.auto_rotate = true;
    }
    fn stop_auto_rotate(&mut self) {
        self.auto_rotate = false;
    }
    fn show_controls(&mut self) {
        log::debug!("[viewer] controls shown");
    }
    fn hide_controls(&mut self) {
        log::debug!("[viewer] controls hidden");
    }
    fn set_input_enabled(&mut self, enabled: bool) {
        log::debug!("[viewer] input enabled={enabled}");
    }
    fn unmount(&mut self) {
        log::info!("[viewer] unmount");
        *self = Self::default();
    }
}

struct Args {
    marker: u32,
    config: Option<PathBuf>,
    markers: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        marker: 1,
        config: None,
        markers: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--markers" => args.markers = Some(it.next().context("--markers needs a path")?.into()),
            id => args.marker = id.parse().with_context(|| format!("bad marker id {id:?}"))?,
        }
    }
    Ok(args)
}

struct Rig {
    orch: Orchestrator,
    globe: LogGlobe,
    overlay: LogOverlay,
    viewer: HeadlessViewer,
    clock: f32,
}

impl Rig {
    fn send(&mut self, event: Event) -> anyhow::Result<()> {
        let mut s = Surfaces {
            globe: &mut self.globe,
            overlay: &mut self.overlay,
            viewer: &mut self.viewer,
        };
        let notices = self.orch.handle(event, &mut s)?;
        report(self.clock, &notices);
        Ok(())
    }

    fn frame(&mut self) -> anyhow::Result<()> {
        if self.viewer.frame() {
            self.send(Event::ViewerReady)?;
        }
        let mut s = Surfaces {
            globe: &mut self.globe,
            overlay: &mut self.overlay,
            viewer: &mut self.viewer,
        };
        let notices = self.orch.tick(FRAME_DT, &mut s);
        self.clock += FRAME_DT;
        report(self.clock, &notices);
        if self.orch.live_surfaces() != 1 {
            bail!("{} live input surfaces at t={:.2}", self.orch.live_surfaces(), self.clock);
        }
        Ok(())
    }

    fn run_until(&mut self, what: &str, done: impl Fn(&Self) -> bool) -> anyhow::Result<()> {
        for _ in 0..MAX_FRAMES {
            if done(&*self) {
                return Ok(());
            }
            self.frame()?;
        }
        bail!("timed out waiting for {what}")
    }
}

fn report(clock: f32, notices: &[Notice]) {
    for n in notices {
        log::info!("[{clock:6.2}s] {n:?}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;

    let cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            TransitionConfig::from_json(&text).context("parsing transition config")?
        }
        None => TransitionConfig::default(),
    };
    let catalog = match &args.markers {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            MarkerCatalog::from_json(&text)?
        }
        None => MarkerCatalog::default(),
    };
    log::info!("[native] {} markers, diving into #{}", catalog.len(), args.marker);

    let mut rig = Rig {
        orch: Orchestrator::new(cfg, catalog),
        globe: LogGlobe,
        overlay: LogOverlay,
        viewer: HeadlessViewer::default(),
        clock: 0.0,
    };
    // Let the globe spin a little so the click resolves against a rotated frame.
    for _ in 0..90 {
        rig.frame()?;
    }
    if let Some(marker) = rig.orch.catalog().get(args.marker) {
        let p = rig.orch.marker_world_position(marker);
        log::info!("[native] marker world position ({:.3},{:.3},{:.3})", p.x, p.y, p.z);
    }

    rig.send(Event::MarkerClicked(args.marker))?;
    rig.run_until("intro", |r| {
        r.viewer.ready()
            && r.orch.phase() == TransitionPhase::ViewerActive
            && r.orch.panorama_animation().is_none()
    })?;

    let dwell_frames = (DWELL_SECS / FRAME_DT) as u32;
    for _ in 0..dwell_frames {
        rig.frame()?;
    }

    rig.send(Event::CloseRequested)?;
    rig.run_until("return to orbit", |r| {
        r.orch.phase() == TransitionPhase::Idle && r.orch.is_spinning()
    })?;

    let cam = rig.orch.camera().position;
    log::info!(
        "[native] done at {:.2}s, eye=({:.2},{:.2},{:.2})",
        rig.clock,
        cam.x,
        cam.y,
        cam.z
    );
    Ok(())
}
