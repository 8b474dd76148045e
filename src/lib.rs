#![cfg(target_arch = "wasm32")]
use dive_core::{Event, MarkerCatalog, Orchestrator, TransitionConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod bridge;
mod dom;
mod frame;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-dive starting");
    Ok(())
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Handle the page keeps to drive the transition.
///
/// `globe` must expose `setCamera`, `setRotation` and `setActive`, and may
/// expose `onStartTransition` / `onTransitionComplete`. `viewer` wraps the
/// panorama viewer (`mount`, `setViewParams`, `getCurrentViewParams`,
/// `startAutoRotate`, `stopAutoRotate`, `showControls`, `hideControls`,
/// `setInputEnabled`, `unmount`) and calls `viewerReady()` once per mount.
#[wasm_bindgen]
pub struct GlobeDive {
    ctx: Rc<RefCell<frame::FrameContext>>,
    pending: Rc<RefCell<Vec<Event>>>,
}

#[wasm_bindgen]
impl GlobeDive {
    #[wasm_bindgen(constructor)]
    pub fn new(
        globe: JsValue,
        viewer: JsValue,
        overlay_id: &str,
        back_button_id: Option<String>,
        markers_json: Option<String>,
        config_json: Option<String>,
    ) -> Result<GlobeDive, JsValue> {
        init(globe, viewer, overlay_id, back_button_id, markers_json, config_json).map_err(js_err)
    }

    #[wasm_bindgen(js_name = clickMarker)]
    pub fn click_marker(&self, id: u32) {
        self.pending.borrow_mut().push(Event::MarkerClicked(id));
    }

    #[wasm_bindgen(js_name = viewerReady)]
    pub fn viewer_ready(&self) {
        self.pending.borrow_mut().push(Event::ViewerReady);
    }

    #[wasm_bindgen(js_name = requestClose)]
    pub fn request_close(&self) {
        self.pending.borrow_mut().push(Event::CloseRequested);
    }

    /// Orbit drag/zoom from the page's pointer handlers. Returns false while
    /// the globe does not own input.
    pub fn orbit(&self, d_yaw: f32, d_pitch: f32, zoom: f32) -> bool {
        self.ctx
            .try_borrow_mut()
            .map(|mut ctx| ctx.orch.orbit(d_yaw, d_pitch, zoom).is_ok())
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = setAspect)]
    pub fn set_aspect(&self, aspect: f32) {
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.orch.set_aspect(aspect);
        }
    }

    pub fn phase(&self) -> String {
        self.ctx
            .try_borrow()
            .map(|ctx| format!("{:?}", ctx.orch.phase()))
            .unwrap_or_default()
    }

    /// Flat `[id, x, y, z, ...]` of marker positions in the globe's local
    /// frame, for placing labels under the spinning group.
    #[wasm_bindgen(js_name = markerLocalPositions)]
    pub fn marker_local_positions(&self) -> Vec<f32> {
        let Ok(ctx) = self.ctx.try_borrow() else {
            return Vec::new();
        };
        let radius = ctx.orch.config().globe.radius;
        ctx.orch
            .catalog()
            .iter()
            .flat_map(|m| {
                let p = m.local_position(radius);
                [m.id as f32, p.x, p.y, p.z]
            })
            .collect()
    }
}

fn init(
    globe: JsValue,
    viewer: JsValue,
    overlay_id: &str,
    back_button_id: Option<String>,
    markers_json: Option<String>,
    config_json: Option<String>,
) -> anyhow::Result<GlobeDive> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let overlay = overlay::DomOverlay::find(&document, overlay_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{overlay_id}"))?;
    let catalog = match markers_json {
        Some(text) => MarkerCatalog::from_json(&text)?,
        None => MarkerCatalog::default(),
    };
    let cfg = match config_json {
        Some(text) => TransitionConfig::from_json(&text)?,
        None => TransitionConfig::default(),
    };
    log::info!("[init] {} markers", catalog.len());

    let pending = Rc::new(RefCell::new(Vec::new()));
    if let Some(id) = back_button_id {
        let pending_close = pending.clone();
        if !dom::add_click_listener(&document, &id, move || {
            pending_close.borrow_mut().push(Event::CloseRequested);
        }) {
            log::warn!("[init] back button #{id} not found");
        }
    }

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        orch: Orchestrator::new(cfg, catalog),
        globe: bridge::JsGlobe::new(globe),
        overlay,
        viewer: bridge::JsViewer::new(viewer),
        pending: pending.clone(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(ctx.clone());
    Ok(GlobeDive { ctx, pending })
}
