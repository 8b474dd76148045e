use crate::bridge::{JsGlobe, JsViewer};
use crate::overlay::DomOverlay;
use dive_core::{Event, Notice, Orchestrator, Surfaces};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Longest step fed to the animations; a backgrounded tab must not skip a
// whole flight in one frame.
const MAX_FRAME_DT: f32 = 0.1;

pub struct FrameContext {
    pub orch: Orchestrator,
    pub globe: JsGlobe,
    pub overlay: DomOverlay,
    pub viewer: JsViewer,
    /// Events posted from JS; drained at the top of each frame so callbacks
    /// fired from inside a tick never re-enter the orchestrator.
    pub pending: Rc<RefCell<Vec<Event>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;

        let events = std::mem::take(&mut *self.pending.borrow_mut());
        for event in events {
            if event == Event::ViewerReady {
                self.viewer.mark_ready();
            }
            let mut s = Surfaces {
                globe: &mut self.globe,
                overlay: &mut self.overlay,
                viewer: &mut self.viewer,
            };
            if let Ok(notices) = self.orch.handle(event, &mut s) {
                self.publish(&notices);
            }
        }

        let mut s = Surfaces {
            globe: &mut self.globe,
            overlay: &mut self.overlay,
            viewer: &mut self.viewer,
        };
        let notices = self.orch.tick(dt, &mut s);
        self.publish(&notices);

        self.globe.present(self.orch.camera(), self.orch.orientation());
    }

    fn publish(&self, notices: &[Notice]) {
        for n in notices {
            match n {
                Notice::TransitionStarted(id) => self.globe.notify("onStartTransition", *id),
                Notice::TransitionComplete(id) => self.globe.notify("onTransitionComplete", *id),
                Notice::PhaseChanged(phase) => log::debug!("[frame] phase {phase:?}"),
                Notice::SelectionChanged(sel) => log::debug!("[frame] selection {sel:?}"),
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
