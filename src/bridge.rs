//! Rust-side handles on the JS globe renderer and panorama viewer.
//!
//! Both are plain JS objects supplied by the page. Missing methods are
//! logged and skipped so a partial host still runs the transition.

use dive_core::{CameraState, GlobeOrientation, GlobeSurface, Marker, MarkerId, PanoramaViewer, ViewParams};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    let argv = args.iter().collect::<Array>();
    f.apply(target, &argv)
}

fn invoke(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
    match call(target, method, args) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[bridge] {method} failed: {e:?}");
            None
        }
    }
}

fn view_params_to_js(p: &ViewParams) -> JsValue {
    let obj = Object::new();
    for (key, value) in [
        ("pitch", p.pitch),
        ("yaw", p.yaw),
        ("zoom", p.zoom),
        ("maxFov", p.max_fov),
        ("fisheye", p.fisheye),
    ] {
        _ = Reflect::set(&obj, &JsValue::from_str(key), &JsValue::from_f64(value as f64));
    }
    obj.into()
}

fn view_params_from_js(v: &JsValue) -> Option<ViewParams> {
    if v.is_null() || v.is_undefined() {
        return None;
    }
    let field = |key: &str| {
        Reflect::get(v, &JsValue::from_str(key))
            .ok()
            .and_then(|x| x.as_f64())
            .map(|x| x as f32)
    };
    Some(ViewParams {
        pitch: field("pitch")?,
        yaw: field("yaw")?,
        zoom: field("zoom")?,
        max_fov: field("maxFov")?,
        fisheye: field("fisheye")?,
    })
}

/// The page's three.js globe: receives camera/spin each frame.
pub struct JsGlobe {
    handle: JsValue,
}

impl JsGlobe {
    pub fn new(handle: JsValue) -> Self {
        Self { handle }
    }

    pub fn present(&self, camera: &CameraState, orientation: GlobeOrientation) {
        let (p, t) = (camera.position, camera.target);
        let args = [p.x, p.y, p.z, t.x, t.y, t.z].map(|v| JsValue::from_f64(v as f64));
        invoke(&self.handle, "setCamera", &args);
        invoke(
            &self.handle,
            "setRotation",
            &[
                JsValue::from_f64(orientation.spin as f64),
                JsValue::from_f64(orientation.clouds as f64),
            ],
        );
    }

    pub fn notify(&self, method: &str, marker: MarkerId) {
        // optional host callbacks
        if Reflect::has(&self.handle, &JsValue::from_str(method)).unwrap_or(false) {
            invoke(&self.handle, method, &[JsValue::from(marker)]);
        }
    }
}

impl GlobeSurface for JsGlobe {
    fn set_active(&mut self, active: bool) {
        invoke(&self.handle, "setActive", &[JsValue::from_bool(active)]);
    }
}

/// The page's panorama viewer wrapper.
pub struct JsViewer {
    handle: JsValue,
    ready: bool,
}

impl JsViewer {
    pub fn new(handle: JsValue) -> Self {
        Self { handle, ready: false }
    }

    pub fn mark_ready(&mut self) {
        self.ready = true;
    }
}

impl PanoramaViewer for JsViewer {
    fn mount(&mut self, marker: &Marker, initial: &ViewParams, input_enabled: bool) {
        self.ready = false;
        invoke(
            &self.handle,
            "mount",
            &[
                JsValue::from_str(&marker.pano),
                JsValue::from_str(&marker.name),
                view_params_to_js(initial),
                JsValue::from_bool(input_enabled),
            ],
        );
    }

    fn set_view_params(&mut self, params: &ViewParams) {
        invoke(&self.handle, "setViewParams", &[view_params_to_js(params)]);
    }

    fn current_view_params(&self) -> Option<ViewParams> {
        if !self.ready {
            return None;
        }
        invoke(&self.handle, "getCurrentViewParams", &[]).and_then(|v| view_params_from_js(&v))
    }

    fn start_auto_rotate(&mut self) {
        invoke(&self.handle, "startAutoRotate", &[]);
    }

    fn stop_auto_rotate(&mut self) {
        invoke(&self.handle, "stopAutoRotate", &[]);
    }

    fn show_controls(&mut self) {
        invoke(&self.handle, "showControls", &[]);
    }

    fn hide_controls(&mut self) {
        invoke(&self.handle, "hideControls", &[]);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        invoke(&self.handle, "setInputEnabled", &[JsValue::from_bool(enabled)]);
    }

    fn unmount(&mut self) {
        self.ready = false;
        invoke(&self.handle, "unmount", &[]);
    }
}
