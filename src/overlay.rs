use dive_core::OverlaySink;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Full-screen fade layer; a fixed, click-through element above both canvases.
pub struct DomOverlay {
    el: web::HtmlElement,
}

impl DomOverlay {
    pub fn find(document: &web::Document, element_id: &str) -> Option<Self> {
        let el = document
            .get_element_by_id(element_id)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let style = el.style();
        _ = style.set_property("pointer-events", "none");
        _ = style.set_property("opacity", "0");
        Some(Self { el })
    }
}

impl OverlaySink for DomOverlay {
    fn set_opacity(&mut self, opacity: f32, fade_secs: f32) {
        let style = self.el.style();
        let transition = if fade_secs > 0.0 {
            format!("opacity {fade_secs:.2}s ease-in-out")
        } else {
            // must land before the next paint
            "none".to_string()
        };
        _ = style.set_property("transition", &transition);
        _ = style.set_property("opacity", &format!("{opacity:.3}"));
    }
}
