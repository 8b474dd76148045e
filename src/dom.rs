use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}
