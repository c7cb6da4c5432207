use crate::state::Viewport;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Reads the window inner size, falling back to the default viewport when
/// the metrics are unavailable.
pub fn measure_viewport() -> Viewport {
    let fallback = Viewport::default();
    match web_sys::window() {
        Some(window) => Viewport {
            width: window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(fallback.width),
            height: window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(fallback.height),
        },
        None => fallback,
    }
}
