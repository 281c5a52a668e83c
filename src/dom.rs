use crate::core::{BackdropError, DeviceSignals, Viewport, ViewportSource};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the decorative canvas: hidden from assistive tech and transparent
/// to pointer events.
pub fn create_backdrop_canvas(
    document: &web::Document,
    style: &str,
) -> Result<web::HtmlCanvasElement, BackdropError> {
    let el = document
        .create_element("canvas")
        .map_err(|e| BackdropError::Canvas(format!("{:?}", e)))?;
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| BackdropError::Canvas(format!("{:?}", e)))?;
    _ = canvas.set_attribute("aria-hidden", "true");
    _ = canvas.set_attribute("style", style);
    Ok(canvas)
}

pub fn read_viewport(
    window: &web::Window,
    container: &web::HtmlElement,
    source: ViewportSource,
) -> Viewport {
    let dpr = window.device_pixel_ratio();
    match source {
        ViewportSource::Container => Viewport::new(
            container.client_width() as f64,
            container.client_height() as f64,
            dpr,
        ),
        ViewportSource::Window => {
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            Viewport::new(w, h, dpr)
        }
    }
}

pub fn device_signals(window: &web::Window) -> DeviceSignals {
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let cores = window.navigator().hardware_concurrency();
    let logical_cores = (cores.is_finite() && cores >= 1.0).then_some(cores as u32);
    DeviceSignals {
        viewport_width,
        logical_cores,
    }
}

pub fn set_backing_size(canvas: &web::HtmlCanvasElement, (width, height): (u32, u32)) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}
