#![cfg(target_arch = "wasm32")]
use crate::constants::{FLOW_CANVAS_STYLE, FLOW_TAG, RIPPLE_CANVAS_STYLE, RIPPLE_TAG};
use crate::core::constants::{
    FLOW_CAMERA_FOV_DEG, FLOW_CAMERA_Z, FLOW_MAX_PIXEL_RATIO, PARTICLE_BASE_COUNT,
    RIPPLE_CAMERA_FOV_DEG, RIPPLE_CAMERA_Z, RIPPLE_MAX_PIXEL_RATIO,
};
use crate::core::{
    compute_quality_scale, particle_count, FlowField, ParticleField, RippleSchedule,
    RippleSequencer, ViewportSource,
};
use crate::host::{BackdropHandle, HostConfig};
use crate::render::{FieldLayer, ParticleLayer};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod gpu;
mod host;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-backdrop loaded");
    Ok(())
}

/// Mount the flowing-noise background into `container`.
///
/// Never throws: if anything fails the returned handle is inert and the page
/// simply has no background.
#[wasm_bindgen(js_name = mountFlowBackground)]
pub fn mount_flow_background(container: web::HtmlElement) -> BackdropHandle {
    let seed = FlowField::random_seed(&mut rand::thread_rng());
    let config = HostConfig {
        tag: FLOW_TAG,
        canvas_style: FLOW_CANVAS_STYLE,
        viewport: ViewportSource::Container,
        fovy_degrees: FLOW_CAMERA_FOV_DEG,
        eye_z: FLOW_CAMERA_Z,
        pixel_ratio_cap: FLOW_MAX_PIXEL_RATIO,
    };
    let result = host::mount(container, config, move |gpu| {
        FieldLayer::new(&gpu.device, gpu.format(), FlowField::new(seed))
    });
    result.unwrap_or_else(|e| {
        log::warn!("[{}] mount failed: {:?}", FLOW_TAG, e);
        BackdropHandle::inert()
    })
}

/// Mount the particle ripple background into `container`.
#[wasm_bindgen(js_name = mountRippleBackground)]
pub fn mount_ripple_background(container: web::HtmlElement) -> BackdropHandle {
    let count = match web::window() {
        Some(w) => {
            let scale = compute_quality_scale(&dom::device_signals(&w));
            log::info!("[{}] quality {:?}", RIPPLE_TAG, scale);
            particle_count(PARTICLE_BASE_COUNT, scale.factor())
        }
        None => PARTICLE_BASE_COUNT,
    };
    let field = ParticleField::generate(count, &mut rand::thread_rng());
    let config = HostConfig {
        tag: RIPPLE_TAG,
        canvas_style: RIPPLE_CANVAS_STYLE,
        viewport: ViewportSource::Window,
        fovy_degrees: RIPPLE_CAMERA_FOV_DEG,
        eye_z: RIPPLE_CAMERA_Z,
        pixel_ratio_cap: RIPPLE_MAX_PIXEL_RATIO,
    };
    let result = host::mount(container, config, move |gpu| {
        let sequencer = RippleSequencer::new(RippleSchedule::default());
        ParticleLayer::new(&gpu.device, gpu.format(), &field, sequencer)
    });
    result.unwrap_or_else(|e| {
        log::warn!("[{}] mount failed: {:?}", RIPPLE_TAG, e);
        BackdropHandle::inert()
    })
}
