use crate::constants::CLEAR_COLOR;
use crate::core::{
    BackdropError, HostView, Lifecycle, Release, Resize, TeardownHook, ViewportSource,
};
use crate::dom;
use crate::gpu::GpuContext;
use crate::render::Layer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Static description of one background's surface and camera.
pub struct HostConfig {
    pub tag: &'static str,
    pub canvas_style: &'static str,
    pub viewport: ViewportSource,
    pub fovy_degrees: f32,
    pub eye_z: f32,
    pub pixel_ratio_cap: f64,
}

/// GPU-side state released together on teardown.
struct GpuResources<L: Layer> {
    gpu: GpuContext,
    layer: L,
}

impl<L: Layer> GpuResources<L> {
    fn render(&mut self, view: &HostView, elapsed: f32) -> Result<(), wgpu::SurfaceError> {
        self.layer.update(&self.gpu.queue, view, elapsed);
        let frame = self.gpu.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("backdrop_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.layer.draw(&mut rpass);
        }
        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<L: Layer> Release for GpuResources<L> {
    fn release(&mut self) {
        self.layer.release();
        self.gpu.device.destroy();
    }
}

struct HostState<L: Layer> {
    tag: &'static str,
    window: web::Window,
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    viewport: ViewportSource,
    view: HostView,
    resources: Lifecycle<GpuResources<L>>,
    clock: Instant,
    torn_down: bool,
}

impl<L: Layer> HostState<L> {
    fn frame(&mut self) {
        let elapsed = self.clock.elapsed().as_secs_f32();
        let Some(res) = self.resources.get_mut() else {
            return;
        };
        match res.render(&self.view, elapsed) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => res.gpu.reconfigure(),
            Err(e) => log::error!("[{}] render error: {:?}", self.tag, e),
        }
    }

    fn resize(&mut self) {
        let viewport = dom::read_viewport(&self.window, &self.container, self.viewport);
        match self.view.resize(viewport) {
            Resize::Applied { width, height } => {
                dom::set_backing_size(&self.canvas, (width, height));
                if let Some(res) = self.resources.get_mut() {
                    res.gpu.resize(width, height);
                    res.layer.resize(&res.gpu.queue, &self.view);
                }
                log::debug!(
                    "[{}] resized to {}x{} (aspect {:.3})",
                    self.tag,
                    width,
                    height,
                    self.view.camera.aspect
                );
            }
            Resize::Skipped => log::debug!("[{}] zero-sized viewport, resize skipped", self.tag),
            Resize::Unchanged => {}
        }
    }

    fn install(&mut self, mut res: GpuResources<L>) {
        if self.torn_down {
            // Unmounted while the adapter request was in flight
            res.release();
            log::info!("[{}] discarded GPU setup after teardown", self.tag);
            return;
        }
        // Resizes seen while the device was pending only reached the view
        if let Some((width, height)) = self.view.stale_surface(res.gpu.size()) {
            res.gpu.resize(width, height);
            log::debug!("[{}] surface caught up to {}x{}", self.tag, width, height);
        }
        res.layer.resize(&res.gpu.queue, &self.view);
        self.resources = Lifecycle::new(res);
        log::info!("[{}] GPU ready", self.tag);
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if self.resources.teardown() {
            log::info!("[{}] released GPU resources", self.tag);
        }
        self.canvas.remove();
        log::info!("[{}] unmounted", self.tag);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that can be cancelled from outside.
struct FrameLoop {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    fn start<L: Layer + 'static>(state: Rc<RefCell<HostState<L>>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_inner = tick.clone();
        let raf_inner = raf_id.clone();
        let running_inner = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_inner.set(None);
            if !running_inner.get() {
                return;
            }
            state.borrow_mut().frame();
            raf_inner.set(request_frame(&tick_inner));
        }) as Box<dyn FnMut()>));
        raf_id.set(request_frame(&tick));

        Self {
            tick,
            raf_id,
            running,
        }
    }

    fn cancel(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Drops the closure and with it the reference cycle through `tick`
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// Returned to the page by every mount; call `teardown()` on unmount.
///
/// Freeing the handle without calling `teardown()` tears down as well.
#[wasm_bindgen]
pub struct BackdropHandle {
    teardown: TeardownHook,
}

impl BackdropHandle {
    fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: TeardownHook::new(teardown),
        }
    }

    /// Handle for a mount that failed before anything was attached.
    pub(crate) fn inert() -> Self {
        Self {
            teardown: TeardownHook::inert(),
        }
    }
}

impl Drop for BackdropHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Stop the frame loop, release GPU resources and detach the canvas.
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        self.teardown.fire();
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.teardown.is_armed()
    }
}

fn observe_container(
    container: &web::HtmlElement,
    on_resize: &Closure<dyn FnMut()>,
) -> Option<web::ResizeObserver> {
    match web::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(container);
            Some(observer)
        }
        Err(e) => {
            log::warn!("ResizeObserver unavailable, tracking window only: {:?}", e);
            None
        }
    }
}

/// Attach a canvas to `container`, start the frame loop and bring up the
/// GPU in the background. `build` runs once the device is ready.
pub fn mount<L, B>(
    container: web::HtmlElement,
    config: HostConfig,
    build: B,
) -> anyhow::Result<BackdropHandle>
where
    L: Layer + 'static,
    B: FnOnce(&GpuContext) -> L + 'static,
{
    let window = web::window().ok_or(BackdropError::NoWindow)?;
    let document = window.document().ok_or(BackdropError::NoDocument)?;
    let canvas = dom::create_backdrop_canvas(&document, config.canvas_style)?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let mut view = HostView::new(config.fovy_degrees, config.eye_z, config.pixel_ratio_cap);
    let initial = dom::read_viewport(&window, &container, config.viewport);
    if view.resize(initial) == Resize::Skipped {
        log::warn!("[{}] mounted into a zero-sized container", config.tag);
    }
    dom::set_backing_size(&canvas, view.surface_size);
    let (width, height) = view.surface_size;

    let state = Rc::new(RefCell::new(HostState {
        tag: config.tag,
        window: window.clone(),
        container,
        canvas: canvas.clone(),
        viewport: config.viewport,
        view,
        resources: Lifecycle::empty(),
        clock: Instant::now(),
        torn_down: false,
    }));

    let state_resize = state.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        state_resize.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    // Containers can change size without the window doing so
    let observer = if config.viewport.tracks_element() {
        observe_container(&state.borrow().container, &on_resize)
    } else {
        None
    };

    let frame_loop = FrameLoop::start(state.clone());

    let tag = config.tag;
    let state_init = state.clone();
    spawn_local(async move {
        match GpuContext::new(&canvas, width, height).await {
            Ok(gpu) => {
                let layer = build(&gpu);
                state_init.borrow_mut().install(GpuResources { gpu, layer });
            }
            // Decorative layer: log and stay blank
            Err(e) => log::warn!("[{}] WebGPU unavailable, background disabled: {}", tag, e),
        }
    });

    log::info!("[{}] mounted", tag);
    Ok(BackdropHandle::new(move || {
        frame_loop.cancel();
        if let Some(observer) = observer {
            observer.disconnect();
        }
        _ = window
            .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        drop(on_resize);
        state.borrow_mut().teardown();
    }))
}
