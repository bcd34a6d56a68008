use crate::core::{FrameClock, FrameLoop, FrameScheduler, GalaxyConfig, InteractionState, Phase};
use crate::dom;
use crate::events::{self, Listeners};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the lifecycle's scheduler seam.
pub struct RafScheduler {
    tick: TickCell,
}

impl RafScheduler {
    pub fn new(tick: TickCell) -> Self {
        Self { tick }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("[galaxy] requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub config: GalaxyConfig,
    pub container: web::HtmlElement,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<render::GpuState>,
    pub interaction: Rc<RefCell<InteractionState>>,
    pub clock: FrameClock,
    pub frame_loop: FrameLoop<i32>,
    pub scheduler: RafScheduler,
    pub listeners: Listeners,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        config: GalaxyConfig,
        container: web::HtmlElement,
        canvas: Option<web::HtmlCanvasElement>,
        scheduler: RafScheduler,
    ) -> Self {
        Self {
            config,
            container,
            canvas,
            gpu: None,
            interaction: Rc::new(RefCell::new(InteractionState::default())),
            clock: FrameClock::new(),
            frame_loop: FrameLoop::new(),
            scheduler,
            listeners: Listeners::default(),
            last_instant: Instant::now(),
        }
    }

    /// One display refresh: advance the clock, smooth the pointer, upload,
    /// draw. The next callback is requested before drawing so a failed frame
    /// does not stop the loop.
    pub fn frame(&mut self) {
        if !self.frame_loop.on_frame(&mut self.scheduler) {
            return;
        }
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let elapsed = self.clock.tick(dt);

        let input = {
            let mut state = self.interaction.borrow_mut();
            state.step();
            *state
        };

        if let Some(g) = &mut self.gpu {
            g.update_frame(&self.config, elapsed, &input);
            match g.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    pub fn start(&mut self) {
        self.frame_loop.start(&mut self.scheduler);
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop(&mut self.scheduler);
        self.clock.pause();
    }

    /// Size the backing store from the container box and pass it on to the
    /// GPU surface and resolution uniform.
    pub fn resize(&mut self) {
        if self.frame_loop.is_terminal() {
            return;
        }
        let Some(canvas) = &self.canvas else {
            return;
        };
        let mut size = dom::container_surface_size(&self.container);
        if let Some(g) = &self.gpu {
            size = size.clamped(g.max_dimension());
        }
        dom::apply_backing_size(canvas, size);
        if let Some(g) = &mut self.gpu {
            g.resize(size);
        }
    }

    /// GPU acquisition finished successfully: attach, size, listen, run.
    pub fn on_gpu_ready(&mut self, gpu: render::GpuState, this: Weak<RefCell<FrameContext>>) {
        if self.frame_loop.phase() != Phase::Pending {
            gpu.release();
            return;
        }
        let Some(canvas) = self.canvas.clone() else {
            gpu.release();
            self.frame_loop.mark_failed();
            return;
        };
        if let Err(e) = dom::attach(&self.container, &canvas) {
            log::error!("[galaxy] init error: {:?}", e);
            gpu.release();
            self.frame_loop.mark_failed();
            return;
        }
        self.gpu = Some(gpu);
        self.resize();

        self.listeners.resize = events::wire_window_resize(this);
        if self.config.mouse_interaction {
            self.listeners.pointer =
                events::wire_pointer_handlers(&self.container, self.interaction.clone());
        }

        self.last_instant = Instant::now();
        self.frame_loop.mark_ready(&mut self.scheduler);
        log::info!("[galaxy] running={}", self.frame_loop.is_scheduled());
    }

    pub fn on_gpu_failed(&mut self, err: anyhow::Error) {
        log::error!("[gpu] init error: {:?}", err);
        self.frame_loop.mark_failed();
    }

    /// Stop for good and give every page and GPU resource back.
    pub fn destroy(&mut self) {
        if self.frame_loop.phase() == Phase::Destroyed {
            return;
        }
        self.frame_loop.destroy(&mut self.scheduler);
        self.clock.pause();
        self.listeners.remove_all();
        if let Some(canvas) = self.canvas.take() {
            dom::detach(&canvas);
        }
        if let Some(g) = self.gpu.take() {
            g.release();
        }
        log::info!("[galaxy] destroyed");
    }
}

impl Drop for FrameContext {
    fn drop(&mut self) {
        // A pending callback must not outlive the closure it points at
        self.frame_loop.stop(&mut self.scheduler);
    }
}

/// Build the frame callback. It holds the context weakly so dropping the
/// renderer also ends the loop.
pub fn make_tick(ctx: &Rc<RefCell<FrameContext>>) -> Closure<dyn FnMut()> {
    let weak = Rc::downgrade(ctx);
    Closure::wrap(Box::new(move || {
        if let Some(ctx) = weak.upgrade() {
            ctx.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>)
}
