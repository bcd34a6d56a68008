use crate::core::GalaxyConfig;
use crate::dom;
use crate::frame::{self, FrameContext, RafScheduler, TickCell};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Animated starfield drawn behind the contents of a container element.
///
/// ```js
/// const galaxy = new GalaxyBackground(document.getElementById("galaxyBg"), {
///   hueShift: 200,
///   twinkleIntensity: 0.6,
/// });
/// galaxy.stop();
/// galaxy.destroy();
/// ```
#[wasm_bindgen]
pub struct GalaxyBackground {
    ctx: Rc<RefCell<FrameContext>>,
    tick: TickCell,
}

#[wasm_bindgen]
impl GalaxyBackground {
    /// `options` is an optional plain object with camelCase keys; missing
    /// keys keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement, options: JsValue) -> GalaxyBackground {
        Self::initialize(container, config_from_js(options))
    }

    pub fn resize(&self) {
        self.ctx.borrow_mut().resize();
    }

    pub fn start(&self) {
        self.ctx.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.ctx.borrow_mut().stop();
    }

    /// Terminal: the instance does nothing afterwards.
    pub fn destroy(&self) {
        self.ctx.borrow_mut().destroy();
        // Nothing is pending any more, so the callback can go
        self.tick.borrow_mut().take();
    }
}

impl GalaxyBackground {
    pub fn initialize(container: web::HtmlElement, config: GalaxyConfig) -> GalaxyBackground {
        if !config.is_finite() {
            log::warn!("[galaxy] non-finite option values; rendering may be garbled");
        }
        let tick: TickCell = Rc::new(RefCell::new(None));
        let canvas = match dom::create_overlay_canvas() {
            Ok(c) => Some(c),
            Err(e) => {
                log::error!("[galaxy] init error: {:?}", e);
                None
            }
        };
        let ctx = Rc::new(RefCell::new(FrameContext::new(
            config.clone(),
            container.clone(),
            canvas.clone(),
            RafScheduler::new(tick.clone()),
        )));
        *tick.borrow_mut() = Some(frame::make_tick(&ctx));

        let Some(canvas) = canvas else {
            ctx.borrow_mut().frame_loop.mark_failed();
            return GalaxyBackground { ctx, tick };
        };

        // Size the backing store before the surface is created from it
        dom::apply_backing_size(&canvas, dom::container_surface_size(&container));
        // Runs as soon as the GPU is ready, unless stopped before then
        ctx.borrow_mut().start();

        let ctx_init = ctx.clone();
        spawn_local(async move {
            let result = render::GpuState::new(&canvas, &config).await;
            let weak = Rc::downgrade(&ctx_init);
            let mut c = ctx_init.borrow_mut();
            match result {
                Ok(gpu) => c.on_gpu_ready(gpu, weak),
                Err(e) => c.on_gpu_failed(e),
            }
        });

        GalaxyBackground { ctx, tick }
    }
}

fn config_from_js(options: JsValue) -> GalaxyConfig {
    if options.is_undefined() || options.is_null() {
        return GalaxyConfig::default();
    }
    match serde_wasm_bindgen::from_value::<GalaxyConfig>(options) {
        Ok(cfg) => cfg.with_unset_defaults(),
        Err(e) => {
            log::error!("[galaxy] invalid options, using defaults: {}", e);
            GalaxyConfig::default()
        }
    }
}
