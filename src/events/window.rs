use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn remove(self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}

/// Re-run `resize` whenever the window changes size.
pub fn wire_window_resize(ctx: Weak<RefCell<FrameContext>>) -> Option<ResizeListener> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(move || {
        if let Some(ctx) = ctx.upgrade() {
            if let Ok(mut c) = ctx.try_borrow_mut() {
                c.resize();
            }
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::error!("[resize] listener error: {:?}", e);
        return None;
    }
    Some(ResizeListener { window, closure })
}
