pub mod pointer;
pub mod window;

pub use pointer::{wire_pointer_handlers, PointerListeners};
pub use window::{wire_window_resize, ResizeListener};

/// Every listener the renderer registered, so `destroy` can take them all
/// back off the page.
#[derive(Default)]
pub struct Listeners {
    pub resize: Option<ResizeListener>,
    pub pointer: Option<PointerListeners>,
}

impl Listeners {
    pub fn remove_all(&mut self) {
        if let Some(r) = self.resize.take() {
            r.remove();
        }
        if let Some(p) = self.pointer.take() {
            p.remove();
        }
    }
}
