use crate::core::InteractionState;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

pub struct PointerListeners {
    container: web::HtmlElement,
    on_move: PointerClosure,
    on_leave: PointerClosure,
}

impl PointerListeners {
    pub fn remove(self) {
        _ = self.container.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = self.container.remove_event_listener_with_callback(
            "pointerleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
    }
}

/// Feed pointer movement over `container` into the interaction targets.
/// The canvas itself ignores pointer input, so listeners sit on the
/// container.
pub fn wire_pointer_handlers(
    container: &web::HtmlElement,
    interaction: Rc<RefCell<InteractionState>>,
) -> Option<PointerListeners> {
    let on_move = {
        let container = container.clone();
        let interaction = interaction.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some(uv) = input::pointer_container_uv(&ev, &container) {
                interaction.borrow_mut().pointer_moved(uv);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        interaction.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>);

    let added = container
        .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
        .and_then(|_| {
            container
                .add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref())
        });
    let listeners = PointerListeners {
        container: container.clone(),
        on_move,
        on_leave,
    };
    if let Err(e) = added {
        log::error!("[galaxy] pointer listener error: {:?}", e);
        listeners.remove();
        return None;
    }
    Some(listeners)
}
