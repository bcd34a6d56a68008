#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod galaxy;
mod input;
mod render;

pub use crate::galaxy::GalaxyBackground;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        // The mount element may not be parsed yet
        let on_ready = Closure::once_into_js(|| {
            if let Err(e) = mount_page_background() {
                log::error!("mount error: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else if let Err(e) = mount_page_background() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Pages with a `#galaxyBg` element get a background without any script of
/// their own; the instance is published as `window.galaxy`.
fn mount_page_background() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(el) = document.get_element_by_id(constants::MOUNT_ELEMENT_ID) else {
        return Ok(());
    };
    let container: web::HtmlElement = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let galaxy = GalaxyBackground::initialize(container, crate::core::GalaxyConfig::page_preset());
    js_sys::Reflect::set(&window, &JsValue::from_str("galaxy"), &JsValue::from(galaxy))
        .map_err(|e| anyhow::anyhow!("publish window.galaxy: {:?}", e))?;
    Ok(())
}
