use crate::core::SurfaceSize;
use wasm_bindgen::JsCast;
use web_sys as web;

// Overlay the container without taking pointer input away from the page.
const CANVAS_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create_overlay_canvas() -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas
        .set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow::anyhow!("canvas style: {:?}", e))?;
    Ok(canvas)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Backing-store size for the container's current layout box.
pub fn container_surface_size(container: &web::HtmlElement) -> SurfaceSize {
    SurfaceSize::from_css(
        container.offset_width() as f64,
        container.offset_height() as f64,
        device_pixel_ratio(),
    )
}

pub fn apply_backing_size(canvas: &web::HtmlCanvasElement, size: SurfaceSize) {
    if canvas.width() != size.width {
        canvas.set_width(size.width);
    }
    if canvas.height() != size.height {
        canvas.set_height(size.height);
    }
}

pub fn attach(container: &web::HtmlElement, canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    container
        .append_child(canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(())
}

pub fn detach(canvas: &web::HtmlCanvasElement) {
    if let Some(parent) = canvas.parent_node() {
        _ = parent.remove_child(canvas);
    }
}
