use crate::core::client_to_unit;
use glam::Vec2;
use web_sys as web;

/// Pointer position in container unit coordinates, y up. `None` while the
/// container has no layout box.
#[inline]
pub fn pointer_container_uv(ev: &web::PointerEvent, container: &web::HtmlElement) -> Option<Vec2> {
    let rect = container.get_bounding_client_rect();
    client_to_unit(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}
