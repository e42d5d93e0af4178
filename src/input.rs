use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Last position in canvas CSS pixels; `None` until the pointer first moves.
    pub position: Option<Vec2>,
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    relative_to(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

#[inline]
pub fn relative_to(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

/// `PointerEvent.buttons` bitmask has the primary button held.
#[inline]
pub fn primary_button_held(buttons: u16) -> bool {
    buttons & 1 != 0
}

/// A drag relocates a particle only while the primary button is held over the canvas.
#[inline]
pub fn is_canvas_drag(buttons: u16, on_canvas: bool) -> bool {
    on_canvas && primary_button_held(buttons)
}
