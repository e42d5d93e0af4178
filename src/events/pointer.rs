use crate::input;
use plexus_core::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub anim: Rc<RefCell<AnimationLoop>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
}

// Tracked on the window so the pointer lines follow the cursor across overlays.
fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.pointer.borrow_mut().position = Some(pos);

        let on_canvas = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlCanvasElement>().ok())
            .is_some_and(|c| c == w.canvas);
        if input::is_canvas_drag(ev.buttons(), on_canvas) {
            w.anim.borrow_mut().drag_to(pos);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Touch input has no hover, so the first contact also places the pointer.
fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.pointer.borrow_mut().position = Some(pos);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
