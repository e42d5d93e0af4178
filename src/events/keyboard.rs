use crate::keymap::{action_for_key, KeyAction};
use crate::overlay;
use crate::panel::EditQueue;
use plexus_core::{AnimationLoop, PanelEdit};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    anim: &Rc<RefCell<AnimationLoop>>,
    edits: &EditQueue,
    document: &web::Document,
) {
    // Leave keys alone while a panel control has focus.
    let in_form = ev
        .target()
        .is_some_and(|t| t.dyn_ref::<web::HtmlInputElement>().is_some());
    if in_form {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleAnimation => overlay::toggle_animation(anim, document),
        KeyAction::TogglePanel => overlay::toggle_panel(document),
        KeyAction::Reset => edits.borrow_mut().push(PanelEdit::Reset),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(
    anim: Rc<RefCell<AnimationLoop>>,
    edits: EditQueue,
    document: web::Document,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &anim, &edits, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
