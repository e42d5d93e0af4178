use crate::constants::*;
use crate::dom;
use plexus_core::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn show_panel(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(NAME_CONTAINER_ID) {
        _ = el.class_list().remove_1(VISIBLE_CLASS);
    }
    if let Some(el) = document.get_element_by_id(GUI_CONTAINER_ID) {
        _ = el.set_attribute("style", "visibility:visible");
    }
}

#[inline]
pub fn hide_panel(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(NAME_CONTAINER_ID) {
        _ = el.class_list().add_1(VISIBLE_CLASS);
    }
    if let Some(el) = document.get_element_by_id(GUI_CONTAINER_ID) {
        _ = el.set_attribute("style", "visibility:hidden");
    }
}

#[inline]
pub fn is_panel_visible(document: &web::Document) -> bool {
    document
        .get_element_by_id(GUI_CONTAINER_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("visibility:visible"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle_panel(document: &web::Document) {
    if is_panel_visible(document) {
        hide_panel(document);
    } else {
        show_panel(document);
    }
}

#[inline]
pub fn set_animation_label(document: &web::Document, running: bool) {
    let label = if running {
        LABEL_ANIMATION_ON
    } else {
        LABEL_ANIMATION_OFF
    };
    dom::set_text(document, TOGGLE_ANIMATION_BTN_ID, label);
}

/// User-facing run/pause toggle shared by the button and the keyboard.
pub fn toggle_animation(anim: &Rc<RefCell<AnimationLoop>>, document: &web::Document) {
    let running = anim.borrow_mut().toggle_running();
    set_animation_label(document, running);
}
