#![cfg(target_arch = "wasm32")]
use instant::Instant;
use plexus_core::constants::INITIAL_PARTICLE_COUNT;
use plexus_core::AnimationLoop;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keymap;
mod overlay;
mod panel;

use crate::canvas::Canvas2d;
use crate::constants::*;
use crate::panel::{EditQueue, Panel};

fn wire_window_resize(anim: Rc<RefCell<AnimationLoop>>, canvas: Rc<RefCell<Canvas2d>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let viewport = dom::window_viewport(&window);
            anim.borrow_mut()
                .resize(viewport, &mut *canvas.borrow_mut());
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_control_buttons(document: &web::Document, anim: &Rc<RefCell<AnimationLoop>>) {
    let anim_toggle = anim.clone();
    let doc_toggle = document.clone();
    dom::add_click_listener(document, TOGGLE_ANIMATION_BTN_ID, move || {
        overlay::toggle_animation(&anim_toggle, &doc_toggle);
    });

    let doc_tweak = document.clone();
    dom::add_click_listener(document, TWEAK_ANIMATION_BTN_ID, move || {
        overlay::toggle_panel(&doc_tweak);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plexus-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let home = document
        .get_element_by_id(HOME_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", HOME_ID))?;
    let canvas_el: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    home.append_child(&canvas_el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let viewport = dom::window_viewport(&window);
    let canvas = Rc::new(RefCell::new(Canvas2d::new(
        canvas_el,
        viewport,
        window.device_pixel_ratio(),
    )?));

    let seed: u64 = rand::thread_rng().gen();
    let anim = Rc::new(RefCell::new(AnimationLoop::new(
        viewport,
        INITIAL_PARTICLE_COUNT,
        seed,
    )));
    anim.borrow_mut().setup(&mut *canvas.borrow_mut());
    log::info!(
        "[init] {}x{} viewport, {} particles, density {:.2}",
        viewport.width,
        viewport.height,
        anim.borrow().particles().len(),
        canvas.borrow().density()
    );

    // The panel starts hidden with the name card showing.
    overlay::hide_panel(&document);
    overlay::set_animation_label(&document, true);

    let edits: EditQueue = Rc::new(RefCell::new(Vec::new()));
    let panel = match Panel::build(&document, &edits, &anim.borrow().snapshot()) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("[init] parameter panel unavailable: {:?}", e);
            None
        }
    };

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    wire_control_buttons(&document, &anim);
    wire_window_resize(anim.clone(), canvas.clone());
    events::wire_global_keydown(anim.clone(), edits.clone(), document.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.borrow().element().clone(),
        anim: anim.clone(),
        pointer: pointer.clone(),
    });

    // Engine tick driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        anim,
        canvas,
        pointer,
        edits,
        panel,
        document,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
