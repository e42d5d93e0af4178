use crate::canvas::Canvas2d;
use crate::input;
use crate::overlay;
use crate::panel::{EditQueue, Panel};
use instant::Instant;
use plexus_core::{AnimationLoop, GovernorAction, TickOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub anim: Rc<RefCell<AnimationLoop>>,
    pub canvas: Rc<RefCell<Canvas2d>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub edits: EditQueue,
    pub panel: Option<Panel>,
    pub document: web::Document,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let pointer = self.pointer.borrow().position;
        let outcome = {
            let mut anim = self.anim.borrow_mut();
            for edit in self.edits.borrow_mut().drain(..) {
                anim.submit(edit);
            }
            anim.tick(dt, pointer, &mut *self.canvas.borrow_mut())
        };

        match outcome {
            TickOutcome::Rendered { snapshot, .. } => {
                if let Some(panel) = &mut self.panel {
                    panel.update_display(&snapshot);
                }
            }
            TickOutcome::Throttled(GovernorAction::Pause) => {
                overlay::set_animation_label(&self.document, false);
            }
            TickOutcome::Throttled(_) | TickOutcome::Idle => {}
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
