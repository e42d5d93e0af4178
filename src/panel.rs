//! Parameter panel built from plain form controls inside `#gui-container`.
//!
//! Every control pushes a [`PanelEdit`] into the shared queue; the frame loop
//! hands the queue to the engine and refreshes the controls from the snapshot
//! it gets back, so the background picker follows the hue drift.

use crate::constants::*;
use plexus_core::constants::{BACKGROUND_SPEED_MAX, MAX_DISTANCE_MIN};
use plexus_core::{PanelEdit, PanelSnapshot, Rgb};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type EditQueue = Rc<RefCell<Vec<PanelEdit>>>;

pub struct Panel {
    line_color: web::HtmlInputElement,
    background_color: web::HtmlInputElement,
    background_speed: web::HtmlInputElement,
    max_distance: web::HtmlInputElement,
    last: Option<PanelSnapshot>,
}

impl Panel {
    pub fn build(
        document: &web::Document,
        edits: &EditQueue,
        initial: &PanelSnapshot,
    ) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id(GUI_CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", GUI_CONTAINER_ID))?;
        let root = create(document, "div")?;
        _ = root.class_list().add_1(PANEL_CLASS);
        container
            .append_child(&root)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let line_color = color_input(document, &root, "lineColor", initial.line_color)?;
        on_input(&line_color, edits, |v| parse_color(v).map(PanelEdit::LineColor));

        let background_color =
            color_input(document, &root, "backgroundColor", initial.background_color)?;
        on_input(&background_color, edits, |v| {
            parse_color(v).map(PanelEdit::BackgroundColor)
        });

        let background_speed = range_input(
            document,
            &root,
            "backgroundSpeed",
            (0.0, BACKGROUND_SPEED_MAX, SPEED_SLIDER_STEP),
            initial.background_speed,
        )?;
        on_input(&background_speed, edits, |v| {
            v.parse::<f32>().ok().map(PanelEdit::BackgroundSpeed)
        });

        let max_distance = range_input(
            document,
            &root,
            "maxDistance",
            (
                MAX_DISTANCE_MIN,
                initial.max_distance_limit,
                DISTANCE_SLIDER_STEP,
            ),
            initial.max_distance,
        )?;
        on_input(&max_distance, edits, |v| {
            v.parse::<f32>().ok().map(PanelEdit::MaxDistance)
        });

        let reset = create(document, "button")?;
        reset.set_text_content(Some("reset"));
        root.append_child(&reset)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let edits_reset = edits.clone();
        let closure = Closure::wrap(Box::new(move || {
            edits_reset.borrow_mut().push(PanelEdit::Reset);
        }) as Box<dyn FnMut()>);
        _ = reset.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        Ok(Self {
            line_color,
            background_color,
            background_speed,
            max_distance,
            last: Some(*initial),
        })
    }

    /// Mirror the engine's values into the controls, touching only what changed.
    pub fn update_display(&mut self, snapshot: &PanelSnapshot) {
        let last = self.last.replace(*snapshot);
        let changed = |f: fn(&PanelSnapshot) -> String| last.as_ref().map(f) != Some(f(snapshot));

        if changed(|s| s.line_color.to_hex()) {
            self.line_color.set_value(&snapshot.line_color.to_hex());
        }
        if changed(|s| s.background_color.to_hex()) {
            self.background_color
                .set_value(&snapshot.background_color.to_hex());
        }
        if changed(|s| s.background_speed.to_string()) {
            self.background_speed
                .set_value(&snapshot.background_speed.to_string());
        }
        if changed(|s| s.max_distance_limit.to_string()) {
            self.max_distance
                .set_max(&snapshot.max_distance_limit.to_string());
        }
        if changed(|s| s.max_distance.to_string()) {
            self.max_distance
                .set_value(&snapshot.max_distance.to_string());
        }
    }
}

fn parse_color(value: &str) -> Option<Rgb> {
    match Rgb::from_hex(value) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("[panel] ignoring color edit: {e}");
            None
        }
    }
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn labelled_input(
    document: &web::Document,
    root: &web::Element,
    name: &str,
    kind: &str,
) -> anyhow::Result<web::HtmlInputElement> {
    let label = create(document, "label")?;
    label.set_text_content(Some(name));
    let input = create(document, "input")?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    input.set_type(kind);
    input.set_name(name);
    label
        .append_child(&input)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    root.append_child(&label)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(input)
}

fn color_input(
    document: &web::Document,
    root: &web::Element,
    name: &str,
    value: Rgb,
) -> anyhow::Result<web::HtmlInputElement> {
    let input = labelled_input(document, root, name, "color")?;
    input.set_value(&value.to_hex());
    Ok(input)
}

fn range_input(
    document: &web::Document,
    root: &web::Element,
    name: &str,
    (min, max, step): (f32, f32, f32),
    value: f32,
) -> anyhow::Result<web::HtmlInputElement> {
    let input = labelled_input(document, root, name, "range")?;
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    input.set_step(&step.to_string());
    input.set_value(&value.to_string());
    Ok(input)
}

fn on_input(
    input: &web::HtmlInputElement,
    edits: &EditQueue,
    to_edit: impl Fn(&str) -> Option<PanelEdit> + 'static,
) {
    let edits = edits.clone();
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(edit) = to_edit(&source.value()) {
            edits.borrow_mut().push(edit);
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
