use crate::constants::MIN_LINE_WIDTH;
use crate::dom;
use glam::Vec2;
use plexus_core::{Canvas, Rgb, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Canvas` backed by a 2D rendering context. Drawing happens in CSS pixels; the
/// context transform maps them onto the backing store at the current density.
pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
    density: f64,
    line_width: f64,
}

impl Canvas2d {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        viewport: Viewport,
        density: f64,
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let mut c = Self {
            canvas,
            ctx,
            viewport,
            density,
            line_width: 1.0,
        };
        c.sync_backing_size();
        Ok(c)
    }

    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    // Resizing the backing store resets the context state, so the transform and
    // line width are restored here.
    fn sync_backing_size(&mut self) {
        let Viewport { width, height } = self.viewport;
        self.canvas.set_width(dom::backing_size(width, self.density));
        self.canvas.set_height(dom::backing_size(height, self.density));
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{width}px"));
        _ = style.set_property("height", &format!("{height}px"));
        _ = self
            .ctx
            .set_transform(self.density, 0.0, 0.0, self.density, 0.0, 0.0);
        self.ctx.set_line_width(self.line_width);
        self.ctx.set_line_cap("round");
    }
}

impl Canvas for Canvas2d {
    fn background(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn stroke(&mut self, color: Rgb) {
        self.ctx.set_stroke_style_str(&color.css());
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.line_width = (weight as f64).max(MIN_LINE_WIDTH);
        self.ctx.set_line_width(self.line_width);
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn pixel_density(&mut self, factor: f32) {
        if (self.density - factor as f64).abs() < f64::EPSILON {
            return;
        }
        log::info!("[canvas] pixel density {:.2} -> {:.2}", self.density, factor);
        self.density = factor as f64;
        self.sync_backing_size();
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.sync_backing_size();
    }
}
