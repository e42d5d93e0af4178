//! Drawing backend seen by the engine.
//!
//! The engine never talks to a concrete surface. The web frontend implements
//! this over `CanvasRenderingContext2d`; tests implement it with a recorder.

use crate::color::Rgb;
use crate::particles::Viewport;
use glam::Vec2;

pub trait Canvas {
    /// Fill the whole surface with `color`.
    fn background(&mut self, color: Rgb);
    fn stroke(&mut self, color: Rgb);
    fn stroke_weight(&mut self, weight: f32);
    fn line(&mut self, from: Vec2, to: Vec2);
    /// Backing-store pixels per CSS pixel.
    fn pixel_density(&mut self, factor: f32);
    /// Requested refresh rate; backends driven by the display may ignore it.
    fn frame_rate(&mut self, _target: f32) {}
    fn resize(&mut self, viewport: Viewport);
}
