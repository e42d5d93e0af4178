// Shared test helpers: a Canvas that records every call.

#![allow(dead_code)]
use glam::Vec2;
use plexus_core::{Canvas, Rgb, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Background(Rgb),
    Stroke(Rgb),
    StrokeWeight(f32),
    Line(Vec2, Vec2),
    PixelDensity(f32),
    FrameRate(f32),
    Resize(Viewport),
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Call>,
}

impl RecordingCanvas {
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Line(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn weights(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::StrokeWeight(w) => Some(*w),
                _ => None,
            })
            .collect()
    }

    pub fn densities(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::PixelDensity(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn backgrounds(&self) -> Vec<Rgb> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Background(rgb) => Some(*rgb),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn background(&mut self, color: Rgb) {
        self.calls.push(Call::Background(color));
    }
    fn stroke(&mut self, color: Rgb) {
        self.calls.push(Call::Stroke(color));
    }
    fn stroke_weight(&mut self, weight: f32) {
        self.calls.push(Call::StrokeWeight(weight));
    }
    fn line(&mut self, from: Vec2, to: Vec2) {
        self.calls.push(Call::Line(from, to));
    }
    fn pixel_density(&mut self, factor: f32) {
        self.calls.push(Call::PixelDensity(factor));
    }
    fn frame_rate(&mut self, target: f32) {
        self.calls.push(Call::FrameRate(target));
    }
    fn resize(&mut self, viewport: Viewport) {
        self.calls.push(Call::Resize(viewport));
    }
}
