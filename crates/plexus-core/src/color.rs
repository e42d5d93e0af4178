//! RGB/HSV conversion and hue shifting for the background drift.
//!
//! Channels are 8-bit integers on the RGB side and `f64` on the HSV side. Hue is
//! not wrapped when shifted: values above 1 map back onto the color wheel in
//! [`hsv_to_rgb`] through the sector index `floor(h * 6) mod 6`.

use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color `{0}` does not start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have exactly six hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse the `#rrggbb` form produced by `<input type="color">`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_owned()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(s.to_owned()));
        }
        // from_str_radix alone would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_owned()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_owned()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(11,70,80)`.
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };
    let v = max / 255.0;

    // Sector is picked by the first channel equal to the maximum: r, then g, then b.
    let h = if max == min {
        0.0
    } else if max == r {
        ((g - b) + d * if g < b { 6.0 } else { 0.0 }) / (6.0 * d)
    } else if max == g {
        ((b - r) + d * 2.0) / (6.0 * d)
    } else {
        ((r - g) + d * 4.0) / (6.0 * d)
    };

    Hsv { h, s, v }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Rotate the hue of `c` by `delta` turns.
pub fn shift_hue(c: Rgb, delta: f64) -> Rgb {
    let mut hsv = rgb_to_hsv(c);
    hsv.h += delta;
    hsv_to_rgb(hsv)
}

#[inline]
fn to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}
