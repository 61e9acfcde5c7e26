//! Decorative point generator for the starfield background.
//!
//! Points are a pure function of their index: no randomness, no state.
//! The same count always yields the same sequence.

use serde::Serialize;

/// Default number of points in the background layer.
pub const DEFAULT_STAR_COUNT: usize = 50;

/// Vertical positions stay in the upper 70% of the background.
const VERTICAL_SPAN: usize = 70;
const HORIZONTAL_SPAN: usize = 100;
const DELAY_SPAN: usize = 3;

const VERTICAL_STEP: usize = 137;
const HORIZONTAL_STEP: usize = 149;
const DELAY_STEP: usize = 113;

/// One non-interactive marker in the background layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecorativePoint {
    pub id: usize,
    /// Distance from the top edge, in percent of the background height.
    #[serde(rename = "top", serialize_with = "as_percent")]
    pub top_percent: u8,
    /// Distance from the left edge, in percent of the background width.
    #[serde(rename = "left", serialize_with = "as_percent")]
    pub left_percent: u8,
    /// Offset into the twinkle loop, in whole seconds.
    #[serde(rename = "delay", serialize_with = "as_seconds")]
    pub delay_secs: u8,
}

impl DecorativePoint {
    /// Derives the point at `index`.
    pub fn at(index: usize) -> Self {
        Self {
            id: index,
            top_percent: scaled_mod(index, VERTICAL_STEP, VERTICAL_SPAN),
            left_percent: scaled_mod(index, HORIZONTAL_STEP, HORIZONTAL_SPAN),
            delay_secs: scaled_mod(index, DELAY_STEP, DELAY_SPAN),
        }
    }

    /// Vertical position as a percentage string, e.g. `"37%"`.
    pub fn vertical_position(&self) -> String {
        format!("{}%", self.top_percent)
    }

    /// Horizontal position as a percentage string, e.g. `"49%"`.
    pub fn horizontal_position(&self) -> String {
        format!("{}%", self.left_percent)
    }

    /// Animation delay as a seconds string, e.g. `"2s"`.
    pub fn animation_delay(&self) -> String {
        format!("{}s", self.delay_secs)
    }
}

/// Generates `count` points in index order.
pub fn generate_points(count: usize) -> Vec<DecorativePoint> {
    (0..count).map(DecorativePoint::at).collect()
}

/// `(index * step) % span` without overflowing for large indices.
fn scaled_mod(index: usize, step: usize, span: usize) -> u8 {
    // Both factors are reduced below `span` (<= 100), so the product fits easily.
    let value = ((index % span) * (step % span)) % span;
    value as u8
}

fn as_percent<S: serde::Serializer>(value: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value}%"))
}

fn as_seconds<S: serde::Serializer>(value: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value}s"))
}
