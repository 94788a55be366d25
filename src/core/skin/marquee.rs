//! core/skin/marquee.rs
//! Scrolling title model.
//!
//! When the rendered text fits its container it is drawn once, static. When
//! it overflows, `text sep text sep` is drawn and translated left in
//! whole-character steps; after half the rendered width the second copy is
//! exactly where the first started, so the loop point is seamless.
//!
//! Everything is recomputed from the current text and container width on
//! every call, so changing either re-measures for free.

use super::text::{CHAR_WIDTH, text_width};

/// One full cycle moves one character every `CHAR_STEP_SECONDS`: more
/// characters means a longer cycle at constant per-character speed, not a
/// constant total duration.
pub const CHAR_STEP_SECONDS: f32 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    text: String,
    separator: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeLayout {
    /// Text fits; render once, no animation.
    Static,
    /// Text overflows; render `text sep text sep` and cycle over
    /// `cycle_chars * CHAR_WIDTH` pixels (half the rendered width).
    Looping { cycle_chars: usize },
}

impl Marquee {
    pub fn new(text: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            separator: separator.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Measure against the available container width.
    pub fn layout(&self, container_width: u32) -> MarqueeLayout {
        if text_width(&self.text) <= container_width {
            MarqueeLayout::Static
        } else {
            MarqueeLayout::Looping {
                cycle_chars: self.text.chars().count() + self.separator.chars().count(),
            }
        }
    }

    /// What actually gets drawn for the current layout.
    pub fn render_text(&self, container_width: u32) -> String {
        match self.layout(container_width) {
            MarqueeLayout::Static => self.text.clone(),
            MarqueeLayout::Looping { .. } => {
                format!("{0}{1}{0}{1}", self.text, self.separator)
            }
        }
    }

    /// Leftward pixel offset `elapsed` seconds into the animation. Always 0
    /// for a static layout.
    pub fn offset_at(&self, container_width: u32, elapsed: f32) -> u32 {
        match self.layout(container_width) {
            MarqueeLayout::Static => 0,
            MarqueeLayout::Looping { cycle_chars } => {
                let step = (elapsed.max(0.0) / CHAR_STEP_SECONDS) as u64 % cycle_chars as u64;
                step as u32 * CHAR_WIDTH
            }
        }
    }

    /// Seconds for one full loop.
    pub fn cycle_seconds(&self, container_width: u32) -> f32 {
        match self.layout(container_width) {
            MarqueeLayout::Static => 0.0,
            MarqueeLayout::Looping { cycle_chars } => cycle_chars as f32 * CHAR_STEP_SECONDS,
        }
    }
}
