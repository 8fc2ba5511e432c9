//! Deterministic metrics for tests and quick previews.
//!
//! [`MonospaceMetrics`] gives every character the same advance, which makes line
//! breaking results exact and easy to reason about: at 10pt, a 500-unit advance
//! is 5pt per character, so a 100pt wide paragraph holds 20 characters.

use crate::font::FontMetrics;

/// Fixed-advance font metrics
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of every character, in 1/1000 em
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl MonospaceMetrics {
    /// Metrics with the given advance, an ascent of 800 and a descent of -200
    pub fn new(advance: f32) -> MonospaceMetrics {
        MonospaceMetrics {
            advance,
            ascent: 800.0,
            descent: -200.0,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        MonospaceMetrics::new(500.0)
    }
}

impl FontMetrics for MonospaceMetrics {
    fn string_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn average_char_width(&self) -> f32 {
        self.advance
    }
}
