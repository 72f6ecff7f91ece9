//! Text Measurement
//!
//! Chip sizes come from an external measurement collaborator: given a label
//! and a font, produce a width. The layout core treats it as a pure function.
//!
//! [`UnicodeMeasure`] is the default collaborator. It approximates advance
//! widths from Unicode display widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Zero-width characters: 0 cells

use taffy::Size;
use unicode_width::UnicodeWidthStr;

use crate::types::{FlowDirection, LayoutConfig, check_metric, sanitize};

// =============================================================================
// Font
// =============================================================================

/// Font passed through to the measurement collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f32,
    /// CSS-style weight (400 regular, 500 medium, 700 bold).
    pub weight: u16,
}

impl Font {
    pub const fn new(size: f32, weight: u16) -> Self {
        Self { size, weight }
    }
}

impl Default for Font {
    /// 16pt medium.
    fn default() -> Self {
        Self::new(16.0, 500)
    }
}

// =============================================================================
// Measurement Collaborator
// =============================================================================

/// Produces the rendered width of a label.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font: &Font) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &Font) -> f32,
{
    fn measure_text(&self, text: &str, font: &Font) -> f32 {
        self(text, font)
    }
}

/// Display width of a string in cells.
pub fn string_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Width estimate from Unicode display widths: `cells * size * advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnicodeMeasure {
    /// Advance of one cell as a fraction of the font size.
    pub advance: f32,
}

impl Default for UnicodeMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for UnicodeMeasure {
    fn measure_text(&self, text: &str, font: &Font) -> f32 {
        string_width(text) as f32 * font.size * self.advance
    }
}

// =============================================================================
// Chip Sizing
// =============================================================================

/// Horizontal room around the label (text insets plus close button).
pub const CHIP_PADDING: f32 = 30.0;

/// Chips are never shorter than this.
pub const MIN_CHIP_HEIGHT: f32 = 50.0;

/// Turns a measured label into a chip size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipSizing {
    pub padding: f32,
    pub min_chip_height: f32,
    pub chip_height: f32,
}

impl Default for ChipSizing {
    fn default() -> Self {
        Self {
            padding: CHIP_PADDING,
            min_chip_height: MIN_CHIP_HEIGHT,
            chip_height: MIN_CHIP_HEIGHT,
        }
    }
}

impl ChipSizing {
    /// Chip height after the minimum is applied.
    pub fn effective_chip_height(&self) -> f32 {
        sanitize(self.chip_height).max(sanitize(self.min_chip_height))
    }

    pub fn validate(&self) -> crate::Result<()> {
        check_metric("chip.padding", self.padding)?;
        check_metric("chip.min_chip_height", self.min_chip_height)?;
        check_metric("chip.chip_height", self.chip_height)?;
        Ok(())
    }

    /// Physical size of the chip for `text`.
    ///
    /// The primary extent is the measured label plus padding. The secondary
    /// extent is the fixed chip height for a horizontal flow and the
    /// container's usable cross extent for a vertical one.
    pub fn item_size(
        &self,
        measure: &dyn TextMeasure,
        text: &str,
        font: &Font,
        config: &LayoutConfig,
        container: Size<f32>,
    ) -> Size<f32> {
        let direction = config.direction;
        let primary = sanitize(measure.measure_text(text, font)) + sanitize(self.padding);
        let secondary = match direction {
            FlowDirection::Horizontal => self.effective_chip_height(),
            FlowDirection::Vertical => {
                let inset = &config.section_inset;
                (direction.secondary(container)
                    - sanitize(direction.line_start_inset(inset))
                    - sanitize(direction.line_end_inset(inset)))
                .max(0.0)
            }
        };
        direction.size(primary, secondary)
    }

    /// Sizes for every label, in order.
    pub fn measure_all<S: AsRef<str>>(
        &self,
        measure: &dyn TextMeasure,
        texts: &[S],
        font: &Font,
        config: &LayoutConfig,
        container: Size<f32>,
    ) -> Vec<Size<f32>> {
        texts
            .iter()
            .map(|text| self.item_size(measure, text.as_ref(), font, config, container))
            .collect()
    }
}
