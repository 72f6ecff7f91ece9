//! Natural Flow
//!
//! The unaligned baseline: items are packed along the primary axis from the
//! leading inset and wrap to a new line when the next item would overflow the
//! usable extent. Line membership is derived from these frames, never from
//! aligned ones.
//!
//! # Algorithm
//!
//! 1. Walk items in index order with a cursor local to the current line
//! 2. Wrap when the cursor is past the line start and `cursor + extent`
//!    exceeds the usable extent
//! 3. A wrap advances the secondary offset by the tallest item of the
//!    finished line plus the line spacing
//! 4. Every finished line centers its items on the line's secondary extent
//!
//! Zero-extent items intersect nothing, so each one forms a line of its own.
//! Under Left or Right alignment such an item is pinned to the line edge like
//! any single-item line and may coincide with a neighbouring chip's origin.

use std::ops::Range;

use taffy::Size;
use tracing::warn;

use crate::types::{FlowDirection, ItemFrame, LayoutConfig, sanitize};

// =============================================================================
// AXIS FRAME
// =============================================================================

/// A frame in (primary, secondary) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisFrame {
    pub primary: f32,
    pub secondary: f32,
    pub primary_extent: f32,
    pub secondary_extent: f32,
}

impl AxisFrame {
    #[inline]
    pub fn max_primary(&self) -> f32 {
        self.primary + self.primary_extent
    }

    #[inline]
    pub fn max_secondary(&self) -> f32 {
        self.secondary + self.secondary_extent
    }

    #[inline]
    pub fn center_secondary(&self) -> f32 {
        self.secondary + self.secondary_extent / 2.0
    }

    /// Strict overlap test. Empty frames intersect nothing and touching
    /// edges do not count.
    pub fn intersects(&self, other: &AxisFrame) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.primary < other.max_primary()
            && other.primary < self.max_primary()
            && self.secondary < other.max_secondary()
            && other.secondary < self.max_secondary()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !(self.primary_extent > 0.0 && self.secondary_extent > 0.0)
    }

    pub fn to_item_frame(self, index: usize, direction: FlowDirection) -> ItemFrame {
        let size = direction.size(self.primary_extent, self.secondary_extent);
        ItemFrame {
            index,
            primary_origin: self.primary,
            secondary_origin: self.secondary,
            width: size.width,
            height: size.height,
        }
    }
}

// =============================================================================
// NATURAL FLOW
// =============================================================================

/// Natural frames for one layout pass, plus the band geometry used to decide
/// which items share a line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NaturalFlow {
    direction: FlowDirection,
    frames: Vec<AxisFrame>,
    /// Primary coordinate where every line starts.
    line_origin: f32,
    /// Primary extent of the line-membership band.
    band_extent: f32,
}

impl NaturalFlow {
    /// Pack `sizes` (physical) into lines.
    pub fn compute(sizes: &[Size<f32>], config: &LayoutConfig, container: Size<f32>) -> Self {
        let direction = config.direction;
        let inset = &config.section_inset;
        let spacing = sanitize(config.inter_item_spacing);
        let line_spacing = sanitize(config.line_spacing);

        let line_origin = sanitize(direction.leading_inset(inset));
        let usable = direction.primary(container)
            - line_origin
            - sanitize(direction.trailing_inset(inset));
        let band_extent = if config.wrap { usable } else { f32::INFINITY };

        let mut frames = Vec::with_capacity(sizes.len());
        let mut cursor = 0.0f32;
        let mut line_secondary = sanitize(direction.line_start_inset(inset));
        let mut line_max = 0.0f32;
        let mut line_len = 0usize;

        for (i, size) in sizes.iter().enumerate() {
            let primary_extent = sanitize(direction.primary(*size));
            let secondary_extent = sanitize(direction.secondary(*size));

            if config.wrap && primary_extent > usable {
                warn!(index = i, extent = primary_extent, usable, "item wider than container");
            }

            let overflows = cursor + primary_extent > usable || usable <= 0.0;
            if config.wrap && line_len > 0 && overflows {
                center_in_line(&mut frames[i - line_len..], line_max);
                line_secondary += line_max + line_spacing;
                cursor = 0.0;
                line_max = 0.0;
                line_len = 0;
            }

            frames.push(AxisFrame {
                primary: line_origin + cursor,
                secondary: line_secondary,
                primary_extent,
                secondary_extent,
            });

            cursor += primary_extent + spacing;
            line_max = line_max.max(secondary_extent);
            line_len += 1;
        }
        let last_line = frames.len() - line_len;
        center_in_line(&mut frames[last_line..], line_max);

        Self {
            direction,
            frames,
            line_origin,
            band_extent,
        }
    }

    pub fn direction(&self) -> FlowDirection {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<AxisFrame> {
        self.frames.get(index).copied()
    }

    pub fn frames(&self) -> &[AxisFrame] {
        &self.frames
    }

    /// Whether `other` lies in the full-width band anchored at `anchor`.
    ///
    /// Out-of-range indices and a non-positive usable extent never share a
    /// line.
    pub fn same_line(&self, anchor: usize, other: usize) -> bool {
        let (Some(a), Some(b)) = (self.frame(anchor), self.frame(other)) else {
            return false;
        };
        let band = AxisFrame {
            primary: self.line_origin,
            secondary: a.secondary,
            primary_extent: self.band_extent,
            secondary_extent: a.secondary_extent,
        };
        band.intersects(&b)
    }

    /// Whether `index` starts a line (its predecessor is outside its band).
    pub fn starts_line(&self, index: usize) -> bool {
        index == 0 || !self.same_line(index, index - 1)
    }

    /// Whether `index` ends a line (its successor is outside its band).
    pub fn ends_line(&self, index: usize) -> bool {
        index + 1 >= self.frames.len() || !self.same_line(index, index + 1)
    }

    /// Consecutive index ranges, one per line.
    pub fn line_ranges(&self) -> Vec<Range<usize>> {
        let mut lines = Vec::new();
        let mut start = 0;
        for i in 1..self.frames.len() {
            if self.starts_line(i) {
                lines.push(start..i);
                start = i;
            }
        }
        if !self.frames.is_empty() {
            lines.push(start..self.frames.len());
        }
        lines
    }
}

/// Center each frame of a finished line on the line's secondary extent.
///
/// Frames arrive at the line's top edge, so the tallest member stays put and
/// the line's top and bottom edges are unchanged.
fn center_in_line(line: &mut [AxisFrame], line_max: f32) {
    for frame in line {
        frame.secondary += (line_max - frame.secondary_extent) / 2.0;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(widths: &[f32], height: f32) -> Vec<Size<f32>> {
        widths.iter().map(|&w| Size { width: w, height }).collect()
    }

    fn container(width: f32) -> Size<f32> {
        Size { width, height: 500.0 }
    }

    #[test]
    fn test_empty() {
        let flow = NaturalFlow::compute(&[], &LayoutConfig::new(), container(100.0));
        assert_eq!(flow.len(), 0);
        assert!(flow.line_ranges().is_empty());
    }

    #[test]
    fn test_wraps_after_second_item() {
        let flow = NaturalFlow::compute(&sizes(&[40.0, 40.0, 40.0], 20.0), &LayoutConfig::new(), container(100.0));

        assert_eq!(flow.line_ranges(), vec![0..2, 2..3]);

        let frames = flow.frames();
        assert_eq!(frames[0].primary, 0.0);
        assert_eq!(frames[1].primary, 50.0);
        assert_eq!(frames[2].primary, 0.0);
        // Second line: tallest item (20) + line spacing (10)
        assert_eq!(frames[2].secondary, 30.0);
    }

    #[test]
    fn test_items_centered_in_line() {
        let items = vec![
            Size { width: 20.0, height: 10.0 },
            Size { width: 20.0, height: 40.0 },
            Size { width: 20.0, height: 20.0 },
        ];
        let flow = NaturalFlow::compute(&items, &LayoutConfig::new(), container(100.0));

        let frames = flow.frames();
        assert_eq!(frames[0].secondary, 15.0);
        assert_eq!(frames[1].secondary, 0.0);
        assert_eq!(frames[2].secondary, 10.0);
        assert!(frames.iter().all(|f| f.center_secondary() == 20.0));
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        let config = LayoutConfig::new().inter_item_spacing(0.0);
        let flow = NaturalFlow::compute(&sizes(&[50.0, 50.0], 20.0), &config, container(100.0));
        assert_eq!(flow.line_ranges(), vec![0..2]);
    }

    #[test]
    fn test_insets_shift_origin_and_narrow_lines() {
        let config = LayoutConfig::new().padding(10.0);
        let flow = NaturalFlow::compute(&sizes(&[40.0, 40.0], 20.0), &config, container(100.0));

        // Usable extent is 80: 40 + 10 + 40 = 90 wraps
        assert_eq!(flow.line_ranges(), vec![0..1, 1..2]);
        assert_eq!(flow.frames()[0].primary, 10.0);
        assert_eq!(flow.frames()[0].secondary, 10.0);
        assert_eq!(flow.frames()[1].primary, 10.0);
        assert_eq!(flow.frames()[1].secondary, 40.0);
    }

    #[test]
    fn test_oversized_item_gets_own_line() {
        let flow = NaturalFlow::compute(&sizes(&[30.0, 150.0, 30.0], 20.0), &LayoutConfig::new(), container(100.0));
        assert_eq!(flow.line_ranges(), vec![0..1, 1..2, 2..3]);
        assert_eq!(flow.frames()[1].primary_extent, 150.0);
    }

    #[test]
    fn test_line_height_is_tallest_item() {
        let items = vec![
            Size { width: 20.0, height: 10.0 },
            Size { width: 20.0, height: 40.0 },
            Size { width: 80.0, height: 10.0 },
        ];
        let flow = NaturalFlow::compute(&items, &LayoutConfig::new(), container(100.0));
        assert_eq!(flow.frames()[2].secondary, 50.0);
        assert!(flow.same_line(1, 0));
        assert!(flow.same_line(0, 1));
    }

    #[test]
    fn test_non_positive_usable_extent_one_line_per_item() {
        let config = LayoutConfig::new().padding(60.0);
        let flow = NaturalFlow::compute(&sizes(&[10.0, 10.0, 10.0], 20.0), &config, container(100.0));
        assert_eq!(flow.line_ranges(), vec![0..1, 1..2, 2..3]);
        assert!(!flow.same_line(1, 1));
    }

    #[test]
    fn test_no_wrap_keeps_single_line() {
        let config = LayoutConfig::scrolling(false);
        let flow = NaturalFlow::compute(&sizes(&[40.0, 40.0, 40.0, 40.0], 20.0), &config, container(100.0));
        assert_eq!(flow.line_ranges(), vec![0..4]);
        assert_eq!(flow.frames()[3].primary, 150.0);
    }

    #[test]
    fn test_vertical_direction_packs_downward() {
        let config = LayoutConfig::new().direction(FlowDirection::Vertical);
        let items = vec![Size { width: 30.0, height: 40.0 }; 3];
        let flow = NaturalFlow::compute(&items, &config, Size { width: 500.0, height: 100.0 });

        assert_eq!(flow.line_ranges(), vec![0..2, 2..3]);
        assert_eq!(flow.frames()[1].primary, 50.0);
        // Next column: widest item (30) + line spacing (10)
        assert_eq!(flow.frames()[2].secondary, 40.0);
    }

    #[test]
    fn test_zero_size_items_never_share_a_line() {
        let flow = NaturalFlow::compute(&sizes(&[10.0, 10.0], 0.0), &LayoutConfig::new(), container(100.0));
        assert_eq!(flow.line_ranges(), vec![0..1, 1..2]);
    }

    #[test]
    fn test_out_of_range_never_same_line() {
        let flow = NaturalFlow::compute(&sizes(&[10.0], 10.0), &LayoutConfig::new(), container(100.0));
        assert!(!flow.same_line(0, 5));
        assert!(!flow.same_line(5, 0));
    }
}
