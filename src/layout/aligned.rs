//! Aligned Flow Layout
//!
//! Re-positions the natural frames of each line according to the configured
//! alignment policies.
//!
//! # Passes
//!
//! 1. **Natural**: wrap-pack items (see `flow`)
//! 2. **Lines**: group items whose natural frames share a band
//! 3. **Primary axis**: pack lines left or right, or block-shift for RTL
//! 4. **Secondary axis**: pin every item of a line to one shared coordinate
//!
//! Alignment never changes a size, only origins. The natural frames stay
//! untouched so line membership is always decided on the baseline.

use std::ops::Range;

use taffy::Size;
use tracing::{debug, trace};

use crate::types::{
    AlignmentAxis, EffectiveHorizontalAlignment, FlowDirection, ItemFrame, LayoutConfig, LineEdge,
    VerticalAlignment, sanitize,
};

use super::flow::{AxisFrame, NaturalFlow};
use super::mirror::{content_extent, mirror_block};

// =============================================================================
// FLOW LAYOUT
// =============================================================================

/// One complete layout pass.
///
/// Built from scratch for every pass; all queries after construction are
/// reads, so asking for the same item twice yields the same frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout {
    config: LayoutConfig,
    container: Size<f32>,
    natural: NaturalFlow,
    lines: Vec<Range<usize>>,
    aligned: Vec<AxisFrame>,
    block_shift: f32,
}

impl FlowLayout {
    /// Lay out items with the given physical sizes.
    pub fn new(sizes: &[Size<f32>], config: &LayoutConfig, container: Size<f32>) -> Self {
        let natural = NaturalFlow::compute(sizes, config, container);
        let lines = natural.line_ranges();

        let mut layout = Self {
            config: *config,
            container,
            aligned: natural.frames().to_vec(),
            natural,
            lines,
            block_shift: 0.0,
        };

        if !layout.aligned.is_empty() {
            layout.align_primary();
            layout.align_secondary();
        }

        debug!(
            items = layout.len(),
            lines = layout.line_count(),
            alignment = ?config.effective_horizontal_alignment(),
            vertical = ?config.effective_vertical_alignment(),
            block_shift = layout.block_shift,
            "flow layout pass"
        );

        layout
    }

    pub fn len(&self) -> usize {
        self.natural.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn direction(&self) -> FlowDirection {
        self.config.direction
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Shift applied by the RTL block mirror (zero when not applied).
    pub fn block_shift(&self) -> f32 {
        self.block_shift
    }

    // =========================================================================
    // Lines
    // =========================================================================

    /// Item indices of every line, in order.
    pub fn lines(&self) -> Vec<Vec<usize>> {
        self.lines.iter().map(|line| line.clone().collect()).collect()
    }

    /// Item indices sharing a line with `index`. Empty when out of range.
    pub fn line_of(&self, index: usize) -> Vec<usize> {
        self.line_range(index).map(|line| line.collect()).unwrap_or_default()
    }

    fn line_range(&self, index: usize) -> Option<Range<usize>> {
        // Lines are sorted and contiguous
        let pos = self.lines.partition_point(|line| line.end <= index);
        self.lines
            .get(pos)
            .filter(|line| line.contains(&index))
            .cloned()
    }

    /// Position of `index` within its line.
    pub fn line_edge(&self, index: usize) -> Option<LineEdge> {
        if index >= self.len() {
            return None;
        }
        let mut edge = LineEdge::empty();
        if self.natural.starts_line(index) {
            edge |= LineEdge::FIRST;
        }
        if self.natural.ends_line(index) {
            edge |= LineEdge::LAST;
        }
        Some(edge)
    }

    pub fn is_first_item_in_line(&self, index: usize) -> bool {
        self.line_edge(index).is_some_and(|edge| edge.contains(LineEdge::FIRST))
    }

    pub fn is_last_item_in_line(&self, index: usize) -> bool {
        self.line_edge(index).is_some_and(|edge| edge.contains(LineEdge::LAST))
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Unaligned frame of `index`.
    pub fn natural_frame(&self, index: usize) -> Option<ItemFrame> {
        self.natural
            .frame(index)
            .map(|frame| frame.to_item_frame(index, self.direction()))
    }

    /// Aligned frame of `index`.
    pub fn frame(&self, index: usize) -> Option<ItemFrame> {
        self.aligned
            .get(index)
            .map(|frame| frame.to_item_frame(index, self.direction()))
    }

    /// Aligned frames of every item, in index order.
    pub fn frames(&self) -> Vec<ItemFrame> {
        let direction = self.direction();
        self.aligned
            .iter()
            .enumerate()
            .map(|(i, frame)| frame.to_item_frame(i, direction))
            .collect()
    }

    /// Physical size of the laid-out content, insets included.
    pub fn content_size(&self) -> Size<f32> {
        let direction = self.direction();
        let inset = &self.config.section_inset;
        if self.aligned.is_empty() {
            return direction.size(0.0, 0.0);
        }
        let primary = content_extent(&self.aligned, sanitize(direction.trailing_inset(inset)));
        let secondary = self
            .aligned
            .iter()
            .map(AxisFrame::max_secondary)
            .fold(0.0f32, f32::max)
            + sanitize(direction.line_end_inset(inset));
        direction.size(primary, secondary)
    }

    // =========================================================================
    // Alignment Axes
    // =========================================================================

    /// Primary-axis coordinate lines are pinned to, if any.
    ///
    /// `Justified` has no axis.
    pub fn horizontal_alignment_axis(&self) -> Option<AlignmentAxis<EffectiveHorizontalAlignment>> {
        let direction = self.direction();
        let inset = &self.config.section_inset;
        match self.config.effective_horizontal_alignment() {
            EffectiveHorizontalAlignment::Left => Some(AlignmentAxis {
                alignment: EffectiveHorizontalAlignment::Left,
                position: sanitize(direction.leading_inset(inset)),
            }),
            EffectiveHorizontalAlignment::Right => Some(AlignmentAxis {
                alignment: EffectiveHorizontalAlignment::Right,
                position: direction.primary(self.container) - sanitize(direction.trailing_inset(inset)),
            }),
            EffectiveHorizontalAlignment::Justified => None,
        }
    }

    /// Secondary-axis coordinate shared by the line containing `index`.
    pub fn vertical_alignment_axis(&self, index: usize) -> Option<AlignmentAxis<VerticalAlignment>> {
        let line = self.line_range(index)?;
        let members = &self.natural.frames()[line];
        let first = members.first()?;

        let alignment = self.config.effective_vertical_alignment();
        let position = match alignment {
            VerticalAlignment::Top => members
                .iter()
                .map(|frame| frame.secondary)
                .fold(f32::INFINITY, f32::min),
            VerticalAlignment::Bottom => members
                .iter()
                .map(AxisFrame::max_secondary)
                .fold(f32::NEG_INFINITY, f32::max),
            VerticalAlignment::Center => first.center_secondary(),
        };

        Some(AlignmentAxis { alignment, position })
    }

    // =========================================================================
    // Alignment Passes
    // =========================================================================

    fn align_primary(&mut self) {
        let spacing = sanitize(self.config.inter_item_spacing);

        let Some(axis) = self.horizontal_alignment_axis() else {
            if self.config.is_rtl {
                let direction = self.direction();
                let trailing = sanitize(direction.trailing_inset(&self.config.section_inset));
                self.block_shift = mirror_block(&mut self.aligned, direction.primary(self.container), trailing);
            }
            return;
        };

        for line in &self.lines {
            trace!(line = ?line, axis = ?axis, "primary alignment");
            match axis.alignment {
                EffectiveHorizontalAlignment::Left => {
                    let mut position = axis.position;
                    for frame in &mut self.aligned[line.clone()] {
                        frame.primary = position;
                        position = frame.max_primary() + spacing;
                    }
                }
                EffectiveHorizontalAlignment::Right => {
                    let mut end = axis.position;
                    for frame in self.aligned[line.clone()].iter_mut().rev() {
                        frame.primary = end - frame.primary_extent;
                        end = frame.primary - spacing;
                    }
                }
                EffectiveHorizontalAlignment::Justified => {}
            }
        }
    }

    fn align_secondary(&mut self) {
        for li in 0..self.lines.len() {
            let line = self.lines[li].clone();
            let Some(axis) = self.vertical_alignment_axis(line.start) else {
                continue;
            };
            trace!(line = ?line, axis = ?axis, "secondary alignment");

            for frame in &mut self.aligned[line] {
                frame.secondary = match axis.alignment {
                    VerticalAlignment::Top => axis.position,
                    VerticalAlignment::Bottom => axis.position - frame.secondary_extent,
                    VerticalAlignment::Center => axis.position - frame.secondary_extent / 2.0,
                };
            }
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Lay out items and return their aligned frames in index order.
pub fn layout(sizes: &[Size<f32>], config: &LayoutConfig, container: Size<f32>) -> Vec<ItemFrame> {
    FlowLayout::new(sizes, config, container).frames()
}

/// Indices sharing a line with `index` (diagnostics). Empty when out of range.
pub fn line_of(sizes: &[Size<f32>], config: &LayoutConfig, container: Size<f32>, index: usize) -> Vec<usize> {
    FlowLayout::new(sizes, config, container).line_of(index)
}

// =============================================================================
// Tests
// =============================================================================
