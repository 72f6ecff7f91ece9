//! Core types for spark-tags.
//!
//! These types describe how chips are packed and aligned. They are plain
//! values: configuration flows into the layout functions, frames flow out.

use taffy::{Point, Rect, Size};

// =============================================================================
// Flow Direction
// =============================================================================

/// The axis along which items are packed before they wrap.
///
/// `Horizontal` packs left to right and stacks lines downward.
/// `Vertical` packs top to bottom and stacks lines rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl FlowDirection {
    /// Extent of `size` along the primary (packing) axis.
    #[inline]
    pub fn primary(self, size: Size<f32>) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` along the secondary (line stacking) axis.
    #[inline]
    pub fn secondary(self, size: Size<f32>) -> f32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Inset at the start of the primary axis.
    #[inline]
    pub fn leading_inset(self, inset: &Rect<f32>) -> f32 {
        match self {
            Self::Horizontal => inset.left,
            Self::Vertical => inset.top,
        }
    }

    /// Inset at the end of the primary axis.
    #[inline]
    pub fn trailing_inset(self, inset: &Rect<f32>) -> f32 {
        match self {
            Self::Horizontal => inset.right,
            Self::Vertical => inset.bottom,
        }
    }

    /// Inset at the start of the secondary axis (where the first line sits).
    #[inline]
    pub fn line_start_inset(self, inset: &Rect<f32>) -> f32 {
        match self {
            Self::Horizontal => inset.top,
            Self::Vertical => inset.left,
        }
    }

    /// Inset at the end of the secondary axis.
    #[inline]
    pub fn line_end_inset(self, inset: &Rect<f32>) -> f32 {
        match self {
            Self::Horizontal => inset.bottom,
            Self::Vertical => inset.right,
        }
    }

    /// Build a physical size from (primary, secondary) extents.
    #[inline]
    pub fn size(self, primary: f32, secondary: f32) -> Size<f32> {
        match self {
            Self::Horizontal => Size { width: primary, height: secondary },
            Self::Vertical => Size { width: secondary, height: primary },
        }
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Requested alignment along the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Left,
    Right,
    /// Left in a left-to-right context, right in a right-to-left one.
    Leading,
    /// Right in a left-to-right context, left in a right-to-left one.
    Trailing,
    /// Keep the natural wrap-packed positions.
    #[default]
    Justified,
}

/// Alignment of the items of a line along the secondary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Horizontal alignment after `Leading`/`Trailing` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveHorizontalAlignment {
    Left,
    Right,
    Justified,
}

/// Ambient text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl HorizontalAlignment {
    /// Resolve `Leading`/`Trailing` against the ambient text direction.
    pub fn effective(self, direction: LayoutDirection) -> EffectiveHorizontalAlignment {
        use EffectiveHorizontalAlignment as E;
        match (self, direction) {
            (Self::Left, _) => E::Left,
            (Self::Right, _) => E::Right,
            (Self::Justified, _) => E::Justified,
            (Self::Leading, LayoutDirection::LeftToRight) => E::Left,
            (Self::Leading, LayoutDirection::RightToLeft) => E::Right,
            (Self::Trailing, LayoutDirection::LeftToRight) => E::Right,
            (Self::Trailing, LayoutDirection::RightToLeft) => E::Left,
        }
    }
}

/// A coordinate that the items of a line are pinned to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentAxis<A> {
    pub alignment: A,
    pub position: f32,
}

// =============================================================================
// Layout Config
// =============================================================================

/// Everything a layout pass needs besides the items and the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub direction: FlowDirection,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Gap between consecutive items of a line.
    pub inter_item_spacing: f32,
    /// Gap between consecutive lines.
    pub line_spacing: f32,
    pub section_inset: Rect<f32>,
    pub is_rtl: bool,
    /// When false, items stay on one line however long it gets.
    pub wrap: bool,
}

/// Default gap between chips and between lines.
pub const DEFAULT_SPACING: f32 = 10.0;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: FlowDirection::Horizontal,
            horizontal_alignment: HorizontalAlignment::Justified,
            vertical_alignment: VerticalAlignment::Center,
            inter_item_spacing: DEFAULT_SPACING,
            line_spacing: DEFAULT_SPACING,
            section_inset: zero_inset(),
            is_rtl: false,
            wrap: true,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrapping chip list: lines stack downward, chips packed toward the
    /// reading start and pinned to the top of their line.
    pub fn wrapping(is_rtl: bool) -> Self {
        Self {
            horizontal_alignment: if is_rtl {
                HorizontalAlignment::Right
            } else {
                HorizontalAlignment::Left
            },
            vertical_alignment: VerticalAlignment::Top,
            is_rtl,
            ..Self::default()
        }
    }

    /// Single scrolling strip: natural packing, RTL handled by a block shift.
    pub fn scrolling(is_rtl: bool) -> Self {
        Self {
            is_rtl,
            wrap: false,
            ..Self::default()
        }
    }

    pub fn direction(mut self, direction: FlowDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn inter_item_spacing(mut self, spacing: f32) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn section_inset(mut self, inset: Rect<f32>) -> Self {
        self.section_inset = inset;
        self
    }

    /// Same inset on all four sides.
    pub fn padding(self, padding: f32) -> Self {
        self.section_inset(uniform_inset(padding))
    }

    pub fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Ambient text direction implied by `is_rtl`.
    pub fn layout_direction(&self) -> LayoutDirection {
        if self.is_rtl {
            LayoutDirection::RightToLeft
        } else {
            LayoutDirection::LeftToRight
        }
    }

    pub fn effective_horizontal_alignment(&self) -> EffectiveHorizontalAlignment {
        self.horizontal_alignment.effective(self.layout_direction())
    }

    /// Vertical alignment actually applied to lines.
    ///
    /// Only a horizontal flow honors the requested policy; a vertical flow
    /// always centers items on the line's shared reference.
    pub fn effective_vertical_alignment(&self) -> VerticalAlignment {
        match self.direction {
            FlowDirection::Horizontal => self.vertical_alignment,
            FlowDirection::Vertical => VerticalAlignment::Center,
        }
    }

    /// Check every metric once, at setup time.
    pub fn validate(&self) -> crate::Result<()> {
        check_metric("inter_item_spacing", self.inter_item_spacing)?;
        check_metric("line_spacing", self.line_spacing)?;
        check_metric("section_inset.left", self.section_inset.left)?;
        check_metric("section_inset.right", self.section_inset.right)?;
        check_metric("section_inset.top", self.section_inset.top)?;
        check_metric("section_inset.bottom", self.section_inset.bottom)?;
        Ok(())
    }
}

/// Reject NaN, infinite, and negative metrics.
pub(crate) fn check_metric(name: &'static str, value: f32) -> crate::Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(crate::TagsError::InvalidMetric { name, value })
    }
}

/// Clamp a metric the layout core received without validation.
#[inline]
pub(crate) fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

pub fn zero_inset() -> Rect<f32> {
    uniform_inset(0.0)
}

pub fn uniform_inset(value: f32) -> Rect<f32> {
    Rect {
        left: value,
        right: value,
        top: value,
        bottom: value,
    }
}

// =============================================================================
// Item Frame
// =============================================================================

/// Final placement of one item.
///
/// `width` and `height` are physical. `primary_origin` is the x origin for a
/// horizontal flow and the y origin for a vertical one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub index: usize,
    pub primary_origin: f32,
    pub secondary_origin: f32,
    pub width: f32,
    pub height: f32,
}

impl ItemFrame {
    pub fn size(&self) -> Size<f32> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn primary_extent(&self, direction: FlowDirection) -> f32 {
        direction.primary(self.size())
    }

    pub fn secondary_extent(&self, direction: FlowDirection) -> f32 {
        direction.secondary(self.size())
    }

    /// End of the frame along the primary axis.
    pub fn primary_end(&self, direction: FlowDirection) -> f32 {
        self.primary_origin + self.primary_extent(direction)
    }

    /// Physical top-left corner.
    pub fn origin(&self, direction: FlowDirection) -> Point<f32> {
        match direction {
            FlowDirection::Horizontal => Point {
                x: self.primary_origin,
                y: self.secondary_origin,
            },
            FlowDirection::Vertical => Point {
                x: self.secondary_origin,
                y: self.primary_origin,
            },
        }
    }

    /// Whether a physical point falls inside this frame.
    pub fn contains(&self, direction: FlowDirection, point: Point<f32>) -> bool {
        let origin = self.origin(direction);
        point.x >= origin.x
            && point.x < origin.x + self.width
            && point.y >= origin.y
            && point.y < origin.y + self.height
    }
}

// =============================================================================
// Line Edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Where an item sits within its line.
    ///
    /// A single-item line carries both flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LineEdge: u8 {
        const FIRST = 1 << 0;
        const LAST = 1 << 1;
    }
}

// =============================================================================
// Tests
// =============================================================================
