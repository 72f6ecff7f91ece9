//! RTL block shift.
//!
//! The non-aligned right-to-left policy: keep the left-packed layout and,
//! when the content is narrower than the container, slide the whole block so
//! it sits flush against the trailing edge. Lines are not re-packed
//! individually.

use super::flow::AxisFrame;

/// Distance to shift a left-packed block so it ends at the container's
/// trailing edge. Zero when the content already fills the container.
pub fn block_shift(content_extent: f32, container_extent: f32) -> f32 {
    if content_extent < container_extent {
        container_extent - content_extent
    } else {
        0.0
    }
}

/// Primary extent of the content: the furthest item end plus the trailing
/// inset.
pub(crate) fn content_extent(frames: &[AxisFrame], trailing_inset: f32) -> f32 {
    frames
        .iter()
        .map(AxisFrame::max_primary)
        .fold(0.0f32, f32::max)
        + trailing_inset
}

/// Shift every frame by the block shift. Returns the applied shift.
pub(crate) fn mirror_block(frames: &mut [AxisFrame], container_extent: f32, trailing_inset: f32) -> f32 {
    if frames.is_empty() {
        return 0.0;
    }
    let shift = block_shift(content_extent(frames, trailing_inset), container_extent);
    if shift > 0.0 {
        for frame in frames.iter_mut() {
            frame.primary += shift;
        }
    }
    shift
}
