//! Flow-line layout for tag chips.
//!
//! # Architecture
//!
//! Layout is a pure function of (item sizes, config, container):
//!
//! 1. `flow` packs items into natural, unaligned lines
//! 2. `aligned` detects lines on the natural frames and re-positions each
//!    line along both axes
//! 3. `mirror` provides the coarse RTL block shift used when no per-line
//!    alignment is requested
//! 4. `text_measure` turns labels into chip sizes through a measurement
//!    collaborator
//!
//! # Example
//!
//! ```
//! use spark_tags::layout::layout;
//! use spark_tags::LayoutConfig;
//! use taffy::Size;
//!
//! let sizes = vec![Size { width: 40.0, height: 20.0 }; 3];
//! let frames = layout(&sizes, &LayoutConfig::wrapping(false), Size { width: 100.0, height: 200.0 });
//! assert_eq!(frames[2].primary_origin, 0.0);
//! ```

mod aligned;
mod flow;
mod mirror;
mod text_measure;

pub use aligned::{FlowLayout, layout, line_of};
pub use mirror::block_shift;
pub use text_measure::*;
