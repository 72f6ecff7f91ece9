//! # spark-tags
//!
//! Tag/chip list widget core: a list of label chips, each optionally with a
//! close button, laid out by an aligned flow-line layout.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! re-layout on change.
//!
//! ## Architecture
//!
//! Layout is a stateless pass recomputed from scratch:
//! ```text
//! tags → measure (collaborator) → natural flow → lines → aligned frames
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Config, alignment policies, frames
//! - [`layout`] - Natural flow, line detection, alignment, RTL block shift
//! - [`state`] - `TagList` widget model
//! - [`pipeline`] - Reactive layout derived

pub mod error;
pub mod layout;
pub mod pipeline;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use error::{Result, TagsError};
pub use types::*;

pub use layout::{
    ChipSizing, FlowLayout, Font, TextMeasure, UnicodeMeasure, block_shift, layout, line_of,
    string_width,
};

pub use pipeline::create_layout_derived;

pub use state::{CloseCallback, TagList, TagListBuilder};
