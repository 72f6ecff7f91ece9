//! Widget state.

pub mod tags;

pub use tags::{CloseCallback, TagList, TagListBuilder};
