//! Reactive Pipeline
//!
//! Connects the tag list's signals to the layout core.
//!
//! ```text
//! TagList signals (tags, bounds, config) → layoutDerived → host render
//! ```
//!
//! The derived is a pure computation: it reads signals and returns frames.
//! Drawing chips and wiring close buttons stays with the host.

pub mod layout_derived;

pub use layout_derived::create_layout_derived;
