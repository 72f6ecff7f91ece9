//! Tag List - The chip list widget model.
//!
//! Owns the tags, the container bounds and the layout config as signals, so
//! a layout derived (see `pipeline::layout_derived`) re-runs whenever any of
//! them changes.
//!
//! Index-to-tag correspondence is stable between mutations: an index handed
//! to the close callback stays valid until the next add/insert/remove.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};
use taffy::{Rect, Size};
use tracing::debug;

use crate::error::{Result, TagsError};
use crate::layout::{ChipSizing, Font, TextMeasure, layout};
use crate::types::{ItemFrame, LayoutConfig, uniform_inset};

/// Called with `(removed_text, index)` after a close button removed a tag.
///
/// Shared so it can be called without holding the registration borrow; the
/// callback may register a replacement while it runs.
pub type CloseCallback = Rc<dyn Fn(&str, usize)>;

// =============================================================================
// TagList
// =============================================================================

pub struct TagList {
    tags: Signal<Vec<String>>,
    container: Signal<Size<f32>>,
    config: Signal<LayoutConfig>,
    font: Signal<Font>,
    sizing: Signal<ChipSizing>,
    measure: Rc<dyn TextMeasure>,
    close_button: Cell<bool>,
    on_close: RefCell<Option<CloseCallback>>,
}

impl TagList {
    pub fn builder() -> TagListBuilder {
        TagListBuilder::new()
    }

    // =========================================================================
    // Tags
    // =========================================================================

    pub fn tags(&self) -> Vec<String> {
        self.tags.get()
    }

    pub fn len(&self) -> usize {
        self.tags.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tag(&self, index: usize) -> Option<String> {
        self.tags.with(|tags| tags.get(index).cloned())
    }

    pub fn set_tags(&self, tags: Vec<String>) {
        debug!(count = tags.len(), "set tags");
        self.tags.set(tags);
    }

    pub fn add_tag(&self, tag: impl Into<String>) {
        let tag = tag.into();
        debug!(tag = %tag, "add tag");
        self.tags.update(|tags| tags.push(tag));
    }

    pub fn add_tags<I, S>(&self, new_tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let new_tags: Vec<String> = new_tags.into_iter().map(Into::into).collect();
        if new_tags.is_empty() {
            return;
        }
        debug!(added = new_tags.len(), "add tags");
        self.tags.update(|tags| tags.extend(new_tags));
    }

    /// Insert at `index` (appending when `index == len`).
    ///
    /// Returns `false` and leaves the list untouched when out of range.
    pub fn insert_tag(&self, index: usize, tag: impl Into<String>) -> bool {
        if index > self.len() {
            return false;
        }
        let tag = tag.into();
        debug!(index, tag = %tag, "insert tag");
        self.tags.update(|tags| tags.insert(index, tag));
        true
    }

    /// Remove the tag at `index`.
    pub fn remove_tag(&self, index: usize) -> Option<String> {
        if index >= self.len() {
            return None;
        }
        let mut removed = String::new();
        self.tags.update(|tags| removed = tags.remove(index));
        debug!(index, tag = %removed, "remove tag");
        Some(removed)
    }

    /// Remove the first tag equal to `tag`, returning its former index.
    pub fn remove_tag_named(&self, tag: &str) -> Option<usize> {
        let index = self.tags.with(|tags| tags.iter().position(|t| t == tag))?;
        self.remove_tag(index).map(|_| index)
    }

    pub fn remove_all_tags(&self) {
        debug!("remove all tags");
        self.tags.set(Vec::new());
    }

    // =========================================================================
    // Close Button
    // =========================================================================

    pub fn close_button_enabled(&self) -> bool {
        self.close_button.get()
    }

    pub fn set_close_button_enabled(&self, enabled: bool) {
        self.close_button.set(enabled);
    }

    /// Register the close callback, replacing any previous one.
    pub fn on_close(&self, callback: impl Fn(&str, usize) + 'static) {
        *self.on_close.borrow_mut() = Some(Rc::new(callback));
    }

    /// Handle activation of the close control on chip `index`.
    ///
    /// Removes the tag, then reports `(removed_text, index)` to the callback.
    /// Does nothing when the close button is disabled or `index` is stale.
    pub fn close_tapped(&self, index: usize) -> Option<String> {
        if !self.close_button.get() {
            return None;
        }
        let removed = self.remove_tag(index)?;
        debug!(index, tag = %removed, "close tapped");
        let callback = self.on_close.borrow().clone();
        if let Some(callback) = callback {
            callback(&removed, index);
        }
        Some(removed)
    }

    // =========================================================================
    // Config & Bounds
    // =========================================================================

    pub fn config(&self) -> LayoutConfig {
        self.config.get()
    }

    /// Replace the layout config after validating it.
    pub fn set_config(&self, config: LayoutConfig) -> Result<()> {
        config.validate()?;
        self.config.set(config);
        Ok(())
    }

    /// Switch reading direction, keeping the current scroll mode.
    pub fn set_rtl(&self, is_rtl: bool) {
        let current = self.config.get();
        self.config.set(rebuild(current, current.wrap, is_rtl));
    }

    /// `true` selects the wrapping (vertically scrolling) list, `false` the
    /// single horizontally scrolling strip.
    pub fn set_vertical_scroll(&self, vertical: bool) {
        let current = self.config.get();
        self.config.set(rebuild(current, vertical, current.is_rtl));
    }

    /// Same inset on every side.
    pub fn set_padding(&self, padding: f32) -> Result<()> {
        self.set_section_inset(uniform_inset(padding))
    }

    /// Replace all four insets.
    pub fn set_section_inset(&self, inset: Rect<f32>) -> Result<()> {
        self.set_config(self.config.get().section_inset(inset))
    }

    pub fn set_left_padding(&self, padding: f32) -> Result<()> {
        self.set_edge(|inset| inset.left = padding)
    }

    pub fn set_right_padding(&self, padding: f32) -> Result<()> {
        self.set_edge(|inset| inset.right = padding)
    }

    pub fn set_top_padding(&self, padding: f32) -> Result<()> {
        self.set_edge(|inset| inset.top = padding)
    }

    pub fn set_bottom_padding(&self, padding: f32) -> Result<()> {
        self.set_edge(|inset| inset.bottom = padding)
    }

    fn set_edge(&self, edit: impl FnOnce(&mut Rect<f32>)) -> Result<()> {
        let mut inset = self.config.get().section_inset;
        edit(&mut inset);
        self.set_section_inset(inset)
    }

    pub fn container(&self) -> Size<f32> {
        self.container.get()
    }

    /// Report new container bounds.
    pub fn set_container(&self, container: Size<f32>) {
        self.container.set(container);
    }

    pub fn font(&self) -> Font {
        self.font.get()
    }

    pub fn set_font(&self, font: Font) {
        self.font.set(font);
    }

    pub fn sizing(&self) -> ChipSizing {
        self.sizing.get()
    }

    pub fn set_sizing(&self, sizing: ChipSizing) -> Result<()> {
        sizing.validate()?;
        self.sizing.set(sizing);
        Ok(())
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Chip sizes for the current tags.
    pub fn item_sizes(&self) -> Vec<Size<f32>> {
        self.sizing.get().measure_all(
            self.measure.as_ref(),
            &self.tags.get(),
            &self.font.get(),
            &self.config.get(),
            self.container.get(),
        )
    }

    /// One synchronous layout pass over the current state.
    pub fn layout(&self) -> Vec<ItemFrame> {
        layout(&self.item_sizes(), &self.config.get(), self.container.get())
    }

    // Signal accessors for reactive tracking

    pub fn tags_signal(&self) -> Signal<Vec<String>> {
        self.tags.clone()
    }

    pub fn container_signal(&self) -> Signal<Size<f32>> {
        self.container.clone()
    }

    pub fn config_signal(&self) -> Signal<LayoutConfig> {
        self.config.clone()
    }

    pub fn font_signal(&self) -> Signal<Font> {
        self.font.clone()
    }

    pub fn sizing_signal(&self) -> Signal<ChipSizing> {
        self.sizing.clone()
    }

    pub fn measure(&self) -> Rc<dyn TextMeasure> {
        Rc::clone(&self.measure)
    }
}

/// Apply a widget preset while keeping spacing and insets.
fn rebuild(current: LayoutConfig, vertical: bool, is_rtl: bool) -> LayoutConfig {
    let preset = if vertical {
        LayoutConfig::wrapping(is_rtl)
    } else {
        LayoutConfig::scrolling(is_rtl)
    };
    preset
        .direction(current.direction)
        .inter_item_spacing(current.inter_item_spacing)
        .line_spacing(current.line_spacing)
        .section_inset(current.section_inset)
}

// =============================================================================
// Builder
// =============================================================================

pub struct TagListBuilder {
    measure: Option<Rc<dyn TextMeasure>>,
    font: Font,
    sizing: ChipSizing,
    close_button: bool,
    config: LayoutConfig,
    container: Size<f32>,
    tags: Vec<String>,
}

impl TagListBuilder {
    pub fn new() -> Self {
        Self {
            measure: None,
            font: Font::default(),
            sizing: ChipSizing::default(),
            close_button: true,
            config: LayoutConfig::scrolling(false),
            container: Size { width: 0.0, height: 0.0 },
            tags: Vec::new(),
        }
    }

    /// Text measurement collaborator (required).
    pub fn measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        let measure: Rc<dyn TextMeasure> = Rc::new(measure);
        self.measure = Some(measure);
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn chip_height(mut self, height: f32) -> Self {
        self.sizing.chip_height = height;
        self
    }

    pub fn sizing(mut self, sizing: ChipSizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn close_button(mut self, enabled: bool) -> Self {
        self.close_button = enabled;
        self
    }

    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn container(mut self, container: Size<f32>) -> Self {
        self.container = container;
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the setup once and build the widget model.
    pub fn build(self) -> Result<TagList> {
        let measure = self.measure.ok_or(TagsError::MissingMeasure)?;
        self.config.validate()?;
        self.sizing.validate()?;

        Ok(TagList {
            tags: signal(self.tags),
            container: signal(self.container),
            config: signal(self.config),
            font: signal(self.font),
            sizing: signal(self.sizing),
            measure,
            close_button: Cell::new(self.close_button),
            on_close: RefCell::new(None),
        })
    }
}

impl Default for TagListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
