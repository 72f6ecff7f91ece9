//! Layout Derived - Reactive layout computation.
//!
//! Creates a Derived that recomputes chip frames whenever:
//! - Tags are added/removed
//! - Container bounds change
//! - Layout config, font or chip sizing change

use spark_signals::{derived, Derived};

use crate::layout::layout;
use crate::state::TagList;
use crate::types::ItemFrame;

/// Create the layout derived for a tag list.
///
/// The derived reads the list's signals (creating reactive dependencies) and
/// runs a fresh, stateless layout pass each time one of them changes.
pub fn create_layout_derived(list: &TagList) -> Derived<Vec<ItemFrame>> {
    let tags_signal = list.tags_signal();
    let container_signal = list.container_signal();
    let config_signal = list.config_signal();
    let font_signal = list.font_signal();
    let sizing_signal = list.sizing_signal();
    let measure = list.measure();

    derived(move || {
        let tags = tags_signal.get();
        let container = container_signal.get();
        let config = config_signal.get();
        let font = font_signal.get();
        let sizing = sizing_signal.get();

        let sizes = sizing.measure_all(measure.as_ref(), &tags, &font, &config, container);
        layout(&sizes, &config, container)
    })
}

// =============================================================================
// Tests
// =============================================================================
