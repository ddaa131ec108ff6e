//! plotselect crate root: re-exports and module wiring.
//!
//! Click-selection engine shared by every chart that selects data samples
//! (scatter points, bars, stacked-bar segments). For a click it decides what
//! the selection becomes, so every chart behaves the same way:
//! - `data`: targets, actions, predicates and the two resolvers
//! - `modifiers`: Shift / Ctrl / Cmd normalization
//! - `background`: empty-space click classification
//! - `store`: selection store contract and an in-memory store
//! - `executor`: applies an action to a store
//! - `handlers`: click callbacks bound to a shared store
//! - `events`: selection change notifications
//! - `config`: classifier allow-lists, loadable from JSON / YAML

pub mod background;
pub mod config;
pub mod data;
pub mod events;
pub mod executor;
pub mod handlers;
pub mod modifiers;
pub mod store;

// Public re-exports for a compact external API
pub use background::{
    is_background_element, is_background_element_with, should_clear_on_background_click,
    should_clear_on_background_click_with, ChartClick, ContainerClick, ElementLike, ElementNode, ToolMode,
};
pub use config::{ClassifierConfig, ConfigError, ConfigFormat};
pub use data::predicates::{
    all_indices_selected, any_indices_selected, get_selected_subset, get_unselected_subset,
    indices_match_selection, no_indices_selected, selections_equal,
};
pub use data::resolve::{compute_selection_action, compute_stacked_bar_action};
pub use data::selection::{
    is_clear_action, is_replace_if_not_sole_action, is_select_action, is_toggle_action, SampleIndex,
    Selection, SelectionAction, SelectionMode, SelectionTarget, StackedBarTarget,
};
pub use events::{SelectionEvent, SelectionEventController, SelectionEventFilter, SelectionEventKind};
pub use executor::execute_selection_action;
pub use handlers::{create_click_handler, create_simple_click_handler, create_stacked_bar_click_handler, SharedStore};
pub use modifiers::{extract_modifiers, ClickModifiers, ModifierSource, PointerFlags};
pub use store::{SampleSelection, SelectionStore};
