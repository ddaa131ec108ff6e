//! Ready-made click handlers for chart components.
//!
//! Each factory closes over a shared store and returns a callback taking the
//! clicked sample indices and the originating event. Everything runs on the
//! UI thread, hence `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::data::resolve::{compute_selection_action, compute_stacked_bar_action};
use crate::data::selection::{SampleIndex, SelectionMode, SelectionTarget, StackedBarTarget};
use crate::executor::execute_selection_action;
use crate::modifiers::{extract_modifiers, ModifierSource};
use crate::store::SelectionStore;

/// Store handle shared between the charts of a view.
pub type SharedStore<S> = Rc<RefCell<S>>;

/// Click handler for points and plain multi-sample elements.
pub fn create_click_handler<S, E>(store: SharedStore<S>) -> impl Fn(&[SampleIndex], &E)
where
    S: SelectionStore,
    E: ModifierSource + ?Sized,
{
    move |indices: &[SampleIndex], event: &E| {
        let modifiers = extract_modifiers(event);
        let target = SelectionTarget::new(indices);
        let mut store = store.borrow_mut();
        let action = compute_selection_action(&target, store.selected_samples(), modifiers);
        debug!(?modifiers, ?action, "click resolved");
        execute_selection_action(&action, &mut *store);
    }
}

/// Click handler for stacked-bar segments: `(bar_indices, segment_indices, event)`.
pub fn create_stacked_bar_click_handler<S, E>(
    store: SharedStore<S>,
) -> impl Fn(&[SampleIndex], &[SampleIndex], &E)
where
    S: SelectionStore,
    E: ModifierSource + ?Sized,
{
    move |bar_indices: &[SampleIndex], segment_indices: &[SampleIndex], event: &E| {
        let modifiers = extract_modifiers(event);
        let target = StackedBarTarget::new(bar_indices, segment_indices);
        let mut store = store.borrow_mut();
        let action = compute_stacked_bar_action(&target, store.selected_samples(), modifiers);
        debug!(?modifiers, ?action, "stacked bar click resolved");
        execute_selection_action(&action, &mut *store);
    }
}

/// Lighter click handler that skips the resolver.
///
/// Modifiers map straight onto the store; a plain click is left to the
/// store's own `replace_if_not_sole`.
pub fn create_simple_click_handler<S, E>(store: SharedStore<S>) -> impl Fn(&[SampleIndex], &E)
where
    S: SelectionStore,
    E: ModifierSource + ?Sized,
{
    move |indices: &[SampleIndex], event: &E| {
        let modifiers = extract_modifiers(event);
        let mut store = store.borrow_mut();
        debug!(?modifiers, len = indices.len(), "simple click");
        if modifiers.shift {
            store.select(indices, SelectionMode::Add);
        } else if modifiers.ctrl {
            store.toggle(indices);
        } else {
            store.replace_if_not_sole(indices);
        }
    }
}
