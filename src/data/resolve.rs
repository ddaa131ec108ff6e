//! Click resolution: turns a clicked target, the current selection and the
//! held modifiers into a [`SelectionAction`].
//!
//! Both resolvers are pure. They read the selection but never change it.

use tracing::warn;

use super::predicates::indices_match_selection;
use super::selection::{Selection, SelectionAction, SelectionMode, SelectionTarget, StackedBarTarget};
use crate::modifiers::ClickModifiers;

/// Resolves a click on a point or a plain multi-sample element.
///
/// Rules, first match wins:
/// 1. Shift adds the target to the selection.
/// 2. Ctrl (or Cmd) toggles each target index.
/// 3. A plain click on a target that is exactly the current selection clears
///    it; any other plain click replaces the selection with the target.
///
/// An empty target is never an exact match, so it resolves to
/// `Select([], Replace)` rather than `Clear`.
pub fn compute_selection_action(
    target: &SelectionTarget,
    current: &Selection,
    modifiers: ClickModifiers,
) -> SelectionAction {
    if modifiers.shift {
        return SelectionAction::select(target.indices.clone(), SelectionMode::Add);
    }
    if modifiers.ctrl {
        return SelectionAction::toggle(target.indices.clone());
    }

    if indices_match_selection(&target.indices, current) {
        SelectionAction::Clear
    } else {
        SelectionAction::select(target.indices.clone(), SelectionMode::Replace)
    }
}

/// Resolves a click on one segment of a stacked bar.
///
/// Repeated plain clicks on the same segment walk through a cycle:
/// whole bar, then the segment, then nothing. Modifiers always act on the
/// segment, never on the whole bar.
///
/// The segment test runs before the bar test. For a single-segment bar the
/// two are identical, so the second click clears and the cycle is two clicks
/// long.
pub fn compute_stacked_bar_action(
    target: &StackedBarTarget,
    current: &Selection,
    modifiers: ClickModifiers,
) -> SelectionAction {
    if !target.segment_within_bar() {
        warn!(
            bar = ?target.bar_indices,
            segment = ?target.segment_indices,
            "stacked bar segment contains indices outside its bar"
        );
    }

    if modifiers.shift {
        return SelectionAction::select(target.segment_indices.clone(), SelectionMode::Add);
    }
    if modifiers.ctrl {
        return SelectionAction::toggle(target.segment_indices.clone());
    }

    if indices_match_selection(&target.segment_indices, current) {
        SelectionAction::Clear
    } else if indices_match_selection(&target.bar_indices, current) {
        SelectionAction::select(target.segment_indices.clone(), SelectionMode::Replace)
    } else {
        SelectionAction::select(target.bar_indices.clone(), SelectionMode::Replace)
    }
}
