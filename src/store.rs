//! Selection store contract and an in-memory implementation.
//!
//! The engine only ever changes a selection through the four primitives of
//! [`SelectionStore`]. Mutations must commit synchronously: a click resolved
//! against a stale selection breaks the "clicking the only selected item
//! clears it" behavior.

use tracing::trace;

use crate::data::selection::{SampleIndex, Selection, SelectionMode};
use crate::events::{SelectionEvent, SelectionEventController, SelectionEventKind};

/// The mutable selection shared by every chart on a page.
pub trait SelectionStore {
    /// Replace the selection with `indices`, or add them to it.
    fn select(&mut self, indices: &[SampleIndex], mode: SelectionMode);
    /// Invert the membership of each index.
    fn toggle(&mut self, indices: &[SampleIndex]);
    fn clear(&mut self);
    /// Clear if `indices` already are the whole selection, otherwise replace.
    fn replace_if_not_sole(&mut self, indices: &[SampleIndex]);
    fn selected_samples(&self) -> &Selection;
}

/// In-memory [`SelectionStore`] with a revision counter and optional change
/// notifications.
#[derive(Default)]
pub struct SampleSelection {
    selected: Selection,
    revision: u64,
    events: Option<SelectionEventController>,
}

impl SampleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing selection.
    pub fn with_selected(indices: impl IntoIterator<Item = SampleIndex>) -> Self {
        Self {
            selected: indices.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Publish every change through `controller`.
    pub fn attach_events(&mut self, controller: SelectionEventController) {
        self.events = Some(controller);
    }

    /// Bumped once per mutation that changed the selection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, index: SampleIndex) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in ascending order.
    pub fn sorted(&self) -> Vec<SampleIndex> {
        let mut v: Vec<SampleIndex> = self.selected.iter().copied().collect();
        v.sort_unstable();
        v
    }

    fn commit(&mut self, next: Selection, mut kind: SelectionEventKind) {
        if next == self.selected {
            return;
        }
        self.selected = next;
        self.revision += 1;
        if self.selected.is_empty() {
            kind |= SelectionEventKind::CLEARED;
        }
        trace!(revision = self.revision, len = self.selected.len(), %kind, "selection changed");
        if let Some(events) = &self.events {
            events.emit(SelectionEvent::new(kind, self.revision, self.sorted()));
        }
    }
}

impl SelectionStore for SampleSelection {
    fn select(&mut self, indices: &[SampleIndex], mode: SelectionMode) {
        match mode {
            SelectionMode::Replace => {
                let next = indices.iter().copied().collect();
                self.commit(next, SelectionEventKind::SELECTED);
            }
            SelectionMode::Add => {
                let mut next = self.selected.clone();
                next.extend(indices.iter().copied());
                self.commit(next, SelectionEventKind::ADDED);
            }
        }
    }

    fn toggle(&mut self, indices: &[SampleIndex]) {
        let mut next = self.selected.clone();
        for &index in indices {
            if !next.remove(&index) {
                next.insert(index);
            }
        }
        self.commit(next, SelectionEventKind::TOGGLED);
    }

    fn clear(&mut self) {
        self.commit(Selection::new(), SelectionEventKind::CLEARED);
    }

    fn replace_if_not_sole(&mut self, indices: &[SampleIndex]) {
        let target: Selection = indices.iter().copied().collect();
        if !target.is_empty() && target == self.selected {
            self.clear();
        } else {
            self.commit(target, SelectionEventKind::SELECTED);
        }
    }

    fn selected_samples(&self) -> &Selection {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SelectionEventFilter;

    #[test]
    fn replace_and_add() {
        let mut store = SampleSelection::with_selected([1, 2]);
        store.select(&[3], SelectionMode::Add);
        assert_eq!(store.sorted(), vec![1, 2, 3]);
        store.select(&[9], SelectionMode::Replace);
        assert_eq!(store.sorted(), vec![9]);
    }

    #[test]
    fn toggle_flips_each_occurrence() {
        let mut store = SampleSelection::with_selected([1, 2]);
        store.toggle(&[2, 3]);
        assert_eq!(store.sorted(), vec![1, 3]);
        store.toggle(&[5, 5]);
        assert_eq!(store.sorted(), vec![1, 3]);
    }

    #[test]
    fn replace_if_not_sole_clears_exact_match_only() {
        let mut store = SampleSelection::with_selected([4]);
        store.replace_if_not_sole(&[4]);
        assert!(store.is_empty());

        let mut store = SampleSelection::with_selected([4, 5]);
        store.replace_if_not_sole(&[4]);
        assert_eq!(store.sorted(), vec![4]);

        let mut store = SampleSelection::new();
        store.replace_if_not_sole(&[]);
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn unchanged_selection_keeps_revision() {
        let mut store = SampleSelection::with_selected([1]);
        store.select(&[1], SelectionMode::Add);
        store.select(&[1], SelectionMode::Replace);
        assert_eq!(store.revision(), 0);
        store.clear();
        assert_eq!(store.revision(), 1);
        store.clear();
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn changes_are_published() {
        let ctrl = SelectionEventController::new();
        let rx = ctrl.subscribe(SelectionEventFilter::only(
            SelectionEventKind::TOGGLED | SelectionEventKind::CLEARED,
        ));
        let mut store = SampleSelection::new();
        store.attach_events(ctrl);

        store.select(&[7, 3], SelectionMode::Replace);
        store.toggle(&[3]);
        store.toggle(&[7]);

        let first = rx.try_recv().unwrap();
        assert_eq!(first.kinds, SelectionEventKind::TOGGLED);
        assert_eq!(first.selected, vec![7]);
        assert_eq!(first.revision, 2);

        let second = rx.try_recv().unwrap();
        assert!(second.kinds.contains(SelectionEventKind::CLEARED));
        assert!(second.selected.is_empty());
        assert!(rx.try_recv().is_err());
    }
}
