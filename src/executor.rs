//! Applies a resolved [`SelectionAction`] to a [`SelectionStore`].

use tracing::trace;

use crate::data::selection::SelectionAction;
use crate::store::SelectionStore;

/// One action, one store call.
pub fn execute_selection_action<S: SelectionStore + ?Sized>(action: &SelectionAction, store: &mut S) {
    trace!(?action, "executing selection action");
    match action {
        SelectionAction::Clear => store.clear(),
        SelectionAction::Toggle { indices } => store.toggle(indices),
        SelectionAction::Select { indices, mode } => store.select(indices, *mode),
        SelectionAction::ReplaceIfNotSole { indices } => store.replace_if_not_sole(indices),
    }
}
