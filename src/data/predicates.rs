//! Set-membership helpers over a target's indices and the current selection.

use super::selection::{SampleIndex, Selection};

/// `true` when `indices` is non-empty and every index is selected.
pub fn all_indices_selected(indices: &[SampleIndex], selection: &Selection) -> bool {
    !indices.is_empty() && indices.iter().all(|i| selection.contains(i))
}

/// `true` when at least one index is selected.
pub fn any_indices_selected(indices: &[SampleIndex], selection: &Selection) -> bool {
    indices.iter().any(|i| selection.contains(i))
}

pub fn no_indices_selected(indices: &[SampleIndex], selection: &Selection) -> bool {
    !any_indices_selected(indices, selection)
}

/// The selected indices, in their original order.
pub fn get_selected_subset(indices: &[SampleIndex], selection: &Selection) -> Vec<SampleIndex> {
    indices
        .iter()
        .copied()
        .filter(|i| selection.contains(i))
        .collect()
}

/// The unselected indices, in their original order.
pub fn get_unselected_subset(indices: &[SampleIndex], selection: &Selection) -> Vec<SampleIndex> {
    indices
        .iter()
        .copied()
        .filter(|i| !selection.contains(i))
        .collect()
}

/// Order-independent equality of two selections.
pub fn selections_equal(a: &Selection, b: &Selection) -> bool {
    a.len() == b.len() && a.iter().all(|i| b.contains(i))
}

/// Exact-match test: the target is the whole selection.
///
/// Sizes are compared against the raw index count, so a target with
/// duplicate indices never matches.
pub fn indices_match_selection(indices: &[SampleIndex], selection: &Selection) -> bool {
    all_indices_selected(indices, selection) && selection.len() == indices.len()
}
