//! Selection data model: targets, modes and resolved actions.
//!
//! Every value in here is built per click and consumed right away. None of
//! them hold a reference to the selection store, so resolving an action and
//! applying it can be tested separately.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Identifier of one data sample. The unit of selection.
pub type SampleIndex = usize;

/// The current set of selected samples, as owned by a selection store.
pub type Selection = HashSet<SampleIndex>;

/// Samples represented by a clicked visual element (a point, a plain bar).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTarget {
    pub indices: Vec<SampleIndex>,
}

impl SelectionTarget {
    pub fn new(indices: impl Into<Vec<SampleIndex>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// Target for a single scatter point.
    pub fn point(index: SampleIndex) -> Self {
        Self {
            indices: vec![index],
        }
    }
}

/// A click on one segment of a stacked bar.
///
/// `segment_indices` is expected to be a subset of `bar_indices`, which is
/// the union of every segment of the bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackedBarTarget {
    pub bar_indices: Vec<SampleIndex>,
    pub segment_indices: Vec<SampleIndex>,
}

impl StackedBarTarget {
    pub fn new(
        bar_indices: impl Into<Vec<SampleIndex>>,
        segment_indices: impl Into<Vec<SampleIndex>>,
    ) -> Self {
        Self {
            bar_indices: bar_indices.into(),
            segment_indices: segment_indices.into(),
        }
    }

    /// Returns `true` if every segment index also belongs to the bar.
    pub fn segment_within_bar(&self) -> bool {
        let bar: HashSet<SampleIndex> = self.bar_indices.iter().copied().collect();
        self.segment_indices.iter().all(|i| bar.contains(i))
    }
}

/// How `select` combines the new indices with the existing selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Discard the old selection.
    #[default]
    Replace,
    /// Union with the old selection.
    Add,
}

/// The abstract outcome of a click, applied later against a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SelectionAction {
    Clear,
    Toggle {
        indices: Vec<SampleIndex>,
    },
    Select {
        indices: Vec<SampleIndex>,
        mode: SelectionMode,
    },
    /// Clear when the indices already are the whole selection, else replace.
    /// The store decides what "sole" means.
    ReplaceIfNotSole {
        indices: Vec<SampleIndex>,
    },
}

impl SelectionAction {
    pub fn select(indices: impl Into<Vec<SampleIndex>>, mode: SelectionMode) -> Self {
        SelectionAction::Select {
            indices: indices.into(),
            mode,
        }
    }

    pub fn toggle(indices: impl Into<Vec<SampleIndex>>) -> Self {
        SelectionAction::Toggle {
            indices: indices.into(),
        }
    }

    pub fn replace_if_not_sole(indices: impl Into<Vec<SampleIndex>>) -> Self {
        SelectionAction::ReplaceIfNotSole {
            indices: indices.into(),
        }
    }

    /// Indices carried by the action (empty for `Clear`).
    pub fn indices(&self) -> &[SampleIndex] {
        match self {
            SelectionAction::Clear => &[],
            SelectionAction::Toggle { indices }
            | SelectionAction::Select { indices, .. }
            | SelectionAction::ReplaceIfNotSole { indices } => indices,
        }
    }
}

pub fn is_select_action(action: &SelectionAction) -> bool {
    matches!(action, SelectionAction::Select { .. })
}

pub fn is_toggle_action(action: &SelectionAction) -> bool {
    matches!(action, SelectionAction::Toggle { .. })
}

pub fn is_clear_action(action: &SelectionAction) -> bool {
    matches!(action, SelectionAction::Clear)
}

pub fn is_replace_if_not_sole_action(action: &SelectionAction) -> bool {
    matches!(action, SelectionAction::ReplaceIfNotSole { .. })
}
