//! Selection change notifications.
//!
//! Charts that share one selection subscribe through a
//! [`SelectionEventController`] and redraw when it changes. Each event
//! carries a set of [`SelectionEventKind`] flags and the full selection after
//! the change. A subscriber passes a [`SelectionEventFilter`]; an event is
//! delivered when `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::data::selection::SampleIndex;

// ─────────────────────────────────────────────────────────────────────────────
// SelectionEventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Categories a selection change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionEventKind(pub u32);

impl SelectionEventKind {
    /// The selection was replaced.
    pub const SELECTED: Self = Self(1 << 0);
    /// Samples were added to the selection.
    pub const ADDED: Self = Self(1 << 1);
    /// Samples were toggled in or out.
    pub const TOGGLED: Self = Self(1 << 2);
    /// The selection became empty.
    pub const CLEARED: Self = Self(1 << 3);

    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for SelectionEventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for SelectionEventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for SelectionEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == SelectionEventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(SelectionEventKind, &str)] = &[
            (SelectionEventKind::SELECTED, "SELECTED"),
            (SelectionEventKind::ADDED, "ADDED"),
            (SelectionEventKind::TOGGLED, "TOGGLED"),
            (SelectionEventKind::CLEARED, "CLEARED"),
        ];

        let mut names = Vec::new();
        let mut known_bits = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SelectionEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A selection change, as seen by subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub kinds: SelectionEventKind,
    /// Store revision after the change.
    pub revision: u64,
    /// Selection after the change, sorted ascending.
    pub selected: Vec<SampleIndex>,
    /// Seconds since the controller was created. Set on emit.
    pub timestamp: f64,
}

impl SelectionEvent {
    pub fn new(kinds: SelectionEventKind, revision: u64, selected: Vec<SampleIndex>) -> Self {
        Self {
            kinds,
            revision,
            selected,
            timestamp: 0.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SelectionEventFilter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct SelectionEventFilter {
    pub mask: SelectionEventKind,
}

impl SelectionEventFilter {
    pub const fn all() -> Self {
        Self {
            mask: SelectionEventKind::ALL,
        }
    }

    pub const fn only(mask: SelectionEventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &SelectionEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for SelectionEventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SelectionEventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: SelectionEventFilter,
    sender: Sender<SelectionEvent>,
}

struct ControllerInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Fans selection changes out to subscribers over `mpsc` channels.
///
/// Cloning shares the subscriber list.
#[derive(Clone)]
pub struct SelectionEventController {
    inner: Arc<Mutex<ControllerInner>>,
}

impl SelectionEventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ControllerInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    // A panicking subscriber thread must not take notifications down with it.
    fn lock(&self) -> MutexGuard<'_, ControllerInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Subscribe to events matching `filter`.
    pub fn subscribe(&self, filter: SelectionEventFilter) -> Receiver<SelectionEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<SelectionEvent> {
        self.subscribe(SelectionEventFilter::all())
    }

    /// Number of live subscribers, as of the last emit.
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    /// Send `event` to every matching subscriber and drop closed channels.
    pub fn emit(&self, mut event: SelectionEvent) {
        let mut inner = self.lock();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        // A non-matching subscriber is kept; its channel is checked the next
        // time an event matches.
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for SelectionEventController {
    fn default() -> Self {
        Self::new()
    }
}
