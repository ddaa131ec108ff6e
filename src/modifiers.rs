//! Click modifier extraction.
//!
//! Ctrl and Cmd (meta) are folded into a single `ctrl` flag here, so nothing
//! downstream needs to know which platform produced the click.

use serde::{Deserialize, Serialize};

/// Modifier keys held during a click, already normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClickModifiers {
    pub shift: bool,
    /// Ctrl on any platform, or Cmd on macOS.
    pub ctrl: bool,
}

impl ClickModifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };

    /// Returns `true` if either modifier is held.
    #[inline]
    pub const fn any(self) -> bool {
        self.shift || self.ctrl
    }
}

/// Anything carrying the raw shift / ctrl / meta flags of a pointer or
/// keyboard event.
pub trait ModifierSource {
    fn shift_key(&self) -> bool;
    fn ctrl_key(&self) -> bool;
    fn meta_key(&self) -> bool;
}

/// Raw flags as forwarded by a chart component along with a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerFlags {
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
}

impl ModifierSource for PointerFlags {
    fn shift_key(&self) -> bool {
        self.shift_key
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }
}

impl ModifierSource for ClickModifiers {
    fn shift_key(&self) -> bool {
        self.shift
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl
    }

    fn meta_key(&self) -> bool {
        false
    }
}

#[cfg(feature = "egui")]
impl ModifierSource for egui::Modifiers {
    fn shift_key(&self) -> bool {
        self.shift
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl
    }

    // `command` is Cmd on macOS and Ctrl elsewhere.
    fn meta_key(&self) -> bool {
        self.mac_cmd || self.command
    }
}

/// Reads shift and `ctrl || meta` from an event.
pub fn extract_modifiers<E: ModifierSource + ?Sized>(event: &E) -> ClickModifiers {
    ClickModifiers {
        shift: event.shift_key(),
        ctrl: event.ctrl_key() || event.meta_key(),
    }
}
