//! Per-user presence state machine.

use serde::Serialize;

use crate::event_kind::EventKind;
use crate::types::UserId;

/// Outcome of applying one event to a [`UserState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Outside → Inside; the entry counter moved.
    Entered,
    /// Inside → Outside.
    Exited,
    /// Entry while inside, or exit while outside. Nothing changed.
    Ignored,
}

/// Derived presence state for one user.
///
/// A user is either outside (the initial state) or inside. Mismatched events
/// are self-loops, so duplicated lines in a register never inflate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserState {
    id: UserId,
    inside: bool,
    entries: u64,
    last_event: Option<EventKind>,
}

impl UserState {
    /// Creates an outside user with no recorded entries.
    pub const fn new(id: UserId) -> Self {
        Self {
            id,
            inside: false,
            entries: 0,
            last_event: None,
        }
    }

    /// Applies one event and reports the resulting transition.
    pub fn apply_event(&mut self, kind: EventKind) -> Transition {
        match (kind, self.inside) {
            (EventKind::Entry, false) => {
                self.inside = true;
                self.entries += 1;
                self.last_event = Some(kind);
                Transition::Entered
            }
            (EventKind::Exit, true) => {
                self.inside = false;
                self.last_event = Some(kind);
                Transition::Exited
            }
            (EventKind::Entry, true) | (EventKind::Exit, false) => Transition::Ignored,
        }
    }

    pub const fn id(&self) -> &UserId {
        &self.id
    }

    pub const fn is_inside(&self) -> bool {
        self.inside
    }

    /// Number of outside → inside transitions seen so far.
    pub const fn entry_count(&self) -> u64 {
        self.entries
    }

    /// Last event that actually changed state, if any.
    pub const fn last_event(&self) -> Option<EventKind> {
        self.last_event
    }
}
