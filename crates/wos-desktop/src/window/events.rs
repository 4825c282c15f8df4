//! Window lifecycle notifications

use serde::Serialize;
use super::{WindowId, WindowState};

/// Lifecycle notification delivered to subscribers
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WindowEvent {
    /// A window was opened
    Created { id: WindowId },
    /// A window became the active window
    Focused { id: WindowId },
    /// A window was minimized, maximized or restored
    StateChanged { id: WindowId, state: WindowState },
    /// A window was removed from the desktop
    #[serde(rename = "windowClosed")]
    Closed { id: WindowId },
}

impl WindowEvent {
    /// The window this event is about
    pub fn window_id(&self) -> &str {
        match self {
            WindowEvent::Created { id }
            | WindowEvent::Focused { id }
            | WindowEvent::StateChanged { id, .. }
            | WindowEvent::Closed { id } => id,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&WindowEvent)>;

/// Subscriber list
///
/// Listeners run synchronously, in subscription order, after the manager
/// has finished mutating state.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        self.entries.push((self.next_id, listener));
        self.next_id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &WindowEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
