//! Observable holder for the current game state.

use super::state::GameState;
use tokio::sync::watch;

/// Single-value state holder with push-on-change subscribers.
///
/// Backed by a `watch` channel: there is always exactly one current value,
/// and subscribers are only woken when a published value differs from the
/// previous one.
#[derive(Debug)]
pub struct StateStream {
    sender: watch::Sender<GameState>,
}

impl StateStream {
    pub fn new(initial: GameState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Clone of the current snapshot.
    pub fn value(&self) -> GameState {
        self.sender.borrow().clone()
    }

    /// Receiver that observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.sender.subscribe()
    }

    /// Replace the snapshot. Returns whether subscribers were notified.
    pub fn publish(&self, next: GameState) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}
