//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Async tasks running on the tokio runtime hold a clone and
//! send their results back the same way; the store drains the channel on the main thread.
//!
//! This enables patterns like:
//! - A debounce timer expiring dispatches `SearchAction::DebounceElapsed`
//! - A finished search dispatches `SearchAction::Loaded`, which the enrichment
//!   middleware observes to schedule follower lookups

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Actions dispatched here re-enter the middleware chain from the beginning,
/// allowing middleware to trigger other middleware handlers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
