use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// Everything runs on the thread that owns the store: middleware always sees
/// the state produced by every earlier action, and async work only reaches the
/// state by sending actions through the [`Dispatcher`].
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    #[cfg(test)]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action, then everything queued while processing it
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.process_pending();
    }

    /// Process actions that arrived from async tasks since the last call
    ///
    /// Returns the number of actions processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
            processed += 1;
        }
        processed
    }

    /// Run one action through the middleware chain and the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);
        }
    }
}
