//! Opens URLs in the system browser without blocking the store

use crate::actions::{Action, GlobalAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, StatusSource};
use crate::utils::browser::open_url;
use tokio::runtime::Handle;

pub struct BrowserMiddleware {
    runtime: Handle,
}

impl BrowserMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl Middleware for BrowserMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::OpenUrl(url)) = action {
            log::info!("Opening {} in browser", url);
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                format!("Opening {}", url),
                StatusSource::Browser,
            )));
            self.runtime.spawn(open_url(url.clone()));
            return false;
        }
        true
    }
}
