use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use gh_user_client::UserApi;
use std::time::Duration;
use tokio::runtime::Handle;

pub mod browser_middleware;
pub mod enrichment_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod repository_middleware;
pub mod search_middleware;
pub mod view_translation_middleware;

pub use browser_middleware::BrowserMiddleware;
pub use enrichment_middleware::EnrichmentMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use repository_middleware::RepositoryMiddleware;
pub use search_middleware::SearchMiddleware;
pub use view_translation_middleware::ViewTranslationMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the thread that owns the store and must not block.
/// Network calls and timers are spawned on the tokio runtime and report back
/// through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

/// The application's middleware chain, in execution order
pub fn default_chain(
    api: UserApi,
    runtime: Handle,
    debounce: Duration,
) -> Vec<Box<dyn Middleware>> {
    vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(ViewTranslationMiddleware::new()),
        Box::new(SearchMiddleware::new(api.clone(), runtime.clone(), debounce)),
        Box::new(EnrichmentMiddleware::new(api.clone(), runtime.clone())),
        Box::new(RepositoryMiddleware::new(api, runtime.clone())),
        Box::new(BrowserMiddleware::new(runtime)),
    ]
}
