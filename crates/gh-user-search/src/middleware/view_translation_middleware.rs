//! View Translation Middleware
//!
//! Translates generic Navigation, TextInput and ViewContext actions into
//! view-specific actions using the active view's translate methods.
//!
//! Translated actions are dispatched so they go through the full middleware chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates generic actions via the active view
pub struct ViewTranslationMiddleware;

impl ViewTranslationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ViewTranslationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ViewTranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(
            action,
            Action::Navigate(_) | Action::TextInput(_) | Action::ViewContext(_)
        ) {
            return true;
        }

        let Some(view) = state.active_view() else {
            return false;
        };

        let translated = match action {
            Action::Navigate(nav) => view.translate_navigation(*nav),
            Action::TextInput(input) => view.translate_text_input(input.clone(), state),
            Action::ViewContext(context) => view.translate_context_action(*context, state),
            _ => None,
        };

        match translated {
            Some(translated) => {
                log::debug!(
                    "ViewTranslationMiddleware: {:?} on {:?} -> {:?}",
                    action,
                    view.view_id(),
                    translated
                );
                dispatcher.dispatch(translated);
            }
            None => log::debug!(
                "{:?} not handled by active view {:?}",
                action,
                view.view_id()
            ),
        }

        // Generic actions never reach the reducers
        false
    }
}
