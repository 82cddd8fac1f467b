//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Text input
//! Views whose focus is a text field (TEXT_INPUT capability) receive printable
//! characters as text rather than as commands.
//!
//! ## Layer 3: Command keys + Gating
//! Fixed command keys, each gated on a capability of the active view, so a
//! key never produces an action the view cannot handle.

use crate::actions::{Action, ContextAction, GlobalAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Map a key to an action; `None` means the key is ignored
    fn translate_key(key: KeyEvent, capabilities: PanelCapabilities) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        // Esc: a text field decides itself (clear or leave), anything else closes
        if key.code == KeyCode::Esc {
            return Some(if capabilities.accepts_text_input() {
                Action::TextInput(TextInputAction::Escape)
            } else {
                Action::Global(GlobalAction::Close)
            });
        }

        // Paging works from the text field too
        if capabilities.supports_pagination() {
            match key.code {
                KeyCode::PageDown => return Some(Action::Navigate(NavigationAction::NextPage)),
                KeyCode::PageUp => return Some(Action::Navigate(NavigationAction::PreviousPage)),
                _ => {}
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Text input
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            let input = match key.code {
                KeyCode::Char('u') if ctrl => TextInputAction::ClearLine,
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    TextInputAction::Char(c)
                }
                KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
                    TextInputAction::ClearLine
                }
                KeyCode::Backspace => TextInputAction::Backspace,
                KeyCode::Enter => TextInputAction::Confirm,
                KeyCode::Tab | KeyCode::Down => TextInputAction::Leave,
                _ => return None,
            };
            return Some(Action::TextInput(input));
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Command keys + Gating
        // ═══════════════════════════════════════════════════════════════════

        let navigation = match key.code {
            KeyCode::Up => Some(NavigationAction::Up),
            KeyCode::Down => Some(NavigationAction::Down),
            KeyCode::Left => Some(NavigationAction::Left),
            KeyCode::Right => Some(NavigationAction::Right),
            KeyCode::Char('k') if capabilities.supports_vim_navigation() => {
                Some(NavigationAction::Up)
            }
            KeyCode::Char('j') if capabilities.supports_vim_navigation() => {
                Some(NavigationAction::Down)
            }
            KeyCode::Char('h') if capabilities.supports_vim_navigation() => {
                Some(NavigationAction::Left)
            }
            KeyCode::Char('l') if capabilities.supports_vim_navigation() => {
                Some(NavigationAction::Right)
            }
            KeyCode::Char(']') if capabilities.supports_pagination() => {
                Some(NavigationAction::NextPage)
            }
            KeyCode::Char('[') if capabilities.supports_pagination() => {
                Some(NavigationAction::PreviousPage)
            }
            _ => None,
        };
        if let Some(nav) = navigation {
            if capabilities.contains(PanelCapabilities::ITEM_NAVIGATION)
                || matches!(nav, NavigationAction::NextPage | NavigationAction::PreviousPage)
            {
                return Some(Action::Navigate(nav));
            }
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(Action::ViewContext(ContextAction::Confirm)),
            KeyCode::Char('o') if capabilities.contains(PanelCapabilities::OPEN_IN_BROWSER) => {
                Some(Action::ViewContext(ContextAction::OpenInBrowser))
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => {
                Some(Action::ViewContext(ContextAction::FocusInput))
            }
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Close)),
            _ => None,
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        let capabilities = state
            .active_view()
            .map(|view| view.capabilities(state))
            .unwrap_or_else(PanelCapabilities::empty);

        match Self::translate_key(*key, capabilities) {
            Some(translated) => {
                log::debug!("KeyboardMiddleware: {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("KeyboardMiddleware: unhandled key {:?}", key.code),
        }

        // Raw keys never reach the reducers
        false
    }
}
