//! Reducers - pure state transitions
//!
//! `app_reducer::reduce` is the root; it handles view stack changes and
//! delegates each screen-specific action to its own reducer.

pub mod app_reducer;
pub mod modal_reducer;
pub mod search_reducer;
pub mod status_bar_reducer;
