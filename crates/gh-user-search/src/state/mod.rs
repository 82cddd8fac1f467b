//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod modal;
mod search;
mod status_bar;

pub use app::AppState;
pub use modal::{ModalPhase, ModalState};
pub use search::{
    missing_logins, validate_query, DetailEntry, Pagination, SearchFocus, SearchState,
    ValidationError, GRID_COLUMNS,
};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage, StatusSource};
