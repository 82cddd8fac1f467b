//! Search screen actions
//!
//! Covers the query field, the generation-tagged search lifecycle, paging,
//! card selection and follower enrichment.

use crate::state::ValidationError;
use gh_user_client::{SearchOutcome, UserDetail};

/// Direction to move the card selection in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
}

/// Actions for the search screen
#[derive(Debug, Clone)]
pub enum SearchAction {
    // Query field
    /// Character appended to the query
    InputChar(char),
    /// Last character removed from the query
    InputBackspace,
    /// Query cleared; results reset and in-flight searches invalidated
    Clear,
    /// Explicit submission of the current query (Enter)
    Submit,
    /// Move keyboard focus to the card grid
    FocusGrid,
    /// Move keyboard focus to the query field
    FocusInput,

    // Search lifecycle
    /// Debounce timer for `ticket` expired
    DebounceElapsed { ticket: u64 },
    /// A search was issued; results for `generation` are the only ones applied
    Started {
        generation: u64,
        query: String,
        page: u32,
        result_set: u64,
    },
    /// A search finished (successfully or not)
    Loaded {
        generation: u64,
        outcome: SearchOutcome,
    },
    /// Explicit submission rejected
    ValidationFailed(ValidationError),

    // Paging
    PreviousPage,
    NextPage,

    // Card grid
    MoveSelection(GridMove),

    // Enrichment
    /// Detail fetches were issued for these logins
    DetailsRequested { result_set: u64, logins: Vec<String> },
    /// One detail fetch finished
    DetailLoaded {
        result_set: u64,
        login: String,
        detail: UserDetail,
    },
}
