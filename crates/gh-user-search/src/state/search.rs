//! Search screen state
//!
//! Query text, the current page of users, pagination arithmetic and the
//! follower/following enrichment mapping.

use gh_user_client::{UserDetail, UserSummary, MAX_SEARCH_RESULTS, PAGE_SIZE};
use std::collections::{HashMap, HashSet};

/// Cards per row in the user grid
pub const GRID_COLUMNS: usize = 3;

/// Rejection of an explicitly submitted query
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("GitHub username is required!")]
    EmptyQuery,
}

/// Trim a submitted query, rejecting one that is empty afterwards
pub fn validate_query(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Page position within a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based current page
    pub page: u32,
    /// Total matches reported by the last applied search
    pub total_count: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_count: 0,
        }
    }
}

impl Pagination {
    /// Number of reachable pages; zero when nothing matched
    ///
    /// GitHub serves only the first 1000 results of a search, so the count
    /// is capped before dividing.
    pub fn total_pages(&self) -> u32 {
        let reachable = self.total_count.min(MAX_SEARCH_RESULTS);
        let pages = reachable.div_ceil(u64::from(PAGE_SIZE));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Page count as shown to the user, never below one
    pub fn display_total_pages(&self) -> u32 {
        self.total_pages().max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.display_total_pages()
    }

    /// Target of "previous", or `None` on the first page
    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    /// Target of "next", or `None` on the last page
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Clamp a page number into `[1, display_total_pages]`
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.display_total_pages())
    }

    /// "Page N of M"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.display_total_pages())
    }
}

/// Enrichment status of one login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEntry {
    /// A fetch was issued and has not answered yet
    Pending,
    /// Follower stats (zeros if the fetch failed)
    Ready(UserDetail),
}

impl DetailEntry {
    pub fn detail(&self) -> Option<UserDetail> {
        match self {
            Self::Pending => None,
            Self::Ready(detail) => Some(*detail),
        }
    }
}

/// Logins of `users` that have no entry in `details` yet
///
/// Deduplicated and in display order. A login with a `Pending` entry is
/// not missing, so running this twice over the same page yields nothing the
/// second time once the first batch was marked.
pub fn missing_logins(users: &[UserSummary], details: &HashMap<String, DetailEntry>) -> Vec<String> {
    let mut seen = HashSet::new();
    users
        .iter()
        .map(|user| user.login.as_str())
        .filter(|login| !details.contains_key(*login))
        .filter(|login| seen.insert(*login))
        .map(str::to_string)
        .collect()
}

/// Which part of the search screen receives keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchFocus {
    #[default]
    Input,
    Grid,
}

/// Search screen state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text in the search field
    pub query: String,
    pub focus: SearchFocus,
    /// Shown under the field after a rejected submission
    pub validation_error: Option<ValidationError>,
    /// Query of the current result set; paging re-runs this one
    pub executed_query: Option<String>,
    /// Users on the current page
    pub users: Vec<UserSummary>,
    pub pagination: Pagination,
    /// A search for `active_generation` is in flight
    pub loading: bool,
    /// The only search generation whose result may still be applied
    pub active_generation: Option<u64>,
    /// Identifies the result set the detail mapping belongs to
    pub result_set: u64,
    /// Enrichment per login, kept across pages of the same result set
    pub details: HashMap<String, DetailEntry>,
    /// Index of the selected card on the current page
    pub selected: usize,
}

impl SearchState {
    pub fn selected_user(&self) -> Option<&UserSummary> {
        self.users.get(self.selected)
    }

    /// Follower stats for a login, once they arrived
    pub fn detail_for(&self, login: &str) -> Option<UserDetail> {
        self.details.get(login).and_then(DetailEntry::detail)
    }

    /// Drop results and invalidate any in-flight search
    ///
    /// Result set `0` is never issued, so late detail responses for the
    /// dropped set no longer match.
    pub fn reset_results(&mut self) {
        self.users.clear();
        self.pagination = Pagination::default();
        self.loading = false;
        self.active_generation = None;
        self.executed_query = None;
        self.result_set = 0;
        self.details.clear();
        self.selected = 0;
    }
}
