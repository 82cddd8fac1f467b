//! Search View Model
//!
//! Pre-computes the query field, the user card grid and the pagination footer
//! so the search view only has to draw.

use crate::state::{AppState, SearchFocus, SearchState};
use crate::theme::Theme;
use ratatui::style::Style;

/// Shown in the grid area when a search returned nothing
pub const NO_RESULTS: &str = "No users found";

/// View model for the query field
#[derive(Debug, Clone)]
pub struct QueryInputViewModel {
    pub value: String,
    pub placeholder: &'static str,
    pub focused: bool,
    /// Inline validation message under the field
    pub error: Option<String>,
    pub border_style: Style,
}

/// View model for one user card
#[derive(Debug, Clone)]
pub struct UserCardViewModel {
    pub login: String,
    /// "12 followers · 3 following", or an ellipsis while loading
    pub stats: String,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub selected: bool,
    pub border_style: Style,
}

/// View model for the pagination footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationViewModel {
    /// "Page N of M"
    pub label: String,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Everything the search screen renders
#[derive(Debug, Clone)]
pub struct SearchViewModel {
    pub input: QueryInputViewModel,
    pub cards: Vec<UserCardViewModel>,
    /// `None` before the first search completes
    pub pagination: Option<PaginationViewModel>,
    /// Replaces the grid when a completed search has no users
    pub empty_message: Option<&'static str>,
    pub loading: bool,
}

impl SearchViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let search = &state.search;
        let theme = &state.theme;
        let grid_focused = search.focus == SearchFocus::Grid;

        let cards = search
            .users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let selected = grid_focused && index == search.selected;
                UserCardViewModel {
                    login: user.login.clone(),
                    stats: stats_text(search, &user.login),
                    company: non_empty(user.company.as_deref()),
                    blog: non_empty(user.blog.as_deref()),
                    selected,
                    border_style: theme.card_border(selected),
                }
            })
            .collect();

        let searched = search.executed_query.is_some() && !search.loading;
        let pagination = searched.then(|| PaginationViewModel {
            label: search.pagination.label(),
            has_previous: search.pagination.has_previous(),
            has_next: search.pagination.has_next(),
        });
        let empty_message = (searched && search.users.is_empty()).then_some(NO_RESULTS);

        Self {
            input: input_view_model(search, theme),
            cards,
            pagination,
            empty_message,
            loading: search.loading,
        }
    }
}

fn input_view_model(search: &SearchState, theme: &Theme) -> QueryInputViewModel {
    let focused = search.focus == SearchFocus::Input;
    QueryInputViewModel {
        value: search.query.clone(),
        placeholder: "Search GitHub users",
        focused,
        error: search.validation_error.map(|e| e.to_string()),
        border_style: if search.validation_error.is_some() {
            theme.error()
        } else {
            theme.card_border(focused)
        },
    }
}

fn stats_text(search: &SearchState, login: &str) -> String {
    match search.detail_for(login) {
        Some(detail) => format!(
            "{} followers · {} following",
            detail.followers, detail.following
        ),
        None => "…".to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
