//! Search View
//!
//! The base screen: the query field, a grid of user cards and the pagination
//! footer. Focus is either on the field (typing) or on the grid (selecting).

use crate::actions::{
    Action, ContextAction, GlobalAction, GridMove, ModalAction, NavigationAction, SearchAction,
    TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, SearchFocus, GRID_COLUMNS};
use crate::theme::Theme;
use crate::view_models::{
    PaginationViewModel, QueryInputViewModel, SearchViewModel, UserCardViewModel,
};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one user card including its border
const CARD_HEIGHT: u16 = 6;

/// Search view - query field over a paginated card grid
#[derive(Debug, Clone)]
pub struct SearchView;

impl SearchView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SearchView {
    fn view_id(&self) -> ViewId {
        ViewId::Search
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = SearchViewModel::from_state(state);
        render(&vm, &state.theme, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        match state.search.focus {
            SearchFocus::Input => PanelCapabilities::TEXT_INPUT | PanelCapabilities::PAGINATION,
            SearchFocus::Grid => {
                PanelCapabilities::VIM_NAVIGATION_BINDINGS
                    | PanelCapabilities::ITEM_NAVIGATION
                    | PanelCapabilities::PAGINATION
                    | PanelCapabilities::OPEN_IN_BROWSER
            }
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Up => SearchAction::MoveSelection(GridMove::Up),
            NavigationAction::Down => SearchAction::MoveSelection(GridMove::Down),
            NavigationAction::Left => SearchAction::MoveSelection(GridMove::Left),
            NavigationAction::Right => SearchAction::MoveSelection(GridMove::Right),
            NavigationAction::NextPage => SearchAction::NextPage,
            NavigationAction::PreviousPage => SearchAction::PreviousPage,
        };
        Some(Action::Search(action))
    }

    fn translate_text_input(&self, input: TextInputAction, state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SearchAction::InputChar(c),
            TextInputAction::Backspace => SearchAction::InputBackspace,
            TextInputAction::ClearLine => SearchAction::Clear,
            // Esc clears a non-empty field and quits from an empty one
            TextInputAction::Escape if state.search.query.is_empty() => {
                return Some(Action::Global(GlobalAction::Quit))
            }
            TextInputAction::Escape => SearchAction::Clear,
            TextInputAction::Confirm => SearchAction::Submit,
            TextInputAction::Leave => SearchAction::FocusGrid,
        };
        Some(Action::Search(action))
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => {
                let user = state.search.selected_user()?;
                Some(Action::Modal(ModalAction::Open {
                    login: user.login.clone(),
                }))
            }
            ContextAction::OpenInBrowser => {
                let user = state.search.selected_user()?;
                if user.html_url.is_empty() {
                    return None;
                }
                Some(Action::Global(GlobalAction::OpenUrl(user.html_url.clone())))
            }
            ContextAction::FocusInput => Some(Action::Search(SearchAction::FocusInput)),
        }
    }
}

fn render(vm: &SearchViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let outer = Block::default()
        .title(" GitHub User Search ")
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let [input_area, error_area, grid_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_input(&vm.input, theme, input_area, f);

    if let Some(error) = &vm.input.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", error),
                theme.error().add_modifier(Modifier::ITALIC),
            ))),
            error_area,
        );
    }

    if vm.loading && vm.cards.is_empty() {
        render_message("Searching…", theme, grid_area, f);
    } else if let Some(message) = vm.empty_message {
        render_message(message, theme, grid_area, f);
    } else {
        render_grid(&vm.cards, theme, grid_area, f);
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(pagination, theme, footer_area, f);
    }
}

fn render_input(vm: &QueryInputViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let line = if vm.value.is_empty() && !vm.focused {
        Line::from(Span::styled(vm.placeholder, theme.muted()))
    } else if vm.value.is_empty() {
        Line::from(vec![
            Span::styled("▌", theme.key_hint()),
            Span::styled(vm.placeholder, theme.muted()),
        ])
    } else {
        let mut spans = vec![Span::styled(vm.value.as_str(), theme.text())];
        if vm.focused {
            spans.push(Span::styled("▌", theme.key_hint()));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(" Username ")
        .title_style(theme.text_secondary())
        .borders(Borders::ALL)
        .border_style(vm.border_style);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_message(message: &str, theme: &Theme, area: Rect, f: &mut Frame) {
    let [_, line_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    f.render_widget(
        Paragraph::new(Span::styled(message, theme.muted().italic())).alignment(Alignment::Center),
        line_area,
    );
}

fn render_grid(cards: &[UserCardViewModel], theme: &Theme, area: Rect, f: &mut Frame) {
    if cards.is_empty() {
        return;
    }

    let rows = cards.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::vertical(
        std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), rows).chain([Constraint::Min(0)]),
    )
    .split(area);

    for (row_index, chunk) in cards.chunks(GRID_COLUMNS).enumerate() {
        let column_areas =
            Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(row_areas[row_index]);
        for (card, card_area) in chunk.iter().zip(column_areas.iter()) {
            render_card(card, theme, *card_area, f);
        }
    }
}

fn render_card(card: &UserCardViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let login_style = if card.selected {
        theme.selected()
    } else {
        theme.text().bold()
    };

    let mut lines = vec![
        Line::from(Span::styled(format!("@{}", card.login), login_style)),
        Line::from(Span::styled(card.stats.as_str(), theme.text_secondary())),
    ];
    if let Some(company) = &card.company {
        lines.push(Line::from(Span::styled(company.as_str(), theme.muted())));
    }
    if let Some(blog) = &card.blog {
        lines.push(Line::from(Span::styled(blog.as_str(), theme.muted())));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(card.border_style);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_pagination(vm: &PaginationViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let hint = |enabled: bool| {
        if enabled {
            theme.key_hint()
        } else {
            theme.muted().add_modifier(Modifier::DIM)
        }
    };

    let line = Line::from(vec![
        Span::styled("◀ PgUp", hint(vm.has_previous)),
        Span::styled(format!("   {}   ", vm.label), theme.text()),
        Span::styled("PgDn ▶", hint(vm.has_next)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
