//! Repository Modal View
//!
//! A floating window over the search screen listing the selected user's
//! repositories, with the profile as header.

use crate::actions::{Action, ContextAction, GlobalAction, ModalAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{ModalBody, RepositoryModalViewModel, RepositoryRowViewModel};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Repository modal view - rendered on top of the search view
#[derive(Debug, Clone)]
pub struct RepositoryModalView;

impl RepositoryModalView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RepositoryModalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RepositoryModalView {
    fn view_id(&self) -> ViewId {
        ViewId::RepositoryModal
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        if let Some(vm) = RepositoryModalViewModel::from_state(&state.modal, &state.theme) {
            render_popup(&vm, state.modal.selected, &state.theme, area, f);
        }
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::VIM_NAVIGATION_BINDINGS
            | PanelCapabilities::ITEM_NAVIGATION
            | PanelCapabilities::OPEN_IN_BROWSER
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        match nav {
            NavigationAction::Up => Some(Action::Modal(ModalAction::SelectPrevious)),
            NavigationAction::Down => Some(Action::Modal(ModalAction::SelectNext)),
            _ => None,
        }
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm | ContextAction::OpenInBrowser => {
                let repo = state.modal.selected_repo()?;
                if repo.html_url.is_empty() {
                    return None;
                }
                Some(Action::Global(GlobalAction::OpenUrl(repo.html_url.clone())))
            }
            ContextAction::FocusInput => None,
        }
    }
}

/// Render the modal as a centered floating window
fn render_popup(
    vm: &RepositoryModalViewModel,
    selected: usize,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    // Render dimmed overlay over the entire screen to create modal effect
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let popup_width = (area.width * 70 / 100).clamp(40u16.min(area.width), 100);
    let popup_height = (area.height * 80 / 100).clamp(10u16.min(area.height), 40);
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    // Clear the popup area (removes the dim effect for the popup itself)
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" ↑↓", theme.key_hint()),
        Span::styled(" select  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" open  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let header_height = if vm.header.is_empty() {
        0
    } else {
        vm.header.len() as u16 + 1
    };
    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(inner);

    if !vm.header.is_empty() {
        let lines: Vec<Line> = vm
            .header
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), theme.text_secondary())))
            .collect();
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), header_area);
    }

    match &vm.body {
        ModalBody::Loading => {
            f.render_widget(
                Paragraph::new(Span::styled("Loading repositories…", theme.muted().italic()))
                    .alignment(Alignment::Center),
                body_area,
            );
        }
        ModalBody::Empty(message) => {
            f.render_widget(
                Paragraph::new(Span::styled(*message, theme.muted().italic()))
                    .alignment(Alignment::Center),
                body_area,
            );
        }
        ModalBody::Repositories(rows) => {
            let items: Vec<ListItem> = rows.iter().map(|row| repository_item(row, theme)).collect();
            let list = List::new(items).highlight_style(theme.selected());
            let mut list_state = ListState::default().with_selected(Some(selected));
            f.render_stateful_widget(list, body_area, &mut list_state);
        }
    }
}

fn repository_item<'a>(row: &'a RepositoryRowViewModel, theme: &Theme) -> ListItem<'a> {
    let mut title = vec![
        Span::styled(row.name.as_str(), theme.text().bold()),
        Span::styled(
            format!("  [{}]", row.visibility),
            if row.public {
                theme.muted()
            } else {
                theme.key_hint()
            },
        ),
    ];
    if row.selected {
        title.insert(0, Span::styled("▶ ", theme.key_hint()));
    } else {
        title.insert(0, Span::raw("  "));
    }

    let mut lines = vec![Line::from(title)];
    if let Some(description) = &row.description {
        lines.push(Line::from(Span::styled(
            format!("  {}", description),
            theme.text_secondary(),
        )));
    }

    let mut meta = vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", row.language), theme.badge(row.language_color)),
        Span::styled(format!("  ★ {}  ⑂ {}", row.stars, row.forks), theme.muted()),
    ];
    if !row.updated.is_empty() {
        meta.push(Span::styled(format!("  updated {}", row.updated), theme.muted()));
    }
    lines.push(Line::from(meta));

    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::modal_reducer::reduce_modal;
    use gh_user_client::Repository;

    fn loaded(html_url: &str) -> AppState {
        let mut state = AppState::default();
        let actions = [
            ModalAction::Opened {
                login: "octocat".to_string(),
                session: 1,
            },
            ModalAction::ReposLoaded {
                session: 1,
                repos: vec![Repository {
                    id: 1,
                    name: "hello-world".to_string(),
                    html_url: html_url.to_string(),
                    description: None,
                    language: None,
                    stargazers_count: 0,
                    forks_count: 0,
                    visibility: None,
                    updated_at: None,
                }],
            },
        ];
        state.modal = actions.iter().fold(state.modal, reduce_modal);
        state
    }

    #[test]
    fn test_enter_opens_selected_repository() {
        let view = RepositoryModalView::new();
        let state = loaded("https://github.com/octocat/hello-world");
        assert_eq!(
            format!(
                "{:?}",
                view.translate_context_action(ContextAction::Confirm, &state)
            ),
            "Some(Global(OpenUrl(\"https://github.com/octocat/hello-world\")))"
        );
    }

    #[test]
    fn test_nothing_to_open_while_loading() {
        let view = RepositoryModalView::new();
        let mut state = AppState::default();
        state.modal = reduce_modal(
            state.modal,
            &ModalAction::Opened {
                login: "octocat".to_string(),
                session: 1,
            },
        );
        assert!(view
            .translate_context_action(ContextAction::Confirm, &state)
            .is_none());
    }

    #[test]
    fn test_vertical_navigation_only() {
        let view = RepositoryModalView::new();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Down),
            Some(Action::Modal(ModalAction::SelectNext))
        ));
        assert!(view.translate_navigation(NavigationAction::NextPage).is_none());
    }
}
