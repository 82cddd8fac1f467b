//! Repository Modal View Model
//!
//! Pre-computes the profile header and repository rows of the modal.

use crate::language::LanguageCategory;
use crate::state::{ModalPhase, ModalState};
use crate::theme::Theme;
use gh_user_client::{Repository, UserProfile};
use ratatui::style::Color;

/// Shown instead of the list when a user has no (fetchable) repositories
pub const NO_REPOS: &str = "No repos found";

/// One repository row
#[derive(Debug, Clone)]
pub struct RepositoryRowViewModel {
    pub name: String,
    pub description: Option<String>,
    /// "public", "private", ...
    pub visibility: String,
    /// Private and internal repositories get a highlighted badge
    pub public: bool,
    pub stars: u64,
    pub forks: u64,
    /// Language name, or "Unknown"
    pub language: String,
    /// Presentation class of the language, e.g. "language-rust"
    pub language_class: String,
    pub language_color: Color,
    /// "2024-03-01", empty when unknown
    pub updated: String,
    pub selected: bool,
}

/// Body of the modal below the header
#[derive(Debug, Clone)]
pub enum ModalBody {
    Loading,
    Empty(&'static str),
    Repositories(Vec<RepositoryRowViewModel>),
}

/// View model for the repository modal
#[derive(Debug, Clone)]
pub struct RepositoryModalViewModel {
    /// "octocat (The Octocat)"
    pub title: String,
    /// Profile lines (company, location, blog, bio), when the profile arrived
    pub header: Vec<String>,
    pub body: ModalBody,
}

impl RepositoryModalViewModel {
    /// `None` when the modal is closed
    pub fn from_state(state: &ModalState, theme: &Theme) -> Option<Self> {
        let login = state.login()?;

        let body = match &state.phase {
            ModalPhase::OpenLoaded { repos, .. } if repos.is_empty() => ModalBody::Empty(NO_REPOS),
            ModalPhase::OpenLoaded { repos, .. } => ModalBody::Repositories(
                repos
                    .iter()
                    .enumerate()
                    .map(|(index, repo)| row(repo, index == state.selected, theme))
                    .collect(),
            ),
            _ => ModalBody::Loading,
        };

        Some(Self {
            title: title(login, state.profile.as_ref()),
            header: state.profile.as_ref().map(header_lines).unwrap_or_default(),
            body,
        })
    }
}

fn title(login: &str, profile: Option<&UserProfile>) -> String {
    match profile.and_then(|p| p.name.as_deref()) {
        Some(name) if !name.is_empty() => format!("{} ({})", login, name),
        _ => login.to_string(),
    }
}

fn header_lines(profile: &UserProfile) -> Vec<String> {
    let mut lines = vec![format!(
        "{} followers · {} following · {} public repos",
        profile.followers, profile.following, profile.public_repos
    )];
    let fields = [
        ("Company", &profile.company),
        ("Location", &profile.location),
        ("Blog", &profile.blog),
        ("Bio", &profile.bio),
    ];
    for (label, value) in fields {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            lines.push(format!("{}: {}", label, value));
        }
    }
    lines
}

fn row(repo: &Repository, selected: bool, theme: &Theme) -> RepositoryRowViewModel {
    let category = LanguageCategory::from_language(repo.language.as_deref());
    RepositoryRowViewModel {
        name: repo.name.clone(),
        description: repo.description.clone().filter(|d| !d.is_empty()),
        visibility: repo
            .visibility
            .clone()
            .unwrap_or_else(|| "public".to_string()),
        public: repo.is_public(),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo
            .language
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        language_class: category.class_name(),
        language_color: theme.language_color(category),
        updated: repo
            .updated_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        selected,
    }
}
