//! Repository modal state

use gh_user_client::{Repository, UserProfile};

/// Lifecycle of the repository modal
///
/// `Closed → OpenLoading → OpenLoaded → Closed`, or `OpenLoading → Closed`.
/// Every open gets a fresh session number; responses for any other session
/// are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    OpenLoading {
        login: String,
        session: u64,
    },
    OpenLoaded {
        login: String,
        session: u64,
        repos: Vec<Repository>,
    },
}

/// Repository modal state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub phase: ModalPhase,
    /// Extended profile for the header, if it arrived
    pub profile: Option<UserProfile>,
    /// Index of the selected repository
    pub selected: usize,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ModalPhase::OpenLoading { .. })
    }

    /// Session of the open modal
    pub fn session(&self) -> Option<u64> {
        match &self.phase {
            ModalPhase::Closed => None,
            ModalPhase::OpenLoading { session, .. } | ModalPhase::OpenLoaded { session, .. } => {
                Some(*session)
            }
        }
    }

    /// Login the open modal belongs to
    pub fn login(&self) -> Option<&str> {
        match &self.phase {
            ModalPhase::Closed => None,
            ModalPhase::OpenLoading { login, .. } | ModalPhase::OpenLoaded { login, .. } => {
                Some(login)
            }
        }
    }

    /// Loaded repositories; empty while closed or loading
    pub fn repos(&self) -> &[Repository] {
        match &self.phase {
            ModalPhase::OpenLoaded { repos, .. } => repos,
            _ => &[],
        }
    }

    pub fn selected_repo(&self) -> Option<&Repository> {
        self.repos().get(self.selected)
    }
}
