//! Repository modal actions

use gh_user_client::{Repository, UserProfile};

/// Actions for the repository modal
#[derive(Debug, Clone)]
pub enum ModalAction {
    /// Request to open the modal for a user
    Open { login: String },
    /// The modal opened and its fetches were issued under `session`
    Opened { login: String, session: u64 },
    /// Repository list for `session` arrived
    ReposLoaded {
        session: u64,
        repos: Vec<Repository>,
    },
    /// Extended profile for `session` arrived
    ProfileLoaded { session: u64, profile: UserProfile },
    /// Close the modal, whatever its fetch state
    Close,
    /// Move the repository selection down
    SelectNext,
    /// Move the repository selection up
    SelectPrevious,
}
