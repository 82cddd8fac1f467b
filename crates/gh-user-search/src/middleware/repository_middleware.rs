//! Repository Middleware
//!
//! Handles the side effects of the repository modal:
//! - Opening a session and fetching the user's repositories and profile
//! - Aborting the in-flight fetches when the modal closes
//! - Reporting the outcome in the status bar

use crate::actions::{Action, GlobalAction, ModalAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, StatusSource};
use gh_user_client::UserApi;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Repository middleware - loads the repositories shown in the modal
pub struct RepositoryMiddleware {
    api: UserApi,
    runtime: Handle,
    /// Last session handed out; each open gets a new one
    session: u64,
    /// Repository and profile fetches of the current session
    pending: Vec<JoinHandle<()>>,
}

impl RepositoryMiddleware {
    pub fn new(api: UserApi, runtime: Handle) -> Self {
        Self {
            api,
            runtime,
            session: 0,
            pending: Vec::new(),
        }
    }

    fn open(&mut self, login: &str, dispatcher: &Dispatcher) {
        self.abort_pending();
        self.session += 1;
        let session = self.session;

        log::info!("Opening repositories of {} (session {})", login, session);
        dispatcher.dispatch(Action::Modal(ModalAction::Opened {
            login: login.to_string(),
            session,
        }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Loading repositories of {}...", login),
            StatusSource::Repositories,
        )));

        // Repos and profile land independently
        let api = self.api.clone();
        let repos_dispatcher = dispatcher.clone();
        let repos_login = login.to_string();
        self.pending.push(self.runtime.spawn(async move {
            let repos = api.list_repos(&repos_login).await;
            repos_dispatcher.dispatch(Action::Modal(ModalAction::ReposLoaded { session, repos }));
        }));

        let api = self.api.clone();
        let dispatcher = dispatcher.clone();
        let login = login.to_string();
        self.pending.push(self.runtime.spawn(async move {
            if let Some(profile) = api.user_profile(&login).await {
                dispatcher.dispatch(Action::Modal(ModalAction::ProfileLoaded { session, profile }));
            }
        }));
    }

    fn abort_pending(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

impl Middleware for RepositoryMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Modal(ModalAction::Open { login }) => {
                if state.modal.is_open() {
                    log::debug!("Modal already open, ignoring open for {}", login);
                } else {
                    self.open(login, dispatcher);
                }
                false
            }

            Action::Modal(ModalAction::Close) => {
                self.abort_pending();
                true
            }

            Action::Global(GlobalAction::Close) if state.modal.is_open() => {
                self.abort_pending();
                true
            }

            Action::Modal(ModalAction::ReposLoaded { session, repos })
                if state.modal.session() == Some(*session) =>
            {
                let message = match repos.len() {
                    0 => "No repos found".to_string(),
                    1 => "1 repository".to_string(),
                    n => format!("{} repositories", n),
                };
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    message,
                    StatusSource::Repositories,
                )));
                true
            }

            _ => true,
        }
    }
}
