use anyhow::Context;
use gh_user_client::{ClientConfig, OctocrabUserClient, RepoSort, UserApi};
use gh_user_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod capabilities;
mod debounce;
mod dispatcher;
mod language;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod utils;
mod view_models;
mod views;

#[cfg(test)]
mod test_support;

use actions::{Action, GlobalAction};
use state::AppState;
use store::Store;

/// How long the event loop waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gh-user-search, logging to {}", log_file.display());

    let config = AppConfig::load();
    log::debug!("Configuration: {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    let client = {
        let _guard = runtime.enter();
        OctocrabUserClient::new(&ClientConfig {
            base_url: config.api.base_url.clone(),
            token: config.api.token.clone(),
        })
        .context("Failed to create GitHub client")?
    };
    let repo_sort = if config.repositories.sort_by_updated {
        RepoSort::UpdatedDesc
    } else {
        RepoSort::ApiDefault
    };
    let api = UserApi::new(Arc::new(client)).with_repo_sort(repo_sort);

    let mut store = Store::new(AppState::default());
    for m in middleware::default_chain(api, runtime.handle().clone(), config.search.debounce()) {
        store.add_middleware(m);
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Pending fetches are dropped with the runtime
    runtime.shutdown_timeout(Duration::from_millis(200));

    log::info!("Exiting gh-user-search");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    loop {
        // Apply whatever background tasks reported since the last frame
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
