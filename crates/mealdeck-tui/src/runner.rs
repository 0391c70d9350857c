//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use mealdeck_api::{HttpRecipeSource, RecipeSource};
use mealdeck_app::message::Message;
use mealdeck_app::process::process_message;
use mealdeck_app::signals;
use mealdeck_app::state::AppState;
use mealdeck_app::Settings;
use mealdeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the recipe browser against the configured recipe API
///
/// Loads the category list at startup and, if `initial_search` is given,
/// runs that search straight away.
pub async fn run(settings: Settings, initial_search: Option<String>) -> Result<()> {
    let source = Arc::new(HttpRecipeSource::new(
        &settings.api.base_url,
        settings.api.timeout(),
    )?);
    info!("Recipe API: {}", source.base_url());

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(settings);

    // Unified message channel for fetch results and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::LoadCategories, &msg_tx, &source);
    if let Some(query) = initial_search {
        state.search_query = query.clone();
        process_message(&mut state, Message::SubmitSearch { query }, &msg_tx, &source);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &source);

    terminal::restore();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: &Arc<S>,
) -> Result<()>
where
    S: RecipeSource + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Fetch results and signals, in arrival order
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, source);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, source);
        }
    }

    info!("Exiting event loop");
    Ok(())
}
