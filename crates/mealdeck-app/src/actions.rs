//! Action handlers: run the side effects requested by the update function
//!
//! Each fetch is one spawned task that performs one request and posts exactly
//! one result message. Tasks are never awaited, raced or cancelled.

use std::process::Command;
use std::sync::Arc;

use tokio::sync::mpsc;

use mealdeck_api::RecipeSource;
use mealdeck_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::{MealQuery, Message};

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, source: &Arc<S>, msg_tx: mpsc::Sender<Message>)
where
    S: RecipeSource + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchCategories => {
            let source = Arc::clone(source);
            tokio::spawn(async move {
                let msg = match source.categories().await {
                    Ok(categories) => Message::CategoriesLoaded { categories },
                    Err(e) => Message::CategoriesFailed { error: e.notice() },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::SearchMeals { query } => {
            let source = Arc::clone(source);
            tokio::spawn(async move {
                let result = source.search(&query).await;
                let request = MealQuery::Search { query };
                send(&msg_tx, meals_message(request, result)).await;
            });
        }

        UpdateAction::FilterMeals { category } => {
            let source = Arc::clone(source);
            tokio::spawn(async move {
                let result = source.filter_by_category(&category).await;
                let request = MealQuery::Category { name: category };
                send(&msg_tx, meals_message(request, result)).await;
            });
        }

        UpdateAction::FetchMealDetails { id } => {
            let source = Arc::clone(source);
            tokio::spawn(async move {
                let msg = match source.lookup(&id).await {
                    Ok(Some(meal)) => Message::DetailsLoaded {
                        meal: Box::new(meal),
                    },
                    Ok(None) => Message::DetailsNotFound { id },
                    Err(e) => Message::DetailsFailed {
                        id,
                        error: e.notice(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::OpenUrl { url, browser } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url, &browser) {
                    error!("Failed to open {url} in browser: {e}");
                    send(
                        &msg_tx,
                        Message::OpenUrlFailed {
                            url,
                            error: e.to_string(),
                        },
                    )
                    .await;
                }
            });
        }
    }
}

fn meals_message(
    request: MealQuery,
    result: Result<Vec<mealdeck_core::MealSummary>>,
) -> Message {
    match result {
        Ok(meals) => Message::MealsLoaded { request, meals },
        Err(e) => Message::MealsFailed {
            request,
            error: e.notice(),
        },
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        debug!("{}, dropping result", Error::channel_send(e.to_string()));
    }
}

/// Open `url` with `browser`, or the platform opener when it is empty
pub fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    opener_command(url, browser).spawn()?;
    Ok(())
}

fn opener_command(url: &str, browser: &str) -> Command {
    let mut command = if !browser.is_empty() {
        Command::new(browser)
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
}
