//! Message processing through the TEA update loop

use std::sync::Arc;

use tokio::sync::mpsc;

use mealdeck_api::RecipeSource;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are handled immediately; actions are dispatched to
/// background tasks whose results arrive later on `msg_tx`.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) where
    S: RecipeSource + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, source, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::{AboutContent, GridFocus, MealGrid};
    use crate::view::ViewMode;
    use mealdeck_api::test_utils::{test_category, test_meal, FakeRecipeSource, RecordedRequest};
    use mealdeck_core::MealDetail;
    use std::time::Duration;

    /// Apply every message that arrives within `window`, in arrival order
    async fn drain(
        state: &mut AppState,
        rx: &mut mpsc::Receiver<Message>,
        tx: &mpsc::Sender<Message>,
        source: &Arc<FakeRecipeSource>,
        window: Duration,
    ) {
        while let Ok(Some(msg)) = tokio::time::timeout(window, rx.recv()).await {
            process_message(state, msg, tx, source);
        }
    }

    fn catalog_source() -> FakeRecipeSource {
        FakeRecipeSource::new()
            .with_categories(vec![
                test_category("Beef", "Cattle"),
                test_category("Seafood", "D"),
            ])
            .with_filter("Seafood", vec![test_meal("1", "Fish pie")])
            .with_filter("Beef", vec![test_meal("2", "Stew")])
            .with_search("soup", vec![test_meal("3", "Soup")])
            .with_meal(MealDetail::new("1", "Fish pie").with_slot(1, "Salt", "1 tsp"))
    }

    #[tokio::test]
    async fn test_startup_to_details_flow() {
        let source = Arc::new(catalog_source());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();
        let window = Duration::from_millis(200);

        process_message(&mut state, Message::LoadCategories, &tx, &source);
        drain(&mut state, &mut rx, &tx, &source, window).await;
        assert_eq!(state.drawer.items, vec!["Beef", "Seafood"]);
        assert_eq!(state.category_cards[1].badge, "SEAFOOD");

        // Right then Enter on the category grid
        process_message(&mut state, Message::Key(InputKey::Right), &tx, &source);
        process_message(&mut state, Message::Key(InputKey::Enter), &tx, &source);
        assert_eq!(
            state.about,
            Some(AboutContent::Category {
                title: "Seafood".to_string(),
                description: "D".to_string()
            })
        );
        drain(&mut state, &mut rx, &tx, &source, window).await;
        assert_eq!(state.view_mode, ViewMode::Category);
        assert_eq!(state.grid_focus, GridFocus::Meals);
        assert_eq!(state.meal_grid.cards()[0].badge.as_deref(), Some("Seafood"));

        process_message(&mut state, Message::Key(InputKey::Enter), &tx, &source);
        drain(&mut state, &mut rx, &tx, &source, window).await;
        assert_eq!(state.view_mode, ViewMode::Details);
        let details = state.details.as_ref().unwrap();
        assert_eq!(details.breadcrumb, "Fish pie");
        assert_eq!(details.ingredients, vec!["Salt"]);
        assert_eq!(state.pending, 0);

        assert_eq!(
            source.requests(),
            vec![
                RecordedRequest::Categories,
                RecordedRequest::Filter("Seafood".to_string()),
                RecordedRequest::Lookup("1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_later_response_wins() {
        // The filter is issued first but answers last
        let source = Arc::new(catalog_source().with_delay("Beef", Duration::from_millis(150)));
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::LoadCategories, &tx, &source);
        drain(&mut state, &mut rx, &tx, &source, Duration::from_millis(100)).await;

        process_message(
            &mut state,
            Message::SelectCategory {
                name: "Beef".to_string(),
            },
            &tx,
            &source,
        );
        process_message(
            &mut state,
            Message::SubmitSearch {
                query: "soup".to_string(),
            },
            &tx,
            &source,
        );
        assert_eq!(state.pending, 2);
        drain(&mut state, &mut rx, &tx, &source, Duration::from_millis(400)).await;

        assert_eq!(state.pending, 0);
        let cards = state.meal_grid.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Stew");
        assert_eq!(cards[0].badge.as_deref(), Some("Beef"));
    }

    #[tokio::test]
    async fn test_empty_search_issues_no_request() {
        let source = Arc::new(catalog_source());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();
        state.set_view(ViewMode::Category);

        process_message(
            &mut state,
            Message::SubmitSearch {
                query: "   ".to_string(),
            },
            &tx,
            &source,
        );
        drain(&mut state, &mut rx, &tx, &source, Duration::from_millis(50)).await;

        assert_eq!(state.view_mode, ViewMode::Home);
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_zero_result_search_shows_placeholder() {
        let source = Arc::new(catalog_source());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::SubmitSearch {
                query: "zzz".to_string(),
            },
            &tx,
            &source,
        );
        drain(&mut state, &mut rx, &tx, &source, Duration::from_millis(100)).await;

        assert_eq!(state.meal_grid, MealGrid::NoResults);
        assert_eq!(state.view_mode, ViewMode::Category);
    }

    #[tokio::test]
    async fn test_network_failure_keeps_panels() {
        let source = Arc::new(FakeRecipeSource::new().offline());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::ShowDetails {
                id: "1".to_string(),
            },
            &tx,
            &source,
        );
        drain(&mut state, &mut rx, &tx, &source, Duration::from_millis(100)).await;

        assert_eq!(state.view_mode, ViewMode::Home);
        let notice = state.notice.as_ref().unwrap();
        assert!(notice.message.starts_with("Network error"));
    }
}
