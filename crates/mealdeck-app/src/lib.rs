//! mealdeck-app - Application state and orchestration for mealdeck
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`Message`] the events, [`handler::update`] the pure transition
//! function. Side effects (recipe API requests, opening a browser) are
//! returned as [`UpdateAction`]s and run by [`actions::handle_action`].
//!
//! This crate knows nothing about the terminal; `mealdeck-tui` draws the
//! state and feeds keys back in as [`InputKey`]s.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Direction, MealQuery, Message, ScrollStep};
pub use process::process_message;
pub use state::{AppPhase, AppState, UiMode};
pub use view::{Panels, ViewMode};
