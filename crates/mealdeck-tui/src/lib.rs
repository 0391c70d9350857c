//! mealdeck-tui - Terminal UI for mealdeck
//!
//! Draws [`mealdeck_app::AppState`] with ratatui, turns crossterm key events
//! into [`mealdeck_app::InputKey`]s and drives the TEA loop against the
//! HTTP recipe source.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
