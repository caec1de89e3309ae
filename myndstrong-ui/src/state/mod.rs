//! State Management
//!
//! Global application state shared through Leptos context.

pub mod global;

pub use global::{provide_ui_state, use_ui_state, UiState};
