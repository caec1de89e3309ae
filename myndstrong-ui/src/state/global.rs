//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use myndstrong::{Navigator, View};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct UiState {
    /// Which top-level view is rendered
    pub nav: RwSignal<Navigator>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_ui_state() {
    let state = UiState {
        nav: create_rw_signal(Navigator::new()),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Fetch the state provided by [`provide_ui_state`]
pub fn use_ui_state() -> UiState {
    use_context::<UiState>().expect("UiState not found")
}

impl UiState {
    /// The view currently on screen
    pub fn current(&self) -> View {
        self.nav.with(Navigator::current)
    }

    /// Switch to `target` and start it at the top of the page
    pub fn navigate(&self, target: View) {
        let left = self.nav.try_update(|nav| nav.navigate(target));
        if left != Some(target) {
            scroll_to_top();
        }
    }

    pub fn back_home(&self) {
        self.navigate(View::Home);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
