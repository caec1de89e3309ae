//! Toast Notification Component
//!
//! Shows the profile save confirmation.

use leptos::*;

use crate::state::use_ui_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_ui_state();

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            {move || {
                state.success.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
