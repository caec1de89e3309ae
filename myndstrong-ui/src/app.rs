//! App Root Component
//!
//! Holds the view selector and renders exactly one page.

use leptos::*;
use myndstrong::View;

use crate::components::{Header, Toast};
use crate::pages::{Community, Crisis, Home, Profile, Resources};
use crate::state::{provide_ui_state, use_ui_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_ui_state();
    let state = use_ui_state();

    let on_back = Callback::new(move |_: ()| state.back_home());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <Header />

            <main class="max-w-7xl mx-auto px-6 py-8">
                {move || match state.current() {
                    View::Home => view! { <Home /> }.into_view(),
                    View::Crisis => view! { <Crisis on_back=on_back /> }.into_view(),
                    View::Resources => view! { <Resources on_back=on_back /> }.into_view(),
                    View::Community => view! { <Community on_back=on_back /> }.into_view(),
                    View::Profile => view! { <Profile on_back=on_back /> }.into_view(),
                }}
            </main>

            <Toast />
        </div>
    }
}
