//! Header Component
//!
//! Brand block and the top navigation buttons.

use leptos::*;
use myndstrong::content::home::{APP_NAME, TAGLINE};
use myndstrong::content::Icon;
use myndstrong::View;

use crate::components::Glyph;
use crate::state::use_ui_state;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_ui_state();

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    // Logo and brand
                    <button
                        class="flex items-center space-x-3 text-left"
                        on:click=move |_| state.back_home()
                    >
                        <div class="bg-indigo-600 p-2 rounded-lg text-white">
                            <Glyph icon=Icon::Brain class="text-3xl" />
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-gray-800">{APP_NAME}</h1>
                            <p class="text-sm text-gray-600">{TAGLINE}</p>
                        </div>
                    </button>

                    // Navigation links
                    <nav class="hidden md:flex space-x-6">
                        {View::header_links()
                            .iter()
                            .map(|&view| view! { <NavButton view=view /> })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Individual navigation button
#[component]
fn NavButton(view: View) -> impl IntoView {
    let state = use_ui_state();
    let class = move || {
        if state.current() == view {
            "text-indigo-600 font-semibold transition-colors"
        } else {
            "text-gray-600 hover:text-indigo-600 transition-colors"
        }
    };

    view! {
        <button
            class=class
            on:click=move |_| state.navigate(view)
        >
            {view.label()}
        </button>
    }
}
