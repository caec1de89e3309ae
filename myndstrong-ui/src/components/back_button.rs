use leptos::*;

/// "Back to Home" link shown at the top of every sub-page
#[component]
pub fn BackButton(on_back: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="flex items-center text-indigo-600 hover:text-indigo-800 mb-6 transition-colors"
            on:click=move |_| on_back.call(())
        >
            <span class="mr-2">"←"</span>
            "Back to Home"
        </button>
    }
}
