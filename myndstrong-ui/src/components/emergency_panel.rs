//! Emergency Contact Components

use leptos::*;
use myndstrong::content::{EmergencyContact, Hotline, Icon};

use crate::components::{ExternalCard, Glyph};

/// The red "Emergency Resources" panel
#[component]
pub fn EmergencyPanel(
    contacts: &'static [EmergencyContact],
    #[prop(default = "Emergency Resources")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <section class="bg-red-50 border border-red-200 rounded-xl p-6 mb-12">
            <h3 class="text-xl font-bold text-red-800 mb-4 flex items-center">
                <Glyph icon=Icon::Phone class="text-2xl mr-2" />
                {title}
            </h3>
            <div class="grid md:grid-cols-3 gap-4">
                {contacts
                    .iter()
                    .map(|c| view! {
                        <div class="bg-white p-4 rounded-lg">
                            <h4 class="font-semibold text-gray-800 mb-1">{c.title}</h4>
                            <a href=c.contact.href() class="text-2xl font-bold text-red-600 hover:underline">
                                {c.contact.display()}
                            </a>
                            <p class="text-sm text-gray-600">{c.caption}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Hotline directory cards
#[component]
pub fn HotlineList(hotlines: &'static [Hotline]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            {hotlines
                .iter()
                .map(|h| view! {
                    <div class="bg-white p-6 rounded-xl shadow-md border border-red-100">
                        <h4 class="font-semibold text-gray-800 mb-2">{h.name}</h4>
                        <a href=h.contact.href() class="text-xl font-bold text-red-600 hover:underline">
                            {h.contact.display()}
                        </a>
                        <p class="text-gray-600 text-sm mt-2 mb-4">{h.description}</p>
                        <ExternalCard href=h.link class="text-sm text-indigo-600 hover:text-indigo-800 font-medium">
                            "Visit website ↗"
                        </ExternalCard>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
