//! Crisis Page
//!
//! Immediate help first: emergency numbers, the hotline directory, then
//! grounding techniques for the wait.

use leptos::*;
use myndstrong::content::crisis;

use crate::components::{BackButton, EmergencyPanel, HotlineList, Notice, NoticeTone, SectionTitle};

#[component]
pub fn Crisis(on_back: Callback<()>) -> impl IntoView {
    view! {
        <div>
            <BackButton on_back=on_back />

            <div class="text-center mb-8">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">"Crisis Support"</h2>
                <p class="text-xl text-gray-600">"Help is available right now, 24 hours a day."</p>
            </div>

            <Notice tone=NoticeTone::Danger title="In Immediate Danger?" text=crisis::DANGER_NOTICE />

            <EmergencyPanel contacts=crisis::EMERGENCY_CONTACTS title="Call or Text Now" />

            <section class="mb-12">
                <SectionTitle title="Crisis Hotlines" />
                <HotlineList hotlines=crisis::HOTLINES />
            </section>

            <section class="mb-12">
                <SectionTitle title="While You Wait" />
                <div class="grid md:grid-cols-2 gap-6">
                    {crisis::grounding()
                        .iter()
                        .map(|s| view! {
                            <div class="bg-gradient-to-br from-green-50 to-blue-50 p-6 rounded-xl border border-green-200">
                                <h4 class="font-semibold text-gray-800 mb-2">{s.title}</h4>
                                <p class="text-gray-600 text-sm mb-3">{s.description}</p>
                                <p class="text-sm text-gray-700 italic bg-white/70 p-3 rounded-lg">{s.technique}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
