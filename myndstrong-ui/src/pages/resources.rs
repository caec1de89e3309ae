//! Resources Page

use leptos::*;
use myndstrong::content::resources;

use crate::components::{BackButton, ExternalCard, Glyph, HotlineList, Notice, NoticeTone, SectionTitle};

#[component]
pub fn Resources(on_back: Callback<()>) -> impl IntoView {
    view! {
        <div>
            <BackButton on_back=on_back />

            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">"Mental Health Resources"</h2>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                    "Trusted organizations, directories and self-care tools to support your journey."
                </p>
            </div>

            // Emergency hotlines
            <section class="mb-12">
                <SectionTitle title="Emergency Resources" />
                <Notice tone=NoticeTone::Danger text=resources::DANGER_NOTICE />
                <HotlineList hotlines=resources::HOTLINES />
            </section>

            // Directories
            <section class="mb-12">
                <SectionTitle title="Mental Health Resources" />
                <div class="grid md:grid-cols-2 gap-6">
                    {resources::DIRECTORIES
                        .iter()
                        .map(|d| view! {
                            <ExternalCard href=d.link>
                                <div class="flex items-start space-x-4">
                                    <div class="text-indigo-600"><Glyph icon=d.icon /></div>
                                    <div>
                                        <h4 class="font-semibold text-gray-800 mb-2 group-hover:text-indigo-600 transition-colors">
                                            {d.title}
                                        </h4>
                                        <p class="text-gray-600 text-sm">{d.description}</p>
                                    </div>
                                </div>
                            </ExternalCard>
                        })
                        .collect_view()}
                </div>
            </section>

            // Self-care
            <section class="mb-12">
                <SectionTitle title="Self-Care & Wellness" />
                <div class="grid md:grid-cols-3 gap-6">
                    {resources::SELF_CARE
                        .iter()
                        .map(|s| view! {
                            <ExternalCard
                                href=s.link
                                class="bg-gradient-to-br from-green-50 to-blue-50 p-6 rounded-xl border border-green-200 hover:shadow-md transition-shadow block"
                            >
                                <h4 class="font-semibold text-gray-800 mb-2">{s.title}</h4>
                                <p class="text-gray-600 text-sm">{s.description}</p>
                            </ExternalCard>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
