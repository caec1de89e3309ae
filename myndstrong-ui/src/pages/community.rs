//! Community Page

use leptos::*;
use myndstrong::content::{community, Icon};

use crate::components::{BackButton, ExternalCard, Glyph, Notice, NoticeTone, SectionTitle};

#[component]
pub fn Community(on_back: Callback<()>) -> impl IntoView {
    view! {
        <div>
            <BackButton on_back=on_back />

            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">"Community Support"</h2>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                    "Connect with others who understand. Find support groups, online communities and local services."
                </p>
            </div>

            <Notice tone=NoticeTone::Info lead=community::ENCOURAGEMENT_LABEL text=community::ENCOURAGEMENT />

            <section class="mb-12">
                <SectionTitle title="Support Groups" />
                <div class="grid md:grid-cols-3 gap-6">
                    {community::SUPPORT_GROUPS
                        .iter()
                        .map(|g| view! {
                            <ExternalCard href=g.link>
                                <div class="flex items-center justify-between mb-4">
                                    <div class="text-indigo-600"><Glyph icon=g.icon /></div>
                                    <span class="text-xs bg-indigo-100 text-indigo-700 px-2 py-1 rounded-full">
                                        {g.format}
                                    </span>
                                </div>
                                <h4 class="font-semibold text-gray-800 mb-2">{g.name}</h4>
                                <p class="text-gray-600 text-sm">{g.description}</p>
                            </ExternalCard>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mb-12">
                <SectionTitle title="Online Communities" />
                <div class="grid md:grid-cols-2 gap-6">
                    {community::ONLINE_COMMUNITIES
                        .iter()
                        .map(|c| view! {
                            <ExternalCard href=c.link>
                                <div class="flex justify-between items-start mb-2">
                                    <h4 class="font-semibold text-gray-800 group-hover:text-indigo-600 transition-colors">
                                        {c.name}
                                    </h4>
                                    <span class="text-xs text-gray-500 flex items-center">
                                        <Glyph icon=Icon::Users class="mr-1" />
                                        {c.members}
                                    </span>
                                </div>
                                <p class="text-gray-600 text-sm">{c.description}</p>
                            </ExternalCard>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mb-12">
                <SectionTitle title="Local Resources" />
                <div class="grid md:grid-cols-3 gap-6">
                    {community::LOCAL_RESOURCES
                        .iter()
                        .map(|r| view! {
                            <div class="bg-white p-6 rounded-xl shadow-md border border-gray-200">
                                <h4 class="font-semibold text-gray-800 mb-2">{r.title}</h4>
                                <p class="text-gray-600 text-sm mb-4">{r.description}</p>
                                <ExternalCard
                                    href=r.link
                                    class="inline-block bg-indigo-600 hover:bg-indigo-700 text-white text-sm px-4 py-2 rounded-lg transition-colors"
                                >
                                    {r.action}
                                </ExternalCard>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <Notice tone=NoticeTone::Warning title="Community Safety" text=community::SAFETY_NOTICE />
        </div>
    }
}
